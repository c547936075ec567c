pub mod cli;
pub mod repo;

pub use cli::GitCli;
pub use repo::{GitRepo, GixHistory};

use crate::error::Result;
use crate::parse::AuthorRecord;
use std::path::Path;

/// Source of commit authorship for a repository.
///
/// Implementations list the author of every non-merge commit reachable from
/// `HEAD` whose message matches `keyword`, one record per commit. Order is
/// not significant.
pub trait HistoryQuery: Sync {
    fn authors(&self, repo: &Path, keyword: &str) -> Result<Vec<AuthorRecord>>;
}
