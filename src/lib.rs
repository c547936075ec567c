//! Commit authorship statistics grouped by keywords found in commit messages.

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod git;
pub mod keywords;
pub mod model;
pub mod parse;

pub use aggregate::{collect_report, collect_stats, run};
pub use error::{KeywordStatsError, Result};
pub use model::{AuthorStat, KeywordReport, Report};
