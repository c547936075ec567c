use super::HistoryQuery;
use crate::error::{KeywordStatsError, Result};
use crate::parse::AuthorRecord;
use gix::{discover, ObjectId, Repository};
use regex::{Regex, RegexBuilder};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = discover(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Authors of all non-merge commits reachable from `HEAD` whose full
    /// message matches `pattern`.
    pub fn matching_authors(&self, pattern: &Regex) -> Result<Vec<AuthorRecord>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut records = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();

            let is_merge = parents.len() > 1;
            stack.extend(parents);
            if is_merge {
                continue;
            }

            let message = String::from_utf8_lossy(commit.message_raw_sloppy());
            if !pattern.is_match(&message) {
                continue;
            }

            let author = commit.author()?;
            records.push(AuthorRecord::new(author.name.to_string(), author.email.to_string()));
        }

        Ok(records)
    }
}

/// Compile a keyword the way `git log --grep` applies it: `^` and `$`
/// anchor at every line of the message.
pub fn keyword_pattern(keyword: &str) -> Result<Regex> {
    RegexBuilder::new(keyword)
        .multi_line(true)
        .build()
        .map_err(|e| KeywordStatsError::query(keyword, e.to_string()))
}

/// Walks history in-process with gix.
///
/// Keywords are regular expressions in `regex` crate syntax, matched
/// case-sensitively against each line of the commit message.
#[derive(Debug, Clone, Copy, Default)]
pub struct GixHistory;

impl HistoryQuery for GixHistory {
    fn authors(&self, repo: &Path, keyword: &str) -> Result<Vec<AuthorRecord>> {
        let pattern = keyword_pattern(keyword)?;
        let repo = GitRepo::open(repo)?;
        debug!(keyword, repo = %repo.path().display(), "walking history");
        let records = repo.matching_authors(&pattern)?;
        debug!(keyword, records = records.len(), "history walk finished");
        Ok(records)
    }
}
