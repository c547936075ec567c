use super::HistoryQuery;
use crate::error::{KeywordStatsError, Result};
use crate::parse::{parse_records, AuthorRecord, LOG_FORMAT};
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs `git log` as a child process.
///
/// Arguments are passed as a vector, so keyword content never reaches a
/// shell. Matching follows `git log --grep` (basic regular expressions,
/// case-sensitive).
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    pub fn with_program(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
        }
    }

    fn command(&self, repo: &Path, keyword: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C")
            .arg(repo)
            .args(["-c", "log.showSignature=false", "log", "-z", "--no-merges", "--no-color"])
            .arg(LOG_FORMAT)
            .arg(format!("--grep={keyword}"))
            .stdin(Stdio::null());
        cmd
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryQuery for GitCli {
    fn authors(&self, repo: &Path, keyword: &str) -> Result<Vec<AuthorRecord>> {
        debug!(keyword, repo = %repo.display(), "running git log");
        let output = self
            .command(repo, keyword)
            .output()
            .map_err(KeywordStatsError::Spawn)?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let message = match stderr.trim() {
                "" => format!("git exited with {}", output.status),
                msg => msg.to_string(),
            };
            return Err(KeywordStatsError::query(keyword, message));
        }
        // Anything on stderr counts as a failure, even with a zero exit status.
        if !stderr.trim().is_empty() {
            return Err(KeywordStatsError::query(keyword, stderr.trim()));
        }

        let records = parse_records(&String::from_utf8_lossy(&output.stdout));
        debug!(keyword, records = records.len(), "git log finished");
        Ok(records)
    }
}
