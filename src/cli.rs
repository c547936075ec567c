use crate::aggregate::run;
use crate::error::KeywordStatsError;
use crate::git::{GitCli, GixHistory, HistoryQuery};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OUTPUT: &str = "./keyword-stats.json";

#[derive(Parser)]
#[command(name = "git-keyword-stats")]
#[command(about = "Commit authorship statistics grouped by keywords found in commit messages")]
#[command(version)]
#[command(after_help = "Examples:\n  $ git-keyword-stats . --keywords=keyword1,keyword2")]
pub struct Cli {
    #[arg(help = "Path to git repository")]
    pub path: Option<PathBuf>,

    #[arg(short, long, allow_hyphen_values = true, help = "Comma separated keywords")]
    pub keywords: Option<String>,

    #[arg(short, long, default_value = DEFAULT_OUTPUT, help = "Output file path")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = Engine::Git, help = "History query backend")]
    pub engine: Engine,

    #[arg(short, long, help = "Suppress progress and summary output")]
    pub quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Run `git log` (keywords use git's --grep syntax)
    Git,
    /// Walk history in-process with gix (keywords use Rust regex syntax)
    Gix,
}

impl Engine {
    pub fn history(self) -> Box<dyn HistoryQuery> {
        match self {
            Engine::Git => Box::new(GitCli::new()),
            Engine::Gix => Box::new(GixHistory),
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let Some(path) = self.path else {
            Self::command().print_help()?;
            return Ok(());
        };

        if !path.exists() {
            return Err(KeywordStatsError::InvalidPath(path).into());
        }

        let keywords = self.keywords.unwrap_or_default();
        let history = self.engine.history();

        let pb = if self.quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Collecting keyword statistics...");
        pb.enable_steady_tick(Duration::from_millis(100));

        let result = run(&*history, &path, &self.output, &keywords);
        pb.finish_and_clear();

        let report = result.with_context(|| {
            format!("Failed to collect keyword statistics for {}", path.display())
        })?;

        if !self.quiet {
            println!(
                "{} keyword(s) written to {}",
                style(report.statistics.len()).cyan(),
                style(self.output.display()).bold()
            );
        }
        Ok(())
    }
}
