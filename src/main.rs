use console::style;
use git_keyword_stats::cli::Cli;
use git_keyword_stats::error::KeywordStatsError;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<KeywordStatsError>() {
                Some(KeywordStatsError::InvalidPath(_)) => err.to_string(),
                _ => format!("Error: {err:#}"),
            };
            eprintln!("{}", style(message).red().bold());
            ExitCode::FAILURE
        }
    }
}
