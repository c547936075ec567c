use crate::error::Result;
use crate::git::HistoryQuery;
use crate::keywords::split_keywords;
use crate::model::{KeywordReport, Report};
use crate::parse::tally;
use std::io::Write;
use std::path::Path;
use std::thread;
use tracing::debug;

/// Authorship statistics for the commits matching one keyword.
pub fn collect_stats(query: &dyn HistoryQuery, repo: &Path, keyword: &str) -> Result<KeywordReport> {
    let records = query.authors(repo, keyword)?;
    Ok(KeywordReport::new(keyword, tally(records)))
}

/// Query every keyword concurrently and assemble the report.
///
/// Each keyword runs on its own thread and every query runs to completion.
/// A thread that cannot be spawned fails its keyword with an I/O error.
/// Reports keep the order of `keywords`. If any query fails the whole
/// report fails with the error of the first failing keyword in input order.
pub fn collect_report(query: &dyn HistoryQuery, repo: &Path, keywords: &[String]) -> Result<Report> {
    let results: Vec<Result<KeywordReport>> = thread::scope(|scope| {
        let handles: Vec<_> = keywords
            .iter()
            .enumerate()
            .map(|(index, keyword)| {
                thread::Builder::new()
                    .name(format!("keyword-{index}"))
                    .spawn_scoped(scope, move || collect_stats(query, repo, keyword))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle {
                Ok(handle) => handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)),
                Err(err) => Err(err.into()),
            })
            .collect()
    });

    let statistics = results.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(Report {
        path: repo.display().to_string(),
        statistics,
    })
}

/// Build the report for a comma-separated keyword list and write it to
/// `output`, replacing any existing file. Nothing is written on failure.
pub fn run(query: &dyn HistoryQuery, repo: &Path, output: &Path, keyword_list: &str) -> Result<Report> {
    let keywords = split_keywords(keyword_list);
    debug!(count = keywords.len(), repo = %repo.display(), "collecting keyword statistics");

    let report = collect_report(query, repo, &keywords)?;
    write_report(output, &report.to_json()?)?;

    debug!(output = %output.display(), "report written");
    Ok(report)
}

/// Write into a temporary file next to `output`, then rename it into place.
/// `output` is either left untouched or fully replaced.
fn write_report(output: &Path, contents: &str) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".keyword-stats").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut file = builder.tempfile_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(output).map_err(|err| err.error)?;
    Ok(())
}
