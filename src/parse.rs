use crate::model::AuthorStat;
use std::collections::HashMap;

/// Separates author name from email inside one record (ASCII unit separator).
pub const FIELD_SEPARATOR: char = '\u{1f}';
/// Terminates one record (`git log -z`).
pub const RECORD_SEPARATOR: char = '\0';

/// Pretty format handed to `git log`; must stay in sync with [`parse_records`].
pub const LOG_FORMAT: &str = "--format=%an%x1f%ae";

/// Author identity of a single matching commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorRecord {
    pub name: String,
    pub email: String,
}

impl AuthorRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Parse NUL-terminated `name<US>email` records.
///
/// Records that do not split into exactly two fields are dropped.
pub fn parse_records(output: &str) -> Vec<AuthorRecord> {
    output
        .split(RECORD_SEPARATOR)
        .map(|record| record.trim_matches('\n'))
        .filter(|record| !record.is_empty())
        .filter_map(parse_record)
        .collect()
}

fn parse_record(record: &str) -> Option<AuthorRecord> {
    let (name, email) = record.split_once(FIELD_SEPARATOR)?;
    if email.contains(FIELD_SEPARATOR) {
        return None;
    }
    Some(AuthorRecord::new(name, email))
}

/// Count commits per distinct (name, email) pair.
///
/// Highest count first; equal counts are ordered by author, then email.
pub fn tally<I>(records: I) -> Vec<AuthorStat>
where
    I: IntoIterator<Item = AuthorRecord>,
{
    let mut counts: HashMap<AuthorRecord, u64> = HashMap::new();
    for record in records {
        *counts.entry(record).or_insert(0) += 1;
    }

    let mut stats: Vec<AuthorStat> = counts
        .into_iter()
        .map(|(record, commits)| AuthorStat {
            commits,
            author: record.name,
            email: record.email,
        })
        .collect();

    stats.sort_by(|a, b| {
        b.commits
            .cmp(&a.commits)
            .then_with(|| a.author.cmp(&b.author))
            .then_with(|| a.email.cmp(&b.email))
    });
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(records: &[(&str, &str)]) -> String {
        records
            .iter()
            .map(|(name, email)| format!("{name}{FIELD_SEPARATOR}{email}{RECORD_SEPARATOR}"))
            .collect()
    }

    #[test]
    fn ranks_authors_by_commit_count() {
        let output = raw(&[
            ("Alice Smith", "alice@example.com"),
            ("Bob Jones", "bob@example.com"),
            ("Alice Smith", "alice@example.com"),
            ("Alice Smith", "alice@example.com"),
        ]);

        let stats = tally(parse_records(&output));
        assert_eq!(
            stats,
            vec![
                AuthorStat {
                    commits: 3,
                    author: "Alice Smith".to_string(),
                    email: "alice@example.com".to_string(),
                },
                AuthorStat {
                    commits: 1,
                    author: "Bob Jones".to_string(),
                    email: "bob@example.com".to_string(),
                },
            ]
        );
    }

    #[test]
    fn angle_brackets_in_names_stay_with_the_author() {
        let output = raw(&[("Eve <the admin> Adams", "eve@example.com")]);
        let records = parse_records(&output);
        assert_eq!(records, vec![AuthorRecord::new("Eve <the admin> Adams", "eve@example.com")]);
    }

    #[test]
    fn same_name_different_email_counts_separately() {
        let stats = tally(vec![
            AuthorRecord::new("Alice", "a@work.com"),
            AuthorRecord::new("Alice", "a@home.com"),
            AuthorRecord::new("Alice", "a@work.com"),
        ]);
        let pairs: Vec<(u64, &str)> = stats.iter().map(|s| (s.commits, s.email.as_str())).collect();
        assert_eq!(pairs, vec![(2, "a@work.com"), (1, "a@home.com")]);
    }

    #[test]
    fn ties_are_ordered_by_author_then_email() {
        let stats = tally(vec![
            AuthorRecord::new("Zed", "z@example.com"),
            AuthorRecord::new("Amy", "b@example.com"),
            AuthorRecord::new("Amy", "a@example.com"),
        ]);
        let order: Vec<(&str, &str)> = stats
            .iter()
            .map(|s| (s.author.as_str(), s.email.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("Amy", "a@example.com"), ("Amy", "b@example.com"), ("Zed", "z@example.com")]
        );
    }

    #[test]
    fn malformed_records_are_skipped() {
        let output = format!(
            "no separator here{RECORD_SEPARATOR}\
             a{FIELD_SEPARATOR}b{FIELD_SEPARATOR}c{RECORD_SEPARATOR}\
             {RECORD_SEPARATOR}\
             Carol{FIELD_SEPARATOR}carol@example.com{RECORD_SEPARATOR}"
        );
        assert_eq!(
            parse_records(&output),
            vec![AuthorRecord::new("Carol", "carol@example.com")]
        );
    }

    #[test]
    fn tolerates_newlines_between_records_and_missing_terminator() {
        let output = format!("A{FIELD_SEPARATOR}a@x\n{RECORD_SEPARATOR}\nB{FIELD_SEPARATOR}b@x");
        assert_eq!(
            parse_records(&output),
            vec![AuthorRecord::new("A", "a@x"), AuthorRecord::new("B", "b@x")]
        );
    }

    #[test]
    fn empty_output_yields_no_stats() {
        assert!(parse_records("").is_empty());
        assert!(tally(parse_records("")).is_empty());
    }
}
