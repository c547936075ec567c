use serde::{Deserialize, Serialize};

/// Commits attributed to one (author, email) pair for a single keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStat {
    #[serde(with = "count_as_string")]
    pub commits: u64,
    pub author: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub keyword: String,
    pub statistics: Vec<AuthorStat>,
}

impl KeywordReport {
    pub fn new(keyword: impl Into<String>, statistics: Vec<AuthorStat>) -> Self {
        Self {
            keyword: keyword.into(),
            statistics,
        }
    }
}

/// Root document written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub path: String,
    pub statistics: Vec<KeywordReport>,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Counts are written as JSON strings so existing report consumers keep
/// working; numbers are accepted when reading.
mod count_as_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(count: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(count)
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Text(String),
        Number(u64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Count::deserialize(deserializer)? {
            Count::Number(n) => Ok(n),
            Count::Text(s) => s.trim().parse().map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Report {
        Report {
            path: ".".to_string(),
            statistics: vec![
                KeywordReport::new(
                    "fix",
                    vec![AuthorStat {
                        commits: 3,
                        author: "Alice Smith".to_string(),
                        email: "alice@example.com".to_string(),
                    }],
                ),
                KeywordReport::new("nothing", vec![]),
            ],
        }
    }

    #[test]
    fn renders_two_space_indented_json_with_string_counts() {
        let expected = r#"{
  "path": ".",
  "statistics": [
    {
      "keyword": "fix",
      "statistics": [
        {
          "commits": "3",
          "author": "Alice Smith",
          "email": "alice@example.com"
        }
      ]
    },
    {
      "keyword": "nothing",
      "statistics": []
    }
  ]
}"#;
        assert_eq!(sample().to_json().unwrap(), expected);
    }

    #[test]
    fn reads_counts_as_strings_or_numbers() {
        let text = r#"{"commits":"12","author":"a","email":"b"}"#;
        let number = r#"{"commits":12,"author":"a","email":"b"}"#;
        let a: AuthorStat = serde_json::from_str(text).unwrap();
        let b: AuthorStat = serde_json::from_str(number).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.commits, 12);
    }

    #[test]
    fn rejects_non_numeric_count() {
        let bad = r#"{"commits":"many","author":"a","email":"b"}"#;
        assert!(serde_json::from_str::<AuthorStat>(bad).is_err());
    }
}
