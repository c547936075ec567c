/// Split a comma-separated keyword list.
///
/// Entries are kept verbatim: no trimming, no deduplication. An empty list
/// yields a single empty keyword.
pub fn split_keywords(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}
