/// Splits comma-separated keyword text into trimmed, non-empty tokens.
/// Order is preserved and duplicates are kept.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
