use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Markdown download filename: whitespace runs become `-`, control characters
/// are dropped, lowercased, `.md` suffix.
pub fn download_filename(topic: &str) -> String {
    let slug: String = WHITESPACE_RUN_RE
        .replace_all(topic, "-")
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .to_lowercase();
    format!("{slug}.md")
}
