use crate::generation::keywords::parse_keywords;
use crate::generation::length::LengthPreset;
use crate::generation::tone::Tone;

/// Structured input for the composer. Built once per request at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pub topic: String,
    pub topic_lower: String,
    pub keywords: Vec<String>,
    pub tone: Tone,
    pub length: LengthPreset,
}

impl TemplateContext {
    pub fn new(topic: &str, keywords: Vec<String>, tone: Tone, length: LengthPreset) -> Self {
        Self {
            topic: topic.to_string(),
            topic_lower: topic.to_lowercase(),
            keywords,
            tone,
            length,
        }
    }

    /// Resolves raw request text: keyword parsing plus parse-or-default of tone and length.
    pub fn from_raw(topic: &str, keywords: &str, tone: &str, length: &str) -> Self {
        Self::new(
            topic,
            parse_keywords(keywords),
            Tone::parse_or_default(tone),
            LengthPreset::parse_or_default(length),
        )
    }

    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    pub fn first_keyword(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }

    /// The second keyword, or the first when only one was given.
    pub fn second_or_first_keyword(&self) -> Option<&str> {
        self.keywords
            .get(1)
            .or_else(|| self.keywords.first())
            .map(String::as_str)
    }

    /// The last keyword, only when at least two were given.
    pub fn last_of_many_keywords(&self) -> Option<&str> {
        if self.keywords.len() > 1 {
            self.keywords.last().map(String::as_str)
        } else {
            None
        }
    }

    /// Up to `n` leading keywords joined by `separator`.
    pub fn leading_keywords(&self, n: usize, separator: &str) -> String {
        let end = n.min(self.keywords.len());
        self.keywords[..end].join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(keywords: &str) -> TemplateContext {
        TemplateContext::from_raw("Rust Services", keywords, "casual", "long")
    }

    #[test]
    fn test_from_raw_resolves_every_field() {
        let c = ctx("axum, tokio");
        assert_eq!(c.topic, "Rust Services");
        assert_eq!(c.topic_lower, "rust services");
        assert_eq!(c.keywords, vec!["axum", "tokio"]);
        assert_eq!(c.tone, Tone::Casual);
        assert_eq!(c.length, LengthPreset::Long);
    }

    #[test]
    fn test_keyword_slots_without_keywords() {
        let c = ctx("");
        assert!(!c.has_keywords());
        assert_eq!(c.first_keyword(), None);
        assert_eq!(c.second_or_first_keyword(), None);
        assert_eq!(c.last_of_many_keywords(), None);
        assert_eq!(c.leading_keywords(3, ", "), "");
    }

    #[test]
    fn test_keyword_slots_with_single_keyword() {
        let c = ctx("axum");
        assert_eq!(c.first_keyword(), Some("axum"));
        assert_eq!(c.second_or_first_keyword(), Some("axum"));
        assert_eq!(c.last_of_many_keywords(), None);
    }

    #[test]
    fn test_keyword_slots_with_many_keywords() {
        let c = ctx("axum, tokio, serde, tracing");
        assert_eq!(c.second_or_first_keyword(), Some("tokio"));
        assert_eq!(c.last_of_many_keywords(), Some("tracing"));
        assert_eq!(c.leading_keywords(3, ", "), "axum, tokio, serde");
        assert_eq!(c.leading_keywords(2, " and "), "axum and tokio");
    }
}
