//! Tone presets — maps a writing-style preset to its fixed introductory sentence.
//!
//! Raw request text is resolved with `Tone::parse_or_default` at the HTTP boundary.
//! Everything past that point works on the enum, so the intro lookup is total.

use serde::{Deserialize, Serialize};

/// Writing-style preset. Selects exactly one introduction sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Authoritative,
    Conversational,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Authoritative,
        Tone::Conversational,
    ];

    /// Exact-match lookup of the wire value; anything unrecognized is `Professional`.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "professional" => Tone::Professional,
            "casual" => Tone::Casual,
            "friendly" => Tone::Friendly,
            "authoritative" => Tone::Authoritative,
            "conversational" => Tone::Conversational,
            _ => Tone::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
            Tone::Conversational => "conversational",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Authoritative => "Authoritative",
            Tone::Conversational => "Conversational",
        }
    }

    /// The introduction sentence for this tone.
    /// `topic_lower` is the lowercased topic; only the authoritative intro uses the verbatim one.
    pub fn intro(self, topic: &str, topic_lower: &str) -> String {
        match self {
            Tone::Professional => format!(
                "In today's rapidly evolving digital landscape, understanding {topic_lower} \
                 has become increasingly crucial for businesses and individuals alike."
            ),
            Tone::Casual => format!(
                "Hey there! Let's talk about {topic_lower} and why it's something \
                 you should definitely know about."
            ),
            Tone::Friendly => format!(
                "Welcome! Today, we're diving into the fascinating world of {topic_lower}, \
                 and I'm excited to share some insights with you."
            ),
            Tone::Authoritative => format!(
                "{topic} represents a critical component in modern business strategy, \
                 backed by extensive research and industry best practices."
            ),
            Tone::Conversational => format!(
                "So, you're curious about {topic_lower}? Great! Let me break it down \
                 for you in a way that actually makes sense."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognizes_every_wire_value() {
        for tone in Tone::ALL {
            assert_eq!(Tone::parse_or_default(tone.as_str()), tone);
        }
    }

    #[test]
    fn test_unknown_tone_falls_back_to_professional() {
        assert_eq!(Tone::parse_or_default("unknown-value"), Tone::Professional);
        assert_eq!(Tone::parse_or_default(""), Tone::Professional);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Tone::parse_or_default("Casual"), Tone::Professional);
    }

    #[test]
    fn test_casual_intro_uses_lowercased_topic() {
        let intro = Tone::Casual.intro("Cloud Computing", "cloud computing");
        assert_eq!(
            intro,
            "Hey there! Let's talk about cloud computing and why it's something \
             you should definitely know about."
        );
    }

    #[test]
    fn test_authoritative_intro_keeps_topic_casing() {
        let intro = Tone::Authoritative.intro("Cloud Computing", "cloud computing");
        assert!(intro.starts_with("Cloud Computing represents a critical component"));
    }

    #[test]
    fn test_every_tone_has_a_distinct_intro() {
        let intros: Vec<String> = Tone::ALL.iter().map(|t| t.intro("X", "x")).collect();
        for (i, a) in intros.iter().enumerate() {
            for b in &intros[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_tone_serde_uses_lowercase_wire_values() {
        let json = serde_json::to_string(&Tone::Conversational).unwrap();
        assert_eq!(json, r#""conversational""#);
        let tone: Tone = serde_json::from_str(r#""friendly""#).unwrap();
        assert_eq!(tone, Tone::Friendly);
    }
}
