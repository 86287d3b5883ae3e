//! Metrics Estimator — superficial text statistics for a generated post.
//!
//! These are cosmetic numbers for the UI, not a real SEO analysis.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Above this many words a post is labelled `Excellent`.
const EXCELLENT_ABOVE_WORDS: usize = 1200;
/// Below this many words a post is labelled `Fair`.
const FAIR_BELOW_WORDS: usize = 500;

/// Markdown ATX heading: one to six `#` then a space, at the start of a line.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6} ").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readability {
    Fair,
    Good,
    Excellent,
}

impl Readability {
    /// Three-way bucket on word count; both thresholds are exclusive.
    pub fn from_word_count(words: usize) -> Self {
        match words {
            w if w > EXCELLENT_ABOVE_WORDS => Readability::Excellent,
            w if w < FAIR_BELOW_WORDS => Readability::Fair,
            _ => Readability::Good,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetrics {
    pub word_count: usize,
    pub headings: usize,
    pub paragraphs: usize,
    pub readability: Readability,
}

pub fn estimate(document: &str) -> SeoMetrics {
    let word_count = count_words(document);
    SeoMetrics {
        word_count,
        headings: count_headings(document),
        paragraphs: count_paragraphs(document),
        readability: Readability::from_word_count(word_count),
    }
}

fn count_words(document: &str) -> usize {
    document.split_whitespace().count()
}

fn count_headings(document: &str) -> usize {
    HEADING_RE.find_iter(document).count()
}

/// Blank-line separated blocks that are not empty and do not open with a heading marker.
fn count_paragraphs(document: &str) -> usize {
    document
        .split("\n\n")
        .filter(|block| !block.trim().is_empty() && !block.starts_with('#'))
        .count()
}
