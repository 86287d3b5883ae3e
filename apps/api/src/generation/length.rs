//! Length presets and the section-count heuristic derived from them.

use serde::{Deserialize, Serialize};

/// Number of body section templates available to the composer.
pub const MAX_SECTIONS: usize = 5;

/// Named size category. Only affects how many body sections are included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPreset {
    Short,
    #[default]
    Medium,
    Long,
}

/// Static sizing hints for a length preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthProfile {
    pub target_sections: usize,
    /// Paragraph size hint. Not enforced; word count is approximated by section count.
    pub words_per_paragraph: usize,
}

impl LengthPreset {
    pub const ALL: [LengthPreset; 3] = [LengthPreset::Short, LengthPreset::Medium, LengthPreset::Long];

    /// Exact-match lookup of the wire value; anything unrecognized is `Medium`.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "short" => LengthPreset::Short,
            "medium" => LengthPreset::Medium,
            "long" => LengthPreset::Long,
            _ => LengthPreset::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthPreset::Short => "short",
            LengthPreset::Medium => "medium",
            LengthPreset::Long => "long",
        }
    }

    /// Display label. The word counts are advertised targets, not measured ones.
    pub fn label(self) -> &'static str {
        match self {
            LengthPreset::Short => "Short (~500 words)",
            LengthPreset::Medium => "Medium (~1000 words)",
            LengthPreset::Long => "Long (~1500+ words)",
        }
    }

    pub fn profile(self) -> LengthProfile {
        match self {
            LengthPreset::Short => LengthProfile {
                target_sections: 4,
                words_per_paragraph: 100,
            },
            LengthPreset::Medium => LengthProfile {
                target_sections: 7,
                words_per_paragraph: 120,
            },
            LengthPreset::Long => LengthProfile {
                target_sections: 10,
                words_per_paragraph: 130,
            },
        }
    }

    /// How many body sections to include: `ceil(target_sections / 1.5)`, capped at `MAX_SECTIONS`.
    pub fn section_count(self) -> usize {
        // ceil(n / 1.5) == ceil(2n / 3)
        (self.profile().target_sections * 2)
            .div_ceil(3)
            .min(MAX_SECTIONS)
    }
}
