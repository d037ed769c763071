//! Fixed tone and purpose choices offered by the form.

use serde::{Deserialize, Serialize};

/// Voice the model is asked to write all three posts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Exciting,
    Formal,
    Informative,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Exciting,
        Tone::Formal,
        Tone::Informative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Exciting => "Exciting",
            Tone::Formal => "Formal",
            Tone::Informative => "Informative",
        }
    }
}

/// Why the user is posting. Serialized as the human-readable label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    #[default]
    #[serde(rename = "Sharing industry news")]
    IndustryNews,
    #[serde(rename = "Promoting a product/service")]
    Promotion,
    #[serde(rename = "Sharing personal achievement")]
    PersonalAchievement,
    #[serde(rename = "Company update")]
    CompanyUpdate,
    #[serde(rename = "Thought leadership")]
    ThoughtLeadership,
    #[serde(rename = "Educational content")]
    Educational,
}

impl Purpose {
    pub const ALL: [Purpose; 6] = [
        Purpose::IndustryNews,
        Purpose::Promotion,
        Purpose::PersonalAchievement,
        Purpose::CompanyUpdate,
        Purpose::ThoughtLeadership,
        Purpose::Educational,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Purpose::IndustryNews => "Sharing industry news",
            Purpose::Promotion => "Promoting a product/service",
            Purpose::PersonalAchievement => "Sharing personal achievement",
            Purpose::CompanyUpdate => "Company update",
            Purpose::ThoughtLeadership => "Thought leadership",
            Purpose::Educational => "Educational content",
        }
    }
}
