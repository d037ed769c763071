use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generation::options::{Purpose, Tone};

/// Target platforms, in the order the model is asked to emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    Twitter,
    WhatsApp,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Twitter, Platform::WhatsApp];

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::WhatsApp => "WhatsApp",
        }
    }

    /// Lowercase label searched for in each paragraph of the model output.
    pub fn keyword(self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::Twitter => "twitter",
            Platform::WhatsApp => "whatsapp",
        }
    }

    /// Placeholder used when a successful completion had no section for this platform.
    pub fn fallback(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn post not generated.",
            Platform::Twitter => "Twitter post not generated.",
            Platform::WhatsApp => "WhatsApp post not generated.",
        }
    }
}

/// A single user submission. Discarded once the result has been produced.
#[derive(Clone, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub tone: Tone,
    pub purpose: Purpose,
    pub api_key: String,
}

// api_key must never end up in logs
impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("topic", &self.topic)
            .field("tone", &self.tone)
            .field("purpose", &self.purpose)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// The three post variants, or an upstream error with all posts left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub linkedin: String,
    pub twitter: String,
    pub whatsapp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            linkedin: String::new(),
            twitter: String::new(),
            whatsapp: String::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn post(&self, platform: Platform) -> &str {
        match platform {
            Platform::LinkedIn => &self.linkedin,
            Platform::Twitter => &self.twitter,
            Platform::WhatsApp => &self.whatsapp,
        }
    }
}
