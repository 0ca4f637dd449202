use std::fmt;

use serde::{Deserialize, Serialize};

/// Stylistic preset that selects the prompt and draft templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Enthusiastic,
    Formal,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Formal => "formal",
        }
    }

    /// Parses a tone name, falling back to `Professional` for anything unknown.
    pub fn from_name_lenient(name: &str) -> Tone {
        match name.trim().to_ascii_lowercase().as_str() {
            "friendly" => Tone::Friendly,
            "enthusiastic" => Tone::Enthusiastic,
            "formal" => Tone::Formal,
            _ => Tone::Professional,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_MAX_MESSAGE_LENGTH: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub include_salary: bool,
    #[serde(default = "default_max_message_length")]
    pub max_message_length: u32,
}

fn default_max_message_length() -> u32 {
    DEFAULT_MAX_MESSAGE_LENGTH
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            tone: Tone::Professional,
            include_salary: false,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

/// User-editable configuration. Loaded once at startup; replaced wholesale on save/reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub open_router_api_key: String,
    #[serde(default)]
    pub notion_api_key: String,
    #[serde(default)]
    pub notion_database_id: String,
    #[serde(default)]
    pub user_resume: String,
    #[serde(default)]
    pub user_preferences: Preferences,
}
