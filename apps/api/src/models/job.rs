use serde::{Deserialize, Serialize};

/// One scraped job posting. Built once per extraction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    /// Optional on every site; empty when no location selector resolved.
    #[serde(default)]
    pub location: String,
    pub description: String,
    pub url: String,
    /// Display name of the site the record came from, e.g. "LinkedIn".
    pub source: String,
}

impl JobRecord {
    /// Location for prompts and drafts, with the placeholder used when the page had none.
    pub fn location_or_unspecified(&self) -> &str {
        if self.location.trim().is_empty() {
            "Not specified"
        } else {
            &self.location
        }
    }

    /// First `max_chars` characters of the description, with "..." appended when cut.
    pub fn description_excerpt(&self, max_chars: usize) -> String {
        match self.description.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.description[..cut]),
            None => self.description.clone(),
        }
    }
}

/// Entry in the recent-jobs list: the record plus when outreach was generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentJob {
    #[serde(flatten)]
    pub job: JobRecord,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}
