//! Copy-and-send helpers that need no model call.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::JobRecord;

pub fn email_subject(job: &JobRecord) -> String {
    format!(
        "Application for {} position at {}",
        job.title, job.company
    )
}

pub fn email_body(job: &JobRecord) -> String {
    format!(
        "Dear Hiring Manager,\n\nI am writing to express my interest in the {} position at {}.\n\n[Your personalized message here]\n\nBest regards,\n[Your name]",
        job.title, job.company
    )
}

/// `mailto:` link with no recipient and a prefilled subject and body.
pub fn mailto_link(job: &JobRecord) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&email_subject(job)),
        urlencoding::encode(&email_body(job))
    )
}

/// Copied job fields, serialized in this field order.
#[derive(Serialize)]
struct ClipboardJob<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    description: &'a str,
    url: &'a str,
}

/// Pretty-printed job fields for pasting elsewhere.
pub fn job_clipboard_json(job: &JobRecord) -> Result<String, AppError> {
    let data = ClipboardJob {
        title: &job.title,
        company: &job.company,
        location: &job.location,
        description: &job.description,
        url: &job.url,
    };
    serde_json::to_string_pretty(&data).map_err(|e| AppError::Internal(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobRecord {
        JobRecord {
            title: "Data Engineer".to_string(),
            company: "R&D Labs".to_string(),
            location: "Berlin".to_string(),
            description: "Pipelines".to_string(),
            url: "https://www.indeed.com/viewjob?jk=1".to_string(),
            source: "Indeed".to_string(),
        }
    }

    #[test]
    fn test_mailto_is_encoded() {
        let link = mailto_link(&job());
        assert!(link.starts_with(
            "mailto:?subject=Application%20for%20Data%20Engineer%20position%20at%20R%26D%20Labs&body="
        ));
        assert!(link.contains("Dear%20Hiring%20Manager%2C%0A%0A"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn test_email_body_text() {
        let body = email_body(&job());
        assert!(body.contains("interest in the Data Engineer position at R&D Labs.\n\n"));
        assert!(body.ends_with("Best regards,\n[Your name]"));
    }

    #[test]
    fn test_clipboard_json_fields() {
        let text = job_clipboard_json(&job()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["company"], "R&D Labs");
        assert_eq!(value["url"], "https://www.indeed.com/viewjob?jk=1");
        assert!(value.get("source").is_none());
        assert!(text.contains("\n  \"title\""));
    }

    #[test]
    fn test_clipboard_json_keeps_field_order() {
        let text = job_clipboard_json(&job()).unwrap();
        let keys = ["title", "company", "location", "description", "url"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| text.find(&format!("\"{key}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(text.starts_with("{\n  \"title\": \"Data Engineer\""));
    }
}
