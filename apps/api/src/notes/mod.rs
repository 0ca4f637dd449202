//! Notes client. Creates one page per saved job in the user's Notion database.

pub mod handlers;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

use crate::models::job::JobRecord;

pub const NOTION_VERSION: &str = "2022-06-28";
/// Description characters stored on the page.
pub const DESCRIPTION_BUDGET: usize = 2000;
const APPLIED_STATUS: &str = "Applied";

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct CreatedPage {
    id: Option<String>,
}

fn rich_text(content: &str) -> Value {
    json!([{ "text": { "content": content } }])
}

fn block(kind: &str, content: &str) -> Value {
    let mut value = json!({ "object": "block", "type": kind });
    value[kind] = json!({ "rich_text": rich_text(content) });
    value
}

/// Builds the create-page request body: typed properties plus heading/paragraph blocks.
pub fn build_page_body(
    database_id: &str,
    job: &JobRecord,
    message: &str,
    applied_at: DateTime<Utc>,
) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Job Title": { "title": rich_text(&job.title) },
            "Company": { "rich_text": rich_text(&job.company) },
            "URL": { "url": job.url },
            "Status": { "select": { "name": APPLIED_STATUS } },
            "Date Applied": {
                "date": { "start": applied_at.to_rfc3339_opts(SecondsFormat::Millis, true) }
            }
        },
        "children": [
            block("heading_2", "Generated Outreach Message"),
            block("paragraph", message),
            block("heading_3", "Job Description"),
            block("paragraph", &job.description_excerpt(DESCRIPTION_BUDGET)),
        ]
    })
}

#[derive(Clone)]
pub struct NotesClient {
    client: Client,
    base_url: String,
}

impl NotesClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates the page and returns its id when the API reports one.
    pub async fn create_page(
        &self,
        api_key: &str,
        database_id: &str,
        job: &JobRecord,
        message: &str,
    ) -> Result<Option<String>, NotesError> {
        let body = build_page_body(database_id, job, message, Utc::now());

        let response = self
            .client
            .post(format!("{}/pages", self.base_url))
            .bearer_auth(api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NotesError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: CreatedPage = response.json().await?;
        info!("Saved {} at {} to notes", job.title, job.company);
        Ok(page.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_mock;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use chrono::TimeZone;
    use std::sync::{Arc, Mutex};

    fn job(description: &str) -> JobRecord {
        JobRecord {
            title: "Rust Engineer".to_string(),
            company: "Oxide".to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            url: "https://www.linkedin.com/jobs/view/42".to_string(),
            source: "LinkedIn".to_string(),
        }
    }

    #[test]
    fn test_page_body_properties() {
        let applied_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let body = build_page_body("db-1", &job("Short"), "Hello there", applied_at);

        assert_eq!(body["parent"]["database_id"], "db-1");
        let props = &body["properties"];
        assert_eq!(props["Job Title"]["title"][0]["text"]["content"], "Rust Engineer");
        assert_eq!(props["Company"]["rich_text"][0]["text"]["content"], "Oxide");
        assert_eq!(props["URL"]["url"], "https://www.linkedin.com/jobs/view/42");
        assert_eq!(props["Status"]["select"]["name"], "Applied");
        assert_eq!(props["Date Applied"]["date"]["start"], "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn test_page_body_blocks() {
        let long = "x".repeat(2500);
        let body = build_page_body("db", &job(&long), "msg", Utc::now());
        let children = body["children"].as_array().unwrap();

        assert_eq!(children.len(), 4);
        assert_eq!(children[0]["type"], "heading_2");
        assert_eq!(
            children[0]["heading_2"]["rich_text"][0]["text"]["content"],
            "Generated Outreach Message"
        );
        assert_eq!(children[1]["paragraph"]["rich_text"][0]["text"]["content"], "msg");
        assert_eq!(children[2]["type"], "heading_3");

        let description = children[3]["paragraph"]["rich_text"][0]["text"]["content"]
            .as_str()
            .unwrap();
        assert_eq!(description.len(), DESCRIPTION_BUDGET + 3);
        assert!(description.ends_with("..."));
    }

    #[tokio::test]
    async fn test_create_page_sends_version_header() {
        let seen = Arc::new(Mutex::new(None));
        let captured = seen.clone();
        let app = Router::new().route(
            "/pages",
            post(move |headers: HeaderMap| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = Some(headers);
                    Json(serde_json::json!({"object": "page", "id": "page-123"}))
                }
            }),
        );
        let base_url = spawn_mock(app).await;

        let client = NotesClient::new(Client::new(), base_url);
        let id = client
            .create_page("secret", "db", &job("desc"), "message")
            .await
            .unwrap();
        assert_eq!(id.as_deref(), Some("page-123"));

        let headers = seen.lock().unwrap().take().unwrap();
        assert_eq!(headers["notion-version"], NOTION_VERSION);
        assert_eq!(headers["authorization"], "Bearer secret");
    }

    #[tokio::test]
    async fn test_create_page_reports_status() {
        let app = Router::new().route(
            "/pages",
            post(|| async { (StatusCode::BAD_REQUEST, "validation_error") }),
        );
        let base_url = spawn_mock(app).await;

        let client = NotesClient::new(Client::new(), base_url);
        let err = client
            .create_page("secret", "db", &job("desc"), "message")
            .await
            .unwrap_err();
        assert!(matches!(err, NotesError::Api { status: 400, .. }));
    }
}
