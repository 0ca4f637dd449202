//! Settings lifecycle: load once at startup, save or reset explicitly, then
//! reload the in-memory snapshot held in `AppState`.

pub mod handlers;
pub mod recent_jobs;

use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::settings::{Preferences, Settings, Tone, DEFAULT_MAX_MESSAGE_LENGTH};
use crate::storage::KvStore;

pub const OPENROUTER_API_KEY: &str = "openRouterApiKey";
pub const NOTION_API_KEY: &str = "notionApiKey";
pub const NOTION_DATABASE_ID: &str = "notionDatabaseId";
pub const USER_RESUME: &str = "userResume";
pub const USER_PREFERENCES: &str = "userPreferences";

async fn load_string(store: &dyn KvStore, key: &str) -> Result<String, AppError> {
    Ok(store
        .get(key)
        .await?
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default())
}

/// Reads stored preferences, tolerating unknown tones and missing fields.
fn preferences_from_value(value: &Value) -> Preferences {
    let defaults = Preferences::default();
    Preferences {
        tone: value
            .get("tone")
            .and_then(Value::as_str)
            .map(Tone::from_name_lenient)
            .unwrap_or(defaults.tone),
        include_salary: value
            .get("includeSalary")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.include_salary),
        max_message_length: value
            .get("maxMessageLength")
            .and_then(Value::as_u64)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(DEFAULT_MAX_MESSAGE_LENGTH),
    }
}

pub async fn load_settings(store: &dyn KvStore) -> Result<Settings, AppError> {
    let user_preferences = match store.get(USER_PREFERENCES).await? {
        Some(value) => preferences_from_value(&value),
        None => Preferences::default(),
    };

    Ok(Settings {
        open_router_api_key: load_string(store, OPENROUTER_API_KEY).await?,
        notion_api_key: load_string(store, NOTION_API_KEY).await?,
        notion_database_id: load_string(store, NOTION_DATABASE_ID).await?,
        user_resume: load_string(store, USER_RESUME).await?,
        user_preferences,
    })
}

pub fn validate_settings(settings: &Settings) -> Result<(), AppError> {
    if settings.user_preferences.max_message_length == 0 {
        return Err(AppError::Validation(
            "maxMessageLength must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Persists every settings key. Callers reload the snapshot afterwards.
pub async fn save_settings(store: &dyn KvStore, settings: &Settings) -> Result<(), AppError> {
    validate_settings(settings)?;

    store
        .set(OPENROUTER_API_KEY, Value::from(settings.open_router_api_key.as_str()))
        .await?;
    store
        .set(NOTION_API_KEY, Value::from(settings.notion_api_key.as_str()))
        .await?;
    store
        .set(NOTION_DATABASE_ID, Value::from(settings.notion_database_id.as_str()))
        .await?;
    store
        .set(USER_RESUME, Value::from(settings.user_resume.as_str()))
        .await?;
    let preferences = serde_json::to_value(&settings.user_preferences)
        .map_err(|e| AppError::Internal(e.into()))?;
    store.set(USER_PREFERENCES, preferences).await?;

    info!(
        "Settings saved (tone={}, maxMessageLength={})",
        settings.user_preferences.tone, settings.user_preferences.max_message_length
    );
    Ok(())
}

/// Seeds defaults for keys that have never been written.
pub async fn initialize_defaults(store: &dyn KvStore) -> Result<(), AppError> {
    if store.get(USER_PREFERENCES).await?.is_none() {
        warn!("No stored settings found, writing defaults");
        save_settings(store, &Settings::default()).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryKvStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_store_loads_defaults() {
        let store = MemoryKvStore::new();
        let settings = load_settings(&store).await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryKvStore::new();
        let settings = Settings {
            open_router_api_key: "sk-or".to_string(),
            notion_api_key: "secret_n".to_string(),
            notion_database_id: "db".to_string(),
            user_resume: "Rust dev".to_string(),
            user_preferences: Preferences {
                tone: Tone::Enthusiastic,
                include_salary: true,
                max_message_length: 300,
            },
        };
        save_settings(&store, &settings).await.unwrap();

        assert_eq!(load_settings(&store).await.unwrap(), settings);
        assert_eq!(
            store.get(USER_PREFERENCES).await.unwrap().unwrap()["maxMessageLength"],
            300
        );
    }

    #[tokio::test]
    async fn test_zero_length_rejected() {
        let store = MemoryKvStore::new();
        let mut settings = Settings::default();
        settings.user_preferences.max_message_length = 0;
        assert!(matches!(
            save_settings(&store, &settings).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_stored_preferences_are_read_leniently() {
        let store = MemoryKvStore::new();
        store
            .set(
                USER_PREFERENCES,
                json!({"tone": "sarcastic", "maxMessageLength": 0}),
            )
            .await
            .unwrap();
        let prefs = load_settings(&store).await.unwrap().user_preferences;
        assert_eq!(prefs, Preferences::default());
    }

    #[tokio::test]
    async fn test_initialize_defaults_keeps_existing() {
        let store = MemoryKvStore::new();
        store
            .set(USER_PREFERENCES, json!({"tone": "formal"}))
            .await
            .unwrap();
        initialize_defaults(&store).await.unwrap();
        let prefs = load_settings(&store).await.unwrap().user_preferences;
        assert_eq!(prefs.tone, Tone::Formal);
    }
}
