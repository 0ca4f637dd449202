//! Key-value persistence for settings and the recent-jobs list.
//!
//! PostgreSQL backs the store when `DATABASE_URL` is configured; otherwise the
//! values live in process memory and are lost on restart.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), AppError>;

    /// Human-readable backend name for startup logs.
    fn backend(&self) -> &'static str;
}
