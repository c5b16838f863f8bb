pub mod in_memory;

use crate::core::errors::SettingsError;
use crate::core::models::AppLog;
use async_trait::async_trait;

/// Append-only record of settings actions taken through this service.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        ship: Option<&str>,
    ) -> Result<(), SettingsError>;
    async fn get_logs(&self) -> Result<Vec<AppLog>, SettingsError>;
}
