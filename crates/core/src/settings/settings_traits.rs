//! Settings repository and service traits.

use async_trait::async_trait;

use super::settings_model::{Settings, SettingsUpdate};
use crate::errors::Result;

/// Trait defining the contract for the key-value settings store.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Reads one setting; None when the key has never been written.
    fn get_setting(&self, key: &str) -> Result<Option<String>>;

    /// Upserts one setting.
    async fn set_setting(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait defining the contract for typed settings access.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// All settings, with defaults for unset keys.
    fn get_settings(&self) -> Result<Settings>;

    /// Applies a partial update and returns the merged settings.
    async fn update_settings(&self, update: SettingsUpdate) -> Result<Settings>;
}
