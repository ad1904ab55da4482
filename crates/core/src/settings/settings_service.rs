use log::warn;
use std::sync::Arc;

use async_trait::async_trait;

use super::settings_model::{Settings, SettingsUpdate};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::constants::{
    SETTING_BASE_CURRENCY, SETTING_ONBOARDING_COMPLETED, SETTING_PAYDAY_DAY,
};
use crate::errors::Result;

/// Service providing typed access to the settings store.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(currency) = self.repository.get_setting(SETTING_BASE_CURRENCY)? {
            settings.base_currency = currency;
        }
        if let Some(day) = self.repository.get_setting(SETTING_PAYDAY_DAY)? {
            match day.parse::<u32>() {
                Ok(day) if (1..=31).contains(&day) => settings.payday_day = day,
                _ => warn!("Ignoring invalid stored payday_day '{}'", day),
            }
        }
        if let Some(flag) = self.repository.get_setting(SETTING_ONBOARDING_COMPLETED)? {
            settings.onboarding_completed = flag == "true";
        }

        Ok(settings)
    }

    async fn update_settings(&self, update: SettingsUpdate) -> Result<Settings> {
        update.validate()?;

        if let Some(currency) = &update.base_currency {
            self.repository
                .set_setting(SETTING_BASE_CURRENCY, currency)
                .await?;
        }
        if let Some(day) = update.payday_day {
            self.repository
                .set_setting(SETTING_PAYDAY_DAY, &day.to_string())
                .await?;
        }
        if let Some(flag) = update.onboarding_completed {
            self.repository
                .set_setting(SETTING_ONBOARDING_COMPLETED, if flag { "true" } else { "false" })
                .await?;
        }

        self.get_settings()
    }
}
