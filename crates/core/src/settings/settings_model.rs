//! Settings domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_CURRENCY, DEFAULT_PAYDAY_DAY};
use crate::{errors::ValidationError, Error, Result};

/// Typed application settings. Missing keys fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub base_currency: String,
    pub payday_day: u32,
    pub onboarding_completed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            payday_day: DEFAULT_PAYDAY_DAY,
            onboarding_completed: false,
        }
    }
}

/// Partial settings update; None fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub base_currency: Option<String>,
    pub payday_day: Option<u32>,
    pub onboarding_completed: Option<bool>,
}

impl SettingsUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(currency) = &self.base_currency {
            if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Base currency must be a 3-letter ISO code, got '{}'",
                    currency
                ))));
            }
        }
        if let Some(day) = self.payday_day {
            if !(1..=31).contains(&day) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Payday day must be between 1 and 31".to_string(),
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.base_currency, "GBP");
        assert_eq!(settings.payday_day, 20);
        assert!(!settings.onboarding_completed);
    }

    #[test]
    fn test_update_validation() {
        let update = SettingsUpdate {
            base_currency: Some("EUR".to_string()),
            payday_day: Some(25),
            onboarding_completed: None,
        };
        assert!(update.validate().is_ok());

        let update = SettingsUpdate {
            base_currency: Some("euro".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = SettingsUpdate {
            payday_day: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
