use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::paydays_model::{PayPeriod, PaydayInfo};
use super::uk_calendar::{next_payday, pay_period_for, working_days_between};
use crate::errors::{Error, Result};
use crate::settings::SettingsServiceTrait;

/// Trait defining the contract for payday calculations.
#[async_trait]
pub trait PaydayServiceTrait: Send + Sync {
    /// Next adjusted payday relative to `today`.
    fn next_payday_info(&self, today: NaiveDate) -> Result<PaydayInfo>;

    /// The pay period containing `date`.
    fn pay_period(&self, date: NaiveDate) -> Result<PayPeriod>;
}

/// Service exposing the UK payday calendar, configured from settings.
pub struct PaydayService {
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl PaydayService {
    pub fn new(settings_service: Arc<dyn SettingsServiceTrait>) -> Self {
        Self { settings_service }
    }

    fn nominal_day(&self) -> Result<u32> {
        Ok(self.settings_service.get_settings()?.payday_day)
    }
}

#[async_trait]
impl PaydayServiceTrait for PaydayService {
    fn next_payday_info(&self, today: NaiveDate) -> Result<PaydayInfo> {
        let nominal_day = self.nominal_day()?;
        let payday = next_payday(today, nominal_day)
            .ok_or_else(|| Error::Unexpected("Payday out of calendar range".to_string()))?;
        Ok(PaydayInfo {
            next_payday: payday,
            days_until: (payday - today).num_days(),
            working_days_until: working_days_between(
                today.succ_opt().unwrap_or(today),
                payday.succ_opt().unwrap_or(payday),
            ),
        })
    }

    fn pay_period(&self, date: NaiveDate) -> Result<PayPeriod> {
        let nominal_day = self.nominal_day()?;
        pay_period_for(date, nominal_day)
            .ok_or_else(|| Error::Unexpected("Pay period out of calendar range".to_string()))
    }
}
