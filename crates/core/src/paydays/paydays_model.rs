//! Payday domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One pay cycle: payday through the day before the next payday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    pub payday: NaiveDate,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// Upcoming-payday view for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaydayInfo {
    pub next_payday: NaiveDate,
    pub days_until: i64,
    /// Working days remaining until pay, excluding today.
    pub working_days_until: u32,
}
