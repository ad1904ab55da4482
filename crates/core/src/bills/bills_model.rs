//! Bill domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{errors::ValidationError, Error, Result};

/// Errors specific to bill handling.
#[derive(Error, Debug)]
pub enum BillError {
    #[error("Invalid due day {day} for {frequency:?} bills")]
    InvalidDueDay { day: u32, frequency: BillFrequency },

    #[error("{frequency:?} bills require a start date")]
    StartDateRequired { frequency: BillFrequency },
}

/// How often a bill recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillFrequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl BillFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillFrequency::Weekly => "WEEKLY",
            BillFrequency::Monthly => "MONTHLY",
            BillFrequency::Quarterly => "QUARTERLY",
            BillFrequency::Annual => "ANNUAL",
        }
    }
}

impl std::str::FromStr for BillFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "WEEKLY" => Ok(BillFrequency::Weekly),
            "MONTHLY" => Ok(BillFrequency::Monthly),
            "QUARTERLY" => Ok(BillFrequency::Quarterly),
            "ANNUAL" => Ok(BillFrequency::Annual),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown bill frequency: {}",
                other
            )))),
        }
    }
}

/// A recurring bill.
///
/// `due_day` is the day of month (1-31, clamped to short months) for monthly
/// and longer frequencies, or an ISO weekday (1 = Monday .. 7 = Sunday) for
/// weekly bills. Quarterly and annual bills anchor their cycle on
/// `start_date`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub frequency: BillFrequency,
    pub due_day: u32,
    pub start_date: Option<NaiveDate>,
    pub category: Option<String>,
    /// Account the bill is usually paid from, when known.
    pub account_id: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn validate_bill_fields(
    name: &str,
    amount: Decimal,
    frequency: BillFrequency,
    due_day: u32,
    start_date: Option<NaiveDate>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Bill name cannot be empty".to_string(),
        )));
    }
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Bill amount must be positive".to_string(),
        )));
    }
    let day_ok = match frequency {
        BillFrequency::Weekly => (1..=7).contains(&due_day),
        _ => (1..=31).contains(&due_day),
    };
    if !day_ok {
        return Err(Error::Bill(BillError::InvalidDueDay {
            day: due_day,
            frequency,
        }));
    }
    if matches!(frequency, BillFrequency::Quarterly | BillFrequency::Annual)
        && start_date.is_none()
    {
        return Err(Error::Bill(BillError::StartDateRequired { frequency }));
    }
    Ok(())
}

/// Input model for creating a new bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub amount: Decimal,
    pub frequency: BillFrequency,
    pub due_day: u32,
    pub start_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub account_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl NewBill {
    pub fn validate(&self) -> Result<()> {
        validate_bill_fields(
            &self.name,
            self.amount,
            self.frequency,
            self.due_day,
            self.start_date,
        )
    }
}

/// Input model for updating an existing bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillUpdate {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub frequency: BillFrequency,
    pub due_day: u32,
    pub start_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub account_id: Option<String>,
    pub is_active: bool,
}

impl BillUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_bill_fields(
            &self.name,
            self.amount,
            self.frequency,
            self.due_day,
            self.start_date,
        )
    }
}

/// Payment status of one generated bill occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccurrenceStatus {
    Upcoming,
    Due,
    Paid,
    Missed,
}

/// A generated calendar instance of a recurring bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillOccurrence {
    pub bill_id: String,
    pub bill_name: String,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub status: OccurrenceStatus,
    pub matched_transaction_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn netflix() -> NewBill {
        NewBill {
            id: None,
            name: "Netflix".to_string(),
            amount: dec!(10.99),
            frequency: BillFrequency::Monthly,
            due_day: 1,
            start_date: None,
            category: Some("Entertainment".to_string()),
            account_id: None,
            is_active: true,
        }
    }

    #[test]
    fn test_valid_bill() {
        assert!(netflix().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_amount_and_day() {
        let mut bill = netflix();
        bill.amount = Decimal::ZERO;
        assert!(bill.validate().is_err());

        let mut bill = netflix();
        bill.due_day = 32;
        assert!(bill.validate().is_err());

        let mut bill = netflix();
        bill.frequency = BillFrequency::Weekly;
        bill.due_day = 8;
        assert!(bill.validate().is_err());
    }

    #[test]
    fn test_quarterly_requires_start_date() {
        let mut bill = netflix();
        bill.frequency = BillFrequency::Quarterly;
        bill.start_date = None;
        assert!(matches!(
            bill.validate(),
            Err(Error::Bill(BillError::StartDateRequired { .. }))
        ));

        bill.start_date = NaiveDate::from_ymd_opt(2025, 1, 15);
        assert!(bill.validate().is_ok());
    }
}
