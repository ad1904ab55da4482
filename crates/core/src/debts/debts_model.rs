//! Debt domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{errors::ValidationError, Error, Result};

/// Errors specific to debt handling.
#[derive(Error, Debug)]
pub enum DebtError {
    #[error(
        "Monthly budget {budget} does not cover minimum payments totalling {minimum_total}"
    )]
    BudgetBelowMinimums {
        budget: Decimal,
        minimum_total: Decimal,
    },
}

/// Order in which spare budget is applied across debts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoffStrategy {
    /// Highest interest rate first.
    #[default]
    Avalanche,
    /// Lowest balance first.
    Snowball,
}

/// A tracked debt (credit card, loan, overdraft).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
    /// Annual percentage rate, e.g. 19.9 for 19.9% APR.
    pub apr: Decimal,
    pub min_payment: Decimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn validate_debt_fields(name: &str, balance: Decimal, apr: Decimal, min_payment: Decimal) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Debt name cannot be empty".to_string(),
        )));
    }
    if balance < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Debt balance cannot be negative".to_string(),
        )));
    }
    if apr < Decimal::ZERO || apr > Decimal::from(100) {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "APR must be between 0 and 100".to_string(),
        )));
    }
    if min_payment < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Minimum payment cannot be negative".to_string(),
        )));
    }
    Ok(())
}

/// Input model for creating a new debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub balance: Decimal,
    pub apr: Decimal,
    pub min_payment: Decimal,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl NewDebt {
    pub fn validate(&self) -> Result<()> {
        validate_debt_fields(&self.name, self.balance, self.apr, self.min_payment)
    }
}

/// Input model for updating an existing debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtUpdate {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
    pub apr: Decimal,
    pub min_payment: Decimal,
    pub is_active: bool,
}

impl DebtUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_debt_fields(&self.name, self.balance, self.apr, self.min_payment)
    }
}

/// One debt's share of a simulated month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayment {
    pub debt_id: String,
    pub debt_name: String,
    pub interest: Decimal,
    pub payment: Decimal,
    pub remaining_balance: Decimal,
}

/// One simulated month of the payoff plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMonth {
    /// First day of the simulated month.
    pub month: NaiveDate,
    pub payments: Vec<DebtPayment>,
    pub total_paid: Decimal,
    pub total_interest: Decimal,
    pub remaining_balance: Decimal,
}

/// A complete payoff simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPlan {
    pub strategy: PayoffStrategy,
    pub monthly_budget: Decimal,
    pub months: Vec<PayoffMonth>,
    pub total_interest: Decimal,
    /// First day of the month in which the last debt clears; None when the
    /// simulation was truncated or there was nothing to pay.
    pub debt_free_date: Option<NaiveDate>,
    /// True when the simulation hit its month ceiling before clearing.
    pub truncated: bool,
}

/// Aggregate view across active debts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSummary {
    pub total_balance: Decimal,
    /// Balance-weighted average APR; zero when there is no balance.
    pub average_apr: Decimal,
    pub total_min_payments: Decimal,
    pub debt_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn card() -> NewDebt {
        NewDebt {
            id: None,
            name: "Credit card".to_string(),
            balance: dec!(2400),
            apr: dec!(21.9),
            min_payment: dec!(60),
            is_active: true,
        }
    }

    #[test]
    fn test_valid_debt() {
        assert!(card().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        let mut debt = card();
        debt.balance = dec!(-1);
        assert!(debt.validate().is_err());

        let mut debt = card();
        debt.apr = dec!(101);
        assert!(debt.validate().is_err());

        let mut debt = card();
        debt.min_payment = dec!(-5);
        assert!(debt.validate().is_err());

        let mut debt = card();
        debt.name = String::new();
        assert!(debt.validate().is_err());
    }
}
