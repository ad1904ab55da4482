//! Transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A bank transaction belonging to an account.
///
/// Amounts follow bank-statement convention: negative values are outflows
/// (spending), positive values are inflows (income, refunds).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub merchant: Option<String>,
    pub amount: Decimal,
    pub category: Option<String>,
    pub notes: Option<String>,
    /// Deterministic dedup key for imported rows; None for manual entries.
    pub import_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub merchant: Option<String>,
    pub amount: Decimal,
    pub category: Option<String>,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction description cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub merchant: Option<String>,
    pub amount: Decimal,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl TransactionUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction description cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Filter for transaction searches. All fields are optional and combined
/// with AND; the date range is inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub account_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<String>,
}

/// Spending totals for one category within a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub transaction_count: usize,
}

/// Inflow/outflow summary for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_in: Decimal,
    pub total_out: Decimal,
    pub net: Decimal,
    pub by_category: Vec<CategoryTotal>,
}
