//! Account domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Kind of bank/cash account being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Current,
    Savings,
    Credit,
    Cash,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Current => "CURRENT",
            AccountType::Savings => "SAVINGS",
            AccountType::Credit => "CREDIT",
            AccountType::Cash => "CASH",
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CURRENT" => Ok(AccountType::Current),
            "SAVINGS" => Ok(AccountType::Savings),
            "CREDIT" => Ok(AccountType::Credit),
            "CASH" => Ok(AccountType::Cash),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown account type: {}",
                other
            )))),
        }
    }
}

/// Domain model representing an account in the system.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Bank or institution holding the account.
    pub institution: Option<String>,
    pub account_type: AccountType,
    pub currency: String,
    /// Current balance; negative for credit accounts in debit.
    pub balance: Decimal,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub institution: Option<String>,
    pub account_type: AccountType,
    pub currency: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

fn validate_currency(currency: &str) -> Result<()> {
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Currency must be a 3-letter ISO code, got '{}'",
            currency
        ))));
    }
    Ok(())
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        validate_currency(&self.currency)
    }
}

/// Input model for updating an existing account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: Option<String>,
    pub name: String,
    pub institution: Option<String>,
    pub account_type: AccountType,
    pub is_default: bool,
    pub is_active: bool,
}

impl AccountUpdate {
    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Aggregated balance for one currency across active accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyTotal {
    pub currency: String,
    pub total: Decimal,
    pub account_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_type_round_trip() {
        assert_eq!(
            serde_json::to_string(&AccountType::Current).unwrap(),
            "\"CURRENT\""
        );
        assert_eq!(
            serde_json::from_str::<AccountType>("\"CREDIT\"").unwrap(),
            AccountType::Credit
        );
        assert_eq!("SAVINGS".parse::<AccountType>().unwrap(), AccountType::Savings);
        assert!("GOLD".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_new_account_validation() {
        let mut account = NewAccount {
            id: None,
            name: "Joint current".to_string(),
            institution: Some("Monzo".to_string()),
            account_type: AccountType::Current,
            currency: "GBP".to_string(),
            balance: dec!(120.55),
            is_default: true,
            is_active: true,
        };
        assert!(account.validate().is_ok());

        account.name = "  ".to_string();
        assert!(account.validate().is_err());

        account.name = "Joint current".to_string();
        account.currency = "gbp".to_string();
        assert!(account.validate().is_err());

        account.currency = "POUND".to_string();
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_update_requires_id() {
        let update = AccountUpdate {
            id: None,
            name: "Savings".to_string(),
            institution: None,
            account_type: AccountType::Savings,
            is_default: false,
            is_active: true,
        };
        assert!(update.validate().is_err());
    }
}
