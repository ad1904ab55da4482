//! Provider offer domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A switchable tariff from a provider, scoped to a bill category
/// ("Energy", "Broadband", "Insurance", ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOffer {
    pub id: String,
    pub category: String,
    pub provider: String,
    pub monthly_price: Decimal,
    /// Contract length; None for rolling tariffs.
    pub term_months: Option<i32>,
    /// Introductory discount window, when the tariff has one.
    pub intro_months: Option<i32>,
    pub intro_price: Option<Decimal>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn validate_offer_fields(
    category: &str,
    provider: &str,
    monthly_price: Decimal,
    intro_months: Option<i32>,
    intro_price: Option<Decimal>,
) -> Result<()> {
    if category.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "category".to_string(),
        )));
    }
    if provider.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "provider".to_string(),
        )));
    }
    if monthly_price <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Monthly price must be positive".to_string(),
        )));
    }
    match (intro_months, intro_price) {
        (None, None) => Ok(()),
        (Some(months), Some(price)) if months > 0 && price >= Decimal::ZERO => Ok(()),
        _ => Err(Error::Validation(ValidationError::InvalidInput(
            "Intro pricing requires both a positive month count and a non-negative price"
                .to_string(),
        ))),
    }
}

/// Input model for creating a new offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProviderOffer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: String,
    pub provider: String,
    pub monthly_price: Decimal,
    pub term_months: Option<i32>,
    pub intro_months: Option<i32>,
    pub intro_price: Option<Decimal>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl NewProviderOffer {
    pub fn validate(&self) -> Result<()> {
        validate_offer_fields(
            &self.category,
            &self.provider,
            self.monthly_price,
            self.intro_months,
            self.intro_price,
        )
    }
}

/// Input model for updating an existing offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOfferUpdate {
    pub id: String,
    pub category: String,
    pub provider: String,
    pub monthly_price: Decimal,
    pub term_months: Option<i32>,
    pub intro_months: Option<i32>,
    pub intro_price: Option<Decimal>,
    pub is_active: bool,
}

impl ProviderOfferUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_offer_fields(
            &self.category,
            &self.provider,
            self.monthly_price,
            self.intro_months,
            self.intro_price,
        )
    }
}

/// A money-saving switch for one bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchRecommendation {
    pub bill_id: String,
    pub bill_name: String,
    pub current_monthly: Decimal,
    pub offer: ProviderOffer,
    pub first_year_cost: Decimal,
    pub first_year_saving: Decimal,
    pub saving_pct: Decimal,
}
