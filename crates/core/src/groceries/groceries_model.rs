//! Grocery domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Measurement unit for a product pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuantityUnit {
    Grams,
    Kilograms,
    Millilitres,
    Litres,
    #[default]
    Each,
}

impl QuantityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityUnit::Grams => "G",
            QuantityUnit::Kilograms => "KG",
            QuantityUnit::Millilitres => "ML",
            QuantityUnit::Litres => "L",
            QuantityUnit::Each => "EACH",
        }
    }

    /// Mass and volume units convert within their family; EACH stands alone.
    pub fn family(&self) -> &'static str {
        match self {
            QuantityUnit::Grams | QuantityUnit::Kilograms => "mass",
            QuantityUnit::Millilitres | QuantityUnit::Litres => "volume",
            QuantityUnit::Each => "count",
        }
    }

    /// Scale factor to the family's base unit (g, ml, or each).
    pub fn base_factor(&self) -> Decimal {
        match self {
            QuantityUnit::Grams | QuantityUnit::Millilitres | QuantityUnit::Each => Decimal::ONE,
            QuantityUnit::Kilograms | QuantityUnit::Litres => Decimal::from(1000),
        }
    }
}

impl std::str::FromStr for QuantityUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "G" => Ok(QuantityUnit::Grams),
            "KG" => Ok(QuantityUnit::Kilograms),
            "ML" => Ok(QuantityUnit::Millilitres),
            "L" => Ok(QuantityUnit::Litres),
            "EACH" => Ok(QuantityUnit::Each),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown quantity unit: {}",
                other
            )))),
        }
    }
}

/// A grocery product as sold: one pack at one price.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroceryProduct {
    pub id: String,
    pub name: String,
    pub store: Option<String>,
    pub pack_size: Decimal,
    pub unit: QuantityUnit,
    pub pack_price: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroceryProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub store: Option<String>,
    pub pack_size: Decimal,
    pub unit: QuantityUnit,
    pub pack_price: Decimal,
}

impl NewGroceryProduct {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Product name cannot be empty".to_string(),
            )));
        }
        if self.pack_size <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Pack size must be positive".to_string(),
            )));
        }
        if self.pack_price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Pack price cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryProductUpdate {
    pub id: String,
    pub name: String,
    pub store: Option<String>,
    pub pack_size: Decimal,
    pub unit: QuantityUnit,
    pub pack_price: Decimal,
}

impl GroceryProductUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.pack_size <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Pack size must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Kind of multi-buy promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealRuleType {
    /// Take `threshold + free` packs, pay for `threshold` (e.g. 3-for-2).
    MultiBuy,
    /// Pay `deal_price` for every complete set of `threshold` packs.
    BundlePrice,
}

/// A promotion attached to one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRule {
    pub id: String,
    pub product_id: String,
    pub rule_type: DealRuleType,
    pub threshold_quantity: i32,
    pub deal_price: Option<Decimal>,
    pub free_quantity: Option<i32>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a deal rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDealRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product_id: String,
    pub rule_type: DealRuleType,
    pub threshold_quantity: i32,
    pub deal_price: Option<Decimal>,
    pub free_quantity: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl NewDealRule {
    pub fn validate(&self) -> Result<()> {
        if self.product_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "productId".to_string(),
            )));
        }
        if self.threshold_quantity < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Deal threshold must be at least 1".to_string(),
            )));
        }
        match self.rule_type {
            DealRuleType::MultiBuy => {
                if !matches!(self.free_quantity, Some(f) if f >= 1) {
                    return Err(Error::Validation(ValidationError::InvalidInput(
                        "Multi-buy deals require a free quantity of at least 1".to_string(),
                    )));
                }
            }
            DealRuleType::BundlePrice => {
                if !matches!(self.deal_price, Some(p) if p > Decimal::ZERO) {
                    return Err(Error::Validation(ValidationError::InvalidInput(
                        "Bundle deals require a positive deal price".to_string(),
                    )));
                }
            }
        }
        Ok(())
    }
}

/// What the household needs of one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingRequest {
    pub product_id: String,
    pub quantity: Decimal,
    pub unit: QuantityUnit,
}

/// One line of the computed shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingLine {
    pub product: GroceryProduct,
    pub required_quantity: Decimal,
    pub required_unit: QuantityUnit,
    pub packs_to_buy: u32,
    /// Undiscounted price for the packs on this line.
    pub line_price: Decimal,
}

/// A fully priced basket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketPricing {
    pub lines: Vec<ShoppingLine>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}
