//! Investment domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A holding with manually maintained pricing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub account_id: Option<String>,
    pub symbol: String,
    pub name: Option<String>,
    pub units: Decimal,
    pub unit_cost: Decimal,
    pub current_price: Decimal,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Investment {
    pub fn cost_basis(&self) -> Decimal {
        (self.units * self.unit_cost).round_dp(2)
    }

    pub fn market_value(&self) -> Decimal {
        (self.units * self.current_price).round_dp(2)
    }
}

fn validate_investment_fields(
    symbol: &str,
    units: Decimal,
    unit_cost: Decimal,
    current_price: Decimal,
) -> Result<()> {
    if symbol.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "symbol".to_string(),
        )));
    }
    if units <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Units must be positive".to_string(),
        )));
    }
    if unit_cost < Decimal::ZERO || current_price < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Prices cannot be negative".to_string(),
        )));
    }
    Ok(())
}

/// Input model for creating a new holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub symbol: String,
    pub name: Option<String>,
    pub units: Decimal,
    pub unit_cost: Decimal,
    pub current_price: Decimal,
    pub currency: String,
}

impl NewInvestment {
    pub fn validate(&self) -> Result<()> {
        validate_investment_fields(&self.symbol, self.units, self.unit_cost, self.current_price)
    }
}

/// Input model for updating an existing holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    pub id: String,
    pub account_id: Option<String>,
    pub symbol: String,
    pub name: Option<String>,
    pub units: Decimal,
    pub unit_cost: Decimal,
    pub current_price: Decimal,
    pub currency: String,
}

impl InvestmentUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_investment_fields(&self.symbol, self.units, self.unit_cost, self.current_price)
    }
}

/// One holding with derived valuation figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionView {
    pub investment: Investment,
    pub cost_basis: Decimal,
    pub market_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_pct: Decimal,
}

/// Portfolio-level valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub total_cost: Decimal,
    pub total_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_pct: Decimal,
    pub positions: Vec<PositionView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valuation_helpers() {
        let holding = Investment {
            id: "inv-1".to_string(),
            symbol: "VWRL".to_string(),
            units: dec!(12.5),
            unit_cost: dec!(80),
            current_price: dec!(92.40),
            currency: "GBP".to_string(),
            ..Default::default()
        };
        assert_eq!(holding.cost_basis(), dec!(1000.00));
        assert_eq!(holding.market_value(), dec!(1155.00));
    }

    #[test]
    fn test_validation() {
        let mut new = NewInvestment {
            id: None,
            account_id: None,
            symbol: "VWRL".to_string(),
            name: None,
            units: dec!(10),
            unit_cost: dec!(80),
            current_price: dec!(90),
            currency: "GBP".to_string(),
        };
        assert!(new.validate().is_ok());

        new.units = Decimal::ZERO;
        assert!(new.validate().is_err());

        new.units = dec!(1);
        new.symbol = "".to_string();
        assert!(new.validate().is_err());
    }
}
