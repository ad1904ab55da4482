//! Toiletry inventory domain models.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::RESTOCK_HORIZON_DAYS;
use crate::{errors::ValidationError, Error, Result};

/// A household consumable with stock level and burn rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToiletryItem {
    pub id: String,
    pub name: String,
    pub quantity_on_hand: Decimal,
    /// Free-text unit: "rolls", "ml", "bars".
    pub unit: String,
    pub usage_per_week: Decimal,
    /// On-hand level at or below which the item needs restocking.
    pub restock_threshold: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn validate_item_fields(
    name: &str,
    quantity_on_hand: Decimal,
    usage_per_week: Decimal,
    restock_threshold: Decimal,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Item name cannot be empty".to_string(),
        )));
    }
    if quantity_on_hand < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Quantity on hand cannot be negative".to_string(),
        )));
    }
    if usage_per_week < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Weekly usage cannot be negative".to_string(),
        )));
    }
    if restock_threshold < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Restock threshold cannot be negative".to_string(),
        )));
    }
    Ok(())
}

/// Input model for creating a new inventory item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewToiletryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub quantity_on_hand: Decimal,
    pub unit: String,
    pub usage_per_week: Decimal,
    pub restock_threshold: Decimal,
}

impl NewToiletryItem {
    pub fn validate(&self) -> Result<()> {
        validate_item_fields(
            &self.name,
            self.quantity_on_hand,
            self.usage_per_week,
            self.restock_threshold,
        )
    }
}

/// Input model for updating an existing item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToiletryItemUpdate {
    pub id: String,
    pub name: String,
    pub quantity_on_hand: Decimal,
    pub unit: String,
    pub usage_per_week: Decimal,
    pub restock_threshold: Decimal,
}

impl ToiletryItemUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_item_fields(
            &self.name,
            self.quantity_on_hand,
            self.usage_per_week,
            self.restock_threshold,
        )
    }
}

/// Run-out projection for one item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockSuggestion {
    pub item: ToiletryItem,
    /// None when the item has no recorded usage.
    pub projected_runout: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    pub needs_restock: bool,
}

/// Projects when an item runs out at its current burn rate.
///
/// Items with zero weekly usage never run out. An item needs restocking when
/// stock has fallen to its threshold or the run-out date is within the
/// restock horizon.
pub fn projection(item: &ToiletryItem, today: NaiveDate) -> RestockSuggestion {
    let days_remaining = if item.usage_per_week > Decimal::ZERO {
        let days = item.quantity_on_hand / item.usage_per_week * Decimal::from(7);
        days.floor().to_i64()
    } else {
        None
    };
    let projected_runout = days_remaining.map(|d| today + Duration::days(d));

    let below_threshold = item.quantity_on_hand <= item.restock_threshold;
    let running_out_soon = days_remaining
        .map(|d| d <= RESTOCK_HORIZON_DAYS)
        .unwrap_or(false);

    RestockSuggestion {
        item: item.clone(),
        projected_runout,
        days_remaining,
        needs_restock: below_threshold || running_out_soon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(on_hand: Decimal, per_week: Decimal, threshold: Decimal) -> ToiletryItem {
        ToiletryItem {
            id: "item-1".to_string(),
            name: "Toothpaste".to_string(),
            quantity_on_hand: on_hand,
            unit: "tubes".to_string(),
            usage_per_week: per_week,
            restock_threshold: threshold,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_runout_projection() {
        // 4 tubes at half a tube per week: 56 days left.
        let suggestion = projection(&item(dec!(4), dec!(0.5), dec!(1)), date(2025, 6, 1));
        assert_eq!(suggestion.days_remaining, Some(56));
        assert_eq!(suggestion.projected_runout, Some(date(2025, 7, 27)));
        assert!(!suggestion.needs_restock);
    }

    #[test]
    fn test_zero_usage_never_runs_out() {
        let suggestion = projection(&item(dec!(2), dec!(0), dec!(1)), date(2025, 6, 1));
        assert!(suggestion.projected_runout.is_none());
        assert!(suggestion.days_remaining.is_none());
        assert!(!suggestion.needs_restock);
    }

    #[test]
    fn test_threshold_triggers_restock() {
        let suggestion = projection(&item(dec!(1), dec!(0.25), dec!(1)), date(2025, 6, 1));
        assert!(suggestion.needs_restock);
    }

    #[test]
    fn test_imminent_runout_triggers_restock() {
        // Above threshold but burning fast: 3 on hand, 2 per week -> 10 days.
        let suggestion = projection(&item(dec!(3), dec!(2), dec!(1)), date(2025, 6, 1));
        assert_eq!(suggestion.days_remaining, Some(10));
        assert!(suggestion.needs_restock);
    }

    #[test]
    fn test_validation() {
        let new_item = NewToiletryItem {
            id: None,
            name: "Shampoo".to_string(),
            quantity_on_hand: dec!(500),
            unit: "ml".to_string(),
            usage_per_week: dec!(60),
            restock_threshold: dec!(100),
        };
        assert!(new_item.validate().is_ok());

        let mut bad = new_item.clone();
        bad.quantity_on_hand = dec!(-1);
        assert!(bad.validate().is_err());

        let mut bad = new_item;
        bad.name = " ".to_string();
        assert!(bad.validate().is_err());
    }
}
