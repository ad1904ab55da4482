use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::toiletries_model::{
    projection, NewToiletryItem, RestockSuggestion, ToiletryItem, ToiletryItemUpdate,
};
use super::toiletries_traits::{ToiletryRepositoryTrait, ToiletryServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for the toiletry inventory.
pub struct ToiletryService {
    repository: Arc<dyn ToiletryRepositoryTrait>,
}

impl ToiletryService {
    pub fn new(repository: Arc<dyn ToiletryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

fn validate_positive(quantity: Decimal) -> Result<()> {
    if quantity <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Quantity must be positive".to_string(),
        )));
    }
    Ok(())
}

#[async_trait]
impl ToiletryServiceTrait for ToiletryService {
    async fn create_item(&self, new_item: NewToiletryItem) -> Result<ToiletryItem> {
        new_item.validate()?;
        self.repository.create(new_item).await
    }

    async fn update_item(&self, update: ToiletryItemUpdate) -> Result<ToiletryItem> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn delete_item(&self, item_id: &str) -> Result<()> {
        self.repository.delete(item_id).await?;
        Ok(())
    }

    fn get_item(&self, item_id: &str) -> Result<ToiletryItem> {
        self.repository.get_by_id(item_id)
    }

    fn list_items(&self) -> Result<Vec<ToiletryItem>> {
        self.repository.list()
    }

    async fn record_usage(&self, item_id: &str, quantity: Decimal) -> Result<ToiletryItem> {
        validate_positive(quantity)?;
        let item = self.repository.get_by_id(item_id)?;
        let remaining = (item.quantity_on_hand - quantity).max(Decimal::ZERO);
        self.repository.set_quantity(item_id, remaining).await
    }

    async fn record_restock(&self, item_id: &str, quantity: Decimal) -> Result<ToiletryItem> {
        validate_positive(quantity)?;
        let item = self.repository.get_by_id(item_id)?;
        self.repository
            .set_quantity(item_id, item.quantity_on_hand + quantity)
            .await
    }

    fn restock_list(&self, today: NaiveDate) -> Result<Vec<RestockSuggestion>> {
        let mut suggestions: Vec<RestockSuggestion> = self
            .repository
            .list()?
            .iter()
            .map(|item| projection(item, today))
            .collect();
        // Soonest run-out first; items that never run out sink to the bottom.
        suggestions.sort_by_key(|s| s.days_remaining.unwrap_or(i64::MAX));
        Ok(suggestions)
    }
}
