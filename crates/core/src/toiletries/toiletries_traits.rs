//! Toiletry repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::toiletries_model::{NewToiletryItem, RestockSuggestion, ToiletryItem, ToiletryItemUpdate};
use crate::errors::Result;

/// Trait defining the contract for toiletry persistence.
#[async_trait]
pub trait ToiletryRepositoryTrait: Send + Sync {
    async fn create(&self, new_item: NewToiletryItem) -> Result<ToiletryItem>;

    async fn update(&self, update: ToiletryItemUpdate) -> Result<ToiletryItem>;

    /// Sets an item's stock level directly.
    async fn set_quantity(&self, item_id: &str, quantity: Decimal) -> Result<ToiletryItem>;

    async fn delete(&self, item_id: &str) -> Result<usize>;

    fn get_by_id(&self, item_id: &str) -> Result<ToiletryItem>;

    fn list(&self) -> Result<Vec<ToiletryItem>>;
}

/// Trait defining the contract for toiletry service operations.
#[async_trait]
pub trait ToiletryServiceTrait: Send + Sync {
    async fn create_item(&self, new_item: NewToiletryItem) -> Result<ToiletryItem>;

    async fn update_item(&self, update: ToiletryItemUpdate) -> Result<ToiletryItem>;

    async fn delete_item(&self, item_id: &str) -> Result<()>;

    fn get_item(&self, item_id: &str) -> Result<ToiletryItem>;

    fn list_items(&self) -> Result<Vec<ToiletryItem>>;

    /// Records consumption; stock floors at zero.
    async fn record_usage(&self, item_id: &str, quantity: Decimal) -> Result<ToiletryItem>;

    /// Records a purchase topping up stock.
    async fn record_restock(&self, item_id: &str, quantity: Decimal) -> Result<ToiletryItem>;

    /// All items with projections, soonest run-out first.
    fn restock_list(&self, today: NaiveDate) -> Result<Vec<RestockSuggestion>>;
}
