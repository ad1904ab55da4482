//! Grocery repository and service traits.

use async_trait::async_trait;

use super::groceries_model::{
    BasketPricing, DealRule, GroceryProduct, GroceryProductUpdate, NewDealRule, NewGroceryProduct,
    ShoppingRequest,
};
use crate::errors::Result;

/// Trait defining the contract for grocery persistence.
#[async_trait]
pub trait GroceryRepositoryTrait: Send + Sync {
    async fn create_product(&self, new_product: NewGroceryProduct) -> Result<GroceryProduct>;

    async fn update_product(&self, update: GroceryProductUpdate) -> Result<GroceryProduct>;

    /// Deletes a product and its deal rules.
    async fn delete_product(&self, product_id: &str) -> Result<usize>;

    fn get_product_by_id(&self, product_id: &str) -> Result<GroceryProduct>;

    fn list_products(&self) -> Result<Vec<GroceryProduct>>;

    async fn create_deal_rule(&self, new_rule: NewDealRule) -> Result<DealRule>;

    async fn delete_deal_rule(&self, rule_id: &str) -> Result<usize>;

    fn list_deal_rules(&self, active_only: bool) -> Result<Vec<DealRule>>;
}

/// Trait defining the contract for grocery service operations.
#[async_trait]
pub trait GroceryServiceTrait: Send + Sync {
    async fn create_product(&self, new_product: NewGroceryProduct) -> Result<GroceryProduct>;

    async fn update_product(&self, update: GroceryProductUpdate) -> Result<GroceryProduct>;

    async fn delete_product(&self, product_id: &str) -> Result<()>;

    fn get_product(&self, product_id: &str) -> Result<GroceryProduct>;

    fn list_products(&self) -> Result<Vec<GroceryProduct>>;

    async fn create_deal_rule(&self, new_rule: NewDealRule) -> Result<DealRule>;

    async fn delete_deal_rule(&self, rule_id: &str) -> Result<()>;

    fn list_deal_rules(&self) -> Result<Vec<DealRule>>;

    /// Builds and prices a shopping basket from required quantities,
    /// applying active deal rules.
    fn price_shopping_list(&self, requests: &[ShoppingRequest]) -> Result<BasketPricing>;
}
