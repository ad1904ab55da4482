use std::sync::Arc;

use async_trait::async_trait;

use super::basket::{build_shopping_line, price_basket};
use super::groceries_model::{
    BasketPricing, DealRule, GroceryProduct, GroceryProductUpdate, NewDealRule, NewGroceryProduct,
    ShoppingLine, ShoppingRequest,
};
use super::groceries_traits::{GroceryRepositoryTrait, GroceryServiceTrait};
use crate::errors::Result;

/// Service for grocery products, deal rules, and basket pricing.
pub struct GroceryService {
    repository: Arc<dyn GroceryRepositoryTrait>,
}

impl GroceryService {
    pub fn new(repository: Arc<dyn GroceryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GroceryServiceTrait for GroceryService {
    async fn create_product(&self, new_product: NewGroceryProduct) -> Result<GroceryProduct> {
        new_product.validate()?;
        self.repository.create_product(new_product).await
    }

    async fn update_product(&self, update: GroceryProductUpdate) -> Result<GroceryProduct> {
        update.validate()?;
        self.repository.update_product(update).await
    }

    async fn delete_product(&self, product_id: &str) -> Result<()> {
        self.repository.delete_product(product_id).await?;
        Ok(())
    }

    fn get_product(&self, product_id: &str) -> Result<GroceryProduct> {
        self.repository.get_product_by_id(product_id)
    }

    fn list_products(&self) -> Result<Vec<GroceryProduct>> {
        self.repository.list_products()
    }

    async fn create_deal_rule(&self, new_rule: NewDealRule) -> Result<DealRule> {
        new_rule.validate()?;
        // The rule must point at a product we know about.
        self.repository.get_product_by_id(&new_rule.product_id)?;
        self.repository.create_deal_rule(new_rule).await
    }

    async fn delete_deal_rule(&self, rule_id: &str) -> Result<()> {
        self.repository.delete_deal_rule(rule_id).await?;
        Ok(())
    }

    fn list_deal_rules(&self) -> Result<Vec<DealRule>> {
        self.repository.list_deal_rules(false)
    }

    fn price_shopping_list(&self, requests: &[ShoppingRequest]) -> Result<BasketPricing> {
        let mut lines: Vec<ShoppingLine> = Vec::with_capacity(requests.len());
        for request in requests {
            let product = self.repository.get_product_by_id(&request.product_id)?;
            lines.push(build_shopping_line(
                &product,
                request.quantity,
                request.unit,
            )?);
        }
        let rules = self.repository.list_deal_rules(true)?;
        Ok(price_basket(lines, &rules))
    }
}
