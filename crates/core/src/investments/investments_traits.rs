//! Investment repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::investments_model::{Investment, InvestmentSummary, InvestmentUpdate, NewInvestment};
use crate::errors::Result;

/// Trait defining the contract for investment persistence.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    async fn create(&self, new_investment: NewInvestment) -> Result<Investment>;

    async fn update(&self, update: InvestmentUpdate) -> Result<Investment>;

    async fn update_price(&self, investment_id: &str, price: Decimal) -> Result<Investment>;

    async fn delete(&self, investment_id: &str) -> Result<usize>;

    fn get_by_id(&self, investment_id: &str) -> Result<Investment>;

    fn list(&self) -> Result<Vec<Investment>>;
}

/// Trait defining the contract for investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment>;

    async fn update_investment(&self, update: InvestmentUpdate) -> Result<Investment>;

    /// Records a manually observed price.
    async fn update_price(&self, investment_id: &str, price: Decimal) -> Result<Investment>;

    async fn delete_investment(&self, investment_id: &str) -> Result<()>;

    fn get_investment(&self, investment_id: &str) -> Result<Investment>;

    fn list_investments(&self) -> Result<Vec<Investment>>;

    /// Portfolio valuation across all holdings.
    fn summary(&self) -> Result<InvestmentSummary>;
}
