//! Debt repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::debts_model::{Debt, DebtSummary, DebtUpdate, NewDebt, PayoffPlan, PayoffStrategy};
use crate::errors::Result;

/// Trait defining the contract for Debt repository operations.
#[async_trait]
pub trait DebtRepositoryTrait: Send + Sync {
    async fn create(&self, new_debt: NewDebt) -> Result<Debt>;

    async fn update(&self, debt_update: DebtUpdate) -> Result<Debt>;

    async fn delete(&self, debt_id: &str) -> Result<usize>;

    fn get_by_id(&self, debt_id: &str) -> Result<Debt>;

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Debt>>;
}

/// Trait defining the contract for Debt service operations.
#[async_trait]
pub trait DebtServiceTrait: Send + Sync {
    async fn create_debt(&self, new_debt: NewDebt) -> Result<Debt>;

    async fn update_debt(&self, debt_update: DebtUpdate) -> Result<Debt>;

    async fn delete_debt(&self, debt_id: &str) -> Result<()>;

    fn get_debt(&self, debt_id: &str) -> Result<Debt>;

    fn list_debts(&self, is_active_filter: Option<bool>) -> Result<Vec<Debt>>;

    /// Runs the payoff simulation across active debts.
    fn payoff_plan(
        &self,
        monthly_budget: Decimal,
        strategy: PayoffStrategy,
        start_month: NaiveDate,
    ) -> Result<PayoffPlan>;

    /// Aggregate totals across active debts.
    fn summary(&self) -> Result<DebtSummary>;
}
