use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::debts_model::{Debt, DebtSummary, DebtUpdate, NewDebt, PayoffPlan, PayoffStrategy};
use super::debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
use super::payoff::generate_payoff_plan;
use crate::errors::Result;

/// Service for managing debts and payoff planning.
pub struct DebtService {
    repository: Arc<dyn DebtRepositoryTrait>,
}

impl DebtService {
    pub fn new(repository: Arc<dyn DebtRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DebtServiceTrait for DebtService {
    async fn create_debt(&self, new_debt: NewDebt) -> Result<Debt> {
        new_debt.validate()?;
        debug!("Creating debt '{}'", new_debt.name);
        self.repository.create(new_debt).await
    }

    async fn update_debt(&self, debt_update: DebtUpdate) -> Result<Debt> {
        debt_update.validate()?;
        self.repository.update(debt_update).await
    }

    async fn delete_debt(&self, debt_id: &str) -> Result<()> {
        self.repository.delete(debt_id).await?;
        Ok(())
    }

    fn get_debt(&self, debt_id: &str) -> Result<Debt> {
        self.repository.get_by_id(debt_id)
    }

    fn list_debts(&self, is_active_filter: Option<bool>) -> Result<Vec<Debt>> {
        self.repository.list(is_active_filter)
    }

    fn payoff_plan(
        &self,
        monthly_budget: Decimal,
        strategy: PayoffStrategy,
        start_month: NaiveDate,
    ) -> Result<PayoffPlan> {
        let debts = self.repository.list(Some(true))?;
        generate_payoff_plan(&debts, monthly_budget, strategy, start_month)
    }

    fn summary(&self) -> Result<DebtSummary> {
        let debts = self.repository.list(Some(true))?;
        let total_balance: Decimal = debts.iter().map(|d| d.balance).sum();
        let total_min_payments: Decimal = debts.iter().map(|d| d.min_payment).sum();
        let average_apr = if total_balance > Decimal::ZERO {
            let weighted: Decimal = debts.iter().map(|d| d.balance * d.apr).sum();
            (weighted / total_balance).round_dp(2)
        } else {
            Decimal::ZERO
        };
        Ok(DebtSummary {
            total_balance,
            average_apr,
            total_min_payments,
            debt_count: debts.len(),
        })
    }
}
