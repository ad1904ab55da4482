use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::investments_model::{
    Investment, InvestmentSummary, InvestmentUpdate, NewInvestment, PositionView,
};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for manually priced investment holdings.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

fn percentage(gain: Decimal, cost: Decimal) -> Decimal {
    if cost > Decimal::ZERO {
        (gain / cost * Decimal::from(100)).round_dp(2)
    } else {
        Decimal::ZERO
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;
        self.repository.create(new_investment).await
    }

    async fn update_investment(&self, update: InvestmentUpdate) -> Result<Investment> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn update_price(&self, investment_id: &str, price: Decimal) -> Result<Investment> {
        if price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price cannot be negative".to_string(),
            )));
        }
        self.repository.update_price(investment_id, price).await
    }

    async fn delete_investment(&self, investment_id: &str) -> Result<()> {
        self.repository.delete(investment_id).await?;
        Ok(())
    }

    fn get_investment(&self, investment_id: &str) -> Result<Investment> {
        self.repository.get_by_id(investment_id)
    }

    fn list_investments(&self) -> Result<Vec<Investment>> {
        self.repository.list()
    }

    fn summary(&self) -> Result<InvestmentSummary> {
        let investments = self.repository.list()?;

        let mut total_cost = Decimal::ZERO;
        let mut total_value = Decimal::ZERO;
        let mut positions = Vec::with_capacity(investments.len());

        for investment in investments {
            let cost_basis = investment.cost_basis();
            let market_value = investment.market_value();
            let gain_loss = market_value - cost_basis;
            total_cost += cost_basis;
            total_value += market_value;
            positions.push(PositionView {
                gain_loss,
                gain_loss_pct: percentage(gain_loss, cost_basis),
                cost_basis,
                market_value,
                investment,
            });
        }

        // Biggest positions first.
        positions.sort_by(|a, b| b.market_value.cmp(&a.market_value));

        let gain_loss = total_value - total_cost;
        Ok(InvestmentSummary {
            total_cost,
            total_value,
            gain_loss,
            gain_loss_pct: percentage(gain_loss, total_cost),
            positions,
        })
    }
}
