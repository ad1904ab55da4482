use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::bills_model::{Bill, BillOccurrence, BillUpdate, NewBill};
use super::bills_traits::{BillRepositoryTrait, BillServiceTrait};
use super::occurrence::{expand_occurrences, match_transactions, monthly_equivalent};
use crate::constants::BILL_MATCH_DATE_TOLERANCE_DAYS;
use crate::errors::Result;
use crate::transactions::{TransactionQuery, TransactionRepositoryTrait};

/// Service for managing recurring bills.
pub struct BillService {
    repository: Arc<dyn BillRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl BillService {
    pub fn new(
        repository: Arc<dyn BillRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            transaction_repository,
        }
    }
}

#[async_trait]
impl BillServiceTrait for BillService {
    async fn create_bill(&self, new_bill: NewBill) -> Result<Bill> {
        new_bill.validate()?;
        debug!("Creating bill '{}'", new_bill.name);
        self.repository.create(new_bill).await
    }

    async fn update_bill(&self, bill_update: BillUpdate) -> Result<Bill> {
        bill_update.validate()?;
        self.repository.update(bill_update).await
    }

    async fn delete_bill(&self, bill_id: &str) -> Result<()> {
        self.repository.delete(bill_id).await?;
        Ok(())
    }

    fn get_bill(&self, bill_id: &str) -> Result<Bill> {
        self.repository.get_by_id(bill_id)
    }

    fn list_bills(&self, is_active_filter: Option<bool>) -> Result<Vec<Bill>> {
        self.repository.list(is_active_filter)
    }

    fn upcoming_bills(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Vec<BillOccurrence>> {
        let bills = self.repository.list(Some(true))?;

        let mut occurrences: Vec<BillOccurrence> = Vec::new();
        for bill in &bills {
            occurrences.extend(expand_occurrences(bill, window_start, window_end));
        }

        // Transactions just outside the window can still settle an occurrence
        // near its edge, so the search range is widened by the tolerance.
        let slack = Duration::days(BILL_MATCH_DATE_TOLERANCE_DAYS);
        let query = TransactionQuery {
            account_id: None,
            from: Some(window_start - slack),
            to: Some(window_end + slack),
            category: None,
        };
        let transactions = self.transaction_repository.search(&query)?;

        Ok(match_transactions(occurrences, &transactions, today))
    }

    fn projected_monthly_total(&self) -> Result<Decimal> {
        let bills = self.repository.list(Some(true))?;
        Ok(bills
            .iter()
            .fold(Decimal::ZERO, |acc, bill| {
                acc + monthly_equivalent(bill.amount, bill.frequency)
            })
            .round_dp(2))
    }
}
