//! Bill repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::bills_model::{Bill, BillOccurrence, BillUpdate, NewBill};
use crate::errors::Result;

/// Trait defining the contract for Bill repository operations.
#[async_trait]
pub trait BillRepositoryTrait: Send + Sync {
    async fn create(&self, new_bill: NewBill) -> Result<Bill>;

    async fn update(&self, bill_update: BillUpdate) -> Result<Bill>;

    async fn delete(&self, bill_id: &str) -> Result<usize>;

    fn get_by_id(&self, bill_id: &str) -> Result<Bill>;

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Bill>>;
}

/// Trait defining the contract for Bill service operations.
#[async_trait]
pub trait BillServiceTrait: Send + Sync {
    async fn create_bill(&self, new_bill: NewBill) -> Result<Bill>;

    async fn update_bill(&self, bill_update: BillUpdate) -> Result<Bill>;

    async fn delete_bill(&self, bill_id: &str) -> Result<()>;

    fn get_bill(&self, bill_id: &str) -> Result<Bill>;

    fn list_bills(&self, is_active_filter: Option<bool>) -> Result<Vec<Bill>>;

    /// Expands active bills over a window and matches stored transactions,
    /// producing a dated, statused occurrence list.
    fn upcoming_bills(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Vec<BillOccurrence>>;

    /// Projected total monthly cost of all active bills.
    fn projected_monthly_total(&self) -> Result<Decimal>;
}
