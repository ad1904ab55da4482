//! Transaction repository and service traits.

use async_trait::async_trait;

use super::transactions_model::{
    MonthlySummary, NewTransaction, Transaction, TransactionQuery, TransactionUpdate,
};
use super::ImportSummary;
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Inserts a batch of imported transactions, skipping rows whose
    /// `import_id` already exists. Returns (inserted, duplicates).
    async fn create_many_deduped(
        &self,
        new_transactions: Vec<NewTransaction>,
    ) -> Result<(usize, usize)>;

    async fn update(&self, transaction_update: TransactionUpdate) -> Result<Transaction>;

    async fn delete(&self, transaction_id: &str) -> Result<usize>;

    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;

    /// Searches transactions; results are ordered by date descending.
    fn search(&self, query: &TransactionQuery) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    async fn update_transaction(
        &self,
        transaction_update: TransactionUpdate,
    ) -> Result<Transaction>;

    async fn delete_transaction(&self, transaction_id: &str) -> Result<()>;

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    fn search_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>>;

    /// Imports a bank-export CSV into the given account.
    async fn import_csv(&self, account_id: &str, content: &str) -> Result<ImportSummary>;

    /// Inflow/outflow and per-category totals for one calendar month,
    /// optionally restricted to one account.
    fn monthly_summary(
        &self,
        year: i32,
        month: u32,
        account_id: Option<&str>,
    ) -> Result<MonthlySummary>;
}
