use log::{debug, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::transactions_import::parse_bank_csv;
use super::transactions_model::{
    CategoryTotal, MonthlySummary, NewTransaction, Transaction, TransactionQuery,
    TransactionUpdate,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use super::ImportSummary;
use crate::accounts::AccountRepositoryTrait;
use crate::errors::Result;
use crate::utils::time_utils::{date_clamped, last_day_of_month};

/// Category label applied to summary rows with no category set.
const UNCATEGORIZED: &str = "Uncategorized";

/// Service for managing bank transactions.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            account_repository,
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        // Reject transactions against unknown accounts up front.
        self.account_repository
            .get_by_id(&new_transaction.account_id)?;
        self.repository.create(new_transaction).await
    }

    async fn update_transaction(
        &self,
        transaction_update: TransactionUpdate,
    ) -> Result<Transaction> {
        transaction_update.validate()?;
        self.repository.update(transaction_update).await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        self.repository.delete(transaction_id).await?;
        Ok(())
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.repository.get_by_id(transaction_id)
    }

    fn search_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>> {
        self.repository.search(query)
    }

    async fn import_csv(&self, account_id: &str, content: &str) -> Result<ImportSummary> {
        self.account_repository.get_by_id(account_id)?;
        let (rows, errors) = parse_bank_csv(account_id, content)?;
        debug!(
            "Parsed {} rows ({} errors) from statement for account {}",
            rows.len(),
            errors.len(),
            account_id
        );
        if !errors.is_empty() {
            warn!("{} statement rows failed to parse", errors.len());
        }

        let new_transactions: Vec<NewTransaction> = rows
            .into_iter()
            .map(|row| row.into_new_transaction(account_id))
            .collect();
        let (imported, duplicates) = self.repository.create_many_deduped(new_transactions).await?;

        Ok(ImportSummary {
            imported,
            duplicates,
            errors,
        })
    }

    fn monthly_summary(
        &self,
        year: i32,
        month: u32,
        account_id: Option<&str>,
    ) -> Result<MonthlySummary> {
        if !(1..=12).contains(&month) {
            return Err(crate::Error::Validation(
                crate::errors::ValidationError::InvalidInput(format!(
                    "Month must be 1-12, got {}",
                    month
                )),
            ));
        }
        let from = date_clamped(year, month, 1);
        let to = date_clamped(year, month, last_day_of_month(year, month));
        let query = TransactionQuery {
            account_id: account_id.map(str::to_string),
            from,
            to,
            category: None,
        };
        let transactions = self.repository.search(&query)?;

        let mut total_in = Decimal::ZERO;
        let mut total_out = Decimal::ZERO;
        let mut by_category: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();

        for tx in &transactions {
            if tx.amount >= Decimal::ZERO {
                total_in += tx.amount;
            } else {
                total_out += tx.amount;
                let key = tx
                    .category
                    .clone()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string());
                let entry = by_category.entry(key).or_insert((Decimal::ZERO, 0));
                entry.0 += tx.amount;
                entry.1 += 1;
            }
        }

        let mut by_category: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (total, transaction_count))| CategoryTotal {
                category,
                total,
                transaction_count,
            })
            .collect();
        // Largest spend first; totals are negative so sort ascending.
        by_category.sort_by(|a, b| a.total.cmp(&b.total));

        Ok(MonthlySummary {
            year,
            month,
            total_in,
            total_out,
            net: total_in + total_out,
            by_category,
        })
    }
}
