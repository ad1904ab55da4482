use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use lifetracker_core::transactions::{
    NewTransaction, Transaction, TransactionQuery, TransactionRepositoryTrait, TransactionUpdate,
};
use lifetracker_core::Result;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::transactions;
use crate::schema::transactions::dsl::*;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let new_db =
                    NewTransactionDB::from_domain(new_transaction, Utc::now().naive_utc());
                let result_db = diesel::insert_into(transactions::table)
                    .values(&new_db)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Transaction::from(result_db))
            })
            .await
    }

    async fn create_many_deduped(
        &self,
        new_transactions: Vec<NewTransaction>,
    ) -> Result<(usize, usize)> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<(usize, usize)> {
                let now = Utc::now().naive_utc();
                let total = new_transactions.len();
                let mut inserted = 0usize;
                for new_transaction in new_transactions {
                    let new_db = NewTransactionDB::from_domain(new_transaction, now);
                    // Rows whose import_id is already present are skipped.
                    inserted += diesel::insert_into(transactions::table)
                        .values(&new_db)
                        .on_conflict(import_id)
                        .do_nothing()
                        .execute(conn)
                        .into_core()?;
                }
                Ok((inserted, total - inserted))
            })
            .await
    }

    async fn update(&self, transaction_update: TransactionUpdate) -> Result<Transaction> {
        let transaction_id = transaction_update.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                diesel::update(transactions.find(&transaction_id))
                    .set((
                        transaction_date.eq(transaction_update.transaction_date),
                        description.eq(&transaction_update.description),
                        merchant.eq(&transaction_update.merchant),
                        amount.eq(transaction_update.amount.to_string()),
                        category.eq(&transaction_update.category),
                        notes.eq(&transaction_update.notes),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = transactions
                    .find(&transaction_id)
                    .first::<TransactionDB>(conn)
                    .into_core()?;
                Ok(Transaction::from(result_db))
            })
            .await
    }

    async fn delete(&self, transaction_id: &str) -> Result<usize> {
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(transactions.find(&transaction_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = transactions
            .find(transaction_id)
            .first::<TransactionDB>(&mut conn)
            .into_core()?;
        Ok(Transaction::from(result_db))
    }

    fn search(&self, query: &TransactionQuery) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let mut stmt = transactions.into_boxed();
        if let Some(ref filter_account) = query.account_id {
            stmt = stmt.filter(account_id.eq(filter_account.clone()));
        }
        if let Some(from) = query.from {
            stmt = stmt.filter(transaction_date.ge(from));
        }
        if let Some(to) = query.to {
            stmt = stmt.filter(transaction_date.le(to));
        }
        if let Some(ref filter_category) = query.category {
            stmt = stmt.filter(category.eq(filter_category.clone()));
        }
        let results = stmt
            .order(transaction_date.desc())
            .load::<TransactionDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(Transaction::from).collect())
    }
}
