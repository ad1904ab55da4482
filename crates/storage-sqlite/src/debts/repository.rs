use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use lifetracker_core::debts::{Debt, DebtRepositoryTrait, DebtUpdate, NewDebt};
use lifetracker_core::Result;

use super::model::{DebtDB, NewDebtDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::debts;
use crate::schema::debts::dsl::*;

pub struct DebtRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DebtRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DebtRepository { pool, writer }
    }
}

#[async_trait]
impl DebtRepositoryTrait for DebtRepository {
    async fn create(&self, new_debt: NewDebt) -> Result<Debt> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Debt> {
                let new_db = NewDebtDB::from_domain(new_debt, Utc::now().naive_utc());
                let result_db = diesel::insert_into(debts::table)
                    .values(&new_db)
                    .returning(DebtDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Debt::from(result_db))
            })
            .await
    }

    async fn update(&self, debt_update: DebtUpdate) -> Result<Debt> {
        let debt_id = debt_update.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Debt> {
                diesel::update(debts.find(&debt_id))
                    .set((
                        name.eq(&debt_update.name),
                        balance.eq(debt_update.balance.to_string()),
                        apr.eq(debt_update.apr.to_string()),
                        min_payment.eq(debt_update.min_payment.to_string()),
                        is_active.eq(debt_update.is_active),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = debts.find(&debt_id).first::<DebtDB>(conn).into_core()?;
                Ok(Debt::from(result_db))
            })
            .await
    }

    async fn delete(&self, debt_id: &str) -> Result<usize> {
        let debt_id = debt_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(debts.find(&debt_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, debt_id: &str) -> Result<Debt> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = debts
            .find(debt_id)
            .first::<DebtDB>(&mut conn)
            .into_core()?;
        Ok(Debt::from(result_db))
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Debt>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = debts.into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(is_active.eq(active));
        }
        let results = query
            .order(name.asc())
            .load::<DebtDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(Debt::from).collect())
    }
}
