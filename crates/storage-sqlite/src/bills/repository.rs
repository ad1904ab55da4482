use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use lifetracker_core::bills::{Bill, BillRepositoryTrait, BillUpdate, NewBill};
use lifetracker_core::Result;

use super::model::{BillDB, NewBillDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::bills;
use crate::schema::bills::dsl::*;

pub struct BillRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BillRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BillRepository { pool, writer }
    }
}

#[async_trait]
impl BillRepositoryTrait for BillRepository {
    async fn create(&self, new_bill: NewBill) -> Result<Bill> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Bill> {
                let new_db = NewBillDB::from_domain(new_bill, Utc::now().naive_utc());
                let result_db = diesel::insert_into(bills::table)
                    .values(&new_db)
                    .returning(BillDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Bill::from(result_db))
            })
            .await
    }

    async fn update(&self, bill_update: BillUpdate) -> Result<Bill> {
        let bill_id = bill_update.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Bill> {
                diesel::update(bills.find(&bill_id))
                    .set((
                        name.eq(&bill_update.name),
                        amount.eq(bill_update.amount.to_string()),
                        frequency.eq(bill_update.frequency.as_str()),
                        due_day.eq(bill_update.due_day as i32),
                        start_date.eq(bill_update.start_date),
                        category.eq(&bill_update.category),
                        account_id.eq(&bill_update.account_id),
                        is_active.eq(bill_update.is_active),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = bills.find(&bill_id).first::<BillDB>(conn).into_core()?;
                Ok(Bill::from(result_db))
            })
            .await
    }

    async fn delete(&self, bill_id: &str) -> Result<usize> {
        let bill_id = bill_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(bills.find(&bill_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, bill_id: &str) -> Result<Bill> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = bills
            .find(bill_id)
            .first::<BillDB>(&mut conn)
            .into_core()?;
        Ok(Bill::from(result_db))
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Bill>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = bills.into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(is_active.eq(active));
        }
        let results = query
            .order(name.asc())
            .load::<BillDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(Bill::from).collect())
    }
}
