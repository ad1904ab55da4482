use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use lifetracker_core::investments::{
    Investment, InvestmentRepositoryTrait, InvestmentUpdate, NewInvestment,
};
use lifetracker_core::Result;

use super::model::{InvestmentDB, NewInvestmentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::investments;
use crate::schema::investments::dsl::*;

pub struct InvestmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        InvestmentRepository { pool, writer }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    async fn create(&self, new_investment: NewInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                let new_db = NewInvestmentDB::from_domain(new_investment, Utc::now().naive_utc());
                let result_db = diesel::insert_into(investments::table)
                    .values(&new_db)
                    .returning(InvestmentDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    async fn update(&self, update: InvestmentUpdate) -> Result<Investment> {
        let investment_id = update.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                diesel::update(investments.find(&investment_id))
                    .set((
                        account_id.eq(&update.account_id),
                        symbol.eq(&update.symbol),
                        name.eq(&update.name),
                        units.eq(update.units.to_string()),
                        unit_cost.eq(update.unit_cost.to_string()),
                        current_price.eq(update.current_price.to_string()),
                        currency.eq(&update.currency),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = investments
                    .find(&investment_id)
                    .first::<InvestmentDB>(conn)
                    .into_core()?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    async fn update_price(&self, investment_id: &str, price: Decimal) -> Result<Investment> {
        let investment_id = investment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                diesel::update(investments.find(&investment_id))
                    .set((
                        current_price.eq(price.to_string()),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = investments
                    .find(&investment_id)
                    .first::<InvestmentDB>(conn)
                    .into_core()?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    async fn delete(&self, investment_id: &str) -> Result<usize> {
        let investment_id = investment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(investments.find(&investment_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = investments
            .find(investment_id)
            .first::<InvestmentDB>(&mut conn)
            .into_core()?;
        Ok(Investment::from(result_db))
    }

    fn list(&self) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let results = investments
            .order(symbol.asc())
            .load::<InvestmentDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(Investment::from).collect())
    }
}
