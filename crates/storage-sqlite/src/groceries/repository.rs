use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use lifetracker_core::groceries::{
    DealRule, GroceryProduct, GroceryProductUpdate, GroceryRepositoryTrait, NewDealRule,
    NewGroceryProduct,
};
use lifetracker_core::Result;

use super::model::{DealRuleDB, GroceryProductDB, NewDealRuleDB, NewGroceryProductDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{deal_rules, grocery_products};

pub struct GroceryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GroceryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GroceryRepository { pool, writer }
    }
}

#[async_trait]
impl GroceryRepositoryTrait for GroceryRepository {
    async fn create_product(&self, new_product: NewGroceryProduct) -> Result<GroceryProduct> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<GroceryProduct> {
                let new_db = NewGroceryProductDB::from_domain(new_product, Utc::now().naive_utc());
                let result_db = diesel::insert_into(grocery_products::table)
                    .values(&new_db)
                    .returning(GroceryProductDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(GroceryProduct::from(result_db))
            })
            .await
    }

    async fn update_product(&self, update: GroceryProductUpdate) -> Result<GroceryProduct> {
        let product_id = update.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<GroceryProduct> {
                diesel::update(grocery_products::table.find(&product_id))
                    .set((
                        grocery_products::name.eq(&update.name),
                        grocery_products::store.eq(&update.store),
                        grocery_products::pack_size.eq(update.pack_size.to_string()),
                        grocery_products::unit.eq(update.unit.as_str()),
                        grocery_products::pack_price.eq(update.pack_price.to_string()),
                        grocery_products::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = grocery_products::table
                    .find(&product_id)
                    .first::<GroceryProductDB>(conn)
                    .into_core()?;
                Ok(GroceryProduct::from(result_db))
            })
            .await
    }

    async fn delete_product(&self, product_id: &str) -> Result<usize> {
        let product_id = product_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Deal rules cascade via the FK.
                diesel::delete(grocery_products::table.find(&product_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_product_by_id(&self, product_id: &str) -> Result<GroceryProduct> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = grocery_products::table
            .find(product_id)
            .first::<GroceryProductDB>(&mut conn)
            .into_core()?;
        Ok(GroceryProduct::from(result_db))
    }

    fn list_products(&self) -> Result<Vec<GroceryProduct>> {
        let mut conn = get_connection(&self.pool)?;
        let results = grocery_products::table
            .order(grocery_products::name.asc())
            .load::<GroceryProductDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(GroceryProduct::from).collect())
    }

    async fn create_deal_rule(&self, new_rule: NewDealRule) -> Result<DealRule> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<DealRule> {
                let new_db = NewDealRuleDB::from_domain(new_rule, Utc::now().naive_utc());
                let result_db = diesel::insert_into(deal_rules::table)
                    .values(&new_db)
                    .returning(DealRuleDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(DealRule::from(result_db))
            })
            .await
    }

    async fn delete_deal_rule(&self, rule_id: &str) -> Result<usize> {
        let rule_id = rule_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(deal_rules::table.find(&rule_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn list_deal_rules(&self, active_only: bool) -> Result<Vec<DealRule>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = deal_rules::table.into_boxed();
        if active_only {
            query = query.filter(deal_rules::is_active.eq(true));
        }
        let results = query.load::<DealRuleDB>(&mut conn).into_core()?;
        Ok(results.into_iter().map(DealRule::from).collect())
    }
}
