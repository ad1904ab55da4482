use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use lifetracker_core::toiletries::{
    NewToiletryItem, ToiletryItem, ToiletryItemUpdate, ToiletryRepositoryTrait,
};
use lifetracker_core::Result;

use super::model::{NewToiletryItemDB, ToiletryItemDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::toiletries;
use crate::schema::toiletries::dsl::*;

pub struct ToiletryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ToiletryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ToiletryRepository { pool, writer }
    }
}

#[async_trait]
impl ToiletryRepositoryTrait for ToiletryRepository {
    async fn create(&self, new_item: NewToiletryItem) -> Result<ToiletryItem> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ToiletryItem> {
                let new_db = NewToiletryItemDB::from_domain(new_item, Utc::now().naive_utc());
                let result_db = diesel::insert_into(toiletries::table)
                    .values(&new_db)
                    .returning(ToiletryItemDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(ToiletryItem::from(result_db))
            })
            .await
    }

    async fn update(&self, update: ToiletryItemUpdate) -> Result<ToiletryItem> {
        let item_id = update.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ToiletryItem> {
                diesel::update(toiletries.find(&item_id))
                    .set((
                        name.eq(&update.name),
                        quantity_on_hand.eq(update.quantity_on_hand.to_string()),
                        unit.eq(&update.unit),
                        usage_per_week.eq(update.usage_per_week.to_string()),
                        restock_threshold.eq(update.restock_threshold.to_string()),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = toiletries
                    .find(&item_id)
                    .first::<ToiletryItemDB>(conn)
                    .into_core()?;
                Ok(ToiletryItem::from(result_db))
            })
            .await
    }

    async fn set_quantity(&self, item_id: &str, quantity: Decimal) -> Result<ToiletryItem> {
        let item_id = item_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ToiletryItem> {
                diesel::update(toiletries.find(&item_id))
                    .set((
                        quantity_on_hand.eq(quantity.to_string()),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = toiletries
                    .find(&item_id)
                    .first::<ToiletryItemDB>(conn)
                    .into_core()?;
                Ok(ToiletryItem::from(result_db))
            })
            .await
    }

    async fn delete(&self, item_id: &str) -> Result<usize> {
        let item_id = item_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(toiletries.find(&item_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, item_id: &str) -> Result<ToiletryItem> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = toiletries
            .find(item_id)
            .first::<ToiletryItemDB>(&mut conn)
            .into_core()?;
        Ok(ToiletryItem::from(result_db))
    }

    fn list(&self) -> Result<Vec<ToiletryItem>> {
        let mut conn = get_connection(&self.pool)?;
        let results = toiletries
            .order(name.asc())
            .load::<ToiletryItemDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(ToiletryItem::from).collect())
    }
}
