use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use lifetracker_core::deals::{
    DealRepositoryTrait, NewProviderOffer, ProviderOffer, ProviderOfferUpdate,
};
use lifetracker_core::Result;

use super::model::{NewProviderOfferDB, ProviderOfferDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::provider_offers;
use crate::schema::provider_offers::dsl::*;

pub struct DealRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DealRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DealRepository { pool, writer }
    }
}

#[async_trait]
impl DealRepositoryTrait for DealRepository {
    async fn create(&self, new_offer: NewProviderOffer) -> Result<ProviderOffer> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ProviderOffer> {
                let new_db = NewProviderOfferDB::from_domain(new_offer, Utc::now().naive_utc());
                let result_db = diesel::insert_into(provider_offers::table)
                    .values(&new_db)
                    .returning(ProviderOfferDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(ProviderOffer::from(result_db))
            })
            .await
    }

    async fn update(&self, update: ProviderOfferUpdate) -> Result<ProviderOffer> {
        let offer_id = update.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ProviderOffer> {
                diesel::update(provider_offers.find(&offer_id))
                    .set((
                        category.eq(&update.category),
                        provider.eq(&update.provider),
                        monthly_price.eq(update.monthly_price.to_string()),
                        term_months.eq(update.term_months),
                        intro_months.eq(update.intro_months),
                        intro_price.eq(update.intro_price.map(|p| p.to_string())),
                        is_active.eq(update.is_active),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = provider_offers
                    .find(&offer_id)
                    .first::<ProviderOfferDB>(conn)
                    .into_core()?;
                Ok(ProviderOffer::from(result_db))
            })
            .await
    }

    async fn delete(&self, offer_id: &str) -> Result<usize> {
        let offer_id = offer_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(provider_offers.find(&offer_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, offer_id: &str) -> Result<ProviderOffer> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = provider_offers
            .find(offer_id)
            .first::<ProviderOfferDB>(&mut conn)
            .into_core()?;
        Ok(ProviderOffer::from(result_db))
    }

    fn list(&self, active_only: bool) -> Result<Vec<ProviderOffer>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = provider_offers.into_boxed();
        if active_only {
            query = query.filter(is_active.eq(true));
        }
        let results = query
            .order((category.asc(), provider.asc()))
            .load::<ProviderOfferDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(ProviderOffer::from).collect())
    }
}
