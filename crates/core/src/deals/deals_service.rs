use std::sync::Arc;

use async_trait::async_trait;

use super::deals_model::{
    NewProviderOffer, ProviderOffer, ProviderOfferUpdate, SwitchRecommendation,
};
use super::deals_traits::{DealRepositoryTrait, DealServiceTrait};
use super::recommend::recommend_switches;
use crate::bills::BillRepositoryTrait;
use crate::errors::Result;

/// Service for provider offers and switching recommendations.
pub struct DealService {
    repository: Arc<dyn DealRepositoryTrait>,
    bill_repository: Arc<dyn BillRepositoryTrait>,
}

impl DealService {
    pub fn new(
        repository: Arc<dyn DealRepositoryTrait>,
        bill_repository: Arc<dyn BillRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            bill_repository,
        }
    }
}

#[async_trait]
impl DealServiceTrait for DealService {
    async fn create_offer(&self, new_offer: NewProviderOffer) -> Result<ProviderOffer> {
        new_offer.validate()?;
        self.repository.create(new_offer).await
    }

    async fn update_offer(&self, update: ProviderOfferUpdate) -> Result<ProviderOffer> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn delete_offer(&self, offer_id: &str) -> Result<()> {
        self.repository.delete(offer_id).await?;
        Ok(())
    }

    fn get_offer(&self, offer_id: &str) -> Result<ProviderOffer> {
        self.repository.get_by_id(offer_id)
    }

    fn list_offers(&self) -> Result<Vec<ProviderOffer>> {
        self.repository.list(false)
    }

    fn recommendations(&self) -> Result<Vec<SwitchRecommendation>> {
        let bills = self.bill_repository.list(Some(true))?;
        let offers = self.repository.list(true)?;
        Ok(recommend_switches(&bills, &offers))
    }
}
