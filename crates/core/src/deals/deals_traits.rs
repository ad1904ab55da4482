//! Deal repository and service traits.

use async_trait::async_trait;

use super::deals_model::{NewProviderOffer, ProviderOffer, ProviderOfferUpdate, SwitchRecommendation};
use crate::errors::Result;

/// Trait defining the contract for provider-offer persistence.
#[async_trait]
pub trait DealRepositoryTrait: Send + Sync {
    async fn create(&self, new_offer: NewProviderOffer) -> Result<ProviderOffer>;

    async fn update(&self, update: ProviderOfferUpdate) -> Result<ProviderOffer>;

    async fn delete(&self, offer_id: &str) -> Result<usize>;

    fn get_by_id(&self, offer_id: &str) -> Result<ProviderOffer>;

    fn list(&self, active_only: bool) -> Result<Vec<ProviderOffer>>;
}

/// Trait defining the contract for deal service operations.
#[async_trait]
pub trait DealServiceTrait: Send + Sync {
    async fn create_offer(&self, new_offer: NewProviderOffer) -> Result<ProviderOffer>;

    async fn update_offer(&self, update: ProviderOfferUpdate) -> Result<ProviderOffer>;

    async fn delete_offer(&self, offer_id: &str) -> Result<()>;

    fn get_offer(&self, offer_id: &str) -> Result<ProviderOffer>;

    fn list_offers(&self) -> Result<Vec<ProviderOffer>>;

    /// Money-saving switches across active bills and offers.
    fn recommendations(&self) -> Result<Vec<SwitchRecommendation>>;
}
