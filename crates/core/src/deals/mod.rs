//! Provider offers and bill-switching recommendations.

mod deals_model;
mod deals_service;
mod deals_traits;
mod recommend;

pub use deals_model::{NewProviderOffer, ProviderOffer, ProviderOfferUpdate, SwitchRecommendation};
pub use deals_service::DealService;
pub use deals_traits::{DealRepositoryTrait, DealServiceTrait};
pub use recommend::{first_year_cost, recommend_switches};
