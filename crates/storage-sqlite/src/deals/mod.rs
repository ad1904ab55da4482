mod model;
mod repository;

pub use model::{NewProviderOfferDB, ProviderOfferDB};
pub use repository::DealRepository;
