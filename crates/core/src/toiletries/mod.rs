//! Toiletry inventory - stock tracking and run-out projection.

mod toiletries_model;
mod toiletries_service;
mod toiletries_traits;

pub use toiletries_model::{
    projection, NewToiletryItem, RestockSuggestion, ToiletryItem, ToiletryItemUpdate,
};
pub use toiletries_service::ToiletryService;
pub use toiletries_traits::{ToiletryRepositoryTrait, ToiletryServiceTrait};
