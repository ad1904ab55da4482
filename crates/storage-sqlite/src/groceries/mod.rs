mod model;
mod repository;

pub use model::{DealRuleDB, GroceryProductDB, NewDealRuleDB, NewGroceryProductDB};
pub use repository::GroceryRepository;
