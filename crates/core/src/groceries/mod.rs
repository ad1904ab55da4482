//! Groceries - products, deal rules, shopping lists, and basket pricing.

mod basket;
mod groceries_model;
mod groceries_service;
mod groceries_traits;

pub use basket::{build_shopping_line, convert_quantity, price_basket};
pub use groceries_model::{
    BasketPricing, DealRule, DealRuleType, GroceryProduct, GroceryProductUpdate, NewDealRule,
    NewGroceryProduct, QuantityUnit, ShoppingLine, ShoppingRequest,
};
pub use groceries_service::GroceryService;
pub use groceries_traits::{GroceryRepositoryTrait, GroceryServiceTrait};
