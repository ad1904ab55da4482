//! Investments - manually priced holdings and portfolio summary.

mod investments_model;
mod investments_service;
mod investments_traits;

pub use investments_model::{
    Investment, InvestmentSummary, InvestmentUpdate, NewInvestment, PositionView,
};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
