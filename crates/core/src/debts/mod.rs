//! Debts - models, payoff planner, and services.

mod debts_model;
mod debts_service;
mod debts_traits;
mod payoff;

pub use debts_model::{
    Debt, DebtError, DebtPayment, DebtSummary, DebtUpdate, NewDebt, PayoffMonth, PayoffPlan,
    PayoffStrategy,
};
pub use debts_service::DebtService;
pub use debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
pub use payoff::generate_payoff_plan;
