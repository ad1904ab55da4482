//! Recurring bills - models, occurrence expansion, and transaction matching.

mod bills_model;
mod bills_service;
mod bills_traits;
mod occurrence;

pub use bills_model::{
    Bill, BillError, BillFrequency, BillOccurrence, BillUpdate, NewBill, OccurrenceStatus,
};
pub use bills_service::BillService;
pub use bills_traits::{BillRepositoryTrait, BillServiceTrait};
pub use occurrence::{expand_occurrences, match_transactions, monthly_equivalent};
