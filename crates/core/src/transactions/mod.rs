//! Bank transactions - domain models, CSV import, and services.

mod transactions_import;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transactions_import::{parse_bank_csv, ImportError, ImportRow, ImportSummary, RowError};
pub use transactions_model::{
    CategoryTotal, MonthlySummary, NewTransaction, Transaction, TransactionQuery,
    TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
