mod model;
mod repository;

pub use model::{DebtDB, NewDebtDB};
pub use repository::DebtRepository;
