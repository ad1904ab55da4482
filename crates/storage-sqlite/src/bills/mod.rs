mod model;
mod repository;

pub use model::{BillDB, NewBillDB};
pub use repository::BillRepository;
