mod model;
mod repository;

pub use model::{NewToiletryItemDB, ToiletryItemDB};
pub use repository::ToiletryRepository;
