mod model;
mod repository;

pub use model::{MealDB, MealPlanEntryDB, NewMealDB, NewMealPlanEntryDB};
pub use repository::MealRepository;
