//! Meal planning - meals, plan entries, and calorie-target scheduling.

mod calorie_schedule;
mod meals_model;
mod meals_service;
mod meals_traits;

pub use calorie_schedule::build_weekly_schedule;
pub use meals_model::{
    DayNutritionSummary, Meal, MealPlanEntry, MealSlot, MealUpdate, NewMeal, NewMealPlanEntry,
    SchedulePattern, WeeklyCalorieSchedule,
};
pub use meals_service::MealService;
pub use meals_traits::{MealRepositoryTrait, MealServiceTrait};
