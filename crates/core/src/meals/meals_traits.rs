//! Meal repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::meals_model::{
    DayNutritionSummary, Meal, MealPlanEntry, MealUpdate, NewMeal, NewMealPlanEntry,
    SchedulePattern, WeeklyCalorieSchedule,
};
use crate::errors::Result;

/// Trait defining the contract for meal persistence.
#[async_trait]
pub trait MealRepositoryTrait: Send + Sync {
    async fn create_meal(&self, new_meal: NewMeal) -> Result<Meal>;

    async fn update_meal(&self, update: MealUpdate) -> Result<Meal>;

    /// Deletes a meal and its plan entries.
    async fn delete_meal(&self, meal_id: &str) -> Result<usize>;

    fn get_meal_by_id(&self, meal_id: &str) -> Result<Meal>;

    fn list_meals(&self) -> Result<Vec<Meal>>;

    async fn create_plan_entry(&self, new_entry: NewMealPlanEntry) -> Result<MealPlanEntry>;

    async fn delete_plan_entry(&self, entry_id: &str) -> Result<usize>;

    /// Plan entries with dates in `[from, to]`.
    fn list_plan_entries(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<MealPlanEntry>>;
}

/// Trait defining the contract for meal service operations.
#[async_trait]
pub trait MealServiceTrait: Send + Sync {
    async fn create_meal(&self, new_meal: NewMeal) -> Result<Meal>;

    async fn update_meal(&self, update: MealUpdate) -> Result<Meal>;

    async fn delete_meal(&self, meal_id: &str) -> Result<()>;

    fn get_meal(&self, meal_id: &str) -> Result<Meal>;

    fn list_meals(&self) -> Result<Vec<Meal>>;

    async fn schedule_meal(&self, new_entry: NewMealPlanEntry) -> Result<MealPlanEntry>;

    async fn unschedule_meal(&self, entry_id: &str) -> Result<()>;

    /// Daily calorie targets for the week starting `week_start` (a Monday).
    fn weekly_schedule(
        &self,
        week_start: NaiveDate,
        weekly_target: i32,
        pattern: SchedulePattern,
    ) -> Result<WeeklyCalorieSchedule>;

    /// Planned nutrition per day for one week, measured against a schedule.
    fn week_nutrition(
        &self,
        week_start: NaiveDate,
        weekly_target: i32,
        pattern: SchedulePattern,
    ) -> Result<Vec<DayNutritionSummary>>;
}
