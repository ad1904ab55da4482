use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::calorie_schedule::build_weekly_schedule;
use super::meals_model::{
    DayNutritionSummary, Meal, MealPlanEntry, MealUpdate, NewMeal, NewMealPlanEntry,
    SchedulePattern, WeeklyCalorieSchedule,
};
use super::meals_traits::{MealRepositoryTrait, MealServiceTrait};
use crate::errors::Result;

/// Service for meals, plan entries, and calorie scheduling.
pub struct MealService {
    repository: Arc<dyn MealRepositoryTrait>,
}

impl MealService {
    pub fn new(repository: Arc<dyn MealRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MealServiceTrait for MealService {
    async fn create_meal(&self, new_meal: NewMeal) -> Result<Meal> {
        new_meal.validate()?;
        self.repository.create_meal(new_meal).await
    }

    async fn update_meal(&self, update: MealUpdate) -> Result<Meal> {
        update.validate()?;
        self.repository.update_meal(update).await
    }

    async fn delete_meal(&self, meal_id: &str) -> Result<()> {
        self.repository.delete_meal(meal_id).await?;
        Ok(())
    }

    fn get_meal(&self, meal_id: &str) -> Result<Meal> {
        self.repository.get_meal_by_id(meal_id)
    }

    fn list_meals(&self) -> Result<Vec<Meal>> {
        self.repository.list_meals()
    }

    async fn schedule_meal(&self, new_entry: NewMealPlanEntry) -> Result<MealPlanEntry> {
        new_entry.validate()?;
        self.repository.get_meal_by_id(&new_entry.meal_id)?;
        self.repository.create_plan_entry(new_entry).await
    }

    async fn unschedule_meal(&self, entry_id: &str) -> Result<()> {
        self.repository.delete_plan_entry(entry_id).await?;
        Ok(())
    }

    fn weekly_schedule(
        &self,
        week_start: NaiveDate,
        weekly_target: i32,
        pattern: SchedulePattern,
    ) -> Result<WeeklyCalorieSchedule> {
        build_weekly_schedule(week_start, weekly_target, pattern)
    }

    fn week_nutrition(
        &self,
        week_start: NaiveDate,
        weekly_target: i32,
        pattern: SchedulePattern,
    ) -> Result<Vec<DayNutritionSummary>> {
        let schedule = build_weekly_schedule(week_start, weekly_target, pattern)?;
        let week_end = week_start + Duration::days(6);
        let entries = self.repository.list_plan_entries(week_start, week_end)?;

        let meals: HashMap<String, Meal> = self
            .repository
            .list_meals()?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

        let mut summaries = Vec::with_capacity(7);
        for (offset, target) in schedule.daily_targets.iter().enumerate() {
            let date = week_start + Duration::days(offset as i64);
            let mut calories = 0i32;
            let mut protein = Decimal::ZERO;
            let mut carbs = Decimal::ZERO;
            let mut fat = Decimal::ZERO;
            for entry in entries.iter().filter(|e| e.plan_date == date) {
                if let Some(meal) = meals.get(&entry.meal_id) {
                    calories += meal.calories;
                    protein += meal.protein_g.unwrap_or(Decimal::ZERO);
                    carbs += meal.carbs_g.unwrap_or(Decimal::ZERO);
                    fat += meal.fat_g.unwrap_or(Decimal::ZERO);
                }
            }
            summaries.push(DayNutritionSummary {
                date,
                calories,
                target: *target,
                variance: calories - target,
                protein_g: protein,
                carbs_g: carbs,
                fat_g: fat,
            });
        }
        Ok(summaries)
    }
}
