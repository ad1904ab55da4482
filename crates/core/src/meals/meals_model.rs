//! Meal-planning domain models.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A meal with its nutrition facts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub calories: i32,
    pub protein_g: Option<Decimal>,
    pub carbs_g: Option<Decimal>,
    pub fat_g: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub calories: i32,
    pub protein_g: Option<Decimal>,
    pub carbs_g: Option<Decimal>,
    pub fat_g: Option<Decimal>,
}

impl NewMeal {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Meal name cannot be empty".to_string(),
            )));
        }
        if self.calories <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Calories must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealUpdate {
    pub id: String,
    pub name: String,
    pub calories: i32,
    pub protein_g: Option<Decimal>,
    pub carbs_g: Option<Decimal>,
    pub fat_g: Option<Decimal>,
}

impl MealUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.calories <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Calories must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Which meal of the day a plan entry fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "BREAKFAST",
            MealSlot::Lunch => "LUNCH",
            MealSlot::Dinner => "DINNER",
            MealSlot::Snack => "SNACK",
        }
    }
}

impl std::str::FromStr for MealSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BREAKFAST" => Ok(MealSlot::Breakfast),
            "LUNCH" => Ok(MealSlot::Lunch),
            "DINNER" => Ok(MealSlot::Dinner),
            "SNACK" => Ok(MealSlot::Snack),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown meal slot: {}",
                other
            )))),
        }
    }
}

/// A meal scheduled on a specific day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub id: String,
    pub plan_date: NaiveDate,
    pub meal_id: String,
    pub slot: MealSlot,
    pub created_at: NaiveDateTime,
}

/// Input model for scheduling a meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMealPlanEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub plan_date: NaiveDate,
    pub meal_id: String,
    pub slot: MealSlot,
}

impl NewMealPlanEntry {
    pub fn validate(&self) -> Result<()> {
        if self.meal_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "mealId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Shape of the weekly calorie distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulePattern {
    /// Equal targets every day.
    #[default]
    Even,
    /// Saturday and Sunday run ~20% above the weekday level.
    WeekendHigher,
}

/// Daily calorie targets for one week, Monday first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCalorieSchedule {
    pub week_start: NaiveDate,
    pub weekly_target: i32,
    pub pattern: SchedulePattern,
    pub daily_targets: [i32; 7],
}

/// Validates that a week starts on a Monday.
pub fn validate_week_start(week_start: NaiveDate) -> Result<()> {
    if week_start.weekday() != Weekday::Mon {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Week start {} is not a Monday",
            week_start
        ))));
    }
    Ok(())
}

/// Planned nutrition for one day measured against its target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayNutritionSummary {
    pub date: NaiveDate,
    pub calories: i32,
    pub target: i32,
    /// Planned minus target; positive means over.
    pub variance: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}
