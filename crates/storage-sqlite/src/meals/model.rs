//! Database models for meals and plan entries.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::meals::{Meal, MealPlanEntry, MealSlot, NewMeal, NewMealPlanEntry};

use crate::utils::parse_decimal_column;

/// Database model for meals
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::meals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MealDB {
    pub id: String,
    pub name: String,
    pub calories: i32,
    pub protein_g: Option<String>,
    pub carbs_g: Option<String>,
    pub fat_g: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new meal
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::meals)]
pub struct NewMealDB {
    pub id: String,
    pub name: String,
    pub calories: i32,
    pub protein_g: Option<String>,
    pub carbs_g: Option<String>,
    pub fat_g: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for meal plan entries
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(MealDB, foreign_key = meal_id))]
#[diesel(table_name = crate::schema::meal_plan_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntryDB {
    pub id: String,
    pub plan_date: NaiveDate,
    pub meal_id: String,
    pub slot: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a meal plan entry
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::meal_plan_entries)]
pub struct NewMealPlanEntryDB {
    pub id: String,
    pub plan_date: NaiveDate,
    pub meal_id: String,
    pub slot: String,
    pub created_at: NaiveDateTime,
}

impl From<MealDB> for Meal {
    fn from(db: MealDB) -> Self {
        Meal {
            protein_g: db
                .protein_g
                .as_deref()
                .map(|v| parse_decimal_column(v, "meals.protein_g")),
            carbs_g: db
                .carbs_g
                .as_deref()
                .map(|v| parse_decimal_column(v, "meals.carbs_g")),
            fat_g: db
                .fat_g
                .as_deref()
                .map(|v| parse_decimal_column(v, "meals.fat_g")),
            id: db.id,
            name: db.name,
            calories: db.calories,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<MealPlanEntryDB> for MealPlanEntry {
    fn from(db: MealPlanEntryDB) -> Self {
        MealPlanEntry {
            slot: db.slot.parse().unwrap_or(MealSlot::Dinner),
            id: db.id,
            plan_date: db.plan_date,
            meal_id: db.meal_id,
            created_at: db.created_at,
        }
    }
}

impl NewMealDB {
    pub fn from_domain(domain: NewMeal, now: NaiveDateTime) -> Self {
        NewMealDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            calories: domain.calories,
            protein_g: domain.protein_g.map(|v| v.to_string()),
            carbs_g: domain.carbs_g.map(|v| v.to_string()),
            fat_g: domain.fat_g.map(|v| v.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

impl NewMealPlanEntryDB {
    pub fn from_domain(domain: NewMealPlanEntry, now: NaiveDateTime) -> Self {
        NewMealPlanEntryDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            plan_date: domain.plan_date,
            meal_id: domain.meal_id,
            slot: domain.slot.as_str().to_string(),
            created_at: now,
        }
    }
}
