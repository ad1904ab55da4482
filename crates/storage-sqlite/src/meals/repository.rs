use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;

use lifetracker_core::meals::{
    Meal, MealPlanEntry, MealRepositoryTrait, MealUpdate, NewMeal, NewMealPlanEntry,
};
use lifetracker_core::Result;

use super::model::{MealDB, MealPlanEntryDB, NewMealDB, NewMealPlanEntryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{meal_plan_entries, meals};

pub struct MealRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MealRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MealRepository { pool, writer }
    }
}

#[async_trait]
impl MealRepositoryTrait for MealRepository {
    async fn create_meal(&self, new_meal: NewMeal) -> Result<Meal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Meal> {
                let new_db = NewMealDB::from_domain(new_meal, Utc::now().naive_utc());
                let result_db = diesel::insert_into(meals::table)
                    .values(&new_db)
                    .returning(MealDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Meal::from(result_db))
            })
            .await
    }

    async fn update_meal(&self, update: MealUpdate) -> Result<Meal> {
        let meal_id = update.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Meal> {
                diesel::update(meals::table.find(&meal_id))
                    .set((
                        meals::name.eq(&update.name),
                        meals::calories.eq(update.calories),
                        meals::protein_g.eq(update.protein_g.map(|v| v.to_string())),
                        meals::carbs_g.eq(update.carbs_g.map(|v| v.to_string())),
                        meals::fat_g.eq(update.fat_g.map(|v| v.to_string())),
                        meals::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = meals::table
                    .find(&meal_id)
                    .first::<MealDB>(conn)
                    .into_core()?;
                Ok(Meal::from(result_db))
            })
            .await
    }

    async fn delete_meal(&self, meal_id: &str) -> Result<usize> {
        let meal_id = meal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Plan entries cascade via the FK.
                diesel::delete(meals::table.find(&meal_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_meal_by_id(&self, meal_id: &str) -> Result<Meal> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = meals::table
            .find(meal_id)
            .first::<MealDB>(&mut conn)
            .into_core()?;
        Ok(Meal::from(result_db))
    }

    fn list_meals(&self) -> Result<Vec<Meal>> {
        let mut conn = get_connection(&self.pool)?;
        let results = meals::table
            .order(meals::name.asc())
            .load::<MealDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(Meal::from).collect())
    }

    async fn create_plan_entry(&self, new_entry: NewMealPlanEntry) -> Result<MealPlanEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<MealPlanEntry> {
                let new_db = NewMealPlanEntryDB::from_domain(new_entry, Utc::now().naive_utc());
                let result_db = diesel::insert_into(meal_plan_entries::table)
                    .values(&new_db)
                    .returning(MealPlanEntryDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(MealPlanEntry::from(result_db))
            })
            .await
    }

    async fn delete_plan_entry(&self, entry_id: &str) -> Result<usize> {
        let entry_id = entry_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(meal_plan_entries::table.find(&entry_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn list_plan_entries(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<MealPlanEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let results = meal_plan_entries::table
            .filter(meal_plan_entries::plan_date.ge(from))
            .filter(meal_plan_entries::plan_date.le(to))
            .order(meal_plan_entries::plan_date.asc())
            .load::<MealPlanEntryDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(MealPlanEntry::from).collect())
    }
}
