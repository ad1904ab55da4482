use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use lifetracker_core::settings::SettingsRepositoryTrait;
use lifetracker_core::Result;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::app_settings;
use crate::schema::app_settings::dsl::*;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let result = app_settings
            .find(key)
            .first::<AppSettingDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(result.map(|row| row.setting_value))
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        let row = AppSettingDB {
            setting_key: key.to_string(),
            setting_value: value.to_string(),
        };
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::insert_into(app_settings::table)
                    .values(&row)
                    .on_conflict(setting_key)
                    .do_update()
                    .set(setting_value.eq(&row.setting_value))
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await
    }
}
