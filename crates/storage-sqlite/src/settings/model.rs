//! Database model for the app_settings key-value table.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for one settings row
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::app_settings)]
#[diesel(primary_key(setting_key))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AppSettingDB {
    pub setting_key: String,
    pub setting_value: String,
}
