//! Database models for toiletry items.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::toiletries::{NewToiletryItem, ToiletryItem};

use crate::utils::parse_decimal_column;

/// Database model for toiletry items
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
#[diesel(table_name = crate::schema::toiletries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ToiletryItemDB {
    pub id: String,
    pub name: String,
    pub quantity_on_hand: String,
    pub unit: String,
    pub usage_per_week: String,
    pub restock_threshold: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new toiletry item
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::toiletries)]
pub struct NewToiletryItemDB {
    pub id: String,
    pub name: String,
    pub quantity_on_hand: String,
    pub unit: String,
    pub usage_per_week: String,
    pub restock_threshold: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ToiletryItemDB> for ToiletryItem {
    fn from(db: ToiletryItemDB) -> Self {
        ToiletryItem {
            quantity_on_hand: parse_decimal_column(
                &db.quantity_on_hand,
                "toiletries.quantity_on_hand",
            ),
            usage_per_week: parse_decimal_column(&db.usage_per_week, "toiletries.usage_per_week"),
            restock_threshold: parse_decimal_column(
                &db.restock_threshold,
                "toiletries.restock_threshold",
            ),
            id: db.id,
            name: db.name,
            unit: db.unit,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewToiletryItemDB {
    pub fn from_domain(domain: NewToiletryItem, now: NaiveDateTime) -> Self {
        NewToiletryItemDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            quantity_on_hand: domain.quantity_on_hand.to_string(),
            unit: domain.unit,
            usage_per_week: domain.usage_per_week.to_string(),
            restock_threshold: domain.restock_threshold.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
