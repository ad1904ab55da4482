//! Database models for bills.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::bills::{Bill, NewBill};

use crate::utils::parse_decimal_column;

/// Database model for bills
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
#[diesel(table_name = crate::schema::bills)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BillDB {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub frequency: String,
    pub due_day: i32,
    pub start_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub account_id: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new bill
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::bills)]
pub struct NewBillDB {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub frequency: String,
    pub due_day: i32,
    pub start_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub account_id: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BillDB> for Bill {
    fn from(db: BillDB) -> Self {
        Bill {
            amount: parse_decimal_column(&db.amount, "bills.amount"),
            frequency: db.frequency.parse().unwrap_or_default(),
            due_day: db.due_day.max(0) as u32,
            id: db.id,
            name: db.name,
            start_date: db.start_date,
            category: db.category,
            account_id: db.account_id,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewBillDB {
    pub fn from_domain(domain: NewBill, now: NaiveDateTime) -> Self {
        NewBillDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            amount: domain.amount.to_string(),
            frequency: domain.frequency.as_str().to_string(),
            due_day: domain.due_day as i32,
            start_date: domain.start_date,
            category: domain.category,
            account_id: domain.account_id,
            is_active: domain.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
