//! Database models for debts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::debts::{Debt, NewDebt};

use crate::utils::parse_decimal_column;

/// Database model for debts
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
#[diesel(table_name = crate::schema::debts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DebtDB {
    pub id: String,
    pub name: String,
    pub balance: String,
    pub apr: String,
    pub min_payment: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new debt
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::debts)]
pub struct NewDebtDB {
    pub id: String,
    pub name: String,
    pub balance: String,
    pub apr: String,
    pub min_payment: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<DebtDB> for Debt {
    fn from(db: DebtDB) -> Self {
        Debt {
            balance: parse_decimal_column(&db.balance, "debts.balance"),
            apr: parse_decimal_column(&db.apr, "debts.apr"),
            min_payment: parse_decimal_column(&db.min_payment, "debts.min_payment"),
            id: db.id,
            name: db.name,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewDebtDB {
    pub fn from_domain(domain: NewDebt, now: NaiveDateTime) -> Self {
        NewDebtDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            balance: domain.balance.to_string(),
            apr: domain.apr.to_string(),
            min_payment: domain.min_payment.to_string(),
            is_active: domain.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
