//! Database models for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::accounts::{Account, NewAccount};

use crate::utils::parse_decimal_column;

/// Database model for accounts
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
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountDB {
    pub id: String,
    pub name: String,
    pub institution: Option<String>,
    pub account_type: String,
    pub currency: String,
    pub balance: String,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new account
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
pub struct NewAccountDB {
    pub id: String,
    pub name: String,
    pub institution: Option<String>,
    pub account_type: String,
    pub currency: String,
    pub balance: String,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Account {
            account_type: db.account_type.parse().unwrap_or_default(),
            balance: parse_decimal_column(&db.balance, "accounts.balance"),
            id: db.id,
            name: db.name,
            institution: db.institution,
            currency: db.currency,
            is_default: db.is_default,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewAccountDB {
    pub fn from_domain(domain: NewAccount, now: NaiveDateTime) -> Self {
        NewAccountDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            institution: domain.institution,
            account_type: domain.account_type.as_str().to_string(),
            currency: domain.currency,
            balance: domain.balance.to_string(),
            is_default: domain.is_default,
            is_active: domain.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
