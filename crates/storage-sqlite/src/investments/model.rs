//! Database models for investments.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::investments::{Investment, NewInvestment};

use crate::utils::parse_decimal_column;

/// Database model for investments
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
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDB {
    pub id: String,
    pub account_id: Option<String>,
    pub symbol: String,
    pub name: Option<String>,
    pub units: String,
    pub unit_cost: String,
    pub current_price: String,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new investment
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
pub struct NewInvestmentDB {
    pub id: String,
    pub account_id: Option<String>,
    pub symbol: String,
    pub name: Option<String>,
    pub units: String,
    pub unit_cost: String,
    pub current_price: String,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        Investment {
            units: parse_decimal_column(&db.units, "investments.units"),
            unit_cost: parse_decimal_column(&db.unit_cost, "investments.unit_cost"),
            current_price: parse_decimal_column(&db.current_price, "investments.current_price"),
            id: db.id,
            account_id: db.account_id,
            symbol: db.symbol,
            name: db.name,
            currency: db.currency,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewInvestmentDB {
    pub fn from_domain(domain: NewInvestment, now: NaiveDateTime) -> Self {
        NewInvestmentDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            account_id: domain.account_id,
            symbol: domain.symbol,
            name: domain.name,
            units: domain.units.to_string(),
            unit_cost: domain.unit_cost.to_string(),
            current_price: domain.current_price.to_string(),
            currency: domain.currency,
            created_at: now,
            updated_at: now,
        }
    }
}
