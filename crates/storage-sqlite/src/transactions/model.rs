//! Database models for transactions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::transactions::{NewTransaction, Transaction};

use crate::utils::parse_decimal_column;

/// Database model for transactions
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
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub account_id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub merchant: Option<String>,
    pub amount: String,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub import_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new transaction
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransactionDB {
    pub id: String,
    pub account_id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub merchant: Option<String>,
    pub amount: String,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub import_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Transaction {
            amount: parse_decimal_column(&db.amount, "transactions.amount"),
            id: db.id,
            account_id: db.account_id,
            transaction_date: db.transaction_date,
            description: db.description,
            merchant: db.merchant,
            category: db.category,
            notes: db.notes,
            import_id: db.import_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewTransactionDB {
    pub fn from_domain(domain: NewTransaction, now: NaiveDateTime) -> Self {
        NewTransactionDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            account_id: domain.account_id,
            transaction_date: domain.transaction_date,
            description: domain.description,
            merchant: domain.merchant,
            amount: domain.amount.to_string(),
            category: domain.category,
            notes: domain.notes,
            import_id: domain.import_id,
            created_at: now,
            updated_at: now,
        }
    }
}
