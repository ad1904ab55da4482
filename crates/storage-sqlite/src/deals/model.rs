//! Database models for provider offers.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::deals::{NewProviderOffer, ProviderOffer};

use crate::utils::parse_decimal_column;

/// Database model for provider offers
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
#[diesel(table_name = crate::schema::provider_offers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ProviderOfferDB {
    pub id: String,
    pub category: String,
    pub provider: String,
    pub monthly_price: String,
    pub term_months: Option<i32>,
    pub intro_months: Option<i32>,
    pub intro_price: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new provider offer
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::provider_offers)]
pub struct NewProviderOfferDB {
    pub id: String,
    pub category: String,
    pub provider: String,
    pub monthly_price: String,
    pub term_months: Option<i32>,
    pub intro_months: Option<i32>,
    pub intro_price: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ProviderOfferDB> for ProviderOffer {
    fn from(db: ProviderOfferDB) -> Self {
        ProviderOffer {
            monthly_price: parse_decimal_column(&db.monthly_price, "provider_offers.monthly_price"),
            intro_price: db
                .intro_price
                .as_deref()
                .map(|p| parse_decimal_column(p, "provider_offers.intro_price")),
            id: db.id,
            category: db.category,
            provider: db.provider,
            term_months: db.term_months,
            intro_months: db.intro_months,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewProviderOfferDB {
    pub fn from_domain(domain: NewProviderOffer, now: NaiveDateTime) -> Self {
        NewProviderOfferDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            category: domain.category,
            provider: domain.provider,
            monthly_price: domain.monthly_price.to_string(),
            term_months: domain.term_months,
            intro_months: domain.intro_months,
            intro_price: domain.intro_price.map(|p| p.to_string()),
            is_active: domain.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
