//! Database models for grocery products and deal rules.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lifetracker_core::groceries::{
    DealRule, DealRuleType, GroceryProduct, NewDealRule, NewGroceryProduct,
};

use crate::utils::parse_decimal_column;

/// Database model for grocery products
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
#[diesel(table_name = crate::schema::grocery_products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GroceryProductDB {
    pub id: String,
    pub name: String,
    pub store: Option<String>,
    pub pack_size: String,
    pub unit: String,
    pub pack_price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new product
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::grocery_products)]
pub struct NewGroceryProductDB {
    pub id: String,
    pub name: String,
    pub store: Option<String>,
    pub pack_size: String,
    pub unit: String,
    pub pack_price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for deal rules
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(GroceryProductDB, foreign_key = product_id))]
#[diesel(table_name = crate::schema::deal_rules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DealRuleDB {
    pub id: String,
    pub product_id: String,
    pub rule_type: String,
    pub threshold_quantity: i32,
    pub deal_price: Option<String>,
    pub free_quantity: Option<i32>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new deal rule
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::deal_rules)]
pub struct NewDealRuleDB {
    pub id: String,
    pub product_id: String,
    pub rule_type: String,
    pub threshold_quantity: i32,
    pub deal_price: Option<String>,
    pub free_quantity: Option<i32>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<GroceryProductDB> for GroceryProduct {
    fn from(db: GroceryProductDB) -> Self {
        GroceryProduct {
            pack_size: parse_decimal_column(&db.pack_size, "grocery_products.pack_size"),
            pack_price: parse_decimal_column(&db.pack_price, "grocery_products.pack_price"),
            unit: db.unit.parse().unwrap_or_default(),
            id: db.id,
            name: db.name,
            store: db.store,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<DealRuleDB> for DealRule {
    fn from(db: DealRuleDB) -> Self {
        DealRule {
            rule_type: match db.rule_type.as_str() {
                "MULTI_BUY" => DealRuleType::MultiBuy,
                _ => DealRuleType::BundlePrice,
            },
            deal_price: db
                .deal_price
                .as_deref()
                .map(|p| parse_decimal_column(p, "deal_rules.deal_price")),
            id: db.id,
            product_id: db.product_id,
            threshold_quantity: db.threshold_quantity,
            free_quantity: db.free_quantity,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewGroceryProductDB {
    pub fn from_domain(domain: NewGroceryProduct, now: NaiveDateTime) -> Self {
        NewGroceryProductDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            store: domain.store,
            pack_size: domain.pack_size.to_string(),
            unit: domain.unit.as_str().to_string(),
            pack_price: domain.pack_price.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl NewDealRuleDB {
    pub fn from_domain(domain: NewDealRule, now: NaiveDateTime) -> Self {
        NewDealRuleDB {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            product_id: domain.product_id,
            rule_type: match domain.rule_type {
                DealRuleType::MultiBuy => "MULTI_BUY".to_string(),
                DealRuleType::BundlePrice => "BUNDLE_PRICE".to_string(),
            },
            threshold_quantity: domain.threshold_quantity,
            deal_price: domain.deal_price.map(|p| p.to_string()),
            free_quantity: domain.free_quantity,
            is_active: domain.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
