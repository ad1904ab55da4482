//! SQLite storage implementation for Life Tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `lifetracker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. Everything above it is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod accounts;
pub mod bills;
pub mod deals;
pub mod debts;
pub mod groceries;
pub mod investments;
pub mod meals;
pub mod settings;
pub mod toiletries;
pub mod transactions;

// Re-export database utilities
pub use db::{
    backup_database, create_pool, get_connection, get_db_path, init, run_migrations, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from lifetracker-core for convenience
pub use lifetracker_core::errors::{DatabaseError, Error, Result};
