//! Persistence layer for the Goodfellows site backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - Embedded schema migrations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;

/// Embedded migrations, applied at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
