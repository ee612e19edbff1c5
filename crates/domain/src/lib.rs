//! Domain layer for the Goodfellows CMS backend.
//!
//! This crate contains:
//! - Typed models for every CMS entity (records, status enums, request/response DTOs)
//! - The site configuration resolver (stored overrides merged with compiled defaults)

pub mod models;
pub mod services;
