//! HTTP route handlers.

pub mod applications;
pub mod board_members;
pub mod contact_messages;
pub mod dashboard;
pub mod donations;
pub mod health;
pub mod programs;
pub mod sections;
pub mod settings;
pub mod site_config;
pub mod volunteers;
