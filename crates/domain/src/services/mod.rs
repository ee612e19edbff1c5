//! Domain services.

pub mod site_config;
