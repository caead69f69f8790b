//! Infrastructure layer module
//!
//! This module contains the adapters around the configuration tree:
//! - Environment-backed configuration loading
//! - Logging infrastructure

pub mod config;
pub mod logging;
