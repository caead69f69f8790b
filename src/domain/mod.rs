//! Domain layer for the boilerplate configuration loader
//!
//! This module contains the typed configuration tree and its field schema.

pub mod models;
