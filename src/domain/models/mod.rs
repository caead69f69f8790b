//! Configuration data model.

pub mod coerce;
pub mod config;
pub mod schema;

pub use config::{
    AuthConfig, Config, DatabaseConfig, HealthChecksConfig, IntegrationConfig, LoggingConfig,
    NewRelicConfig, ObservabilityConfig, Primary, RedisConfig, ServerConfig, SERVICE_NAME,
};
pub use schema::{FieldKind, FieldSpec, Requirement, FIELDS};
