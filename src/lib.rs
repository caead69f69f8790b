//! Boilerplate service configuration
//!
//! Loads the backend service configuration from `BOILERPLATE_*` environment
//! variables into a typed, validated tree. The tree is built once at startup
//! and handed to the rest of the service by reference.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): The configuration tree and its field schema
//! - **Infrastructure Layer** (`infrastructure`): Environment loading, validation and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use boilerplate_config::ConfigLoader;
//!
//! fn main() {
//!     // Terminates the process with a diagnostic if the environment is invalid
//!     let config = ConfigLoader::load_or_exit();
//!     println!("listening on {}", config.server.port);
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    AuthConfig, Config, DatabaseConfig, HealthChecksConfig, IntegrationConfig, LoggingConfig,
    NewRelicConfig, ObservabilityConfig, Primary, RedisConfig, ServerConfig, SERVICE_NAME,
};
pub use infrastructure::config::{ConfigError, ConfigLoader, Violations};
