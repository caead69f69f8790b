//! Configuration management infrastructure
//!
//! Environment-driven configuration using figment:
//! - `BOILERPLATE_*` variable reading
//! - Key normalisation and list splitting
//! - Typed decoding with field-directed coercion
//! - Required-field validation

pub mod env;
pub mod error;
pub mod loader;
pub mod provider;
pub mod validation;

pub use env::{transform, EnvValue, ENV_PREFIX, LEGACY_PREFIX};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use provider::PrefixedEnv;
pub use validation::{Rule, Validate, Validator, Violation, Violations};
