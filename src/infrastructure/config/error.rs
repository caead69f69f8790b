//! Errors raised while loading configuration.

use thiserror::Error;

use super::validation::Violations;

/// Configuration error types, one per load stage
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A prefixed variable could not be read
    #[error("could not read environment variable `{key}`: not valid unicode")]
    EnvironmentRead { key: String },

    /// A value could not be coerced to its field's type
    #[error("could not unmarshal configuration: {0}")]
    Decode(#[source] Box<figment::Error>),

    /// Required sub-records failed validation
    #[error("configuration validation failed: {0}")]
    Validation(Violations),

    /// The observability section failed validation
    #[error("invalid observability configuration: {0}")]
    ObservabilityValidation(Violations),
}

impl ConfigError {
    /// Load stage that produced the error, for diagnostics.
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::EnvironmentRead { .. } => "env read",
            Self::Decode(_) => "unmarshal",
            Self::Validation(_) => "validation",
            Self::ObservabilityValidation(_) => "observability validation",
        }
    }

    /// Offending fields, for the two validation stages
    pub const fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Validation(violations) | Self::ObservabilityValidation(violations) => {
                Some(violations)
            }
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Decode(Box::new(err))
    }
}
