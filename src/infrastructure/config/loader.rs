//! Staged configuration loading.

use std::ffi::OsString;

use figment::Figment;
use serde::Deserialize;
use tracing::subscriber::{self, NoSubscriber};
use tracing::{debug, dispatcher, error, info};

use super::error::ConfigError;
use super::provider::PrefixedEnv;
use super::validation::{Validate, Validator, Violations};
use crate::domain::models::{
    AuthConfig, Config, DatabaseConfig, IntegrationConfig, ObservabilityConfig, Primary,
    RedisConfig, ServerConfig, SERVICE_NAME,
};
use crate::infrastructure::logging::bootstrap_subscriber;

/// Shape of the tree as decoded, before observability defaulting
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct DecodedConfig {
    primary: Primary,
    server: ServerConfig,
    database: DatabaseConfig,
    auth: AuthConfig,
    redis: RedisConfig,
    integration: IntegrationConfig,
    observability: Option<ObservabilityConfig>,
}

/// Loads the service configuration from `BOILERPLATE_*` environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment.
    ///
    /// Stages run in order and the first failing stage is returned:
    /// 1. read `BOILERPLATE_*` variables
    /// 2. transform and decode them into the typed tree
    /// 3. validate the required sub-records
    /// 4. default the observability section when absent, then stamp its
    ///    service name and environment
    /// 5. validate the observability section
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from(PrefixedEnv::from_process()?)
    }

    /// Load configuration from an explicit set of variables.
    pub fn load_from_vars<I, K, V>(vars: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self::load_from(PrefixedEnv::from_vars(vars)?)
    }

    /// Load configuration from the process environment, terminating the
    /// process with status 1 on any failure.
    ///
    /// The failure is logged through the current subscriber. When none is
    /// installed, the bootstrap subscriber is used for that one event.
    pub fn load_or_exit() -> Config {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                let unobserved = dispatcher::get_default(|dispatch| dispatch.is::<NoSubscriber>());
                if unobserved {
                    subscriber::with_default(bootstrap_subscriber(), || report(&err));
                } else {
                    report(&err);
                }
                std::process::exit(1);
            }
        }
    }

    fn load_from(env: PrefixedEnv) -> Result<Config, ConfigError> {
        debug!(variables = env.len(), "loading configuration from environment");

        let decoded: DecodedConfig = Figment::from(env).extract()?;

        Validator::new()
            .check(&decoded.primary)
            .check(&decoded.server)
            .check(&decoded.database)
            .check(&decoded.auth)
            .check(&decoded.redis)
            .check(&decoded.integration)
            .finish()
            .map_err(ConfigError::Validation)?;

        let mut observability = decoded.observability.unwrap_or_else(|| {
            debug!("observability section absent, using defaults");
            ObservabilityConfig::default()
        });
        observability.service_name = SERVICE_NAME.to_string();
        observability.environment.clone_from(&decoded.primary.env);

        Validator::new()
            .check(&observability)
            .finish()
            .map_err(ConfigError::ObservabilityValidation)?;

        info!(
            environment = %decoded.primary.env,
            port = decoded.server.port,
            "configuration loaded"
        );

        Ok(Config {
            primary: decoded.primary,
            server: decoded.server,
            database: decoded.database,
            auth: decoded.auth,
            redis: decoded.redis,
            integration: decoded.integration,
            observability,
        })
    }

    /// Validate an already built configuration with both passes.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Validator::new()
            .check(&config.primary)
            .check(&config.server)
            .check(&config.database)
            .check(&config.auth)
            .check(&config.redis)
            .check(&config.integration)
            .finish()
            .map_err(ConfigError::Validation)?;

        Validator::new()
            .check(&config.observability)
            .finish()
            .map_err(ConfigError::ObservabilityValidation)
    }
}

fn report(err: &ConfigError) {
    error!(
        stage = err.stage(),
        fields = ?err.violations().map(Violations::paths),
        error = %err,
        "could not load configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("BOILERPLATE_PRIMARY_ENV", "development"),
            ("BOILERPLATE_SERVER_PORT", "8080"),
            ("BOILERPLATE_SERVER_READ_TIMEOUT", "30"),
            ("BOILERPLATE_SERVER_WRITE_TIMEOUT", "30s"),
            ("BOILERPLATE_SERVER_IDLE_TIMEOUT", "1m"),
            ("BOILERPLATE_SERVER_CORS_ALLOWED_ORIGINS", "http://localhost:3000"),
            ("BOILERPLATE_DATABASE_HOST", "localhost"),
            ("BOILERPLATE_DATABASE_PORT", "5432"),
            ("BOILERPLATE_DATABASE_USER", "postgres"),
            ("BOILERPLATE_DATABASE_NAME", "boilerplate"),
            ("BOILERPLATE_DATABASE_SSL_MODE", "disable"),
            ("BOILERPLATE_DATABASE_MAX_OPEN_CONNS", "25"),
            ("BOILERPLATE_DATABASE_MAX_IDLE_CONNS", "25"),
            ("BOILERPLATE_DATABASE_CONN_MAX_LIFETIME", "300"),
            ("BOILERPLATE_DATABASE_CONN_MAX_IDLE_TIME", "5m"),
            ("BOILERPLATE_AUTH_SECRET_KEY", "secret"),
            ("BOILERPLATE_REDIS_ADDRESS", "localhost:6379"),
            ("BOILERPLATE_INTEGRATION_RESEND_API_KEY", "re_123"),
        ]
    }

    fn without(key: &str) -> Vec<(&'static str, &'static str)> {
        base_vars().into_iter().filter(|(k, _)| *k != key).collect()
    }

    #[test]
    fn test_load_minimal_environment() {
        let config = ConfigLoader::load_from_vars(base_vars()).unwrap();

        assert_eq!(config.primary.env, "development");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.read_timeout, Duration::from_secs(30));
        assert_eq!(config.server.idle_timeout, Duration::from_secs(60));
        assert_eq!(config.server.cors_allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.database.conn_max_idle_time, Duration::from_secs(300));
        assert!(config.database.password.is_empty());
        ConfigLoader::validate(&config).expect("Loaded config should be valid");
    }

    #[test]
    fn test_missing_required_field_is_validation_error() {
        let err = ConfigLoader::load_from_vars(without("BOILERPLATE_SERVER_PORT")).unwrap_err();
        match err {
            ConfigError::Validation(violations) => {
                assert_eq!(violations.paths(), vec!["server.port"]);
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_port_is_decode_error() {
        let mut vars = without("BOILERPLATE_SERVER_PORT");
        vars.push(("BOILERPLATE_SERVER_PORT", "eighty"));

        let err = ConfigLoader::load_from_vars(vars).unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)), "got {err:?}");
        assert_eq!(err.stage(), "unmarshal");
    }

    #[test]
    fn test_observability_defaulted_and_stamped() {
        let config = ConfigLoader::load_from_vars(base_vars()).unwrap();
        assert_eq!(config.observability.service_name, SERVICE_NAME);
        assert_eq!(config.observability.environment, "development");
        assert_eq!(config.observability.logging, ObservabilityConfig::default().logging);
    }

    #[test]
    fn test_observability_override_wins() {
        let mut vars = base_vars();
        vars.push(("BOILERPLATE_OBSERVABILITY_SERVICE_NAME", "impostor"));
        vars.push(("BOILERPLATE_OBSERVABILITY_ENVIRONMENT", "production"));
        vars.push(("BOILERPLATE_OBSERVABILITY_LOGGING_LEVEL", "debug"));
        vars.push(("BOILERPLATE_OBSERVABILITY_LOGGING_FORMAT", "pretty"));

        let config = ConfigLoader::load_from_vars(vars).unwrap();
        assert_eq!(config.observability.service_name, SERVICE_NAME);
        assert_eq!(config.observability.environment, "development");
        assert_eq!(config.observability.logging.level, "debug");
    }

    #[test]
    fn test_partial_observability_is_validated() {
        let mut vars = base_vars();
        vars.push(("BOILERPLATE_OBSERVABILITY_LOGGING_LEVEL", "debug"));

        let err = ConfigLoader::load_from_vars(vars).unwrap_err();
        match err {
            ConfigError::ObservabilityValidation(violations) => {
                assert_eq!(violations.paths(), vec!["observability.logging.format"]);
            }
            other => panic!("Expected ObservabilityValidation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_reports_both_passes() {
        let mut config = ConfigLoader::load_from_vars(base_vars()).unwrap();
        config.observability.logging.format = "xml".to_string();

        let err = ConfigLoader::validate(&config).unwrap_err();
        assert_eq!(err.stage(), "observability validation");

        config.redis.address = String::new();
        let err = ConfigLoader::validate(&config).unwrap_err();
        assert_eq!(err.stage(), "validation");
    }
}
