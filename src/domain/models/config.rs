//! Typed configuration tree.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::coerce;

/// Compiled-in service identity, stamped onto [`ObservabilityConfig::service_name`].
pub const SERVICE_NAME: &str = "boilerplate";

/// Accepted values of [`LoggingConfig::level`]
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Accepted values of [`LoggingConfig::format`]
pub const LOG_FORMATS: &[&str] = &["json", "pretty"];

/// Fully loaded and validated service configuration.
///
/// Built once by the loader at startup and passed down by reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Deployment environment
    pub primary: Primary,
    /// HTTP server settings
    pub server: ServerConfig,
    /// PostgreSQL connection and pool settings
    pub database: DatabaseConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Redis connection settings
    pub redis: RedisConfig,
    /// Third-party integration credentials
    pub integration: IntegrationConfig,
    /// Always present: decoded from the environment or defaulted
    pub observability: ObservabilityConfig,
}

/// Deployment identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Primary {
    /// Deployment environment name, e.g. `production`
    #[serde(deserialize_with = "coerce::string")]
    pub env: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ServerConfig {
    /// Listen port
    #[serde(deserialize_with = "coerce::port")]
    pub port: u16,

    /// Maximum time to read a request
    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub read_timeout: Duration,

    /// Maximum time to write a response
    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub write_timeout: Duration,

    /// Keep-alive idle timeout
    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub idle_timeout: Duration,

    /// Allowed CORS origins, in order
    #[serde(deserialize_with = "coerce::string_list")]
    pub cors_allowed_origins: Vec<String>,
}

/// Database connection and pool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Database host
    #[serde(deserialize_with = "coerce::string")]
    pub host: String,

    /// Database port
    #[serde(deserialize_with = "coerce::port")]
    pub port: u16,

    /// Database user
    #[serde(deserialize_with = "coerce::string")]
    pub user: String,

    /// May be empty (trust or peer authentication)
    #[serde(deserialize_with = "coerce::string")]
    pub password: String,

    /// Database name
    #[serde(deserialize_with = "coerce::string")]
    pub name: String,

    /// Postgres `sslmode`, e.g. `disable` or `require`
    #[serde(deserialize_with = "coerce::string")]
    pub ssl_mode: String,

    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub max_open_conns: Duration,

    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub max_idle_conns: Duration,

    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub conn_max_lifetime: Duration,

    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub conn_max_idle_time: Duration,
}

/// Token signing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AuthConfig {
    /// Token signing secret
    #[serde(deserialize_with = "coerce::string")]
    pub secret_key: String,
}

/// Redis connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RedisConfig {
    /// `host:port` of the Redis instance
    #[serde(deserialize_with = "coerce::string")]
    pub address: String,
}

/// Third-party integration credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct IntegrationConfig {
    /// Resend email API key
    #[serde(deserialize_with = "coerce::string")]
    pub resend_api_key: String,
}

/// Telemetry settings.
///
/// Fields missing from a partially supplied section decode to their zero
/// value; [`Default`] is the built-in configuration used when the section is
/// absent altogether.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ObservabilityConfig {
    /// Always `boilerplate` after load
    #[serde(default, deserialize_with = "coerce::string")]
    pub service_name: String,

    /// Always `primary.env` after load
    #[serde(default, deserialize_with = "coerce::string")]
    pub environment: String,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub new_relic: NewRelicConfig,

    #[serde(default)]
    pub health_checks: HealthChecksConfig,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: SERVICE_NAME.to_string(),
            environment: "development".to_string(),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
                slow_query_threshold: Duration::from_millis(100),
            },
            new_relic: NewRelicConfig {
                license_key: String::new(),
                app_log_forwarding_enabled: true,
                distributed_tracing_enabled: true,
                debug_logging: false,
            },
            health_checks: HealthChecksConfig {
                enabled: true,
                interval: Duration::from_secs(30),
                timeout: Duration::from_secs(5),
                checks: vec!["database".to_string(), "redis".to_string()],
            },
        }
    }
}

/// Service log output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(deserialize_with = "coerce::string")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(deserialize_with = "coerce::string")]
    pub format: String,

    /// Queries slower than this are logged at warn
    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub slow_query_threshold: Duration,
}

/// New Relic agent settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct NewRelicConfig {
    #[serde(deserialize_with = "coerce::string")]
    pub license_key: String,

    #[serde(deserialize_with = "coerce::flag")]
    pub app_log_forwarding_enabled: bool,

    #[serde(deserialize_with = "coerce::flag")]
    pub distributed_tracing_enabled: bool,

    #[serde(deserialize_with = "coerce::flag")]
    pub debug_logging: bool,
}

/// Background dependency health probing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HealthChecksConfig {
    /// Run periodic health checks
    #[serde(deserialize_with = "coerce::flag")]
    pub enabled: bool,

    /// Time between check rounds
    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub interval: Duration,

    /// Per-check timeout, below `interval`
    #[serde(
        serialize_with = "coerce::serialize_duration",
        deserialize_with = "coerce::duration"
    )]
    pub timeout: Duration,

    /// Names of the dependencies to check
    #[serde(deserialize_with = "coerce::string_list")]
    pub checks: Vec<String>,
}
