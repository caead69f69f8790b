//! Required-field and value-range validation for the configuration tree.
//!
//! Each sub-record implements [`Validate`] explicitly; every violation is
//! collected so operators see all offending fields in one pass.

use std::fmt;
use std::time::Duration;

use crate::domain::models::config::{LOG_FORMATS, LOG_LEVELS};
use crate::domain::models::{
    AuthConfig, DatabaseConfig, IntegrationConfig, ObservabilityConfig, Primary, RedisConfig,
    ServerConfig,
};

/// The rule a field broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Field holds its type's zero value
    Required,
    /// Field value is not in the accepted set
    OneOf {
        allowed: &'static [&'static str],
        got: String,
    },
    /// Field must be strictly shorter than the named sibling
    ShorterThan(&'static str),
}

/// One offending field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending field
    pub path: String,
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Rule::Required => write!(f, "{} is required", self.path),
            Rule::OneOf { allowed, got } => write!(
                f,
                "{} must be one of: {} (got `{got}`)",
                self.path,
                allowed.join(", ")
            ),
            Rule::ShorterThan(other) => write!(f, "{} must be shorter than {other}", self.path),
        }
    }
}

/// Non-empty set of violations reported by a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Number of violations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a value returned by a failed pass
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dotted paths of every offending field, in discovery order.
    pub fn paths(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.path.as_str()).collect()
    }

    /// Whether the field at `path` was reported
    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|v| v.path == path)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Values that have a disallowed zero state
pub trait Zero {
    /// Whether the value is unset
    fn is_zero(&self) -> bool;
}

impl Zero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for u16 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Zero for Duration {
    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }
}

impl Zero for Vec<String> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// Collects violations across one validation pass
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    /// Start an empty pass
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope subsequent checks to the sub-record at `prefix`.
    pub fn section(&mut self, prefix: impl Into<String>) -> Section<'_> {
        Section {
            prefix: prefix.into(),
            violations: &mut self.violations,
        }
    }

    /// Run `record`'s checks
    pub fn check(mut self, record: &dyn Validate) -> Self {
        record.validate(&mut self);
        self
    }

    /// End the pass, failing if anything was reported
    pub fn finish(self) -> Result<(), Violations> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(Violations(self.violations))
        }
    }
}

/// Checks scoped to one sub-record, reported as `prefix.field`
pub struct Section<'a> {
    prefix: String,
    violations: &'a mut Vec<Violation>,
}

impl Section<'_> {
    fn push(&mut self, field: &str, rule: Rule) {
        self.violations.push(Violation {
            path: format!("{}.{field}", self.prefix),
            rule,
        });
    }

    /// Report `field` if it holds its zero value
    pub fn required<T: Zero + ?Sized>(&mut self, field: &str, value: &T) -> &mut Self {
        if value.is_zero() {
            self.push(field, Rule::Required);
        }
        self
    }

    /// Report `field` unless its value is one of `allowed`
    pub fn one_of(&mut self, field: &str, value: &str, allowed: &'static [&'static str]) -> &mut Self {
        if !allowed.contains(&value) {
            self.push(
                field,
                Rule::OneOf {
                    allowed,
                    got: value.to_string(),
                },
            );
        }
        self
    }

    /// Require `value < other`; skipped when either side is zero, since
    /// `required` already reports that.
    pub fn shorter_than(
        &mut self,
        field: &str,
        value: Duration,
        other_field: &'static str,
        other: Duration,
    ) -> &mut Self {
        if !value.is_zero() && !other.is_zero() && value >= other {
            self.push(field, Rule::ShorterThan(other_field));
        }
        self
    }
}

/// Implemented by every sub-record of the configuration tree
pub trait Validate {
    /// Report every violation in this record
    fn validate(&self, validator: &mut Validator);
}

impl Validate for Primary {
    fn validate(&self, validator: &mut Validator) {
        validator.section("primary").required("env", &self.env);
    }
}

impl Validate for ServerConfig {
    fn validate(&self, validator: &mut Validator) {
        validator
            .section("server")
            .required("port", &self.port)
            .required("read_timeout", &self.read_timeout)
            .required("write_timeout", &self.write_timeout)
            .required("idle_timeout", &self.idle_timeout)
            .required("cors_allowed_origins", &self.cors_allowed_origins);
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self, validator: &mut Validator) {
        // password may be empty
        validator
            .section("database")
            .required("host", &self.host)
            .required("port", &self.port)
            .required("user", &self.user)
            .required("name", &self.name)
            .required("ssl_mode", &self.ssl_mode)
            .required("max_open_conns", &self.max_open_conns)
            .required("max_idle_conns", &self.max_idle_conns)
            .required("conn_max_lifetime", &self.conn_max_lifetime)
            .required("conn_max_idle_time", &self.conn_max_idle_time);
    }
}

impl Validate for AuthConfig {
    fn validate(&self, validator: &mut Validator) {
        validator.section("auth").required("secret_key", &self.secret_key);
    }
}

impl Validate for RedisConfig {
    fn validate(&self, validator: &mut Validator) {
        validator.section("redis").required("address", &self.address);
    }
}

impl Validate for IntegrationConfig {
    fn validate(&self, validator: &mut Validator) {
        validator
            .section("integration")
            .required("resend_api_key", &self.resend_api_key);
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self, validator: &mut Validator) {
        validator
            .section("observability")
            .required("service_name", &self.service_name)
            .required("environment", &self.environment);

        validator
            .section("observability.logging")
            .one_of("level", &self.logging.level, LOG_LEVELS)
            .one_of("format", &self.logging.format, LOG_FORMATS);

        let health = &self.health_checks;
        if health.enabled {
            validator
                .section("observability.health_checks")
                .required("interval", &health.interval)
                .required("timeout", &health.timeout)
                .shorter_than("timeout", health.timeout, "interval", health.interval);
        }
    }
}
