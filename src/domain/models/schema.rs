//! Table of every configuration field reachable from the environment.
//!
//! Field names contain underscores of their own (`read_timeout`), so the
//! flattened path produced from an environment key (`server.read.timeout`)
//! is ambiguous on its own. The table is what resolves it back to the real
//! field path. It also backs the `keys` CLI command.

use serde::Serialize;

/// Value shape expected by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form string, a space-separated value is re-joined
    Text,
    /// Non-zero `u16`
    Port,
    /// humantime expression or whole seconds
    Duration,
    /// Space- or comma-separated strings
    List,
    /// Boolean such as `true`, `1`, `yes` or `on`
    Flag,
}

impl FieldKind {
    /// Type name shown by `keys`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Port => "port",
            Self::Duration => "duration",
            Self::List => "list",
            Self::Flag => "bool",
        }
    }
}

/// Whether operators must supply a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Must be non-empty
    Required,
    /// May be left empty
    Optional,
    /// Never read from the environment, overwritten after load
    Derived,
}

/// One configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Dotted path, e.g. `server.read_timeout`
    pub path: &'static str,
    /// Expected value shape
    pub kind: FieldKind,
    /// Whether the field must be set
    pub requirement: Requirement,
}

impl FieldSpec {
    const fn new(path: &'static str, kind: FieldKind, requirement: Requirement) -> Self {
        Self {
            path,
            kind,
            requirement,
        }
    }

    /// Path with underscores turned into separators, as an environment key
    /// produces it.
    pub fn flattened(&self) -> String {
        self.path.replace('_', ".")
    }

    /// Environment variable name for this field under `prefix`.
    pub fn env_var(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.path.replace('.', "_").to_ascii_uppercase())
    }
}

use FieldKind::{Duration, Flag, List, Port, Text};
use Requirement::{Derived, Optional, Required};

/// Every leaf field of [`Config`](super::Config), in declaration order
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("primary.env", Text, Required),
    FieldSpec::new("server.port", Port, Required),
    FieldSpec::new("server.read_timeout", Duration, Required),
    FieldSpec::new("server.write_timeout", Duration, Required),
    FieldSpec::new("server.idle_timeout", Duration, Required),
    FieldSpec::new("server.cors_allowed_origins", List, Required),
    FieldSpec::new("database.host", Text, Required),
    FieldSpec::new("database.port", Port, Required),
    FieldSpec::new("database.user", Text, Required),
    FieldSpec::new("database.password", Text, Optional),
    FieldSpec::new("database.name", Text, Required),
    FieldSpec::new("database.ssl_mode", Text, Required),
    FieldSpec::new("database.max_open_conns", Duration, Required),
    FieldSpec::new("database.max_idle_conns", Duration, Required),
    FieldSpec::new("database.conn_max_lifetime", Duration, Required),
    FieldSpec::new("database.conn_max_idle_time", Duration, Required),
    FieldSpec::new("auth.secret_key", Text, Required),
    FieldSpec::new("redis.address", Text, Required),
    FieldSpec::new("integration.resend_api_key", Text, Required),
    FieldSpec::new("observability.service_name", Text, Derived),
    FieldSpec::new("observability.environment", Text, Derived),
    FieldSpec::new("observability.logging.level", Text, Optional),
    FieldSpec::new("observability.logging.format", Text, Optional),
    FieldSpec::new("observability.logging.slow_query_threshold", Duration, Optional),
    FieldSpec::new("observability.new_relic.license_key", Text, Optional),
    FieldSpec::new("observability.new_relic.app_log_forwarding_enabled", Flag, Optional),
    FieldSpec::new("observability.new_relic.distributed_tracing_enabled", Flag, Optional),
    FieldSpec::new("observability.new_relic.debug_logging", Flag, Optional),
    FieldSpec::new("observability.health_checks.enabled", Flag, Optional),
    FieldSpec::new("observability.health_checks.interval", Duration, Optional),
    FieldSpec::new("observability.health_checks.timeout", Duration, Optional),
    FieldSpec::new("observability.health_checks.checks", List, Optional),
];

/// Resolve a flattened dotted path to the field it names.
pub fn resolve(flattened: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|field| field.flattened() == flattened)
}
