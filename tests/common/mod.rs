//! Common test utilities for integration tests
//!
//! Provides a complete, valid `BOILERPLATE_*` environment that individual
//! tests override or trim.

#![allow(dead_code)]

/// Every required variable set to a valid value
pub fn full_env() -> Vec<(String, String)> {
    [
        ("BOILERPLATE_PRIMARY_ENV", "development"),
        ("BOILERPLATE_SERVER_PORT", "8080"),
        ("BOILERPLATE_SERVER_READ_TIMEOUT", "30"),
        ("BOILERPLATE_SERVER_WRITE_TIMEOUT", "30"),
        ("BOILERPLATE_SERVER_IDLE_TIMEOUT", "60"),
        ("BOILERPLATE_SERVER_CORS_ALLOWED_ORIGINS", "http://localhost:3000"),
        ("BOILERPLATE_DATABASE_HOST", "localhost"),
        ("BOILERPLATE_DATABASE_PORT", "5432"),
        ("BOILERPLATE_DATABASE_USER", "postgres"),
        ("BOILERPLATE_DATABASE_PASSWORD", "postgres"),
        ("BOILERPLATE_DATABASE_NAME", "boilerplate"),
        ("BOILERPLATE_DATABASE_SSL_MODE", "disable"),
        ("BOILERPLATE_DATABASE_MAX_OPEN_CONNS", "25"),
        ("BOILERPLATE_DATABASE_MAX_IDLE_CONNS", "25"),
        ("BOILERPLATE_DATABASE_CONN_MAX_LIFETIME", "300"),
        ("BOILERPLATE_DATABASE_CONN_MAX_IDLE_TIME", "300"),
        ("BOILERPLATE_AUTH_SECRET_KEY", "super-secret-signing-key"),
        ("BOILERPLATE_REDIS_ADDRESS", "localhost:6379"),
        ("BOILERPLATE_INTEGRATION_RESEND_API_KEY", "re_test_key"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// [`full_env`] with `overrides` replacing or adding variables
pub fn env_with(overrides: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut vars: Vec<_> = full_env()
        .into_iter()
        .filter(|(k, _)| !overrides.iter().any(|(o, _)| o == k))
        .collect();
    vars.extend(overrides.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    vars
}

/// [`full_env`] without `key`
pub fn env_without(key: &str) -> Vec<(String, String)> {
    full_env().into_iter().filter(|(k, _)| k != key).collect()
}
