//! Property tests for the environment transform and typed round-trips.

mod common;

use std::time::Duration;

use boilerplate_config::infrastructure::config::{transform, EnvValue, LEGACY_PREFIX};
use boilerplate_config::ConfigLoader;
use common::env_with;
use proptest::prelude::*;

proptest! {
    /// Property: keys become lower-case dotted paths with no underscores
    #[test]
    fn prop_key_becomes_dotted_path(key in "[A-Z]{1,8}(_[A-Z0-9]{1,8}){0,4}") {
        prop_assume!(!key.starts_with(LEGACY_PREFIX));
        let (path, _) = transform(&key, "x");
        prop_assert_eq!(path.clone(), key.to_lowercase().replace('_', "."));
        prop_assert!(!path.contains('_'));
        prop_assert_eq!(path.split('.').count(), key.split('_').count());
    }

    /// Property: values without spaces stay scalar, unchanged
    #[test]
    fn prop_value_without_space_is_scalar(value in "[^ ]{0,24}") {
        let (_, transformed) = transform("A_B", &value);
        prop_assert_eq!(transformed, EnvValue::Scalar(value));
    }

    /// Property: tokens separated by any run of spaces come back in order
    #[test]
    fn prop_value_with_spaces_is_ordered_list(
        tokens in prop::collection::vec("[a-z0-9.:/]{1,10}", 2..6),
        gap in 1usize..4,
    ) {
        let value = tokens.join(&" ".repeat(gap));
        let (_, transformed) = transform("A_B", &value);
        prop_assert_eq!(transformed, EnvValue::List(tokens));
    }

    /// Property: a port written to the environment decodes to itself
    #[test]
    fn prop_port_round_trip(port in 1u16..=u16::MAX) {
        let text = port.to_string();
        let config = ConfigLoader::load_from_vars(env_with(&[
            ("BOILERPLATE_SERVER_PORT", text.as_str()),
        ])).unwrap();
        prop_assert_eq!(config.server.port, port);
    }

    /// Property: a duration written as text decodes to itself
    #[test]
    fn prop_duration_round_trip(millis in 1u64..10_000_000) {
        let duration = Duration::from_millis(millis);
        let text = humantime::format_duration(duration).to_string();
        let config = ConfigLoader::load_from_vars(env_with(&[
            ("BOILERPLATE_SERVER_IDLE_TIMEOUT", text.as_str()),
        ])).unwrap();
        prop_assert_eq!(config.server.idle_timeout, duration);
    }

    /// Property: a single-spaced string decodes to itself
    #[test]
    fn prop_string_round_trip(secret in "[A-Za-z0-9_-]{1,12}( [A-Za-z0-9_-]{1,12}){0,3}") {
        let config = ConfigLoader::load_from_vars(env_with(&[
            ("BOILERPLATE_AUTH_SECRET_KEY", secret.as_str()),
        ])).unwrap();
        prop_assert_eq!(config.auth.secret_key, secret);
    }

    /// Property: a space-joined list decodes to the same list
    #[test]
    fn prop_list_round_trip(origins in prop::collection::vec("[a-z]{1,10}\\.com", 1..5)) {
        let joined = origins.join(" ");
        let config = ConfigLoader::load_from_vars(env_with(&[
            ("BOILERPLATE_SERVER_CORS_ALLOWED_ORIGINS", joined.as_str()),
        ])).unwrap();
        prop_assert_eq!(config.server.cors_allowed_origins, origins);
    }
}
