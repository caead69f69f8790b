//! Environment variable reading and key/value normalisation.

use std::collections::BTreeMap;
use std::ffi::OsString;

use super::error::ConfigError;

/// Prefix every configuration variable carries, e.g. `BOILERPLATE_SERVER_PORT`
pub const ENV_PREFIX: &str = "BOILERPLATE_";

/// Older deployments prefixed keys with this token after the main prefix
pub const LEGACY_PREFIX: &str = "MYVAR_";

/// Separator between nested field names in a dotted path
pub const PATH_SEPARATOR: &str = ".";

/// Shape of a transformed environment value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// Value without spaces, kept whole
    Scalar(String),
    /// Produced when the raw value contained spaces
    List(Vec<String>),
}

/// Keep only the variables whose name starts with `prefix`, with the prefix
/// stripped.
///
/// Matching is exact and case-sensitive. A matching variable whose name or
/// value is not valid unicode is an error; unrelated variables are never
/// inspected beyond their name.
pub fn read_prefixed<I, K, V>(vars: I, prefix: &str) -> Result<BTreeMap<String, String>, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    let mut matched = BTreeMap::new();

    for (key, value) in vars {
        let key: OsString = key.into();
        let lossy = key.to_string_lossy().into_owned();
        let Some(stripped) = lossy.strip_prefix(prefix) else {
            continue;
        };
        if stripped.is_empty() {
            continue;
        }

        if key.to_str().is_none() {
            return Err(ConfigError::EnvironmentRead { key: lossy });
        }
        let value = value
            .into()
            .into_string()
            .map_err(|_| ConfigError::EnvironmentRead { key: lossy.clone() })?;

        matched.insert(stripped.to_string(), value);
    }

    Ok(matched)
}

/// Turn a raw `(key, value)` pair into a flattened dotted path and a value.
///
/// The key loses the legacy prefix, is lower-cased, and has every `_`
/// replaced by the path separator. A value containing a space becomes a list
/// of its space-separated tokens; runs of spaces collapse and empty tokens
/// are dropped, so `"a  b "` gives `["a", "b"]`.
pub fn transform(key: &str, value: &str) -> (String, EnvValue) {
    let key = key.strip_prefix(LEGACY_PREFIX).unwrap_or(key);
    let path = key.to_lowercase().replace('_', PATH_SEPARATOR);

    let value = if value.contains(' ') {
        EnvValue::List(
            value
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    } else {
        EnvValue::Scalar(value.to_owned())
    };

    (path, value)
}
