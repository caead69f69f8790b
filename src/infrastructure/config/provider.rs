//! figment provider serving the prefixed environment as a nested dictionary.

use std::collections::BTreeMap;
use std::ffi::OsString;

use figment::value::{Dict, Map, Tag, Value};
use figment::{Error, Metadata, Profile, Provider};
use tracing::debug;

use super::env::{
    read_prefixed, transform, EnvValue, ENV_PREFIX, LEGACY_PREFIX, PATH_SEPARATOR,
};
use super::error::ConfigError;
use crate::domain::models::schema::{self, Requirement};

impl From<EnvValue> for Value {
    fn from(value: EnvValue) -> Self {
        match value {
            EnvValue::Scalar(s) => Self::String(Tag::Default, s),
            EnvValue::List(items) => Self::Array(
                Tag::Default,
                items
                    .into_iter()
                    .map(|item| Self::String(Tag::Default, item))
                    .collect(),
            ),
        }
    }
}

/// Snapshot of the `BOILERPLATE_*` environment
#[derive(Debug, Clone)]
pub struct PrefixedEnv {
    prefix: &'static str,
    /// Raw variables, prefix stripped
    vars: BTreeMap<String, String>,
}

impl PrefixedEnv {
    /// Snapshot the process environment.
    pub fn from_process() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars_os())
    }

    /// Snapshot an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Ok(Self {
            prefix: ENV_PREFIX,
            vars: read_prefixed(vars, ENV_PREFIX)?,
        })
    }

    /// Number of prefixed variables captured, recognised or not
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no prefixed variable was captured
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Transformed, schema-resolved variables nested by path.
    ///
    /// Variables that name no known field are dropped, as are derived fields.
    /// When a field is set both with and without the legacy prefix, the
    /// unprefixed variable wins.
    pub fn dict(&self) -> Dict {
        let mut resolved: BTreeMap<&'static str, (bool, EnvValue)> = BTreeMap::new();
        for (key, raw) in &self.vars {
            let (flattened, value) = transform(key, raw);
            let var = format!("{}{key}", self.prefix);
            let Some(field) = schema::resolve(&flattened) else {
                debug!(key = %var, "ignoring unrecognised environment variable");
                continue;
            };
            if field.requirement == Requirement::Derived {
                debug!(key = %var, field = field.path, "ignoring variable for derived field");
                continue;
            }

            let legacy = key.starts_with(LEGACY_PREFIX);
            if legacy && matches!(resolved.get(field.path), Some((false, _))) {
                debug!(key = %var, field = field.path, "legacy variable shadowed");
                continue;
            }
            resolved.insert(field.path, (legacy, value));
        }

        let mut dict = Dict::new();
        for (path, (_, value)) in resolved {
            insert(&mut dict, path, value.into());
        }
        dict
    }
}

fn insert(dict: &mut Dict, path: &str, value: Value) {
    match path.split_once(PATH_SEPARATOR) {
        None => {
            dict.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = dict
                .entry(head.to_string())
                .or_insert_with(|| Value::Dict(Tag::Default, Dict::new()));
            if let Value::Dict(_, inner) = child {
                insert(inner, rest, value);
            }
        }
    }
}

impl Provider for PrefixedEnv {
    fn metadata(&self) -> Metadata {
        let prefix = self.prefix;
        Metadata::named(format!("`{prefix}` environment variable(s)")).interpolater(
            move |_: &Profile, keys: &[&str]| {
                format!("{prefix}{}", keys.join("_").to_ascii_uppercase())
            },
        )
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut data = Map::new();
        data.insert(Profile::Default, self.dict());
        Ok(data)
    }
}
