//! Replacement configuration.
//!
//! `Defines` is the nested mapping every rewrite pass reads from. It is built
//! once, by the loader, from an inline value, a JSON / YAML file, or
//! `KEY=VALUE` pairs, and is never mutated while a pass runs.

mod loader;

pub use loader::{load, load_file, parse_define};

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::ConfigError;

pub const TYPEOF_PREFIX: &str = "typeof ";

/// Where the configuration comes from.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    Inline(Value),
    /// Resolved against the base directory handed to [`load`].
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Defines {
    root: Value,
}

impl Default for Defines {
    fn default() -> Self {
        Self::new()
    }
}

impl Defines {
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Accepts a mapping. `null` is treated as an empty configuration.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(_) => Ok(Self { root: value }),
            Value::Null => Ok(Self::new()),
            other => Err(ConfigError::not_a_mapping(json_type_name(&other))),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    fn entries(&self) -> Option<&Map<String, Value>> {
        self.root.as_object()
    }

    pub fn len(&self) -> usize {
        self.entries().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries()?.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        if let Value::Object(map) = &mut self.root {
            map.insert(key.into(), value);
        }
    }

    /// Puts `overrides` ahead of the existing entries, so they are enumerated
    /// first and win over same-named paths from the file.
    pub fn with_overrides(self, overrides: Vec<(String, Value)>) -> Self {
        if overrides.is_empty() {
            return self;
        }
        let mut merged = Map::new();
        for (key, value) in overrides {
            merged.insert(key, value);
        }
        if let Value::Object(existing) = self.root {
            for (key, value) in existing {
                if !merged.contains_key(&key) {
                    merged.insert(key, value);
                }
            }
        }
        Self {
            root: Value::Object(merged),
        }
    }

    /// Entries whose key starts with `typeof `, with that prefix stripped.
    pub fn typeof_namespace(&self) -> Defines {
        let namespace: Map<String, Value> = self
            .entries()
            .into_iter()
            .flatten()
            .filter_map(|(key, value)| {
                key.strip_prefix(TYPEOF_PREFIX)
                    .map(|name| (name.to_string(), value.clone()))
            })
            .collect();
        Self {
            root: Value::Object(namespace),
        }
    }
}

impl From<Map<String, Value>> for Defines {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            root: Value::Object(map),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
