//! Key-only mapping written out as the vault template.

use crate::error::KeysError;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Vault keys in declaration order, every value forced to `""`.
///
/// Keys keep their YAML type, so `1: secret` stays an integer key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyTemplate {
    entries: Mapping,
}

impl KeyTemplate {
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut entries = Mapping::new();
        for key in keys {
            entries.insert(key, Value::String(String::new()));
        }
        Self { entries }
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as block-style YAML.
    pub fn to_yaml(&self) -> Result<String, KeysError> {
        serde_yaml::to_string(self).map_err(KeysError::Serialize)
    }
}

/// Render a key for console output.
///
/// Strings print verbatim; anything else prints as its YAML form.
pub fn display_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => match serde_yaml::to_string(other) {
            Ok(rendered) => rendered.trim_end().to_string(),
            Err(_) => format!("{:?}", other),
        },
    }
}
