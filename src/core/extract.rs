//! Top-level key extraction from decrypted vault YAML.

use crate::error::KeysError;
use crate::models::key_template::KeyTemplate;
use serde_yaml::Value;

/// Parse `content` and keep only its top-level keys.
///
/// Anything other than a mapping at the top level (sequence, scalar, empty
/// document, tagged value) is rejected.
pub fn extract_keys(content: &str) -> Result<KeyTemplate, KeysError> {
    let document: Value = serde_yaml::from_str(content).map_err(KeysError::Parse)?;
    match document {
        Value::Mapping(mapping) => Ok(KeyTemplate::from_keys(
            mapping.into_iter().map(|(key, _value)| key),
        )),
        _ => Err(KeysError::NotAMapping),
    }
}
