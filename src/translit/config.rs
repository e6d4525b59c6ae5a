use std::collections::BTreeMap;

use serde::Deserialize;

use crate::script::{is_hebrew, GERESH};

#[derive(Deserialize)]
struct TableConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslitConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key is not a Hebrew letter or letter+geresh digraph: {0}")]
    BadKey(String),
    #[error("value for key {key} must be a single ASCII letter, got {value:?}")]
    BadValue { key: String, value: String },
}

/// Parse TOML text into a sorted `BTreeMap<grapheme, latin>`.
pub fn parse_table_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, String>, TranslitConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TranslitConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TranslitConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        let mut chars = key.chars();
        let valid_key = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), None, None) => is_hebrew(letter),
            (Some(letter), Some(modifier), None) => is_hebrew(letter) && modifier == GERESH,
            _ => false,
        };
        if !valid_key {
            return Err(TranslitConfigError::BadKey(key.clone()));
        }

        let mut value_chars = value.chars();
        match (value_chars.next(), value_chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {}
            _ => {
                return Err(TranslitConfigError::BadValue {
                    key: key.clone(),
                    value: value.clone(),
                })
            }
        }
    }

    Ok(config.mappings)
}
