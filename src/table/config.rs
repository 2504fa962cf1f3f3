use std::collections::BTreeMap;

use serde::Deserialize;

use crate::kana::MAX_MORA_LEN;

#[derive(Deserialize)]
struct MoraConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty kana key")]
    EmptyKey,
    #[error("kana key longer than three characters: {0}")]
    KeyTooLong(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("non-ASCII value for key: {0}")]
    NonAsciiValue(String),
}

/// Parse TOML text into a sorted `BTreeMap<kana, romaji>`.
pub fn parse_mora_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableError> {
    let config: MoraConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableError::Empty);
    }

    for (key, value) in &config.mappings {
        if key.is_empty() {
            return Err(TableError::EmptyKey);
        }
        if key.chars().count() > MAX_MORA_LEN {
            return Err(TableError::KeyTooLong(key.clone()));
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue(key.clone()));
        }
        if !value.is_ascii() {
            return Err(TableError::NonAsciiValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
