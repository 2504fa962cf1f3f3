//! Mora lookup tables shared by both converters.
//!
//! A [`MoraTable`] holds the forward kana→romaji mapping and the derived
//! reverse mapping from a romaji syllable to every kana spelling that
//! produces it. Reverse spellings are kept in ascending order; the
//! backward search depends on that order for reproducible results.

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use config::{parse_mora_toml, TableError};

/// The embedded Hepburn dictionary.
pub const HEPBURN_TOML: &str = include_str!("hepburn.toml");

#[derive(Debug, Clone, Default)]
pub struct MoraTable {
    forward: HashMap<String, String>,
    backward: HashMap<String, Vec<String>>,
}

impl MoraTable {
    /// Build a table from `(kana, romaji)` pairs.
    ///
    /// A later pair with the same kana replaces an earlier one.
    pub fn build<I, K, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: Into<String>,
    {
        let forward: HashMap<String, String> = pairs
            .into_iter()
            .map(|(kana, romaji)| (kana.into(), romaji.into()))
            .collect();

        let mut backward: HashMap<String, Vec<String>> = HashMap::new();
        for (kana, romaji) in &forward {
            backward
                .entry(romaji.clone())
                .or_default()
                .push(kana.clone());
        }
        for spellings in backward.values_mut() {
            spellings.sort_unstable();
        }

        Self { forward, backward }
    }

    /// Build a table from TOML text with a `[mappings]` table.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self::build(parse_mora_toml(toml_str)?))
    }

    /// The Hepburn table, built on first use and shared afterwards.
    pub fn hepburn() -> &'static MoraTable {
        static INSTANCE: OnceLock<MoraTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            // build.rs validates the embedded file
            MoraTable::from_toml(HEPBURN_TOML).expect("hepburn TOML must be valid")
        })
    }

    pub fn lookup_forward(&self, kana: &str) -> Option<&str> {
        self.forward.get(kana).map(String::as_str)
    }

    /// Every kana spelling of `romaji`, ascending. Empty when none exists.
    pub fn lookup_backward(&self, romaji: &str) -> &[String] {
        self.backward.get(romaji).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of kana morae in the table.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate over `(kana, romaji)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward
            .iter()
            .map(|(kana, romaji)| (kana.as_str(), romaji.as_str()))
    }
}
