//! Conversion between katakana and Hepburn romaji.
//!
//! Forward conversion ([`kana_to_romaji`]) is a deterministic transcription.
//! Backward conversion ([`romaji_to_kana`]) is ambiguous, so it enumerates
//! every katakana spelling the romaji could have come from and leaves the
//! choice to the caller.
//!
//! The free functions use the embedded Hepburn table. Use the functions in
//! [`forward`] and [`backward`] with a [`MoraTable`] of your own to convert
//! with a custom dictionary.

pub mod backward;
pub mod forward;
pub mod kana;
pub mod table;

#[cfg(test)]
mod tests;

pub use backward::{romaji_to_kana_traced, SearchEvent, SearchObserver};
pub use table::{MoraTable, TableError};

/// Katakana to Hepburn romaji with the default table.
///
/// ```
/// assert_eq!(kana_romaji::kana_to_romaji("クッチャン"), "KUTCHAN");
/// ```
pub fn kana_to_romaji(input: &str) -> String {
    forward::kana_to_romaji(MoraTable::hepburn(), input)
}

/// Every katakana spelling of Hepburn `input` with the default table.
///
/// ```
/// let kana = kana_romaji::romaji_to_kana("TOKYO");
/// assert!(kana.iter().any(|k| k == "トウキョウ"));
/// ```
pub fn romaji_to_kana(input: &str) -> Vec<String> {
    backward::romaji_to_kana(MoraTable::hepburn(), input)
}
