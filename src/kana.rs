//! Character classes used when segmenting katakana into morae.

/// Small tsu: the following consonant is doubled.
pub const GEMINATE: char = 'ッ';
/// Syllable-final N.
pub const MORAIC_NASAL: char = 'ン';
/// Chōonpu, extends the preceding vowel.
pub const PROLONGED: char = 'ー';

pub(crate) const GEMINATE_STR: &str = "ッ";
pub(crate) const MORAIC_NASAL_STR: &str = "ン";
pub(crate) const PROLONGED_STR: &str = "ー";

/// Longest mora in the table, in characters (e.g. "ンビャ").
pub const MAX_MORA_LEN: usize = 3;

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Small kana that combine with the preceding kana into a digraph.
pub fn is_small_glide(c: char) -> bool {
    matches!(c, 'ィ' | 'ェ' | 'ャ' | 'ュ' | 'ョ')
}

/// Uppercase Hepburn vowel letters.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'I' | 'U' | 'E' | 'O')
}
