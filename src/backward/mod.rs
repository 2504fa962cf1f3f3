//! Hepburn romaji to every plausible katakana spelling.
//!
//! Depth-first search over an explicit LIFO stack of candidates. At each
//! position the input is cut at the next vowel into a segment, and the
//! candidate branches into a moraic-nasal reading, a geminate reading and
//! each table spelling of the segment (plain, with ー, or with a repeated
//! vowel kana). States already expanded are skipped, so no result repeats.
//!
//! Result order is part of the contract: later pushes are explored first,
//! so spellings come out in descending table order, and for each spelling
//! the ウ / オ / ー / plain variants in that order.

mod trace;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::kana::{is_vowel, GEMINATE_STR, MORAIC_NASAL_STR, PROLONGED_STR};
use crate::table::MoraTable;

pub use trace::{SearchEvent, SearchObserver};

const LONG_O: &str = "オ";
const LONG_U: &str = "ウ";

/// A partial parse: `offset` bytes of input consumed into `output`.
#[derive(Debug, Clone)]
struct Candidate {
    offset: usize,
    output: String,
    /// The next input character must be exactly this one.
    pending: Option<char>,
}

impl Candidate {
    fn root() -> Self {
        Self {
            offset: 0,
            output: String::new(),
            pending: None,
        }
    }

    fn extend(&self, offset: usize, parts: &[&str], pending: Option<char>) -> Self {
        let extra: usize = parts.iter().map(|p| p.len()).sum();
        let mut output = String::with_capacity(self.output.len() + extra);
        output.push_str(&self.output);
        for part in parts {
            output.push_str(part);
        }
        Self {
            offset,
            output,
            pending,
        }
    }
}

/// All katakana spellings of `input`, in search order.
///
/// Returns an empty list when no segmentation consumes the whole input.
pub fn romaji_to_kana(table: &MoraTable, input: &str) -> Vec<String> {
    romaji_to_kana_traced(table, input, ignore)
}

fn ignore(_: &SearchEvent<'_>) {}

/// [`romaji_to_kana`], reporting every search step to `observer`.
pub fn romaji_to_kana_traced<O>(table: &MoraTable, input: &str, mut observer: O) -> Vec<String>
where
    O: SearchObserver,
{
    let _span = debug_span!("romaji_to_kana", len = input.len()).entered();

    let mut stack = vec![Candidate::root()];
    let mut seen: HashSet<(usize, String)> = HashSet::new();
    let mut results = Vec::new();

    while let Some(cand) = stack.pop() {
        let remaining = &input[cand.offset..];
        observer.on_event(&SearchEvent::Visit {
            offset: cand.offset,
            output: &cand.output,
            remaining,
            depth: stack.len(),
        });

        // Keyed without `pending`: the first arrival at a state wins.
        if !seen.insert((cand.offset, cand.output.clone())) {
            observer.on_event(&SearchEvent::Duplicate {
                offset: cand.offset,
                output: &cand.output,
            });
            continue;
        }

        if let Some(expected) = cand.pending {
            match remaining.chars().next() {
                Some(c) if c == expected => stack.push(Candidate {
                    offset: cand.offset + c.len_utf8(),
                    output: cand.output,
                    pending: None,
                }),
                _ => observer.on_event(&SearchEvent::DeadEnd {
                    offset: cand.offset,
                    output: &cand.output,
                    expected,
                }),
            }
            continue;
        }

        if remaining.is_empty() {
            observer.on_event(&SearchEvent::Complete {
                output: &cand.output,
            });
            results.push(cand.output);
            continue;
        }

        expand(table, &cand, remaining, &mut stack);
    }

    debug!(results = results.len(), states = seen.len());
    results
}

/// Push every reading of the segment at the front of `remaining`.
fn expand(table: &MoraTable, cand: &Candidate, remaining: &str, stack: &mut Vec<Candidate>) {
    let segment = segment(remaining);
    let mut chars = segment.chars();
    let (Some(first), second) = (chars.next(), chars.next()) else {
        return;
    };

    // Explored after everything below.
    if first == 'N' && second.is_some_and(|c| c != '-') {
        stack.push(cand.extend(cand.offset + 1, &[MORAIC_NASAL_STR], None));
    }

    // Explored after every table spelling.
    let doubled = second == Some(first) && segment.chars().count() >= 3;
    if segment.starts_with("TCH") || doubled {
        stack.push(cand.extend(
            cand.offset + first.len_utf8(),
            &[GEMINATE_STR],
            None,
        ));
    }

    let offset = cand.offset + segment.len();
    let last = segment.chars().next_back().unwrap_or(first);
    let prolonged_pending = matches!(last, 'I' | 'E').then_some('I');

    for kana in table.lookup_backward(segment) {
        let kana = kana.as_str();
        stack.push(cand.extend(offset, &[kana], None));
        stack.push(cand.extend(offset, &[kana, PROLONGED_STR], prolonged_pending));
        if last == 'O' {
            stack.push(cand.extend(offset, &[kana, LONG_O], None));
        }
        if matches!(last, 'O' | 'U') {
            stack.push(cand.extend(offset, &[kana, LONG_U], None));
        }
    }
}

/// Input up to and including the first vowel; all of it if none remains.
fn segment(remaining: &str) -> &str {
    match remaining.find(is_vowel) {
        Some(i) => &remaining[..=i],
        None => remaining,
    }
}
