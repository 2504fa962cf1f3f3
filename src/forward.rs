//! Katakana to Hepburn romaji.
//!
//! A single left-to-right scan. Characters that may start or extend a mora
//! are queued (at most [`MAX_MORA_LEN`] of them) and resolved against the
//! table by longest match. Anything the table does not know is written
//! through unchanged, so mixed kana/Latin text survives conversion.

use std::collections::VecDeque;

use tracing::{debug, debug_span};

use crate::kana::{
    is_small_glide, GEMINATE, GEMINATE_STR, MAX_MORA_LEN, MORAIC_NASAL, PROLONGED,
};
use crate::table::MoraTable;

/// Convert katakana `input` to Hepburn romaji.
///
/// Total: unknown characters pass through verbatim.
pub fn kana_to_romaji(table: &MoraTable, input: &str) -> String {
    let _span = debug_span!("kana_to_romaji", len = input.len()).entered();
    Scanner::new(table, input).run()
}

/// Byte range of one queued character.
#[derive(Debug, Clone, Copy)]
struct Point {
    start: usize,
    stop: usize,
}

enum Step {
    /// Keep reading; the queue may still grow into a longer mora.
    Continue,
    /// Resolve the queue before reading further.
    Resolve,
}

struct Scanner<'a> {
    table: &'a MoraTable,
    input: &'a str,
    pos: usize,
    queue: VecDeque<Point>,
    /// Final letter of the last romaji written, for vowel merging.
    last: Option<char>,
    out: String,
}

impl<'a> Scanner<'a> {
    fn new(table: &'a MoraTable, input: &'a str) -> Self {
        Self {
            table,
            input,
            pos: 0,
            queue: VecDeque::with_capacity(MAX_MORA_LEN),
            last: None,
            out: String::with_capacity(input.len()),
        }
    }

    fn run(mut self) -> String {
        loop {
            let next = self.input[self.pos..].chars().next();
            match next {
                Some(c) => {
                    if let Step::Continue = self.feed(c) {
                        continue;
                    }
                }
                None if self.queue.is_empty() => break,
                None => {}
            }
            self.resolve();
        }
        self.out
    }

    /// Classify `c`, consuming it unless the queue must be resolved first.
    fn feed(&mut self, c: char) -> Step {
        match c {
            _ if c.is_ascii() => {
                if !self.queue.is_empty() {
                    return Step::Resolve;
                }
                self.out.push(c);
                self.pos += 1;
                self.last = None;
                Step::Continue
            }
            GEMINATE | MORAIC_NASAL => {
                self.enqueue(c);
                if self.queue.len() == 1 {
                    Step::Continue
                } else {
                    Step::Resolve
                }
            }
            _ if is_small_glide(c) => {
                if self.queue.is_empty() {
                    self.pos += c.len_utf8();
                    self.write_lone(c);
                    return Step::Continue;
                }
                // A digraph is complete once its glide arrives.
                self.enqueue(c);
                Step::Resolve
            }
            PROLONGED => {
                if !self.queue.is_empty() {
                    // Reread after the queue is flushed.
                    return Step::Resolve;
                }
                if matches!(self.last, Some('I' | 'E')) {
                    self.out.push('I');
                }
                self.pos += c.len_utf8();
                self.last = None;
                Step::Continue
            }
            _ => {
                self.enqueue(c);
                if self.queue.len() < MAX_MORA_LEN {
                    Step::Continue
                } else {
                    Step::Resolve
                }
            }
        }
    }

    fn enqueue(&mut self, c: char) {
        let start = self.pos;
        self.pos += c.len_utf8();
        self.queue.push_back(Point {
            start,
            stop: self.pos,
        });
    }

    fn slice(&self, p: Point) -> &'a str {
        &self.input[p.start..p.stop]
    }

    /// A small glide with nothing to attach to.
    fn write_lone(&mut self, c: char) {
        let mut buf = [0u8; 4];
        match self.table.lookup_forward(c.encode_utf8(&mut buf)) {
            Some(romaji) => {
                self.out.push_str(romaji);
                self.last = romaji.chars().last();
            }
            None => {
                debug!(%c, "lone glide passthrough");
                self.out.push(c);
                self.last = None;
            }
        }
    }

    /// Resolve the head of the queue into one mora, or pass one character through.
    fn resolve(&mut self) {
        let geminate = self
            .queue
            .front()
            .is_some_and(|&p| self.slice(p) == GEMINATE_STR);
        if geminate {
            self.queue.pop_front();
        }

        match self.longest_match() {
            Some((len, romaji)) => {
                self.queue.drain(..len);
                self.emit(romaji, geminate);
            }
            None if geminate && self.queue.is_empty() => {
                // Nothing follows the marker; keep the marker itself.
                debug!("dangling geminate passthrough");
                self.out.push(GEMINATE);
                self.last = None;
            }
            None => {
                if let Some(p) = self.queue.pop_front() {
                    let literal = self.slice(p);
                    debug!(literal, "passthrough");
                    self.out.push_str(literal);
                }
                self.last = None;
            }
        }
    }

    /// Longest queued prefix present in the table, as (queue items, romaji).
    fn longest_match(&self) -> Option<(usize, &'a str)> {
        let table = self.table;
        let first = self.queue.front()?;
        (1..=self.queue.len()).rev().find_map(|n| {
            let kana = &self.input[first.start..self.queue[n - 1].stop];
            table.lookup_forward(kana).map(|romaji| (n, romaji))
        })
    }

    fn emit(&mut self, romaji: &str, geminate: bool) {
        let mut chars = romaji.chars();
        let Some(first) = chars.next() else {
            return;
        };

        let merges = match self.last {
            Some('O') => matches!(first, 'O' | 'U'),
            Some('U') => first == 'U',
            _ => false,
        };
        if merges {
            // Long vowel: "ホウ" + "オ" is HOO, not HOUO.
            let rest = chars.as_str();
            self.out.push_str(rest);
            self.last = rest.chars().last();
            return;
        }

        if geminate {
            if romaji.starts_with("CH") {
                self.out.push('T');
            } else {
                self.out.push(first);
            }
        }
        self.out.push_str(romaji);
        self.last = romaji.chars().last();
    }
}
