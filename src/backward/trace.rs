use serde::Serialize;

/// One step of the backward search, reported to a [`SearchObserver`].
///
/// Offsets are byte offsets into the romaji input. Events borrow from the
/// search state and are only valid for the duration of the callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent<'a> {
    /// A candidate was popped off the stack.
    Visit {
        offset: usize,
        output: &'a str,
        remaining: &'a str,
        /// Candidates still waiting on the stack.
        depth: usize,
    },
    /// The popped candidate's state was already expanded.
    Duplicate { offset: usize, output: &'a str },
    /// A pending literal did not match the next input character.
    DeadEnd {
        offset: usize,
        output: &'a str,
        expected: char,
    },
    /// All input consumed; `output` is a result.
    Complete { output: &'a str },
}

pub trait SearchObserver {
    fn on_event(&mut self, event: &SearchEvent<'_>);
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchEvent<'_>),
{
    fn on_event(&mut self, event: &SearchEvent<'_>) {
        self(event)
    }
}
