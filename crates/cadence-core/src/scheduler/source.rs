//! Where refreshed suggestions come from.

use crate::{error::Result, models::Suggestion};

/// Produces the next list of pending suggestions.
///
/// Fetching runs after the simulated refresh latency, on the runtime's
/// worker threads. Errors are surfaced through the refresh handle and leave
/// the current pending set untouched.
pub trait SuggestionSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Suggestion>>;
}

/// A fixed snapshot, returned unchanged on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    suggestions: Vec<Suggestion>,
}

impl StaticSource {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }
}

impl SuggestionSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Suggestion>> {
        Ok(self.suggestions.clone())
    }
}

impl<F> SuggestionSource for F
where
    F: Fn() -> Result<Vec<Suggestion>> + Send + Sync,
{
    fn fetch(&self) -> Result<Vec<Suggestion>> {
        self()
    }
}
