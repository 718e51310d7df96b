//! Builder for creating and configuring ContentCalendar instances.

use std::{sync::Arc, time::Duration};

use jiff::civil::Date;

use super::{CalendarConfig, CalendarState, Clock, ContentCalendar, StaticSource, SuggestionSource};
use crate::{
    dataset::Dataset,
    dates,
    forms::DraftForm,
    models::{ScheduledItem, Suggestion, ViewFilter},
};

/// Simulated round-trip of a draft submission.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(800);

/// Simulated round-trip of a suggestion refresh.
pub const DEFAULT_REFRESH_LATENCY: Duration = Duration::from_millis(1500);

/// Builder for creating and configuring ContentCalendar instances.
pub struct CalendarBuilder {
    items: Vec<ScheduledItem>,
    suggestions: Vec<Suggestion>,
    source: Option<Arc<dyn SuggestionSource>>,
    submit_latency: Duration,
    refresh_latency: Duration,
    clock: Clock,
    filter: ViewFilter,
    month: Option<Date>,
}

impl CalendarBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            suggestions: Vec::new(),
            source: None,
            submit_latency: DEFAULT_SUBMIT_LATENCY,
            refresh_latency: DEFAULT_REFRESH_LATENCY,
            clock: Clock::System,
            filter: ViewFilter::default(),
            month: None,
        }
    }

    /// Sets the initial item collection.
    pub fn with_items(mut self, items: Vec<ScheduledItem>) -> Self {
        self.items = items;
        self
    }

    /// Sets the initial pending suggestions.
    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Takes items and suggestions from a loaded dataset.
    pub fn with_dataset(self, dataset: Dataset) -> Self {
        self.with_items(dataset.items)
            .with_suggestions(dataset.suggestions)
    }

    /// Sets where refreshes fetch from.
    ///
    /// If not specified, refreshes reload the initial suggestions.
    pub fn with_source<S: SuggestionSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn with_submit_latency(mut self, latency: Duration) -> Self {
        self.submit_latency = latency;
        self
    }

    pub fn with_refresh_latency(mut self, latency: Duration) -> Self {
        self.refresh_latency = latency;
        self
    }

    /// Sets both simulated latencies.
    pub fn with_latency(self, latency: Duration) -> Self {
        self.with_submit_latency(latency)
            .with_refresh_latency(latency)
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_filter(mut self, filter: ViewFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the initially viewed month.
    ///
    /// If not specified, the clock's current month is shown.
    pub fn with_month(mut self, month: Date) -> Self {
        self.month = Some(month);
        self
    }

    /// Builds the configured calendar.
    pub fn build(self) -> ContentCalendar {
        let now = self.clock.now();
        let view_month = dates::month_start(self.month.unwrap_or_else(|| now.date()));
        let source = self
            .source
            .unwrap_or_else(|| Arc::new(StaticSource::new(self.suggestions.clone())));

        let state = CalendarState::new(
            self.items,
            self.suggestions,
            self.filter,
            view_month,
            DraftForm::with_default_schedule(now),
        );
        let config = CalendarConfig {
            clock: self.clock,
            submit_latency: self.submit_latency,
            refresh_latency: self.refresh_latency,
            source,
        };
        ContentCalendar::new(state, config)
    }
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}
