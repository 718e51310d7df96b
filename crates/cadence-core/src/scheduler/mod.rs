//! High-level calendar API tying the grid, drafts and suggestions together.
//!
//! [`ContentCalendar`] owns the shared item collection and the pending
//! suggestion set. It is cheap to clone; clones share the same state.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   draft_ops,    │    │  CalendarState  │    │  calendar::*    │
//! │ suggestion_ops, │───▶│ (items, index,  │───▶│ (EventIndex,    │
//! │   navigation    │    │  suggestions)   │    │  MonthGrid)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every write is a synchronous reducer step under one lock: read the
//! current state, compute the next one, replace it. The event index is
//! rebuilt from scratch after each change to the item collection.
//!
//! The two operations with simulated latency (draft submission and
//! suggestion refresh) run as tokio tasks. Each occupies a slot holding a
//! ticket; a task only applies its effect while its ticket still owns the
//! slot, so a cancelled or superseded task can never mutate state.
//!
//! ## Submodules
//!
//! - [`builder`]: configuration for [`ContentCalendar`] instances
//! - [`navigation`]: month navigation, grid, summary and upcoming list
//! - [`draft_ops`]: draft form reducer and cancellable submission
//! - [`suggestion_ops`]: suggestion editing, insertion, dismissal, refresh
//! - [`handle`]: handles for in-flight operations
//! - [`source`]: where refreshed suggestions come from
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::{CalendarBuilder, Clock, MonthStep};
//! use jiff::civil::datetime;
//!
//! # fn main() -> cadence_core::Result<()> {
//! let calendar = CalendarBuilder::new()
//!     .with_clock(Clock::Fixed(datetime(2024, 5, 10, 9, 0, 0, 0)))
//!     .build();
//!
//! let grid = calendar.month_grid()?;
//! assert_eq!(grid.len() % 7, 0);
//!
//! let next = calendar.go_to_month(MonthStep::Next)?;
//! assert_eq!(next.month(), jiff::civil::date(2024, 6, 1));
//! # Ok(())
//! # }
//! ```

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use jiff::{
    civil::{Date, DateTime},
    Zoned,
};
use log::debug;
use tokio::{runtime::Handle, task::AbortHandle};
use uuid::Uuid;

use crate::{
    calendar::EventIndex,
    error::{CalendarError, Result},
    forms::{DraftForm, SuggestionForm},
    models::{Resolution, ScheduledItem, Suggestion, ViewFilter},
};

pub mod builder;
pub mod draft_ops;
pub mod handle;
pub mod navigation;
pub mod source;
pub mod suggestion_ops;


pub use builder::CalendarBuilder;
pub use draft_ops::{DraftPhase, SubmitOutcome};
pub use handle::{Cancellable, OperationHandle};
pub use navigation::MonthStep;
pub use source::{StaticSource, SuggestionSource};
pub use suggestion_ops::{RefreshOutcome, RefreshReport, SuggestionOutcome};

/// Handle for an in-flight draft submission.
pub type SubmissionHandle = OperationHandle<SubmitOutcome>;

/// Handle for an in-flight suggestion refresh.
pub type RefreshHandle = OperationHandle<RefreshReport>;

/// Source of "now" for default slots, `is_today` and upcoming lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local wall-clock time
    #[default]
    System,
    /// A fixed instant, for reproducible output
    Fixed(DateTime),
}

impl Clock {
    pub fn now(&self) -> DateTime {
        match self {
            Clock::System => Zoned::now().datetime(),
            Clock::Fixed(at) => *at,
        }
    }

    pub fn today(&self) -> Date {
        self.now().date()
    }
}

/// Settings fixed at build time.
pub(crate) struct CalendarConfig {
    pub(crate) clock: Clock,
    pub(crate) submit_latency: Duration,
    pub(crate) refresh_latency: Duration,
    pub(crate) source: Arc<dyn SuggestionSource>,
}

/// Which async slot an operation occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Draft,
    Refresh,
}

/// An in-flight operation: the ticket that owns the slot and the task to
/// abort when the slot is cleared.
pub(crate) struct InFlight {
    pub(crate) ticket: u64,
    pub(crate) abort: AbortHandle,
}

/// Everything behind the calendar lock.
pub(crate) struct CalendarState {
    pub(crate) items: Vec<ScheduledItem>,
    pub(crate) index: EventIndex,
    pub(crate) filter: ViewFilter,
    pub(crate) view_month: Date,
    pub(crate) suggestions: Vec<Suggestion>,
    pub(crate) resolved: HashMap<String, Resolution>,
    pub(crate) editors: HashMap<String, SuggestionForm>,
    pub(crate) draft: DraftForm,
    pub(crate) draft_slot: Option<InFlight>,
    pub(crate) refresh_slot: Option<InFlight>,
    next_ticket: u64,
}

impl CalendarState {
    pub(crate) fn new(
        items: Vec<ScheduledItem>,
        suggestions: Vec<Suggestion>,
        filter: ViewFilter,
        view_month: Date,
        draft: DraftForm,
    ) -> Self {
        let index = EventIndex::build_filtered(&items, &filter);
        Self {
            items,
            index,
            filter,
            view_month,
            suggestions: unique_by_id(suggestions),
            resolved: HashMap::new(),
            editors: HashMap::new(),
            draft,
            draft_slot: None,
            refresh_slot: None,
            next_ticket: 0,
        }
    }

    pub(crate) fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    pub(crate) fn slot_mut(&mut self, slot: Slot) -> &mut Option<InFlight> {
        match slot {
            Slot::Draft => &mut self.draft_slot,
            Slot::Refresh => &mut self.refresh_slot,
        }
    }

    /// Releases `slot` if `ticket` still owns it. Returns whether it did.
    pub(crate) fn release(&mut self, slot: Slot, ticket: u64) -> bool {
        let entry = self.slot_mut(slot);
        if entry.as_ref().is_some_and(|in_flight| in_flight.ticket == ticket) {
            *entry = None;
            true
        } else {
            false
        }
    }

    /// Clears `slot` and aborts its task, whoever owns it.
    pub(crate) fn cancel(&mut self, slot: Slot) -> bool {
        match self.slot_mut(slot).take() {
            Some(in_flight) => {
                in_flight.abort.abort();
                debug!("Cancelled {slot:?} operation #{}", in_flight.ticket);
                true
            }
            None => false,
        }
    }

    /// Appends a committed item and rebuilds the index.
    pub(crate) fn push_item(&mut self, item: ScheduledItem) {
        self.items.push(item);
        self.reindex();
    }

    pub(crate) fn reindex(&mut self) {
        self.index = EventIndex::build_filtered(&self.items, &self.filter);
    }
}

/// Main calendar interface. Clones share state.
#[derive(Clone)]
pub struct ContentCalendar {
    pub(crate) state: Arc<Mutex<CalendarState>>,
    pub(crate) config: Arc<CalendarConfig>,
}

impl ContentCalendar {
    pub(crate) fn new(state: CalendarState, config: CalendarConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            config: Arc::new(config),
        }
    }

    /// Locks the shared state. Writers never leave it half-updated, so a
    /// poisoned lock is still consistent.
    pub(crate) fn lock(&self) -> MutexGuard<'_, CalendarState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn clock(&self) -> Clock {
        self.config.clock
    }

    pub fn now(&self) -> DateTime {
        self.config.clock.now()
    }

    /// Snapshot of the item collection, in insertion order.
    pub fn items(&self) -> Vec<ScheduledItem> {
        self.lock().items.clone()
    }

    /// Cancels every in-flight operation. Call before dropping the owner of
    /// the calendar so no delayed mutation lands afterwards.
    pub fn cancel_pending_operations(&self) {
        let mut state = self.lock();
        state.cancel(Slot::Draft);
        state.cancel(Slot::Refresh);
    }

    /// Releases `slot` if `ticket` still owns it and aborts the task.
    pub(crate) fn cancel_ticket(&self, slot: Slot, ticket: u64) -> bool {
        let mut state = self.lock();
        let owns = state
            .slot_mut(slot)
            .as_ref()
            .is_some_and(|in_flight| in_flight.ticket == ticket);
        owns && state.cancel(slot)
    }
}

/// A fresh unique id for a committed item.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The runtime async operations are spawned on.
pub(crate) fn current_runtime() -> Result<Handle> {
    Handle::try_current().map_err(|e| CalendarError::Runtime {
        message: format!("No async runtime available: {e}"),
    })
}

/// Drops later suggestions that reuse an earlier id.
pub(crate) fn unique_by_id(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|suggestion| {
            let fresh = seen.insert(suggestion.id.clone());
            if !fresh {
                debug!("Dropping duplicate suggestion '{}'", suggestion.id);
            }
            fresh
        })
        .collect()
}
