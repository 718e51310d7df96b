//! Suggestion lifecycle operations for the ContentCalendar.
//!
//! A pending suggestion may be opened for editing any number of times.
//! It leaves the pending set exactly once, by insertion or dismissal; any
//! later operation on the same id reports
//! [`SuggestionOutcome::AlreadyResolved`] and changes nothing.

use std::sync::Arc;

use log::{debug, info};

use super::{
    current_runtime, new_id, unique_by_id, CalendarState, Cancellable, ContentCalendar, InFlight,
    OperationHandle, RefreshHandle, Slot,
};
use crate::{
    error::{CalendarError, Result},
    forms::SuggestionForm,
    models::{Resolution, ScheduledItem, Suggestion, SuggestionPatch},
};

/// Result of an operation on a single suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome<T> {
    /// The operation took effect
    Done(T),
    /// The suggestion was resolved earlier; nothing changed
    AlreadyResolved(Resolution),
}

impl<T> SuggestionOutcome<T> {
    pub fn done(self) -> Option<T> {
        match self {
            SuggestionOutcome::Done(value) => Some(value),
            SuggestionOutcome::AlreadyResolved(_) => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, SuggestionOutcome::Done(_))
    }
}

/// Result of starting a refresh.
pub enum RefreshOutcome {
    Started(RefreshHandle),
    /// A refresh is already running; this trigger was ignored
    AlreadyInFlight,
}

/// How a refresh ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReport {
    /// The pending set was replaced by the fetched list
    Replaced {
        pending: usize,
        closed_editors: usize,
    },
    Cancelled,
}

impl Cancellable for RefreshReport {
    fn cancelled() -> Self {
        RefreshReport::Cancelled
    }
}

/// Where a suggestion id stands.
enum Lookup {
    Pending(usize),
    Resolved(Resolution),
}

impl CalendarState {
    fn lookup(&self, id: &str) -> Result<Lookup> {
        if let Some(position) = self.suggestions.iter().position(|s| s.id == id) {
            return Ok(Lookup::Pending(position));
        }
        match self.resolved.get(id) {
            Some(resolution) => Ok(Lookup::Resolved(*resolution)),
            None => Err(CalendarError::SuggestionNotFound { id: id.to_string() }),
        }
    }

    /// The open editor's form, or a fresh one from the suggestion.
    fn form_for(&self, id: &str, position: usize) -> SuggestionForm {
        self.editors
            .get(id)
            .cloned()
            .unwrap_or_else(|| SuggestionForm::from(&self.suggestions[position]))
    }

    fn resolve(&mut self, position: usize, resolution: Resolution) -> Suggestion {
        let suggestion = self.suggestions.remove(position);
        self.editors.remove(&suggestion.id);
        self.resolved.insert(suggestion.id.clone(), resolution);
        suggestion
    }
}

impl ContentCalendar {
    /// Pending suggestions, in arrival order.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.lock().suggestions.clone()
    }

    /// Whether `id` was inserted or dismissed, if it was.
    pub fn resolution(&self, id: &str) -> Option<Resolution> {
        self.lock().resolved.get(id).copied()
    }

    /// The open editor for `id`, if any.
    pub fn suggestion_form(&self, id: &str) -> Option<SuggestionForm> {
        self.lock().editors.get(id).cloned()
    }

    /// Opens (or returns the already open) editor for a pending suggestion.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::SuggestionNotFound` for an unknown id.
    pub fn open_suggestion(&self, id: &str) -> Result<SuggestionOutcome<SuggestionForm>> {
        let mut state = self.lock();
        match state.lookup(id)? {
            Lookup::Pending(position) => {
                let form = state.form_for(id, position);
                state.editors.insert(id.to_string(), form.clone());
                Ok(SuggestionOutcome::Done(form))
            }
            Lookup::Resolved(resolution) => Ok(SuggestionOutcome::AlreadyResolved(resolution)),
        }
    }

    /// Applies `patch` to the suggestion's editor, opening it if needed.
    ///
    /// The pending suggestion itself is unchanged until saved or inserted.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::SuggestionNotFound` for an unknown id.
    pub fn edit_suggestion(
        &self,
        id: &str,
        patch: &SuggestionPatch,
    ) -> Result<SuggestionOutcome<SuggestionForm>> {
        let mut state = self.lock();
        match state.lookup(id)? {
            Lookup::Pending(position) => {
                let form = state.form_for(id, position).apply(patch);
                state.editors.insert(id.to_string(), form.clone());
                Ok(SuggestionOutcome::Done(form))
            }
            Lookup::Resolved(resolution) => Ok(SuggestionOutcome::AlreadyResolved(resolution)),
        }
    }

    /// Discards the editor's local changes.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::SuggestionNotFound` for an unknown id.
    pub fn close_suggestion(&self, id: &str) -> Result<SuggestionOutcome<()>> {
        let mut state = self.lock();
        match state.lookup(id)? {
            Lookup::Pending(_) => {
                state.editors.remove(id);
                Ok(SuggestionOutcome::Done(()))
            }
            Lookup::Resolved(resolution) => Ok(SuggestionOutcome::AlreadyResolved(resolution)),
        }
    }

    /// Writes the editor's values back to the pending suggestion and closes
    /// the editor.
    ///
    /// # Errors
    ///
    /// - `CalendarError::Validation` with per-field messages; the editor
    ///   stays open and the suggestion is unchanged
    /// - `CalendarError::SuggestionNotFound` for an unknown id
    pub fn save_suggestion(&self, id: &str) -> Result<SuggestionOutcome<Suggestion>> {
        let mut state = self.lock();
        match state.lookup(id)? {
            Lookup::Pending(position) => {
                let saved = state.form_for(id, position).to_suggestion(id)?;
                state.suggestions[position] = saved.clone();
                state.editors.remove(id);
                info!("Saved suggestion '{id}'");
                Ok(SuggestionOutcome::Done(saved))
            }
            Lookup::Resolved(resolution) => Ok(SuggestionOutcome::AlreadyResolved(resolution)),
        }
    }

    /// Converts the suggestion, with any unsaved edits, into a scheduled
    /// item and removes it from the pending set.
    ///
    /// The new item is `scheduled`, marked AI-generated and gets a fresh id.
    ///
    /// # Errors
    ///
    /// - `CalendarError::Validation` with per-field messages; nothing
    ///   changes
    /// - `CalendarError::SuggestionNotFound` for an unknown id
    pub fn insert_suggestion(&self, id: &str) -> Result<SuggestionOutcome<ScheduledItem>> {
        let mut state = self.lock();
        match state.lookup(id)? {
            Lookup::Pending(position) => {
                let item = state.form_for(id, position).to_item(new_id())?;
                state.resolve(position, Resolution::Inserted);
                state.push_item(item.clone());
                info!("Inserted suggestion '{id}' as item {}", item.id);
                Ok(SuggestionOutcome::Done(item))
            }
            Lookup::Resolved(resolution) => {
                debug!("Ignoring insert of resolved suggestion '{id}'");
                Ok(SuggestionOutcome::AlreadyResolved(resolution))
            }
        }
    }

    /// Removes the suggestion from the pending set without converting it.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::SuggestionNotFound` for an unknown id.
    pub fn dismiss_suggestion(&self, id: &str) -> Result<SuggestionOutcome<Suggestion>> {
        let mut state = self.lock();
        match state.lookup(id)? {
            Lookup::Pending(position) => {
                let suggestion = state.resolve(position, Resolution::Dismissed);
                info!("Dismissed suggestion '{id}'");
                Ok(SuggestionOutcome::Done(suggestion))
            }
            Lookup::Resolved(resolution) => Ok(SuggestionOutcome::AlreadyResolved(resolution)),
        }
    }

    /// Whether a refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.lock().refresh_slot.is_some()
    }

    /// Starts reloading suggestions from the configured source.
    ///
    /// The pending set stays as it is until the new list arrives; it is
    /// then replaced in one step, minus ids resolved in the meantime.
    /// Editors of suggestions missing from the new list are closed.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Runtime` outside a tokio runtime. Fetch
    /// failures are reported through the handle.
    pub fn refresh_suggestions(&self) -> Result<RefreshOutcome> {
        let runtime = current_runtime()?;
        let mut state = self.lock();

        if let Some(in_flight) = &state.refresh_slot {
            debug!("Refresh #{} already in flight", in_flight.ticket);
            return Ok(RefreshOutcome::AlreadyInFlight);
        }

        let ticket = state.issue_ticket();
        let calendar = self.clone();
        let source = Arc::clone(&self.config.source);
        let latency = self.config.refresh_latency;
        let task = runtime.spawn(async move {
            tokio::time::sleep(latency).await;
            let fetched = source.fetch();
            calendar.apply_refresh(ticket, fetched)
        });
        state.refresh_slot = Some(InFlight {
            ticket,
            abort: task.abort_handle(),
        });

        Ok(RefreshOutcome::Started(OperationHandle::new(
            task,
            ticket,
            Slot::Refresh,
            self.clone(),
        )))
    }

    /// Cancels an in-flight refresh. Returns whether one was running.
    pub fn cancel_refresh(&self) -> bool {
        self.lock().cancel(Slot::Refresh)
    }

    fn apply_refresh(&self, ticket: u64, fetched: Result<Vec<Suggestion>>) -> Result<RefreshReport> {
        let mut state = self.lock();
        if !state.release(Slot::Refresh, ticket) {
            return Ok(RefreshReport::Cancelled);
        }

        let fetched = fetched?;
        let resolved = &state.resolved;
        let pending: Vec<Suggestion> = unique_by_id(fetched)
            .into_iter()
            .filter(|suggestion| !resolved.contains_key(&suggestion.id))
            .collect();

        let before = state.editors.len();
        state
            .editors
            .retain(|id, _| pending.iter().any(|suggestion| &suggestion.id == id));
        let closed_editors = before - state.editors.len();

        state.suggestions = pending;
        info!(
            "Refreshed suggestions: {} pending, {} editors closed",
            state.suggestions.len(),
            closed_editors
        );
        Ok(RefreshReport::Replaced {
            pending: state.suggestions.len(),
            closed_editors,
        })
    }
}
