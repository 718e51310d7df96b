//! Draft form operations for the ContentCalendar.

use log::{info, warn};
use serde::Serialize;

use super::{
    current_runtime, new_id, Cancellable, ContentCalendar, InFlight, OperationHandle, Slot,
    SubmissionHandle,
};
use crate::{
    error::{CalendarError, Result},
    forms::{DraftEdit, DraftForm},
    models::ScheduledItem,
};

/// Where the draft form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftPhase {
    Idle,
    Submitting,
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The item was appended to the collection
    Committed(ScheduledItem),
    /// The submission was cancelled before it could commit
    Cancelled,
}

impl Cancellable for SubmitOutcome {
    fn cancelled() -> Self {
        SubmitOutcome::Cancelled
    }
}

impl SubmitOutcome {
    pub fn item(&self) -> Option<&ScheduledItem> {
        match self {
            SubmitOutcome::Committed(item) => Some(item),
            SubmitOutcome::Cancelled => None,
        }
    }
}

impl ContentCalendar {
    /// Current draft form.
    pub fn draft(&self) -> DraftForm {
        self.lock().draft.clone()
    }

    pub fn draft_phase(&self) -> DraftPhase {
        if self.lock().draft_slot.is_some() {
            DraftPhase::Submitting
        } else {
            DraftPhase::Idle
        }
    }

    /// Applies one field edit to the draft and returns the new form.
    pub fn update_draft(&self, edit: DraftEdit) -> DraftForm {
        let mut state = self.lock();
        state.draft = state.draft.clone().apply(edit);
        state.draft.clone()
    }

    /// Cancels any in-flight submission and restores the default form.
    pub fn reset_draft(&self) -> DraftForm {
        let now = self.config.clock.now();
        let mut state = self.lock();
        if state.cancel(Slot::Draft) {
            info!("Draft submission cancelled by reset");
        }
        state.draft = DraftForm::with_default_schedule(now);
        state.draft.clone()
    }

    /// Validates the current draft and starts its submission.
    ///
    /// The item is built (and its id generated) up front; it is appended
    /// after the submit latency unless the submission is cancelled first.
    ///
    /// # Errors
    ///
    /// - `CalendarError::SubmissionInFlight` if a submission is pending
    /// - `CalendarError::Validation` with per-field messages
    /// - `CalendarError::Runtime` outside a tokio runtime
    pub fn submit_draft(&self) -> Result<SubmissionHandle> {
        self.start_submission(None)
    }

    /// Replaces the draft with `form`, submits it and waits for the
    /// outcome.
    ///
    /// # Errors
    ///
    /// Same as [`ContentCalendar::submit_draft`]. A pending submission or an
    /// invalid `form` leaves the current draft untouched.
    pub async fn create_draft(&self, form: DraftForm) -> Result<SubmitOutcome> {
        self.start_submission(Some(form))?.wait().await
    }

    fn start_submission(&self, form: Option<DraftForm>) -> Result<SubmissionHandle> {
        let runtime = current_runtime()?;
        let mut state = self.lock();

        if let Some(in_flight) = &state.draft_slot {
            warn!(
                "Rejected draft submission: #{} is still in flight",
                in_flight.ticket
            );
            return Err(CalendarError::SubmissionInFlight);
        }
        let item = form.as_ref().unwrap_or(&state.draft).to_item(new_id())?;
        if let Some(form) = form {
            state.draft = form;
        }

        let ticket = state.issue_ticket();
        let calendar = self.clone();
        let latency = self.config.submit_latency;
        // The task cannot observe the slot before it is filled below: it
        // needs this lock to commit.
        let task = runtime.spawn(async move {
            tokio::time::sleep(latency).await;
            Ok(calendar.commit_draft(ticket, item))
        });
        state.draft_slot = Some(InFlight {
            ticket,
            abort: task.abort_handle(),
        });

        Ok(OperationHandle::new(task, ticket, Slot::Draft, self.clone()))
    }

    fn commit_draft(&self, ticket: u64, item: ScheduledItem) -> SubmitOutcome {
        let now = self.config.clock.now();
        let mut state = self.lock();
        if !state.release(Slot::Draft, ticket) {
            return SubmitOutcome::Cancelled;
        }

        info!("Committed draft '{}' as item {}", item.title, item.id);
        state.push_item(item.clone());
        state.draft = DraftForm::with_default_schedule(now);
        SubmitOutcome::Committed(item)
    }
}
