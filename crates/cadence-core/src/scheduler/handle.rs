//! Handles for operations running behind simulated latency.

use tokio::task::JoinHandle;

use super::{ContentCalendar, Slot};
use crate::error::{CalendarError, Result};

/// Outcome types that have a "cancelled" value.
pub trait Cancellable {
    fn cancelled() -> Self;
}

/// Owns one in-flight operation.
///
/// Dropping the handle does not cancel the operation; call
/// [`OperationHandle::cancel`] for that.
pub struct OperationHandle<T> {
    task: JoinHandle<Result<T>>,
    ticket: u64,
    slot: Slot,
    calendar: ContentCalendar,
}

impl<T: Cancellable> OperationHandle<T> {
    pub(crate) fn new(
        task: JoinHandle<Result<T>>,
        ticket: u64,
        slot: Slot,
        calendar: ContentCalendar,
    ) -> Self {
        Self {
            task,
            ticket,
            slot,
            calendar,
        }
    }

    /// Cancels the operation if it has not applied its effect yet.
    ///
    /// Returns `false` when the operation already finished or was
    /// cancelled by someone else.
    pub fn cancel(&self) -> bool {
        self.calendar.cancel_ticket(self.slot, self.ticket)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the operation to finish.
    ///
    /// # Errors
    ///
    /// Propagates the operation's own error, or `CalendarError::Runtime`
    /// if the task panicked.
    pub async fn wait(self) -> Result<T> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Ok(T::cancelled()),
            Err(e) => Err(CalendarError::Runtime {
                message: format!("Task join error: {e}"),
            }),
        }
    }
}
