//! Core library for the Cadence content calendar.
//!
//! Given scheduled content items and AI scheduling suggestions, this crate
//! builds a navigable month grid binding items to calendar days, validates
//! and creates new items from draft input, and manages each suggestion as it
//! is edited, inserted as an item, or dismissed.
//!
//! # Layers
//!
//! - [`dates`]: pure day-key and month arithmetic
//! - [`calendar`]: the event index and month grid builder
//! - [`forms`]: draft and suggestion forms with shared validation
//! - [`scheduler`]: [`ContentCalendar`], the stateful facade with async
//!   submission and refresh
//! - [`display`]: markdown formatting for the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{CalendarBuilder, Clock, DraftEdit, SubmitOutcome};
//! use jiff::civil::datetime;
//!
//! # async fn example() -> cadence_core::Result<()> {
//! let calendar = CalendarBuilder::new()
//!     .with_clock(Clock::Fixed(datetime(2024, 5, 10, 8, 10, 0, 0)))
//!     .build();
//!
//! let form = calendar.draft().apply(DraftEdit::Title("Launch teaser".to_string()));
//! if let SubmitOutcome::Committed(item) = calendar.create_draft(form).await? {
//!     println!("{item}");
//! }
//!
//! println!("{}", calendar.month_grid()?);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod dataset;
pub mod dates;
pub mod display;
pub mod error;
pub mod forms;
pub mod models;
pub mod scheduler;

// Re-export commonly used types
pub use calendar::{build_month_grid, EventIndex, MonthGrid};
pub use dataset::Dataset;
pub use dates::DateKey;
pub use display::{
    CreateResult, DismissResult, FieldErrorList, Items, OperationStatus, Suggestions,
    UpdateResult,
};
pub use error::{CalendarError, FieldErrors, Result};
pub use forms::{DraftEdit, DraftForm, FormField, SuggestionForm};
pub use models::{
    CalendarDay, CalendarSummary, ContentType, DraftStatus, ItemStatus, Platform, Priority,
    Resolution, ScheduledItem, Suggestion, SuggestionPatch, ViewFilter,
};
pub use scheduler::{
    CalendarBuilder, Clock, ContentCalendar, DraftPhase, MonthStep, RefreshHandle,
    RefreshOutcome, RefreshReport, StaticSource, SubmissionHandle, SubmitOutcome,
    SuggestionOutcome, SuggestionSource,
};
