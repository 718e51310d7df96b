//! Month grid construction.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ ScheduledItems  │    │   EventIndex    │    │   MonthGrid     │
//! │  (unordered)    │───▶│ (day key → the  │───▶│ (Mon..Sun rows, │
//! │                 │    │  day's items)   │    │  CalendarDays)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The index is rebuilt from scratch whenever the item collection changes;
//! grids are cheap views computed from an index on demand.

pub mod grid;
pub mod index;

pub use grid::{build_month_grid, MonthGrid};
pub use index::EventIndex;
