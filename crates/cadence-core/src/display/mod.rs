//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers add context-specific formatting for collections and
//! operation results. All output is markdown, rendered by the CLI.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Item, Grid...) │───▶│ Labels          │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers (Items, Suggestions)
//! - [`results`]: operation results (CreateResult, UpdateResult, DismissResult)
//! - [`status`]: confirmation and validation messages
//! - [`datetime`]: timestamp formatting
//! - [`labels`]: display names and icons for enumerations
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use cadence_core::display::{Label, OperationStatus};
//! use cadence_core::models::Platform;
//!
//! assert_eq!(Platform::Linkedin.label(), "LinkedIn");
//!
//! let status = OperationStatus::success("Suggestion dismissed".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod labels;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Items, Suggestions};
pub use datetime::LocalDateTime;
pub use labels::Label;
pub use results::{CreateResult, DismissResult, UpdateResult};
pub use status::{FieldErrorList, OperationStatus};
