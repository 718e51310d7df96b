//! Transient form state for new drafts and suggestion edits.
//!
//! Forms are plain records. Every change goes through a pure transition
//! (`apply`) that returns the next form, so two forms can be compared with
//! `==` in tests and nothing mutates behind the caller's back.
//!
//! Drafts and suggestion edits share one rule set, see [`validate`]:
//!
//! | field    | rule                                           |
//! |----------|------------------------------------------------|
//! | title    | non-empty after trimming                       |
//! | platform | one of the closed [`Platform`] enumeration      |
//! | date     | present, `YYYY-MM-DD`                          |
//! | time     | present, `HH:MM` (seconds optional)            |
//!
//! [`Platform`]: crate::models::Platform

use std::fmt;

use serde::Serialize;

pub mod draft;
pub mod suggestion;
pub mod validate;

pub use draft::{DraftEdit, DraftForm};
pub use suggestion::SuggestionForm;
pub use validate::{validate, ValidFields};

/// Fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Platform,
    Date,
    Time,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Platform => "platform",
            FormField::Date => "date",
            FormField::Time => "time",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
