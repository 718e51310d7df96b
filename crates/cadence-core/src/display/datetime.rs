//! DateTime display utilities.

use std::fmt;

use crate::dates;

/// A stored record timestamp, formatted as `Www YYYY-MM-DD HH:MM` in local
/// time.
///
/// Timestamps that do not parse are shown verbatim with an `unplaced`
/// marker instead of failing.
pub struct LocalDateTime<'a>(pub &'a str);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match dates::parse_local(self.0) {
            Some(at) => write!(f, "{}", at.strftime("%a %Y-%m-%d %H:%M")),
            None => write!(f, "unplaced ('{}')", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime() {
        assert_eq!(
            LocalDateTime("2024-05-10T09:00").to_string(),
            "Fri 2024-05-10 09:00"
        );
        assert_eq!(LocalDateTime("soon").to_string(), "unplaced ('soon')");
    }
}
