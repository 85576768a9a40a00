//! Match dates as stored by the document store.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Free-text match date.
///
/// The raw text is kept as entered; [`MatchDate::parse`] turns it into a
/// calendar date when it matches one of the known layouts. Ordering is
/// chronological for parseable dates. Unparseable dates sort before all
/// parseable ones, and among themselves by raw text.
///
/// # Examples
///
/// ```rust
/// use matchday::MatchDate;
///
/// let a = MatchDate::new("2024-01-08");
/// let b = MatchDate::new("15/01/2024");
/// assert!(a < b);
/// assert!(MatchDate::new("next friday") < a);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchDate(pub String);

impl MatchDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the calendar day, ignoring any time-of-day component.
    pub fn parse(&self) -> Option<NaiveDate> {
        let raw = self.0.trim();

        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(dt.date());
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
                return Some(d);
            }
        }
        None
    }

    /// Whole days elapsed between this date and `today`.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.parse().map(|d| (today - d).num_days())
    }
}

impl Ord for MatchDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parse()
            .cmp(&other.parse())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for MatchDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MatchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MatchDate {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
