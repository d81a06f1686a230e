use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Value {
    Date(NaiveDate),
    Length(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d (%A)")),
            // Always the plural suffix, even for a single day.
            Self::Length(days) => write!(f, "{days} days"),
        }
    }
}
