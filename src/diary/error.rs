//! Error types for the diary module

use chrono::{NaiveDate, Weekday};
use std::fmt;

/// Result type for diary operations
pub type DiaryResult<T> = Result<T, DiaryError>;

/// Diary-specific errors
///
/// Apart from `NoAvailableDate`, `MonthOutOfRange` and `SerializationError`,
/// every variant is a caller validation failure raised before any entry is
/// computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiaryError {
    /// Diary year outside the supported range
    YearOutOfRange {
        year: i32,
        min: i32,
        max: i32,
    },

    /// First edition date is not in the diary year
    DateNotInYear {
        date: NaiveDate,
        year: i32,
    },

    /// First edition date is not in January
    DateNotInJanuary {
        date: NaiveDate,
    },

    /// First edition date does not fall on a Monday or Tuesday
    InvalidWeekday {
        date: NaiveDate,
        weekday: Weekday,
    },

    /// First edition date is a bank holiday
    FirstEditionOnBankHoliday {
        date: NaiveDate,
    },

    /// Edition number must be positive
    InvalidEdition {
        edition: i64,
    },

    /// Edition too large for the year's editions to stay in range
    EditionTooLarge {
        edition: u32,
        max: u32,
    },

    /// A roster name is blank
    BlankRosterName {
        field: String,
    },

    /// Roll-forward never found a working day
    NoAvailableDate {
        month: u32,
        from: NaiveDate,
        weeks_tried: u32,
    },

    /// Month has no such weekday
    MonthOutOfRange {
        year: i32,
        month: u32,
    },

    /// Serialization/deserialization error
    SerializationError {
        reason: String,
    },
}

impl fmt::Display for DiaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearOutOfRange { year, min, max } => {
                write!(f, "Year should be between {} and {}. You entered {}", min, max, year)
            }
            Self::DateNotInYear { date, year } => {
                write!(
                    f,
                    "The selected date {} should match selected year {}",
                    date.format("%d/%m/%Y"),
                    year
                )
            }
            Self::DateNotInJanuary { date } => {
                write!(
                    f,
                    "The selected date {} should be in January",
                    date.format("%d/%m/%Y")
                )
            }
            Self::InvalidWeekday { date, weekday } => {
                write!(
                    f,
                    "The selected date {} should fall on a Monday or Tuesday, not a {}",
                    date.format("%d/%m/%Y"),
                    weekday
                )
            }
            Self::FirstEditionOnBankHoliday { date } => {
                write!(f, "The selected date {} is a bank holiday", date.format("%d/%m/%Y"))
            }
            Self::InvalidEdition { edition } => {
                write!(f, "Edition should be greater than 0. You entered {}", edition)
            }
            Self::EditionTooLarge { edition, max } => {
                write!(f, "Edition should be at most {}. You entered {}", max, edition)
            }
            Self::BlankRosterName { field } => {
                write!(f, "Roster name '{}' must not be blank", field)
            }
            Self::NoAvailableDate {
                month,
                from,
                weeks_tried,
            } => {
                write!(
                    f,
                    "No non-holiday date found for month {} after rolling {} weeks from {}",
                    month, weeks_tried, from
                )
            }
            Self::MonthOutOfRange { year, month } => {
                write!(f, "Month {} of {} is not a calendar month", month, year)
            }
            Self::SerializationError { reason } => {
                write!(f, "Serialization error: {}", reason)
            }
        }
    }
}

impl std::error::Error for DiaryError {}

impl From<serde_json::Error> for DiaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}

impl DiaryError {
    /// Create a blank roster name error
    pub fn blank_roster_name(field: impl Into<String>) -> Self {
        Self::BlankRosterName {
            field: field.into(),
        }
    }

    /// Check if this is an input validation failure
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            Self::NoAvailableDate { .. }
                | Self::MonthOutOfRange { .. }
                | Self::SerializationError { .. }
        )
    }

    /// Check if the error is recoverable
    ///
    /// Nothing in the diary core is worth retrying: the same input always
    /// fails the same way.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_out_of_range_message() {
        let err = DiaryError::YearOutOfRange {
            year: 1999,
            min: 2000,
            max: 2500,
        };
        assert!(err.to_string().contains("1999"));
        assert!(err.to_string().contains("2000"));
    }

    #[test]
    fn test_invalid_weekday_message() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let err = DiaryError::InvalidWeekday {
            date,
            weekday: Weekday::Wed,
        };
        let msg = err.to_string();
        assert!(msg.contains("03/01/2024"));
        assert!(msg.contains("Wed"));
    }

    #[test]
    fn test_is_validation() {
        assert!(DiaryError::InvalidEdition { edition: 0 }.is_validation());
        assert!(DiaryError::blank_roster_name("decani_compiler").is_validation());
        assert!(DiaryError::EditionTooLarge {
            edition: u32::MAX,
            max: u32::MAX - 11
        }
        .is_validation());

        let roll = DiaryError::NoAvailableDate {
            month: 4,
            from: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            weeks_tried: 53,
        };
        assert!(!roll.is_validation());
        assert!(!roll.is_recoverable());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: DiaryError = json_err.into();
        assert!(matches!(err, DiaryError::SerializationError { .. }));
    }
}
