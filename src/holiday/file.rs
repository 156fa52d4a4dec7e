//! Bank-holiday text files
//!
//! Holidays can be exported to, and imported from, a plain text file with
//! one holiday per line:
//!
//! ```text
//! 25/12/2024, Christmas Day
//! 26/12/2024, Boxing Day
//! ```
//!
//! This lets a machine without internet access reuse holidays fetched
//! elsewhere.

use chrono::NaiveDate;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

use super::error::HolidayError;
use super::BankHoliday;

/// Date format used in holiday files
pub const FILE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Separator between the date and the description
const SEPARATOR: &str = ", ";

fn line_pattern() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    LINE_RE.get_or_init(|| {
        Regex::new(r"^\d\d/\d\d/\d\d\d\d,\s([A-Za-z\s'])+$").expect("Invalid regex pattern")
    })
}

/// Outcome of checking a holiday file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileValidation {
    /// Every line is well formed
    Valid { holidays: usize },

    /// The first offending line (1-based)
    Invalid { line: usize, content: String },
}

impl FileValidation {
    /// True when the file can be imported
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// A bank-holiday text file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankHolidayFile {
    path: PathBuf,
}

impl BankHolidayFile {
    /// Wrap a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name part of the path
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// True if the file has a `.txt` extension
    pub fn is_text_file(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "txt")
    }

    /// Format one holiday as a file line
    pub fn to_line(holiday: &BankHoliday) -> String {
        format!(
            "{}{}{}",
            holiday.date.format(FILE_DATE_FORMAT),
            SEPARATOR,
            holiday.local_name
        )
    }

    /// Parse one file line
    ///
    /// Returns `None` if the line does not match the format or the date does
    /// not exist (e.g. `31/02/2024`).
    pub fn from_line(line: &str) -> Option<BankHoliday> {
        if !line_pattern().is_match(line) {
            return None;
        }

        let (date_part, description) = line.split_once(',')?;
        let date = NaiveDate::parse_from_str(date_part, FILE_DATE_FORMAT).ok()?;

        Some(BankHoliday::new(date, description.trim()))
    }

    /// Check every line of the file, stopping at the first bad one
    ///
    /// Blank lines are ignored.
    pub fn validate(&self) -> Result<FileValidation, HolidayError> {
        let content = fs::read_to_string(&self.path)?;
        let mut holidays = 0;

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if Self::from_line(line).is_none() {
                debug!(path = %self.path.display(), line = index + 1, "Invalid bank holiday line");
                return Ok(FileValidation::Invalid {
                    line: index + 1,
                    content: line.to_string(),
                });
            }
            holidays += 1;
        }

        Ok(FileValidation::Valid { holidays })
    }

    /// Read every holiday in the file, sorted by date
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidLine` for the first malformed line and
    /// `HolidayError::Io` if the file cannot be read
    pub fn read(&self) -> Result<Vec<BankHoliday>, HolidayError> {
        let content = fs::read_to_string(&self.path)?;
        let mut holidays = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let holiday = Self::from_line(line).ok_or_else(|| HolidayError::InvalidLine {
                line: index + 1,
                content: line.to_string(),
            })?;
            holidays.push(holiday);
        }

        holidays.sort_by_key(|h| h.date);
        info!(path = %self.path.display(), count = holidays.len(), "Imported bank holidays");
        Ok(holidays)
    }

    /// Write holidays to the file, one per line
    ///
    /// An existing file is only replaced when `overwrite` is set.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::FileExists` if the file exists and `overwrite`
    /// is false
    pub fn write(&self, holidays: &[BankHoliday], overwrite: bool) -> Result<(), HolidayError> {
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => HolidayError::FileExists(self.path.clone()),
            _ => HolidayError::Io(e),
        })?;

        for holiday in holidays {
            writeln!(file, "{}", Self::to_line(holiday))?;
        }

        info!(path = %self.path.display(), count = holidays.len(), "Exported bank holidays");
        Ok(())
    }

    /// Delete the file
    pub fn delete(&self) -> Result<(), HolidayError> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}

impl std::fmt::Display for BankHolidayFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bank Holiday File [path = {}]", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_line() {
        let holiday = BankHoliday::new(date(2024, 5, 6), "Early May Bank Holiday");
        assert_eq!(
            BankHolidayFile::to_line(&holiday),
            "06/05/2024, Early May Bank Holiday"
        );
    }

    #[test]
    fn test_from_line() {
        let holiday = BankHolidayFile::from_line("01/01/2024, New Year's Day").unwrap();
        assert_eq!(holiday.date, date(2024, 1, 1));
        assert_eq!(holiday.local_name, "New Year's Day");
    }

    #[test]
    fn test_from_line_rejects_bad_input() {
        // US-style date that does not exist
        assert!(BankHolidayFile::from_line("12/25/1993, Christmas Day").is_none());
        // missing description
        assert!(BankHolidayFile::from_line("25/12/2024, ").is_none());
        // wrong separator
        assert!(BankHolidayFile::from_line("25/12/2024; Christmas Day").is_none());
        // digits in the description
        assert!(BankHolidayFile::from_line("25/12/2024, Christmas 2024").is_none());
        // ISO date
        assert!(BankHolidayFile::from_line("2024-12-25, Christmas Day").is_none());
    }

    #[test]
    fn test_is_text_file() {
        assert!(BankHolidayFile::new("holidays.txt").is_text_file());
        assert!(!BankHolidayFile::new("holidays.csv").is_text_file());
        assert!(!BankHolidayFile::new("holidays").is_text_file());
        assert_eq!(
            BankHolidayFile::new("/tmp/x/holidays.txt").file_name().as_deref(),
            Some("holidays.txt")
        );
    }
}
