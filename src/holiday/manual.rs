//! Bank holidays entered by hand
//!
//! Used when neither the REST API nor a holiday file is available. Entries
//! are kept sorted and restricted to the year being scheduled.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::error::HolidayError;
use super::oracle::HolidayCalendar;
use super::BankHoliday;

/// Hand-entered holidays for one year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualHolidays {
    year: i32,
    holidays: Vec<BankHoliday>,
}

impl ManualHolidays {
    /// Start an empty list for `year`
    pub fn new(year: i32) -> Self {
        Self {
            year,
            holidays: Vec::new(),
        }
    }

    /// Year entries must fall in
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Add a holiday
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidEntry` if the date is outside the year,
    /// the description is blank, or the date is already listed
    pub fn add(&mut self, date: NaiveDate, description: &str) -> Result<(), HolidayError> {
        if date.year() != self.year {
            return Err(HolidayError::InvalidEntry(format!(
                "Date {} is not in year {}",
                date, self.year
            )));
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(HolidayError::InvalidEntry(
                "Bank holiday description cannot be blank".to_string(),
            ));
        }

        match self.holidays.binary_search_by_key(&date, |h| h.date) {
            Ok(_) => Err(HolidayError::InvalidEntry(format!(
                "{} is already a bank holiday",
                date.format("%d/%m/%Y")
            ))),
            Err(index) => {
                debug!(%date, description, "Adding manual bank holiday");
                self.holidays
                    .insert(index, BankHoliday::new(date, description));
                Ok(())
            }
        }
    }

    /// Remove the holiday on `date`, returning it if present
    pub fn remove(&mut self, date: NaiveDate) -> Option<BankHoliday> {
        let index = self
            .holidays
            .binary_search_by_key(&date, |h| h.date)
            .ok()?;
        Some(self.holidays.remove(index))
    }

    /// Holidays in date order
    pub fn list(&self) -> &[BankHoliday] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Calendar built from the entries
    pub fn to_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::from_holidays(&self.holidays)
    }

    /// Consume into the sorted holiday list
    pub fn into_holidays(self) -> Vec<BankHoliday> {
        self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayOracle;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_keeps_sorted() {
        let mut manual = ManualHolidays::new(2024);
        manual.add(date(2024, 12, 25), "Christmas Day").unwrap();
        manual.add(date(2024, 1, 1), "New Year's Day").unwrap();
        manual.add(date(2024, 5, 6), "  Early May Bank Holiday ").unwrap();

        let dates: Vec<_> = manual.list().iter().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 5, 6), date(2024, 12, 25)]);
        assert_eq!(manual.list()[1].local_name, "Early May Bank Holiday");
    }

    #[test]
    fn test_add_rejects_invalid_entries() {
        let mut manual = ManualHolidays::new(2024);
        assert!(manual.add(date(2025, 1, 1), "New Year's Day").is_err());
        assert!(manual.add(date(2024, 1, 1), "   ").is_err());

        manual.add(date(2024, 1, 1), "New Year's Day").unwrap();
        let err = manual.add(date(2024, 1, 1), "Again").unwrap_err();
        assert!(matches!(err, HolidayError::InvalidEntry(_)));
        assert_eq!(manual.len(), 1);
    }

    #[test]
    fn test_remove_and_calendar() {
        let mut manual = ManualHolidays::new(2024);
        manual.add(date(2024, 3, 29), "Good Friday").unwrap();
        manual.add(date(2024, 4, 1), "Easter Monday").unwrap();

        assert!(manual.to_calendar().is_bank_holiday(date(2024, 4, 1)));
        assert!(manual.remove(date(2024, 4, 1)).is_some());
        assert!(manual.remove(date(2024, 4, 1)).is_none());
        assert!(!manual.to_calendar().is_bank_holiday(date(2024, 4, 1)));
    }
}
