//! The bank-holiday question asked by the schedulers
//!
//! Schedulers only need to know whether a given date is a bank holiday.
//! Whatever source answers it (API, cache, file, manual list) is resolved
//! into a [`HolidayCalendar`] before scheduling starts.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;

use super::BankHoliday;

/// Answers whether a date is a bank holiday
pub trait HolidayOracle {
    /// True if `date` is a bank holiday
    fn is_bank_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidayOracle for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_bank_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Resolved set of bank-holiday dates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Calendar with no holidays
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from plain dates
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Build from holiday records
    pub fn from_holidays<'a>(holidays: impl IntoIterator<Item = &'a BankHoliday>) -> Self {
        Self::from_dates(holidays.into_iter().map(|h| h.date))
    }

    /// Merge another set of holidays in
    pub fn extend(&mut self, holidays: &[BankHoliday]) {
        self.dates.extend(holidays.iter().map(|h| h.date));
    }

    /// Number of holiday dates
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when no holidays are known
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays falling in a year, in date order
    pub fn dates_in_year(&self, year: i32) -> Vec<NaiveDate> {
        self.dates
            .iter()
            .filter(|d| d.year() == year)
            .copied()
            .collect()
    }

    /// First date on or after `date`, stepping a week at a time, that is not a holiday
    pub fn next_non_bank_holiday(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while self.dates.contains(&current) {
            current += Duration::weeks(1);
        }
        current
    }
}

impl HolidayOracle for HolidayCalendar {
    fn is_bank_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_membership() {
        let calendar = HolidayCalendar::from_dates([date(2024, 12, 25), date(2024, 12, 26)]);
        assert!(calendar.is_bank_holiday(date(2024, 12, 25)));
        assert!(!calendar.is_bank_holiday(date(2024, 12, 24)));
        assert_eq!(calendar.len(), 2);
    }

    #[test]
    fn test_closure_oracle() {
        let only_mondays = |d: NaiveDate| d.weekday() == chrono::Weekday::Mon;
        assert!(only_mondays.is_bank_holiday(date(2024, 1, 1)));
        assert!(!only_mondays.is_bank_holiday(date(2024, 1, 2)));
    }

    #[test]
    fn test_next_non_bank_holiday() {
        let calendar = HolidayCalendar::from_dates([date(2024, 5, 6), date(2024, 5, 13)]);
        assert_eq!(calendar.next_non_bank_holiday(date(2024, 5, 6)), date(2024, 5, 20));
        assert_eq!(calendar.next_non_bank_holiday(date(2024, 5, 7)), date(2024, 5, 7));
    }

    #[test]
    fn test_dates_in_year() {
        let calendar = HolidayCalendar::from_dates([date(2025, 1, 1), date(2024, 12, 25)]);
        assert_eq!(calendar.dates_in_year(2025), vec![date(2025, 1, 1)]);
        assert!(calendar.dates_in_year(2023).is_empty());
    }
}
