//! Recording diary generation
//!
//! Recordings happen once a month. January's date is entered by hand and
//! fixes which team starts the year; from February on the teams alternate,
//! each recording on the first of its weekday in the month. A date that
//! lands on a bank holiday is pushed back one week at a time until it
//! doesn't.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{DiaryError, DiaryResult};
use super::schedule::{RecordingEntry, RecordingSchedule, MONTHS_PER_YEAR};
use super::team::{Roster, Team};
use crate::holiday::HolidayOracle;

/// Earliest diary year accepted
pub const MIN_YEAR: i32 = 2000;

/// Latest diary year accepted
pub const MAX_YEAR: i32 = 2500;

/// Upper bound on weekly roll-forward steps for one month
pub const MAX_ROLL_WEEKS: u32 = 53;

/// Largest January edition whose December edition still fits in a `u32`
pub const MAX_START_EDITION: u32 = u32::MAX - (MONTHS_PER_YEAR as u32 - 1);

/// Inputs for one year's recording diary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingRequest {
    /// Diary year
    pub year: i32,

    /// Date of the January recording, carried over from the previous year
    pub first_edition_date: NaiveDate,

    /// Edition recorded in January
    pub start_edition: u32,

    /// Compilers and assistants of both teams
    pub roster: Roster,
}

impl RecordingRequest {
    /// Check every precondition of the scheduler
    ///
    /// The oracle is consulted for the first edition date only.
    pub fn validate(&self, oracle: &impl HolidayOracle) -> DiaryResult<()> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(DiaryError::YearOutOfRange {
                year: self.year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }

        let date = self.first_edition_date;
        if date.year() != self.year {
            return Err(DiaryError::DateNotInYear {
                date,
                year: self.year,
            });
        }

        if date.month() != 1 {
            return Err(DiaryError::DateNotInJanuary { date });
        }

        if Team::for_weekday(date.weekday()).is_none() {
            return Err(DiaryError::InvalidWeekday {
                date,
                weekday: date.weekday(),
            });
        }

        if oracle.is_bank_holiday(date) {
            return Err(DiaryError::FirstEditionOnBankHoliday { date });
        }

        if self.start_edition == 0 {
            return Err(DiaryError::InvalidEdition { edition: 0 });
        }

        if self.start_edition > MAX_START_EDITION {
            return Err(DiaryError::EditionTooLarge {
                edition: self.start_edition,
                max: MAX_START_EDITION,
            });
        }

        self.roster.validate()
    }
}

/// Generate the twelve recording entries for a year
///
/// Input is validated first; a failing precondition returns an error and no
/// entries.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use ddsm_diaries::diary::{generate_recording_schedule, RecordingRequest, Roster, Team};
/// use ddsm_diaries::holiday::HolidayCalendar;
///
/// let request = RecordingRequest {
///     year: 2024,
///     first_edition_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     start_edition: 400,
///     roster: Roster::new("Alice", "Bob", "Carol", "Dave"),
/// };
/// let schedule = generate_recording_schedule(&request, &HolidayCalendar::empty()).unwrap();
/// assert_eq!(schedule.entries.len(), 12);
/// assert_eq!(schedule.entries[0].team, Team::Cantoris);
/// ```
pub fn generate_recording_schedule(
    request: &RecordingRequest,
    oracle: &impl HolidayOracle,
) -> DiaryResult<RecordingSchedule> {
    request.validate(oracle)?;

    let first = request.first_edition_date;
    let mut team = Team::for_weekday(first.weekday()).ok_or(DiaryError::InvalidWeekday {
        date: first,
        weekday: first.weekday(),
    })?;
    let mut edition = request.start_edition;
    let mut entries = Vec::with_capacity(MONTHS_PER_YEAR);

    entries.push(build_entry(1, first, edition, team, &request.roster));

    for month in 2..=12 {
        team = team.other();
        edition = edition.checked_add(1).ok_or(DiaryError::EditionTooLarge {
            edition: request.start_edition,
            max: MAX_START_EDITION,
        })?;

        let candidate = first_weekday_in_month(request.year, month, team.weekday())?;
        let date = roll_past_holidays(candidate, month, oracle)?;

        entries.push(build_entry(month, date, edition, team, &request.roster));
    }

    debug!(
        year = request.year,
        first_edition = request.start_edition,
        last_edition = edition,
        "Recording diary generated"
    );

    Ok(RecordingSchedule {
        year: request.year,
        entries,
    })
}

fn build_entry(
    month: u32,
    recording_date: NaiveDate,
    edition: u32,
    team: Team,
    roster: &Roster,
) -> RecordingEntry {
    RecordingEntry {
        month,
        recording_date,
        edition,
        team,
        compiler: roster.compiler(team).to_string(),
        assistant: roster.assistant(team).to_string(),
    }
}

/// First occurrence of a weekday in a month
pub fn first_weekday_in_month(year: i32, month: u32, weekday: Weekday) -> DiaryResult<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, 1)
        .ok_or(DiaryError::MonthOutOfRange { year, month })
}

/// Push a date back a week at a time until the oracle says it is a working day
///
/// The month is only used to notice when the date leaves it; rolling carries
/// on into the next month if it has to.
pub fn roll_past_holidays(
    candidate: NaiveDate,
    month: u32,
    oracle: &impl HolidayOracle,
) -> DiaryResult<NaiveDate> {
    let mut date = candidate;
    let mut weeks = 0;

    while oracle.is_bank_holiday(date) {
        if weeks == MAX_ROLL_WEEKS {
            return Err(DiaryError::NoAvailableDate {
                month,
                from: candidate,
                weeks_tried: weeks,
            });
        }

        debug!(date = %date, month, "Recording date is a bank holiday, rolling forward a week");
        date += Duration::weeks(1);
        weeks += 1;
    }

    if date.month() != month {
        warn!(
            month,
            candidate = %candidate,
            resolved = %date,
            "Every candidate in the month was a bank holiday, recording moved to the next month"
        );
    }

    Ok(date)
}
