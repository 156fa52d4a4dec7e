//! End-to-end diary generation against real holiday calendars, plus
//! property tests over arbitrary years and holiday sets

mod common;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use common::{date, england_2024, roster};
use ddsm_diaries::diary::{
    generate_duplication_schedule, generate_recording_schedule, render, Diary, DiaryError,
    DuplicationSchedule, OutputFormat, RecordingRequest, RecordingSchedule, Team,
};
use ddsm_diaries::holiday::{HolidayCalendar, HolidayOracle};
use proptest::prelude::*;

fn request(first: NaiveDate, edition: u32) -> RecordingRequest {
    RecordingRequest {
        year: first.year(),
        first_edition_date: first,
        start_edition: edition,
        roster: roster(),
    }
}

#[test]
fn test_england_2024_recording_diary() {
    let holidays = HolidayCalendar::from_dates(england_2024());
    let schedule = generate_recording_schedule(&request(date(2024, 1, 2), 251), &holidays).unwrap();

    let dates: Vec<_> = schedule.entries.iter().map(|e| e.recording_date).collect();
    assert_eq!(
        dates,
        vec![
            date(2024, 1, 2),
            date(2024, 2, 5),
            date(2024, 3, 5),
            date(2024, 4, 8), // Easter Monday
            date(2024, 5, 7),
            date(2024, 6, 3),
            date(2024, 7, 2),
            date(2024, 8, 5),
            date(2024, 9, 3),
            date(2024, 10, 7),
            date(2024, 11, 5),
            date(2024, 12, 2),
        ]
    );

    assert_eq!(schedule.entries[0].team, Team::Decani);
    assert_eq!(schedule.entries[0].compiler, "Alice");
    assert_eq!(schedule.entries[1].team, Team::Cantoris);
    assert_eq!(schedule.entries[1].assistant, "Dave");
    assert_eq!(schedule.entries[11].edition, 262);
    assert_eq!(schedule.next_edition(), Some(263));
    assert!(schedule.is_valid());
}

#[test]
fn test_england_2024_duplication_diary() {
    let holidays = HolidayCalendar::from_dates(england_2024());
    let recording = generate_recording_schedule(&request(date(2024, 1, 2), 1), &holidays).unwrap();
    let duplication = DuplicationSchedule::from_recording(&recording);

    let april = duplication.entry_for_month(4).unwrap();
    assert_eq!(april.collect_date, date(2024, 4, 16));
    assert_eq!(april.prep_date, date(2024, 4, 17));
    assert_eq!(april.copy_date, date(2024, 4, 18));

    // Tuesday recording, collected the following Tuesday
    let january = duplication.entry_for_month(1).unwrap();
    assert_eq!(january.collect_date, date(2024, 1, 9));
}

#[test]
fn test_duplication_month_follows_spilled_recording() {
    // Every Tuesday in April 2024 is a holiday, so April's Decani slot lands in May
    let holidays = HolidayCalendar::from_dates(
        [2, 9, 16, 23, 30].into_iter().map(|day| date(2024, 4, day)),
    );
    let recording = generate_recording_schedule(&request(date(2024, 1, 1), 1), &holidays).unwrap();

    let april = recording.entry_for_month(4).unwrap();
    assert_eq!(april.recording_date, date(2024, 5, 7));
    assert!(april.spills_into_next_month());

    let duplication = generate_duplication_schedule(&recording.entries);
    assert_eq!(duplication[3].month, 5);
    assert_eq!(duplication[3].collect_date, date(2024, 5, 14));
}

#[test]
fn test_first_edition_on_new_years_day_rejected() {
    let holidays = HolidayCalendar::from_dates(england_2024());
    let err = generate_recording_schedule(&request(date(2024, 1, 1), 1), &holidays).unwrap_err();
    assert_eq!(err, DiaryError::FirstEditionOnBankHoliday { date: date(2024, 1, 1) });
}

#[test]
fn test_render_all_formats() {
    let holidays = HolidayCalendar::empty();
    let recording =
        generate_recording_schedule(&request(date(2024, 1, 1), 400), &holidays).unwrap();
    let duplication = DuplicationSchedule::from_recording(&recording);

    for format in [OutputFormat::Text, OutputFormat::Markdown, OutputFormat::Json] {
        let text = render(&Diary::Recording(recording.clone()), format).unwrap();
        assert!(text.contains("400"), "{format} output lacks the first edition");

        let text = render(&Diary::Duplication(duplication.clone()), format).unwrap();
        assert!(!text.is_empty());
    }

    let json = render(&Diary::Recording(recording.clone()), OutputFormat::Json).unwrap();
    assert_eq!(RecordingSchedule::from_json(&json).unwrap(), recording);
}

// ============================================================================
// Properties
// ============================================================================

fn first_edition_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..=2499, prop::bool::ANY).prop_map(|(year, monday)| {
        let weekday = if monday { Weekday::Mon } else { Weekday::Tue };
        NaiveDate::from_weekday_of_month_opt(year, 1, weekday, 1).unwrap()
    })
}

fn holidays_strategy(first: NaiveDate) -> impl Strategy<Value = HolidayCalendar> {
    prop::collection::vec(1i64..395, 0..40).prop_map(move |offsets| {
        let jan_first = NaiveDate::from_ymd_opt(first.year(), 1, 1).unwrap();
        HolidayCalendar::from_dates(
            offsets
                .into_iter()
                .map(|d| jan_first + Duration::days(d))
                .filter(|d| *d != first),
        )
    })
}

proptest! {
    #[test]
    fn prop_schedule_invariants(
        (first, holidays) in first_edition_strategy()
            .prop_flat_map(|first| (Just(first), holidays_strategy(first))),
        edition in 1u32..100_000,
    ) {
        let schedule = generate_recording_schedule(&request(first, edition), &holidays).unwrap();

        prop_assert!(schedule.is_valid());
        prop_assert_eq!(schedule.entries[0].recording_date, first);
        prop_assert_eq!(schedule.entries[0].edition, edition);

        for (i, entry) in schedule.entries.iter().enumerate() {
            prop_assert!(!holidays.is_bank_holiday(entry.recording_date));
            prop_assert_eq!(Team::for_weekday(entry.recording_date.weekday()), Some(entry.team));
            if i > 0 {
                prop_assert_ne!(entry.team, schedule.entries[i - 1].team);
            }
        }
    }

    #[test]
    fn prop_duplication_follows_recording(first in first_edition_strategy()) {
        let schedule =
            generate_recording_schedule(&request(first, 1), &HolidayCalendar::empty()).unwrap();
        let duplication = generate_duplication_schedule(&schedule.entries);

        prop_assert_eq!(duplication.len(), 12);
        for (recording, dup) in schedule.entries.iter().zip(&duplication) {
            prop_assert_eq!(dup.month, recording.recording_date.month());
            prop_assert_eq!(dup.collect_date.weekday(), Weekday::Tue);
            let gap = (dup.collect_date - recording.recording_date).num_days();
            prop_assert!(gap == 7 || gap == 8);
            prop_assert_eq!(dup.prep_date, dup.collect_date + Duration::days(1));
            prop_assert_eq!(dup.copy_date, dup.collect_date + Duration::days(2));
        }
    }
}
