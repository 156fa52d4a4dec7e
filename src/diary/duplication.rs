//! Duplication diary generation
//!
//! Masters are duplicated the week after recording: collected on the
//! Tuesday, pouches prepared on the Wednesday, copied and posted on the
//! Thursday. Bank holidays play no part here.

use chrono::{Datelike, Duration, NaiveDate};

use super::schedule::{DuplicationEntry, DuplicationSchedule, RecordingEntry, RecordingSchedule};

/// Tuesday of the week after the one containing `date`
///
/// Weeks run Monday to Sunday, so a Monday recording is collected eight days
/// later and a Tuesday recording seven days later.
pub fn collect_date_for(date: NaiveDate) -> NaiveDate {
    let week_start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    week_start + Duration::days(8)
}

/// Derive the duplication entry for a single recording
pub fn duplication_entry_for(entry: &RecordingEntry) -> DuplicationEntry {
    let collect_date = collect_date_for(entry.recording_date);
    let prep_date = collect_date + Duration::days(1);
    let copy_date = prep_date + Duration::days(1);

    DuplicationEntry {
        month: entry.recording_date.month(),
        collect_date,
        prep_date,
        copy_date,
    }
}

/// Derive the duplication diary from the recording entries, in the same order
pub fn generate_duplication_schedule(entries: &[RecordingEntry]) -> Vec<DuplicationEntry> {
    entries.iter().map(duplication_entry_for).collect()
}

impl DuplicationSchedule {
    /// Build the duplication diary that follows a recording diary
    pub fn from_recording(recording: &RecordingSchedule) -> Self {
        Self {
            year: recording.year,
            entries: generate_duplication_schedule(&recording.entries),
        }
    }
}
