//! Recording and duplication diaries
//!
//! The magazine is recorded once a month by one of two teams, Decani and
//! Cantoris, who take it in turns. The week after each recording the master
//! is duplicated and posted out. This module turns a year, the January
//! recording date, the starting edition number and the team roster into both
//! twelve-month diaries.
//!
//! # Modules
//!
//! - [`team`] - Teams and the roster of compilers and assistants
//! - [`schedule`] - Entry and schedule data structures
//! - [`recording`] - Recording diary generation, including bank-holiday roll-forward
//! - [`duplication`] - Duplication diary derived from the recording diary
//! - [`render`] - Text, Markdown and JSON output
//! - [`error`] - Validation errors
//!
//! # Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use ddsm_diaries::diary::{
//!     generate_duplication_schedule, generate_recording_schedule, RecordingRequest, Roster,
//! };
//! use ddsm_diaries::holiday::HolidayCalendar;
//!
//! let easter_monday = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! let holidays = HolidayCalendar::from_dates([easter_monday]);
//!
//! let request = RecordingRequest {
//!     year: 2024,
//!     first_edition_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     start_edition: 400,
//!     roster: Roster::new("Alice", "Bob", "Carol", "Dave"),
//! };
//!
//! let recording = generate_recording_schedule(&request, &holidays).unwrap();
//! let duplication = generate_duplication_schedule(&recording.entries);
//!
//! assert_eq!(recording.entries[3].recording_date, NaiveDate::from_ymd_opt(2024, 4, 8).unwrap());
//! assert_eq!(duplication.len(), 12);
//! ```

pub mod duplication;
pub mod error;
pub mod recording;
pub mod render;
pub mod schedule;
pub mod team;

// Re-export main types
pub use duplication::{collect_date_for, generate_duplication_schedule};
pub use error::{DiaryError, DiaryResult};
pub use recording::{generate_recording_schedule, RecordingRequest, MAX_YEAR, MIN_YEAR};
pub use render::{ordinal_suffix, render, OutputFormat};
pub use schedule::{
    Diary, DuplicationEntry, DuplicationSchedule, RecordingEntry, RecordingSchedule,
};
pub use team::{Roster, Team};
