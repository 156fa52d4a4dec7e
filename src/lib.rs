//! ddsm-diaries - recording and duplication diaries for a talking newspaper
//!
//! Computes, for a year, the twelve monthly recording dates of a talking
//! newspaper, with the team, compiler and assistant for each edition, and
//! the dependent collect/prep/copy dates of the duplication diary. Recording
//! dates that land on a bank holiday move on a week.
//!
//! # Architecture
//!
//! - [`diary`] - Pure scheduling core, domain types and rendering
//! - [`holiday`] - Bank holidays from the REST API, a text file or by hand
//! - [`internet`] - Connectivity probe
//! - [`config`] - Configuration management and settings
//! - [`error`] - Unified error type
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use ddsm_diaries::prelude::*;
//!
//! let request = RecordingRequest {
//!     year: 2024,
//!     first_edition_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     start_edition: 1,
//!     roster: Roster::new("Alice", "Bob", "Carol", "Dave"),
//! };
//!
//! let recording = generate_recording_schedule(&request, &HolidayCalendar::empty()).unwrap();
//! let duplication = generate_duplication_schedule(&recording.entries);
//! assert_eq!(recording.entries.len(), 12);
//! assert_eq!(duplication.len(), 12);
//! ```

pub mod config;
pub mod diary;
pub mod error;
pub mod holiday;
pub mod internet;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::diary::{
        generate_duplication_schedule, generate_recording_schedule, Diary, DuplicationEntry,
        DuplicationSchedule, OutputFormat, RecordingEntry, RecordingRequest, RecordingSchedule,
        Roster, Team,
    };
    pub use crate::error::{DiariesErrorTrait, Error, ErrorCategory, Result};
    pub use crate::holiday::{
        BankHoliday, HolidayCalendar, HolidayOracle, HolidayService, HolidaySource,
    };
    pub use crate::internet::{InternetProbe, InternetStatus};
}

// Direct re-exports for convenience
pub use diary::{generate_duplication_schedule, generate_recording_schedule};
pub use holiday::{BankHoliday, HolidayOracle};
