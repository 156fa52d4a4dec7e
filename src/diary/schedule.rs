//! Diary entry and schedule data structures
//!
//! Entries are plain values produced once by the schedulers and never
//! mutated afterwards.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::DiaryResult;
use super::team::Team;

/// Number of entries in a diary, one per calendar month
pub const MONTHS_PER_YEAR: usize = 12;

// ============================================================================
// Recording Entry
// ============================================================================

/// One month of the recording diary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingEntry {
    /// Calendar month (1-12)
    pub month: u32,

    /// Day the recording takes place
    pub recording_date: NaiveDate,

    /// Magazine edition recorded that month
    pub edition: u32,

    /// Team on duty
    pub team: Team,

    /// Compiler of the team on duty
    pub compiler: String,

    /// Assistant of the team on duty
    pub assistant: String,
}

impl RecordingEntry {
    /// True when roll-forward moved the date out of its own month
    pub fn spills_into_next_month(&self) -> bool {
        self.recording_date.month() != self.month
    }
}

// ============================================================================
// Duplication Entry
// ============================================================================

/// One month of the duplication diary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicationEntry {
    /// Month of the recording date this entry derives from
    pub month: u32,

    /// Tuesday the master is collected
    pub collect_date: NaiveDate,

    /// Wednesday the pouches are prepared
    pub prep_date: NaiveDate,

    /// Thursday the master is copied and dispatched
    pub copy_date: NaiveDate,
}

// ============================================================================
// Schedules
// ============================================================================

/// Full recording diary for a year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingSchedule {
    pub year: i32,
    pub entries: Vec<RecordingEntry>,
}

impl RecordingSchedule {
    /// Entry for a month
    pub fn entry_for_month(&self, month: u32) -> Option<&RecordingEntry> {
        self.entries.iter().find(|e| e.month == month)
    }

    /// Entries recorded by one team
    pub fn entries_for_team(&self, team: Team) -> Vec<&RecordingEntry> {
        self.entries.iter().filter(|e| e.team == team).collect()
    }

    /// Edition to carry into next year's January, `None` if it would overflow
    pub fn next_edition(&self) -> Option<u32> {
        self.entries.last().and_then(|e| e.edition.checked_add(1))
    }

    /// Check the structural invariants (12 entries, months 1-12, contiguous editions)
    pub fn is_valid(&self) -> bool {
        self.entries.len() == MONTHS_PER_YEAR
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, e)| e.month as usize == i + 1)
            && self
                .entries
                .windows(2)
                .all(|w| {
                    w[0].edition.checked_add(1) == Some(w[1].edition) && w[1].team != w[0].team
                })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> DiaryResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> DiaryResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

/// Full duplication diary for a year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicationSchedule {
    pub year: i32,
    pub entries: Vec<DuplicationEntry>,
}

impl DuplicationSchedule {
    /// Entry for a month
    pub fn entry_for_month(&self, month: u32) -> Option<&DuplicationEntry> {
        self.entries.iter().find(|e| e.month == month)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> DiaryResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

/// Either diary, for code that renders or stores both kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Diary {
    Recording(RecordingSchedule),
    Duplication(DuplicationSchedule),
}

impl Diary {
    /// Year the diary covers
    pub fn year(&self) -> i32 {
        match self {
            Self::Recording(s) => s.year,
            Self::Duplication(s) => s.year,
        }
    }

    /// Heading used by the renderers
    pub fn title(&self) -> String {
        match self {
            Self::Recording(s) => format!("Recording Diary {}", s.year),
            Self::Duplication(s) => format!("Duplication Diary {}", s.year),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        match self {
            Self::Recording(s) => s.entries.len(),
            Self::Duplication(s) => s.entries.len(),
        }
    }

    /// True when the diary holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(month: u32, date: (i32, u32, u32), edition: u32, team: Team) -> RecordingEntry {
        RecordingEntry {
            month,
            recording_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            edition,
            team,
            compiler: "Compiler".to_string(),
            assistant: "Assistant".to_string(),
        }
    }

    #[test]
    fn test_spills_into_next_month() {
        assert!(!entry(4, (2024, 4, 8), 403, Team::Cantoris).spills_into_next_month());
        assert!(entry(4, (2024, 5, 6), 403, Team::Cantoris).spills_into_next_month());
    }

    #[test]
    fn test_short_schedule_is_invalid() {
        let schedule = RecordingSchedule {
            year: 2024,
            entries: vec![
                entry(1, (2024, 1, 1), 400, Team::Cantoris),
                entry(2, (2024, 2, 6), 401, Team::Decani),
            ],
        };
        assert!(!schedule.is_valid());
        assert_eq!(schedule.next_edition(), Some(402));
        assert_eq!(schedule.entries_for_team(Team::Decani).len(), 1);
        assert!(schedule.entry_for_month(3).is_none());
    }

    #[test]
    fn test_diary_title_and_year() {
        let diary = Diary::Duplication(DuplicationSchedule {
            year: 2025,
            entries: vec![],
        });
        assert_eq!(diary.year(), 2025);
        assert_eq!(diary.title(), "Duplication Diary 2025");
        assert!(diary.is_empty());
    }

    #[test]
    fn test_recording_schedule_json() {
        let schedule = RecordingSchedule {
            year: 2024,
            entries: vec![entry(1, (2024, 1, 1), 400, Team::Cantoris)],
        };
        let json = schedule.to_json().unwrap();
        assert!(json.contains("\"cantoris\""));
        assert!(json.contains("2024-01-01"));
        assert_eq!(RecordingSchedule::from_json(&json).unwrap(), schedule);
    }
}
