//! Text, Markdown and JSON rendering of diaries

use chrono::{Datelike, Month, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::error::DiaryResult;
use super::schedule::{Diary, DuplicationSchedule, RecordingSchedule};

/// Output format for rendered diaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// English ordinal suffix for a day of the month (1-31)
pub fn ordinal_suffix(day: u32) -> Option<&'static str> {
    match day {
        1 | 21 | 31 => Some("st"),
        2 | 22 => Some("nd"),
        3 | 23 => Some("rd"),
        4..=20 | 24..=30 => Some("th"),
        _ => None,
    }
}

/// Day of month with its ordinal suffix, e.g. `12th`
pub fn ordinal_day(date: NaiveDate) -> String {
    let day = date.day();
    format!("{day}{}", ordinal_suffix(day).unwrap_or_default())
}

/// Full English month name
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

fn recording_date_label(date: NaiveDate) -> String {
    date.format("%d/%m/%Y (%A)").to_string()
}

/// Render a diary in the requested format
pub fn render(diary: &Diary, format: OutputFormat) -> DiaryResult<String> {
    match (diary, format) {
        (Diary::Recording(s), OutputFormat::Json) => s.to_json(),
        (Diary::Duplication(s), OutputFormat::Json) => s.to_json(),
        (Diary::Recording(s), OutputFormat::Text) => Ok(recording_text(s)),
        (Diary::Duplication(s), OutputFormat::Text) => Ok(duplication_text(s)),
        (Diary::Recording(s), OutputFormat::Markdown) => Ok(recording_markdown(s)),
        (Diary::Duplication(s), OutputFormat::Markdown) => Ok(duplication_markdown(s)),
    }
}

fn recording_text(schedule: &RecordingSchedule) -> String {
    let mut output = format!("Recording Diary {}\n", schedule.year);
    output.push_str(&format!("{:-<78}\n", ""));
    output.push_str(&format!(
        "{:<10} {:<24} {:>7}  {:<9} {:<12} {:<12}\n",
        "Month", "Date", "Edition", "Team", "Compiler", "Assistant"
    ));
    output.push_str(&format!("{:-<78}\n", ""));

    for entry in &schedule.entries {
        output.push_str(&format!(
            "{:<10} {:<24} {:>7}  {:<9} {:<12} {:<12}\n",
            month_name(entry.month),
            recording_date_label(entry.recording_date),
            entry.edition,
            entry.team.display_name(),
            entry.compiler,
            entry.assistant
        ));
    }

    output
}

fn duplication_text(schedule: &DuplicationSchedule) -> String {
    let mut output = format!("Duplication Diary {}\n", schedule.year);
    output.push_str(&format!("{:-<46}\n", ""));
    output.push_str(&format!(
        "{:<10} {:>10} {:>11} {:>10}\n",
        "Month", "Tuesday", "Wednesday", "Thursday"
    ));
    output.push_str(&format!("{:-<46}\n", ""));

    for entry in &schedule.entries {
        output.push_str(&format!(
            "{:<10} {:>10} {:>11} {:>10}\n",
            month_name(entry.month),
            ordinal_day(entry.collect_date),
            ordinal_day(entry.prep_date),
            ordinal_day(entry.copy_date)
        ));
    }

    output
}

fn recording_markdown(schedule: &RecordingSchedule) -> String {
    let mut output = format!("# Recording Diary {}\n\n", schedule.year);
    output.push_str("| Month | Date | Edition | Team | Compiler | Assistant |\n");
    output.push_str("|-------|------|--------:|------|----------|-----------|\n");

    for entry in &schedule.entries {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            month_name(entry.month),
            recording_date_label(entry.recording_date),
            entry.edition,
            entry.team.display_name(),
            entry.compiler,
            entry.assistant
        ));
    }

    output
}

fn duplication_markdown(schedule: &DuplicationSchedule) -> String {
    let mut output = format!("# Duplication Diary {}\n\n", schedule.year);
    output.push_str("| Month | Collect (Tue) | Prepare (Wed) | Copy (Thu) |\n");
    output.push_str("|-------|---------------|---------------|------------|\n");

    for entry in &schedule.entries {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            month_name(entry.month),
            entry.collect_date.format("%d/%m/%Y"),
            entry.prep_date.format("%d/%m/%Y"),
            entry.copy_date.format("%d/%m/%Y")
        ));
    }

    output
}
