use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

use ddsm_diaries::config::Config;
use ddsm_diaries::diary::{
    generate_recording_schedule, render, Diary, DiaryError, DuplicationSchedule, OutputFormat,
    RecordingRequest, RecordingSchedule,
};

use super::{emit, resolve_holidays, HolidayArgs};

/// Inputs shared by the recording and duplication commands
pub struct DiaryParams {
    pub year: i32,
    pub first_edition: NaiveDate,
    pub edition: i64,
    pub decani_compiler: Option<String>,
    pub decani_assistant: Option<String>,
    pub cantoris_compiler: Option<String>,
    pub cantoris_assistant: Option<String>,
    pub holidays: HolidayArgs,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl DiaryParams {
    /// Scheduler request, with roster names from flags falling back to config
    fn request(&self, config: &Config) -> Result<RecordingRequest> {
        let start_edition = u32::try_from(self.edition)
            .ok()
            .filter(|e| *e > 0)
            .ok_or(DiaryError::InvalidEdition {
                edition: self.edition,
            })?;

        let mut roster = config.roster.to_roster();
        let overrides = [
            (&mut roster.decani_compiler, &self.decani_compiler),
            (&mut roster.decani_assistant, &self.decani_assistant),
            (&mut roster.cantoris_compiler, &self.cantoris_compiler),
            (&mut roster.cantoris_assistant, &self.cantoris_assistant),
        ];
        for (slot, value) in overrides {
            if let Some(name) = value {
                *slot = name.trim().to_string();
            }
        }

        Ok(RecordingRequest {
            year: self.year,
            first_edition_date: self.first_edition,
            start_edition,
            roster,
        })
    }
}

async fn build_recording(config: &Config, params: &DiaryParams) -> Result<RecordingSchedule> {
    let request = params.request(config)?;
    let holidays = resolve_holidays(config, &params.holidays, params.year).await?;

    let schedule = generate_recording_schedule(&request, &holidays)
        .with_context(|| format!("Could not generate the recording diary for {}", params.year))?;

    if let Some(next) = schedule.next_edition() {
        tracing::info!(year = params.year, next_edition = next, "Recording diary generated");
    }
    Ok(schedule)
}

/// Generate and print the recording diary
pub async fn recording(config: Config, params: DiaryParams) -> Result<()> {
    let schedule = build_recording(&config, &params).await?;
    let rendered = render(&Diary::Recording(schedule), params.format)?;
    emit(&rendered, params.output.as_deref())
}

/// Generate and print the duplication diary
pub async fn duplication(config: Config, params: DiaryParams) -> Result<()> {
    let recording = build_recording(&config, &params).await?;
    let schedule = DuplicationSchedule::from_recording(&recording);
    tracing::info!(
        year = schedule.year,
        entries = schedule.entries.len(),
        "Duplication diary generated"
    );

    let rendered = render(&Diary::Duplication(schedule), params.format)?;
    emit(&rendered, params.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(edition: i64) -> DiaryParams {
        DiaryParams {
            year: 2024,
            first_edition: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            edition,
            decani_compiler: Some("Alice".into()),
            decani_assistant: Some("Bob".into()),
            cantoris_compiler: Some(" Carol ".into()),
            cantoris_assistant: None,
            holidays: HolidayArgs::default(),
            format: OutputFormat::Text,
            output: None,
        }
    }

    #[test]
    fn test_request_merges_roster() {
        let mut config = Config::default();
        config.roster.cantoris_assistant = "Dave".into();
        config.roster.decani_compiler = "Zed".into();

        let request = params(12).request(&config).unwrap();
        assert_eq!(request.start_edition, 12);
        assert_eq!(request.roster.decani_compiler, "Alice");
        assert_eq!(request.roster.cantoris_compiler, "Carol");
        assert_eq!(request.roster.cantoris_assistant, "Dave");
    }

    #[test]
    fn test_request_rejects_non_positive_edition() {
        let config = Config::default();
        for edition in [0, -5] {
            let err = params(edition).request(&config).unwrap_err();
            assert_eq!(
                err.downcast_ref::<DiaryError>(),
                Some(&DiaryError::InvalidEdition { edition })
            );
        }
    }
}
