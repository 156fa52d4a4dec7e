pub mod diary;
pub mod holidays;
pub mod status;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Args;
use std::path::{Path, PathBuf};

use ddsm_diaries::config::Config;
use ddsm_diaries::holiday::{
    BankHoliday, HolidayCalendar, HolidayError, HolidayService, HolidaySource, ManualHolidays,
    NagerClient,
};
use ddsm_diaries::internet::InternetProbe;

// Re-export command functions for convenience
pub use diary::{duplication, recording, DiaryParams};
pub use holidays::{fetch, show, validate};
pub use status::status;

/// Where bank holidays come from, shared by every command that needs them
#[derive(Args, Debug, Clone, Default)]
pub struct HolidayArgs {
    /// Read bank holidays from a `dd/mm/yyyy, Description` file instead of the API
    #[arg(long, value_name = "FILE")]
    pub holidays_file: Option<PathBuf>,

    /// Add a bank holiday by hand, as DATE or DATE=Description (repeatable)
    #[arg(long = "holiday", value_name = "DATE", conflicts_with = "holidays_file")]
    pub holidays: Vec<String>,

    /// Never touch the network; without a file or list there are no holidays
    #[arg(long)]
    pub offline: bool,
}

impl HolidayArgs {
    /// Turn the flags into a source, validating hand-entered dates against `year`
    pub fn source(&self, year: i32) -> Result<HolidaySource> {
        if let Some(path) = &self.holidays_file {
            return Ok(HolidaySource::File(path.clone()));
        }

        if !self.holidays.is_empty() {
            let mut manual = ManualHolidays::new(year);
            let mut following = ManualHolidays::new(year + 1);
            for entry in &self.holidays {
                let (date, description) = parse_manual_holiday(entry)?;
                // January of next year is accepted for December roll-forwards
                let target = if date.year() == year + 1 && date.month() == 1 {
                    &mut following
                } else {
                    &mut manual
                };
                target
                    .add(date, &description)
                    .with_context(|| format!("Rejected bank holiday '{entry}'"))?;
            }

            let mut holidays = manual.into_holidays();
            holidays.extend(following.into_holidays());
            return Ok(HolidaySource::Manual(holidays));
        }

        if self.offline {
            tracing::warn!(year, "Offline with no bank holidays supplied, scheduling without any");
            return Ok(HolidaySource::None);
        }

        Ok(HolidaySource::Api)
    }
}

/// Resolve the bank holidays for `year` from the chosen source
///
/// API lookups check connectivity first so an offline machine fails fast.
pub async fn resolve_holidays(
    config: &Config,
    args: &HolidayArgs,
    year: i32,
) -> Result<HolidayCalendar> {
    let source = args.source(year)?;

    if source.needs_network() {
        let status = InternetProbe::from_config(&config.internet).check().await;
        if !status.is_up() {
            return Err(anyhow::Error::new(HolidayError::Offline).context(
                "Bank holidays could not be retrieved; use --holidays-file or --holiday instead",
            ));
        }
    }

    let service = holiday_service(config)?;
    let calendar = service
        .resolve(&source, year)
        .await
        .context("Could not retrieve bank holidays")?;
    Ok(calendar)
}

/// Holiday service built from configuration
pub fn holiday_service(config: &Config) -> Result<HolidayService> {
    let client = NagerClient::from_config(&config.api).context("Failed to create HTTP client")?;
    Ok(HolidayService::new(client))
}

/// Parse `dd/mm/yyyy` or `yyyy-mm-dd`
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| format!("'{value}' is not a date (expected dd/mm/yyyy or yyyy-mm-dd)"))
}

fn parse_manual_holiday(entry: &str) -> Result<(NaiveDate, String)> {
    let (date, description) = match entry.split_once('=') {
        Some((date, description)) => (date, description.trim().to_string()),
        None => (entry, String::from("Bank Holiday")),
    };
    let date = parse_date(date).map_err(anyhow::Error::msg)?;
    Ok((date, description))
}

/// Print to stdout, or write to `output` when given
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Written to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

/// One line per holiday, for terminal output
pub fn holiday_lines(holidays: &[BankHoliday]) -> String {
    holidays
        .iter()
        .map(|h| format!("  {h}"))
        .collect::<Vec<_>>()
        .join("\n")
}
