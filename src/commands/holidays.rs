use anyhow::{Context, Result};
use std::path::PathBuf;

use ddsm_diaries::config::Config;
use ddsm_diaries::holiday::{BankHolidayFile, FileValidation};
use ddsm_diaries::internet::InternetProbe;

use super::{holiday_lines, holiday_service, resolve_holidays, HolidayArgs};

/// Download a year's bank holidays, optionally exporting them to a file
pub async fn fetch(
    config: Config,
    year: i32,
    export: Option<PathBuf>,
    overwrite: bool,
) -> Result<()> {
    let status = InternetProbe::from_config(&config.internet).check().await;
    println!("{status}");
    if !status.is_up() {
        anyhow::bail!("Cannot fetch bank holidays without an internet connection");
    }

    let service = holiday_service(&config)?;
    let holidays = service
        .holidays_for_year(year)
        .await
        .with_context(|| format!("Could not retrieve bank holidays for {year}"))?;

    println!("Bank holidays for {year} ({}):", config.api.subdivision);
    println!("{}", holiday_lines(&holidays));

    if let Some(path) = export {
        let file = BankHolidayFile::new(&path);
        if !file.is_text_file() {
            tracing::warn!(path = %path.display(), "Export file does not have a .txt extension");
        }
        file.write(&holidays, overwrite).map_err(|e| {
            anyhow::Error::new(e).context("Use --overwrite to replace an existing file")
        })?;
        println!("Exported {} bank holidays to {}", holidays.len(), path.display());
    }

    Ok(())
}

/// Check a bank holiday file line by line
pub fn validate(file: PathBuf) -> Result<()> {
    let holiday_file = BankHolidayFile::new(&file);
    let name = holiday_file
        .file_name()
        .unwrap_or_else(|| file.display().to_string());

    if !holiday_file.is_text_file() {
        anyhow::bail!("{name} is not a .txt file");
    }

    match holiday_file
        .validate()
        .with_context(|| format!("Failed to read {}", file.display()))?
    {
        FileValidation::Valid { holidays } => {
            println!("{name} is valid ({holidays} bank holidays)");
            Ok(())
        }
        FileValidation::Invalid { line, content } => {
            anyhow::bail!(
                "{name} is invalid at line {line}: '{content}'. \
                 Each line must read 'dd/mm/yyyy, Description'"
            )
        }
    }
}

/// List the bank holidays a diary for `year` would avoid
pub async fn show(config: Config, year: i32, holidays: HolidayArgs) -> Result<()> {
    let calendar = resolve_holidays(&config, &holidays, year).await?;
    let dates = calendar.dates_in_year(year);

    if dates.is_empty() {
        println!("No bank holidays for {year}");
        return Ok(());
    }

    println!("Bank holidays for {year}:");
    for date in dates {
        println!("  {}", date.format("%A, %d %B %Y"));
    }
    Ok(())
}
