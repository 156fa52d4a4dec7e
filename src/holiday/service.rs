//! Resolves a holiday source into a calendar
//!
//! The service fronts the REST client with the year cache and a hard
//! timeout. The other sources (file, manual list, none) need no network.

use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::cache::HolidayCache;
use super::client::NagerClient;
use super::error::HolidayError;
use super::file::BankHolidayFile;
use super::oracle::HolidayCalendar;
use super::BankHoliday;

/// Default upper bound on one year's fetch, retries included
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the bank holidays for a run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidaySource {
    /// Nager.Date REST API
    Api,

    /// A `dd/mm/yyyy, Description` text file
    File(PathBuf),

    /// Holidays supplied directly
    Manual(Vec<BankHoliday>),

    /// Schedule as if there were no bank holidays
    None,
}

impl HolidaySource {
    /// True if resolving this source needs the network
    pub fn needs_network(&self) -> bool {
        matches!(self, Self::Api)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::File(_) => "file",
            Self::Manual(_) => "manual",
            Self::None => "none",
        }
    }
}

/// Cached access to bank holidays
#[derive(Debug, Clone)]
pub struct HolidayService {
    client: NagerClient,
    cache: Arc<HolidayCache>,
    fetch_timeout: Duration,
}

impl HolidayService {
    /// Create a service with its own empty cache
    pub fn new(client: NagerClient) -> Self {
        Self::with_cache(client, Arc::new(HolidayCache::new()))
    }

    /// Create a service sharing an existing cache
    pub fn with_cache(client: NagerClient, cache: Arc<HolidayCache>) -> Self {
        Self {
            client,
            cache,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Override the per-year fetch timeout
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Shared cache
    pub fn cache(&self) -> &Arc<HolidayCache> {
        &self.cache
    }

    /// Holidays for a year, from the cache or the API
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::Timeout` if the fetch does not finish within
    /// the fetch timeout, or whatever the client reports
    #[instrument(skip(self))]
    pub async fn holidays_for_year(&self, year: i32) -> Result<Vec<BankHoliday>, HolidayError> {
        if let Some(holidays) = self.cache.get(year).await {
            debug!(year, "Bank holidays served from cache");
            return Ok(holidays);
        }

        let holidays = tokio::time::timeout(self.fetch_timeout, self.client.fetch_year(year))
            .await
            .map_err(|_| HolidayError::Timeout { year })??;

        self.cache.insert(year, holidays.clone()).await;
        Ok(holidays)
    }

    /// One calendar covering several years
    pub async fn calendar_for(&self, years: &[i32]) -> Result<HolidayCalendar, HolidayError> {
        let mut calendar = HolidayCalendar::empty();
        for &year in years {
            calendar.extend(&self.holidays_for_year(year).await?);
        }
        Ok(calendar)
    }

    /// First date on or after `date`, a week at a time, that is not a holiday
    pub async fn next_non_bank_holiday(&self, date: NaiveDate) -> Result<NaiveDate, HolidayError> {
        let calendar = self.calendar_for(&[date.year(), date.year() + 1]).await?;
        Ok(calendar.next_non_bank_holiday(date))
    }

    /// Resolve a source into the calendar used to schedule `year`
    ///
    /// API lookups cover `year` and the following year, since a December
    /// recording can roll into January.
    pub async fn resolve(
        &self,
        source: &HolidaySource,
        year: i32,
    ) -> Result<HolidayCalendar, HolidayError> {
        let calendar = match source {
            HolidaySource::Api => self.calendar_for(&[year, year + 1]).await?,
            HolidaySource::File(path) => {
                let holidays = BankHolidayFile::new(path).read()?;
                HolidayCalendar::from_holidays(&holidays)
            }
            HolidaySource::Manual(holidays) => HolidayCalendar::from_holidays(holidays),
            HolidaySource::None => HolidayCalendar::empty(),
        };

        info!(
            source = source.name(),
            year,
            holidays = calendar.len(),
            "Resolved bank holidays"
        );
        Ok(calendar)
    }
}
