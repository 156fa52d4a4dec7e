//! HTTP client for the Nager.Date public holiday API
//!
//! Fetches the public holidays of a country for a year, keeps the ones
//! observed in the configured subdivision and returns them sorted by date.
//! Transient failures (timeouts, 429 and 5xx responses) are retried with
//! exponential backoff.

use reqwest::{header::ACCEPT, Client};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::error::HolidayError;
use super::BankHoliday;
use crate::config::ApiConfig;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Nager.Date API client
#[derive(Debug, Clone)]
pub struct NagerClient {
    /// HTTP client with configured timeout
    client: Client,

    /// API root, overridable for tests
    base_url: String,

    /// Country whose holidays are requested
    country_code: String,

    /// Subdivision the holidays must apply to
    subdivision: String,

    /// Maximum number of retry attempts for failed requests
    max_retries: u32,

    /// Base delay in milliseconds for exponential backoff
    base_delay_ms: u64,
}

impl NagerClient {
    /// Create a client for English bank holidays with default settings
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::Http` if the HTTP client cannot be created
    pub fn new() -> Result<Self, HolidayError> {
        Self::from_config(&ApiConfig::default())
    }

    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::Http` if the HTTP client cannot be created
    pub fn from_config(config: &ApiConfig) -> Result<Self, HolidayError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(format!("ddsm-diaries/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_code: config.country_code.clone(),
            subdivision: config.subdivision.clone(),
            max_retries: config.max_retries,
            base_delay_ms: 500,
        })
    }

    /// Create a client against a different API root, for mock servers
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::Http` if the HTTP client cannot be created
    pub fn with_base_url(base_url: &str) -> Result<Self, HolidayError> {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        let mut client = Self::from_config(&config)?;
        client.base_delay_ms = 10;
        Ok(client)
    }

    /// Override retry settings
    pub fn with_retries(mut self, max_retries: u32, base_delay_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.base_delay_ms = base_delay_ms;
        self
    }

    /// Subdivision filter in use
    pub fn subdivision(&self) -> &str {
        &self.subdivision
    }

    /// URL of the holiday list for a year
    pub fn holidays_url(&self, year: i32) -> String {
        format!("{}/PublicHolidays/{}/{}", self.base_url, year, self.country_code)
    }

    /// Fetch the holidays for a year, filtered to the subdivision and sorted by date
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::ServerError` on a non-retryable status,
    /// `HolidayError::MaxRetriesExceeded` once retries run out, and
    /// `HolidayError::Decode` if the body is not the expected JSON
    pub async fn fetch_year(&self, year: i32) -> Result<Vec<BankHoliday>, HolidayError> {
        info!(year, country = %self.country_code, "Retrieving bank holidays");

        let holidays = self.fetch_with_retry(year).await?;
        let total = holidays.len();

        let mut filtered: Vec<BankHoliday> = holidays
            .into_iter()
            .filter(|h| h.applies_to(&self.subdivision))
            .collect();
        filtered.sort_by_key(|h| h.date);

        debug!(
            year,
            total,
            kept = filtered.len(),
            subdivision = %self.subdivision,
            "Filtered bank holidays"
        );

        Ok(filtered)
    }

    async fn fetch_with_retry(&self, year: i32) -> Result<Vec<BankHoliday>, HolidayError> {
        let url = self.holidays_url(year);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.base_delay_ms * 2_u64.pow(attempt - 1);
                debug!(attempt, delay_ms = delay, "Retrying bank holiday request");
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            match self.client.get(&url).header(ACCEPT, "application/json").send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        return response
                            .json::<Vec<BankHoliday>>()
                            .await
                            .map_err(|e| HolidayError::Decode(e.to_string()));
                    } else if Self::should_retry(status.as_u16()) {
                        warn!(
                            attempt,
                            status = status.as_u16(),
                            "Bank holiday API returned a retryable status"
                        );
                        last_error = Some(HolidayError::ServerError(status.as_u16()));
                    } else {
                        return Err(HolidayError::ServerError(status.as_u16()));
                    }
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Bank holiday request failed");
                    last_error = Some(if e.is_timeout() {
                        HolidayError::Timeout { year }
                    } else {
                        HolidayError::Http(e)
                    });
                }
            }
        }

        if let Some(e) = last_error {
            warn!(year, error = %e, "Giving up on bank holiday request");
        }
        Err(HolidayError::MaxRetriesExceeded)
    }

    /// Retry on 429 and the usual transient 5xx codes
    fn should_retry(status: u16) -> bool {
        matches!(status, 429 | 500 | 502 | 503 | 504)
    }
}
