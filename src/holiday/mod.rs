//! Bank-holiday sources
//!
//! Bank holidays decide when a recording has to move to the following week.
//! They come from one of several places:
//!
//! - the public Nager.Date REST API ([`client`]), memoised per year in an
//!   explicit [`cache::HolidayCache`];
//! - a plain text file of `dd/mm/yyyy, Description` lines ([`file`]);
//! - dates typed in by hand ([`manual`]), for machines with no internet.
//!
//! [`service::HolidayService`] resolves whichever source is chosen into a
//! [`HolidayCalendar`], which the diary schedulers query through the
//! [`HolidayOracle`] trait.

pub mod cache;
pub mod client;
pub mod error;
pub mod file;
pub mod manual;
pub mod oracle;
pub mod service;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use cache::{CacheStats, HolidayCache};
pub use client::NagerClient;
pub use error::HolidayError;
pub use file::{BankHolidayFile, FileValidation};
pub use manual::ManualHolidays;
pub use oracle::{HolidayCalendar, HolidayOracle};
pub use service::{HolidayService, HolidaySource};

/// A single bank holiday
///
/// Field names follow the Nager.Date JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankHoliday {
    /// Date of the holiday
    pub date: NaiveDate,

    /// Name in the local language
    pub local_name: String,

    /// English name
    #[serde(default)]
    pub name: String,

    /// ISO 3166-1 country code
    #[serde(default)]
    pub country_code: String,

    /// Falls on the same date every year
    #[serde(default)]
    pub fixed: bool,

    /// Applies to the whole country
    #[serde(default)]
    pub global: bool,

    /// ISO 3166-2 subdivisions the holiday applies to, `None` for all of them
    #[serde(default)]
    pub counties: Option<Vec<String>>,

    /// Holiday types (Public, Bank, ...)
    #[serde(default)]
    pub types: Vec<String>,
}

impl BankHoliday {
    /// Create a holiday from a date and description, as entered by hand or read from a file
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            date,
            local_name: description.clone(),
            name: description,
            country_code: String::new(),
            fixed: false,
            global: false,
            counties: None,
            types: Vec::new(),
        }
    }

    /// Restrict the holiday to one subdivision
    pub fn with_county(mut self, county: impl Into<String>) -> Self {
        self.counties = Some(vec![county.into()]);
        self
    }

    /// True if the holiday is observed in the given subdivision
    ///
    /// Nation-wide holidays carry no county list and apply everywhere.
    pub fn applies_to(&self, subdivision: &str) -> bool {
        match &self.counties {
            None => true,
            Some(counties) => counties.iter().any(|c| c == subdivision),
        }
    }
}

impl fmt::Display for BankHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%A, %d %B %Y"), self.local_name)
    }
}
