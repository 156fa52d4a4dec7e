//! Common test utilities

use chrono::NaiveDate;
use ddsm_diaries::diary::Roster;
use serde_json::{json, Value};

/// Shorthand date constructor
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A complete roster
pub fn roster() -> Roster {
    Roster::new("Alice", "Bob", "Carol", "Dave")
}

/// Bank holidays observed in England in 2024
#[allow(dead_code)]
pub fn england_2024() -> Vec<NaiveDate> {
    vec![
        date(2024, 1, 1),
        date(2024, 3, 29),
        date(2024, 4, 1),
        date(2024, 5, 6),
        date(2024, 5, 27),
        date(2024, 8, 26),
        date(2024, 12, 25),
        date(2024, 12, 26),
    ]
}

fn nager_entry(date: &str, name: &str, counties: Option<&[&str]>) -> Value {
    json!({
        "date": date,
        "localName": name,
        "name": name,
        "countryCode": "GB",
        "fixed": false,
        "global": counties.is_none(),
        "counties": counties,
        "launchYear": null,
        "types": ["Public"]
    })
}

/// Nager.Date response for GB 2024, deliberately out of date order
#[allow(dead_code)]
pub fn nager_gb_2024() -> Value {
    Value::Array(vec![
        nager_entry("2024-12-25", "Christmas Day", None),
        nager_entry("2024-01-01", "New Year's Day", None),
        nager_entry("2024-01-02", "2 January", Some(&["GB-SCT"])),
        nager_entry("2024-03-17", "Saint Patrick's Day", Some(&["GB-NIR"])),
        nager_entry("2024-03-29", "Good Friday", None),
        nager_entry("2024-04-01", "Easter Monday", Some(&["GB-ENG", "GB-WLS", "GB-NIR"])),
        nager_entry("2024-05-06", "Early May Bank Holiday", None),
        nager_entry("2024-05-27", "Spring Bank Holiday", None),
        nager_entry("2024-07-12", "Battle of the Boyne", Some(&["GB-NIR"])),
        nager_entry("2024-08-05", "Summer Bank Holiday", Some(&["GB-SCT"])),
        nager_entry("2024-08-26", "Summer Bank Holiday", Some(&["GB-ENG", "GB-WLS", "GB-NIR"])),
        nager_entry("2024-11-30", "Saint Andrew's Day", Some(&["GB-SCT"])),
        nager_entry("2024-12-26", "Boxing Day", None),
    ])
}
