//! In-memory bank-holiday cache keyed by year
//!
//! Holidays fetched from the REST API are kept here so each year is only
//! downloaded once per run. The cache is an ordinary value: create one,
//! wrap it in an `Arc` and hand it to whatever needs it.
//!
//! # Example
//!
//! ```rust,ignore
//! use ddsm_diaries::holiday::HolidayCache;
//!
//! let cache = HolidayCache::new();
//! cache.insert(2024, holidays).await;
//! let cached = cache.get(2024).await;
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use super::error::HolidayError;
use super::BankHoliday;

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total cache hits
    pub hits: u64,
    /// Total cache misses
    pub misses: u64,
    /// Years currently held
    pub years: usize,
}

impl CacheStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe year-keyed holiday cache
#[derive(Debug, Default)]
pub struct HolidayCache {
    entries: RwLock<HashMap<i32, Vec<BankHoliday>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HolidayCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Holidays for a year, if cached
    pub async fn get(&self, year: i32) -> Option<Vec<BankHoliday>> {
        let cached = self.entries.read().await.get(&year).cloned();
        if cached.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        cached
    }

    /// Holidays for a year, or `CacheMiss`
    pub async fn get_or_err(&self, year: i32) -> Result<Vec<BankHoliday>, HolidayError> {
        self.get(year).await.ok_or(HolidayError::CacheMiss(year))
    }

    /// Store the holidays for a year, replacing any previous list
    pub async fn insert(&self, year: i32, holidays: Vec<BankHoliday>) {
        debug!(year, count = holidays.len(), "Caching bank holidays");
        self.entries.write().await.insert(year, holidays);
    }

    /// Check whether a year is cached
    pub async fn contains(&self, year: i32) -> bool {
        self.entries.read().await.contains_key(&year)
    }

    /// Drop one year
    pub async fn remove(&self, year: i32) -> Option<Vec<BankHoliday>> {
        self.entries.write().await.remove(&year)
    }

    /// Drop every year
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Cached years in ascending order
    pub async fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.entries.read().await.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Current statistics
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            years: self.entries.read().await.len(),
        }
    }
}
