//! Internet connectivity probe
//!
//! Before asking the REST API for bank holidays the CLI checks whether the
//! machine is online at all, so an offline user is pointed at the file and
//! manual sources instead of waiting on retries.

use std::fmt;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::config::InternetConfig;

/// Result of a connectivity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternetStatus {
    Up,
    Down,
}

impl InternetStatus {
    pub fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::Up => "Internet connection available",
            Self::Down => "No internet connection available",
        }
    }
}

impl fmt::Display for InternetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Tries TCP connections to well-known hosts
#[derive(Debug, Clone)]
pub struct InternetProbe {
    hosts: Vec<String>,
    port: u16,
    connect_timeout: Duration,
}

impl InternetProbe {
    /// Build a probe from configuration
    pub fn from_config(config: &InternetConfig) -> Self {
        Self {
            hosts: config.hosts.clone(),
            port: config.port,
            connect_timeout: config.connect_timeout(),
        }
    }

    /// Probe explicit hosts
    pub fn new(hosts: Vec<String>, port: u16, connect_timeout: Duration) -> Self {
        Self {
            hosts,
            port,
            connect_timeout,
        }
    }

    /// `Up` as soon as one host accepts a connection, `Down` if none does
    pub async fn check(&self) -> InternetStatus {
        for host in &self.hosts {
            let addr = format!("{}:{}", host, self.port);
            match tokio::time::timeout(self.connect_timeout, TcpStream::connect(&addr)).await {
                Ok(Ok(_)) => {
                    info!(host = %addr, "{}", InternetStatus::Up);
                    return InternetStatus::Up;
                }
                Ok(Err(e)) => debug!(host = %addr, error = %e, "Connection failed"),
                Err(_) => debug!(
                    host = %addr,
                    timeout_ms = self.connect_timeout.as_millis() as u64,
                    "Connection timed out"
                ),
            }
        }

        info!("{}", InternetStatus::Down);
        InternetStatus::Down
    }
}

impl Default for InternetProbe {
    fn default() -> Self {
        Self::from_config(&InternetConfig::default())
    }
}
