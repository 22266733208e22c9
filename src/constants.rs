use std::time::Duration;

/// Ensembl allows 55,000 requests per hour, so one request is worth 3600/55000 s.
pub(crate) const BACKOFF_FACTOR: f64 = 3600.0 / 55000.0;
pub(crate) const MAX_BACKOFF: Duration = Duration::from_secs(120);
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 10;

pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Species used by the Ensembl documentation examples.
pub const HUMAN: &str = "human";
