//! Retrying requests which hit the Ensembl rate limit.
//!
//! Ensembl answers `429 Too Many Requests` when a client exceeds its budget,
//! usually with a `Retry-After` header. Those responses are retried here;
//! every other status goes back to the caller untouched.

use crate::constants::{BACKOFF_FACTOR, DEFAULT_MAX_RETRIES, MAX_BACKOFF};
use crate::types::RestMethod;
use reqwest::header::RETRY_AFTER;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use reqwest_retry::{Retryable, RetryableStrategy};
use std::time::Duration;
use task_local_extensions::Extensions;
use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;

/// How rate-limited requests are retried.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RateLimitRetry {
    /// Give up after this many retries and return the last 429 response.
    pub max_retries: u32,
    /// Seconds. Used when the server does not say how long to wait.
    pub backoff_factor: f64,
    /// Upper bound of a computed backoff.
    pub max_backoff: Duration,
}

impl Default for RateLimitRetry {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: BACKOFF_FACTOR,
            max_backoff: MAX_BACKOFF,
        }
    }
}

impl RateLimitRetry {
    pub fn with_max_retries(self, max_retries: u32) -> Self {
        Self {
            max_retries,
            ..self
        }
    }

    /// Time to wait before the n-th consecutive retry when the response has
    /// no usable `Retry-After`: nothing before the first retry, then
    /// `backoff_factor * 2^(n-1)` seconds.
    pub fn backoff(&self, n: u32) -> Duration {
        if n <= 1 {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(n - 1).unwrap_or(i32::MAX);
        let seconds = self.backoff_factor * 2f64.powi(exponent);
        if !seconds.is_finite() || seconds >= self.max_backoff.as_secs_f64() {
            self.max_backoff
        } else {
            Duration::from_secs_f64(seconds.max(0.0))
        }
    }
}

/// - 429 can be retried
/// - everything else is final
pub(crate) struct RateLimitStrategy;

impl RetryableStrategy for RateLimitStrategy {
    fn handle(
        &self,
        res: &Result<Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                Some(Retryable::Transient)
            }
            Ok(_) => None,
            Err(_) => Some(Retryable::Fatal),
        }
    }
}

/// Middleware which resends `GET` and `POST` requests answered with 429.
pub(crate) struct RateLimitMiddleware {
    policy: RateLimitRetry,
}

impl RateLimitMiddleware {
    pub(crate) fn new(policy: RateLimitRetry) -> Self {
        Self { policy }
    }
}

#[async_trait::async_trait]
impl Middleware for RateLimitMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if !RestMethod::is_retried(req.method()) {
            return next.run(req, extensions).await;
        }
        let mut n_past_retries = 0;
        loop {
            let duplicate = req.try_clone().ok_or_else(|| {
                reqwest_middleware::Error::Middleware(anyhow::anyhow!(
                    "Request body cannot be cloned for a retry"
                ))
            })?;
            let result = next.clone().run(duplicate, extensions).await;
            let transient = matches!(
                RateLimitStrategy.handle(&result),
                Some(Retryable::Transient)
            );
            if !transient || n_past_retries >= self.policy.max_retries {
                return result;
            }
            n_past_retries += 1;
            let wait = result
                .as_ref()
                .ok()
                .and_then(retry_after)
                .unwrap_or_else(|| self.policy.backoff(n_past_retries));
            tracing::warn!(
                url = %req.url(),
                retry = n_past_retries,
                wait_ms = wait.as_millis() as u64,
                "rate limited by Ensembl, retrying"
            );
            tokio::time::sleep(wait).await;
        }
    }
}

/// Parse `Retry-After`, given either as seconds or as an HTTP date.
///
/// A wait of zero, including a date which has already passed, counts as no
/// header at all, so the request backs off instead of being resent at once.
pub(crate) fn retry_after(response: &Response) -> Option<Duration> {
    let value = response.headers().get(RETRY_AFTER)?.to_str().ok()?;
    parse_retry_after(value, OffsetDateTime::now_utc())
}

fn parse_retry_after(value: &str, now: OffsetDateTime) -> Option<Duration> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds)).filter(|d| !d.is_zero());
    }
    // HTTP dates end in "GMT", which is an obsolete RFC 2822 zone
    let numeric = value.strip_suffix(" GMT").map(|v| format!("{v} +0000"));
    let date = OffsetDateTime::parse(numeric.as_deref().unwrap_or(value), &Rfc2822).ok()?;
    let remaining = date - now;
    Duration::try_from(remaining).ok().filter(|d| !d.is_zero())
}
