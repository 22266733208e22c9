use super::ensembl::EnsemblClient;
use super::retry::{RateLimitMiddleware, RateLimitRetry};
use crate::constants::USER_AGENT;
use crate::errors::{ConfigError, EnsemblError};
use reqwest_middleware::Middleware;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Builder for [EnsemblClient].
///
/// Middleware added with [EnsemblClientBuilder::with] runs outside of the
/// rate-limit retry, so it sees one request per call.
pub struct EnsemblClientBuilder {
    url: String,
    retry: Option<RateLimitRetry>,
    timeout: Option<Duration>,
    user_agent: String,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl EnsemblClientBuilder {
    pub(crate) fn new(url: String) -> Self {
        Self {
            url,
            retry: Some(RateLimitRetry::default()),
            timeout: None,
            user_agent: USER_AGENT.to_string(),
            middleware: Vec::new(),
        }
    }

    /// Change how responses with status 429 are retried.
    pub fn retry(self, retry: RateLimitRetry) -> Self {
        Self {
            retry: Some(retry),
            ..self
        }
    }

    /// Return 429 responses to the caller without retrying.
    pub fn no_retry(self) -> Self {
        Self {
            retry: None,
            ..self
        }
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..self
        }
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: Middleware>(mut self, middleware: M) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Result<EnsemblClient, EnsemblError> {
        let url = parse_base(&self.url)?;
        let mut reqwest_builder = reqwest::ClientBuilder::new().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let mut builder = reqwest_middleware::ClientBuilder::new(reqwest_builder.build()?);
        for middleware in self.middleware {
            builder = builder.with_arc(middleware);
        }
        if let Some(retry) = self.retry {
            builder = builder.with(RateLimitMiddleware::new(retry));
        }
        Ok(EnsemblClient::from_parts(builder.build(), url))
    }
}

/// Endpoint paths are relative, so the base URL must end with `/` for
/// [Url::join] to keep its last path segment.
fn parse_base(s: &str) -> Result<Url, ConfigError> {
    let parsed = if s.ends_with('/') {
        Url::parse(s)
    } else {
        Url::parse(&format!("{s}/"))
    }?;
    Ok(parsed)
}
