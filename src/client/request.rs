use crate::errors::ConfigError;
use crate::params::Params;
use crate::types::{ResponseFormat, RestMethod};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use url::Url;

/// A fully resolved request, ready to be sent by [crate::EnsemblClient::execute].
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: RestMethod,
    pub url: Url,
    pub headers: HeaderMap,
    pub query: Params,
    pub body: Option<Value>,
    pub format: ResponseFormat,
}

impl RequestSpec {
    /// Resolve `endpoint` against `base` the way a browser resolves a link:
    /// a leading `/` replaces the path of `base`.
    ///
    /// `GET` requests carry the format only as `Content-Type`, which is
    /// what Ensembl negotiates on. `POST` requests also set `Accept`.
    pub fn new(
        method: RestMethod,
        base: &Url,
        endpoint: &str,
        format: ResponseFormat,
    ) -> Result<Self, ConfigError> {
        let url = base.join(endpoint)?;
        let mime = HeaderValue::from_static(format.mime());
        let mut headers = HeaderMap::new();
        if method.has_body() {
            headers.insert(ACCEPT, mime.clone());
        }
        headers.insert(CONTENT_TYPE, mime);
        Ok(Self {
            method,
            url,
            headers,
            query: Params::new(),
            body: None,
            format,
        })
    }

    pub fn query(self, query: Params) -> Self {
        Self { query, ..self }
    }

    /// Set the JSON body. Ignored by [RestMethod::Get].
    pub fn json(self, body: Value) -> Self {
        Self {
            body: Some(body),
            ..self
        }
    }
}

impl Display for RequestSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)?;
        if !self.query.is_empty() {
            let query = self.query.to_query_string().map_err(|_| std::fmt::Error)?;
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}
