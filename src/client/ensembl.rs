use super::builder::EnsemblClientBuilder;
use super::call::CallBuilder;
use super::request::RequestSpec;
use super::response::EnsemblResponse;
use crate::endpoints::{self, Endpoint};
use crate::errors::{encode_body, EnsemblError};
use crate::params::Params;
use crate::types::{ResponseFormat, RestMethod, Server, ServerUrl};
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use tracing::field::Empty;
use url::Url;

/// Client for an Ensembl REST server.
///
/// Cloning is cheap: clones share one connection pool.
#[derive(Clone)]
pub struct EnsemblClient {
    client: ClientWithMiddleware,
    url: Url,
}

impl EnsemblClient {
    pub(crate) fn from_parts(client: ClientWithMiddleware, url: Url) -> Self {
        Self { client, url }
    }

    /// Create a client builder for one of the public Ensembl servers.
    pub fn builder(server: Server) -> EnsemblClientBuilder {
        EnsemblClientBuilder::new(server.base_url())
    }

    /// Create a client builder for any Ensembl REST deployment.
    pub fn builder_with_url(url: ServerUrl) -> EnsemblClientBuilder {
        EnsemblClientBuilder::new(url.into())
    }

    /// Client for `https://rest.ensembl.org` (GRCh38) with default settings.
    pub fn new() -> Result<Self, EnsemblError> {
        Self::builder(Server::default()).build()
    }

    /// Client for a public server selected by names, e.g. `("GRCh37", "https")`.
    pub fn for_server(assembly: &str, scheme: &str) -> Result<Self, EnsemblError> {
        Self::builder(Server::from_names(assembly, scheme)?).build()
    }

    /// Base URL which endpoint paths are joined onto.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Start a call to an endpoint.
    pub fn endpoint(&self, endpoint: &'static Endpoint) -> CallBuilder<'_> {
        CallBuilder::new(self, endpoint)
    }

    /// `GET` the relative path `endpoint`.
    pub async fn get(
        &self,
        endpoint: &str,
        params: &Params,
        format: ResponseFormat,
    ) -> Result<EnsemblResponse, EnsemblError> {
        let spec = RequestSpec::new(RestMethod::Get, &self.url, endpoint, format)?
            .query(params.clone());
        self.execute(spec).await
    }

    /// `POST` a JSON body to the relative path `endpoint`.
    pub async fn post(
        &self,
        endpoint: &str,
        params: &Params,
        body: &Value,
        format: ResponseFormat,
    ) -> Result<EnsemblResponse, EnsemblError> {
        let spec = RequestSpec::new(RestMethod::Post, &self.url, endpoint, format)?
            .query(params.clone())
            .json(body.clone());
        self.execute(spec).await
    }

    /// Send a request and decode its response.
    ///
    /// Rate-limited requests are retried according to the client's
    /// [crate::RateLimitRetry]. Any other error status is returned as
    /// [EnsemblError::Http].
    #[tracing::instrument(
        name = "ensembl",
        skip_all,
        fields(http.method = %spec.method, http.url = %spec.url, http.status_code = Empty)
    )]
    pub async fn execute(&self, spec: RequestSpec) -> Result<EnsemblResponse, EnsemblError> {
        let mut req = self
            .client
            .request(spec.method.into(), spec.url)
            .headers(spec.headers);
        if !spec.query.is_empty() {
            req = req.query(&spec.query);
        }
        if let (true, Some(body)) = (spec.method.has_body(), spec.body) {
            req = req.body(encode_body(&body)?);
        }
        let res = req.send().await?;
        tracing::Span::current().record("http.status_code", res.status().as_u16());
        tracing::debug!(status = res.status().as_u16(), "response from Ensembl");
        EnsemblResponse::decode(res, spec.format).await
    }

    /// Check that the server is up.
    pub async fn ping(&self) -> Result<bool, EnsemblError> {
        let res = self
            .endpoint(&endpoints::INFO_PING)
            .send()
            .await?
            .into_json();
        Ok(res
            .as_ref()
            .and_then(|v| v.get("ping"))
            .and_then(Value::as_u64)
            == Some(1))
    }
}

impl Debug for EnsemblClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnsemblClient")
            .field("url", &self.url.as_str())
            .finish()
    }
}
