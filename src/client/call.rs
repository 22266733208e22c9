use super::ensembl::EnsemblClient;
use super::request::RequestSpec;
use super::response::EnsemblResponse;
use crate::endpoints::Endpoint;
use crate::errors::{ConfigError, EnsemblError};
use crate::params::{ParameterValue, Params};
use crate::types::{Identifier, ResponseFormat};
use serde_json::{Map, Value};

/// A call to one [Endpoint], built up before it is sent.
///
/// ```no_run
/// use ensembl::{endpoints, EnsemblClient, HUMAN};
///
/// # async fn f() -> Result<(), ensembl::EnsemblError> {
/// let client = EnsemblClient::new()?;
/// let genes = client
///     .endpoint(&endpoints::LOOKUP_ID)
///     .param("species", HUMAN)
///     .dispatch(vec!["ENSG00000157764", "ENSG00000248378"])
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CallBuilder<'a> {
    client: &'a EnsemblClient,
    endpoint: &'static Endpoint,
    path_args: Vec<(String, String)>,
    params: Params,
    body: Map<String, Value>,
    format: ResponseFormat,
}

impl<'a> CallBuilder<'a> {
    pub(crate) fn new(client: &'a EnsemblClient, endpoint: &'static Endpoint) -> Self {
        Self {
            client,
            endpoint,
            path_args: Vec::new(),
            params: Params::new(),
            body: Map::new(),
            format: ResponseFormat::default(),
        }
    }

    /// Value of a `{placeholder}` in the endpoint path.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.path_args.retain(|(k, _)| *k != name);
        self.path_args.push((name, value.into()));
        self
    }

    pub fn param(self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        Self {
            params: self.params.set(key, value),
            ..self
        }
    }

    /// Set a query parameter only if it has a value.
    pub fn param_opt<V: Into<ParameterValue>>(
        self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        Self {
            params: self.params.set_opt(key, value),
            ..self
        }
    }

    pub fn params(self, params: Params) -> Self {
        Self {
            params: self.params.merge(params),
            ..self
        }
    }

    /// Add a field to the JSON body of a `POST` request.
    pub fn body_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    pub fn format(self, format: ResponseFormat) -> Self {
        Self { format, ..self }
    }

    /// Select the response format by name, e.g. `"fasta"`.
    pub fn format_name(self, name: &str) -> Result<Self, ConfigError> {
        let format = ResponseFormat::from_name(name)?;
        Ok(self.format(format))
    }

    /// The request to the scalar path of the endpoint, using path arguments as given.
    pub fn request(&self) -> Result<RequestSpec, ConfigError> {
        let path = self.endpoint.render_path(self.path_args.as_slice())?;
        let spec = RequestSpec::new(self.endpoint.method, self.client.url(), &path, self.format)?
            .query(self.params.clone());
        if self.endpoint.method.has_body() {
            Ok(spec.json(Value::Object(self.body.clone())))
        } else {
            Ok(spec)
        }
    }

    /// The request for `ident`: one identifier goes into the path with
    /// `GET`, a list of identifiers goes into the body of a `POST` to the
    /// batch path. A list is always sent as a batch, even when it has zero
    /// or one elements.
    pub fn dispatch_request(&self, ident: &Identifier) -> Result<RequestSpec, ConfigError> {
        match ident {
            Identifier::Single(id) => {
                let placeholder = self
                    .endpoint
                    .ident
                    .ok_or(ConfigError::NotDispatchable(self.endpoint.name))?;
                let mut args = self.path_args.clone();
                args.retain(|(k, _)| k != placeholder);
                args.push((placeholder.to_string(), id.clone()));
                let path = self.endpoint.render_path(args.as_slice())?;
                let spec =
                    RequestSpec::new(self.endpoint.method, self.client.url(), &path, self.format)?;
                Ok(spec.query(self.params.clone()))
            }
            Identifier::Many(ids) => {
                let batch = self
                    .endpoint
                    .batch
                    .ok_or(ConfigError::NoBatchForm(self.endpoint.name))?;
                let path = self.endpoint.render_batch_path(self.path_args.as_slice())?;
                let mut body = self.body.clone();
                body.insert(batch.key.to_string(), Value::from(ids.clone()));
                let spec = RequestSpec::new(batch.method, self.client.url(), &path, self.format)?
                    .query(self.params.clone())
                    .json(Value::Object(body));
                Ok(spec)
            }
        }
    }

    /// Send the request built by [CallBuilder::request].
    pub async fn send(self) -> Result<EnsemblResponse, EnsemblError> {
        let spec = self.request()?;
        self.client.execute(spec).await
    }

    /// Send the request for one identifier or a list of identifiers, see
    /// [CallBuilder::dispatch_request].
    pub async fn dispatch(
        self,
        ident: impl Into<Identifier>,
    ) -> Result<EnsemblResponse, EnsemblError> {
        let spec = self.dispatch_request(&ident.into())?;
        self.client.execute(spec).await
    }

    /// Like [CallBuilder::dispatch] for an identifier given as JSON, which
    /// must be a string or an array of strings.
    pub async fn dispatch_json(self, ident: Value) -> Result<EnsemblResponse, EnsemblError> {
        let ident = Identifier::try_from(ident)?;
        self.dispatch(ident).await
    }
}
