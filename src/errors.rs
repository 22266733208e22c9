//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use crate::types::ResponseFormat;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidServerUrl {
    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),

    #[error("Given URL has no host: {0}")]
    NoHost(String),
}

aliri_braid::from_infallible!(InvalidServerUrl);

/// Mistakes in how the client or a call was set up. Always detected before
/// anything is sent over the network.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Unknown response format \"{0}\"")]
    UnknownFormat(String),

    #[error("No Ensembl REST server for assembly \"{assembly}\" over \"{scheme}\"")]
    UnknownServer { assembly: String, scheme: String },

    #[error(transparent)]
    InvalidServerUrl(#[from] InvalidServerUrl),

    #[error("Cannot build request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Endpoint \"{endpoint}\" needs a value for \"{{{name}}}\"")]
    MissingPathArgument {
        endpoint: &'static str,
        name: String,
    },

    #[error("Endpoint \"{0}\" does not accept a list of identifiers")]
    NoBatchForm(&'static str),

    #[error("Endpoint \"{0}\" does not take an identifier")]
    NotDispatchable(&'static str),
}

/// The identifying argument of a call has a shape which is neither one
/// identifier nor a list of identifiers.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Expected a string or a list of strings, got {0}")]
    UnsupportedShape(&'static str),

    #[error("Expected a list of strings, but element {index} is {kind}")]
    NonStringElement { index: usize, kind: &'static str },
}

/// Errors representing failed interactions with the Ensembl REST API.
#[derive(thiserror::Error, Debug)]
pub enum EnsemblError {
    /// Error response from Ensembl.
    #[error("({status:?} {reason:?}): {text}")]
    Http {
        status: StatusCode,
        reason: &'static str,
        text: String,
        source: reqwest::Error,
    },

    /// Failure without a response from Ensembl.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// JSON body of a request could not be serialized.
    #[error("Cannot serialize request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body is not the JSON it was expected to be.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Typed decoding was requested for a response fetched as plain text.
    #[error("Response was requested as \"{0}\", not JSON")]
    NotJson(ResponseFormat),
}

impl EnsemblError {
    /// HTTP status of an error response, if Ensembl sent one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            EnsemblError::Http { status, .. } => Some(*status),
            EnsemblError::Raw(e) => e.status(),
            _ => None,
        }
    }
}

pub(crate) fn encode_body(body: &serde_json::Value) -> Result<Vec<u8>, EnsemblError> {
    serde_json::to_vec(body).map_err(EnsemblError::Encode)
}

pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, EnsemblError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().await.map_err(EnsemblError::Raw)?;
            Err(EnsemblError::Http {
                status,
                reason,
                text,
                source,
            })
        }
    }
}

impl From<reqwest_middleware::Error> for EnsemblError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => EnsemblError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => EnsemblError::Raw(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode_errors_are_distinct() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let encode = EnsemblError::Encode(cause);
        assert!(encode.to_string().starts_with("Cannot serialize request body"));
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let decode = EnsemblError::from(cause);
        assert!(matches!(decode, EnsemblError::Decode(_)));
    }

    #[test]
    fn test_encode_body() {
        let body = serde_json::json!({"ids": ["ENSG1"]});
        assert_eq!(encode_body(&body).unwrap(), br#"{"ids":["ENSG1"]}"#);
    }
}
