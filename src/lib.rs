//! Client for the [Ensembl REST API](https://rest.ensembl.org).
//!
//! Every operation of the API is described by a constant in [endpoints].
//! A call fills in the path of an endpoint, adds query parameters and sends
//! the request with the `Content-Type` of the requested [ResponseFormat].
//! Endpoints which accept identifiers can be given either one identifier,
//! which is sent with `GET`, or a list of identifiers, which is sent in the
//! JSON body of a `POST` to the batch form of the endpoint.
//!
//! ```no_run
//! use ensembl::{EnsemblClient, ResponseFormat, HUMAN};
//!
//! # async fn f() -> Result<(), ensembl::EnsemblError> {
//! let client = EnsemblClient::new()?;
//! let gene = client
//!     .lookup_id()
//!     .param("expand", true)
//!     .dispatch("ENSG00000157764")
//!     .await?;
//! let fasta = client
//!     .sequence_id()
//!     .param("species", HUMAN)
//!     .format(ResponseFormat::Fasta)
//!     .dispatch(vec!["ENSG00000157764", "ENSG00000248378"])
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Responses with status 429 are retried, honoring `Retry-After`. See
//! [RateLimitRetry].

mod client;
mod constants;
pub mod endpoints;
pub mod errors;
mod params;
pub mod types;

pub use client::*;
pub use constants::HUMAN;
pub use endpoints::Endpoint;
pub use errors::{ConfigError, DispatchError, EnsemblError};
pub use params::{ParameterValue, Params};
pub use types::{mime_for, Assembly, Identifier, ResponseFormat, RestMethod, Scheme, Server, ServerUrl};

pub use reqwest;
pub use reqwest_middleware;
