//! The HTTP side of the crate: building a client, sending requests and
//! decoding responses.

mod builder;
mod call;
mod ensembl;
mod operations;
mod request;
mod response;
mod retry;

pub use builder::EnsemblClientBuilder;
pub use call::CallBuilder;
pub use ensembl::EnsemblClient;
pub use request::RequestSpec;
pub use response::EnsemblResponse;
pub use retry::RateLimitRetry;
