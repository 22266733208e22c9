use strum::{Display, EnumString};

/// HTTP methods used by the Ensembl REST API.
///
/// Lookups of one identifier use `GET`; batched lookups and GA4GH searches
/// use `POST` with a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    Get,
    Post,
}

impl RestMethod {
    /// Returns `true` if requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post)
    }

    /// Returns `true` if the rate-limit retry may resend this request.
    pub fn is_retried(method: &reqwest::Method) -> bool {
        *method == reqwest::Method::GET || *method == reqwest::Method::POST
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        match method {
            RestMethod::Get => reqwest::Method::GET,
            RestMethod::Post => reqwest::Method::POST,
        }
    }
}
