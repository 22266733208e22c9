//! Where requests go: the Ensembl REST servers, selected by genome assembly and scheme.

use crate::errors::{ConfigError, InvalidServerUrl};
use aliri_braid::braid;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Reference genome assembly served by an Ensembl REST server.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString, EnumIter)]
pub enum Assembly {
    #[default]
    GRCh38,
    GRCh37,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

/// One of the public Ensembl REST servers.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Server {
    pub assembly: Assembly,
    pub scheme: Scheme,
}

impl Server {
    pub fn new(assembly: Assembly, scheme: Scheme) -> Self {
        Self { assembly, scheme }
    }

    /// Select a server by names, e.g. `("GRCh37", "https")`.
    pub fn from_names(assembly: &str, scheme: &str) -> Result<Self, ConfigError> {
        let unknown = || ConfigError::UnknownServer {
            assembly: assembly.to_string(),
            scheme: scheme.to_string(),
        };
        let parsed_assembly = Assembly::from_str(assembly).map_err(|_| unknown())?;
        let parsed_scheme = Scheme::from_str(scheme).map_err(|_| unknown())?;
        Ok(Self::new(parsed_assembly, parsed_scheme))
    }

    pub fn host(&self) -> &'static str {
        match self.assembly {
            Assembly::GRCh38 => "rest.ensembl.org",
            Assembly::GRCh37 => "grch37.rest.ensembl.org",
        }
    }

    /// Base URL of this server, e.g. `https://rest.ensembl.org`
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host())
    }
}

/// A [ServerUrl] is the base URL of any Ensembl REST deployment, e.g. a
/// mirror or `http://localhost:3000`. Endpoint paths are joined onto it.
#[braid(validator, serde)]
pub struct ServerUrl(String);

impl aliri_braid::Validator for ServerUrl {
    type Error = InvalidServerUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        let rest = s
            .strip_prefix("http://")
            .or_else(|| s.strip_prefix("https://"))
            .ok_or_else(|| InvalidServerUrl::Protocol(s.to_string()))?;
        if rest.is_empty() || rest.starts_with('/') {
            Err(InvalidServerUrl::NoHost(s.to_string()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("GRCh38", "http", "http://rest.ensembl.org")]
    #[case("GRCh37", "http", "http://grch37.rest.ensembl.org")]
    #[case("GRCh38", "https", "https://rest.ensembl.org")]
    #[case("GRCh37", "https", "https://grch37.rest.ensembl.org")]
    fn test_known_servers(#[case] assembly: &str, #[case] scheme: &str, #[case] expected: &str) {
        let server = Server::from_names(assembly, scheme).unwrap();
        assert_eq!(server.base_url(), expected);
    }

    #[rstest]
    #[case("GRCh99", "http")]
    #[case("GRCh38", "ftp")]
    #[case("grch38", "https")]
    #[case("GRCh37", "HTTPS")]
    fn test_unknown_servers(#[case] assembly: &str, #[case] scheme: &str) {
        assert!(matches!(
            Server::from_names(assembly, scheme).unwrap_err(),
            ConfigError::UnknownServer { .. }
        ))
    }

    #[test]
    fn test_default_server() {
        assert_eq!(Server::default().base_url(), "https://rest.ensembl.org");
    }

    #[rstest]
    #[case("http://localhost")]
    #[case("http://localhost:3000/")]
    #[case("https://rest.ensembl.org")]
    fn test_parse_url(#[case] url: &str) {
        assert!(ServerUrl::try_from(url).is_ok());
    }

    #[rstest]
    #[case("rest.ensembl.org")]
    #[case("ftp://rest.ensembl.org")]
    fn test_reject_bad_protocol(#[case] url: &str) {
        assert!(matches!(
            ServerUrl::try_from(url).unwrap_err(),
            InvalidServerUrl::Protocol { .. }
        ))
    }

    #[rstest]
    #[case("http://")]
    #[case("https:///lookup")]
    fn test_reject_missing_host(#[case] url: &str) {
        assert!(matches!(
            ServerUrl::try_from(url).unwrap_err(),
            InvalidServerUrl::NoHost { .. }
        ))
    }
}
