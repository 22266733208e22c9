use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Response formats understood by the Ensembl REST API.
///
/// The lowercase variant name is the format name used throughout the
/// Ensembl documentation, e.g. `"fasta"` or `"phyloxml"`.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
    Nh,
    Phyloxml,
    Orthoxml,
    Gff3,
    Fasta,
    Bed,
    Seqxml,
    Text,
    Yaml,
    Jsonp,
}

impl ResponseFormat {
    /// MIME type sent as `Content-Type` (and `Accept` for POST requests).
    pub fn mime(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "text/xml",
            ResponseFormat::Nh => "text/x-nh",
            ResponseFormat::Phyloxml => "text/x-phyloxml+xml",
            ResponseFormat::Orthoxml => "text/x-orthoxml+xml",
            ResponseFormat::Gff3 => "text/x-gff3",
            ResponseFormat::Fasta => "text/x-fasta",
            ResponseFormat::Bed => "text/x-bed",
            ResponseFormat::Seqxml => "text/x-seqxml+xml",
            ResponseFormat::Text => "text/plain",
            ResponseFormat::Yaml => "text/x-yaml",
            ResponseFormat::Jsonp => "text/javascript",
        }
    }

    /// Whether responses in this format are parsed as JSON.
    pub fn is_json(&self) -> bool {
        self.mime() == "application/json"
    }

    /// Look up a format by its name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::from_str(name).map_err(|_| ConfigError::UnknownFormat(name.to_string()))
    }
}

/// Get the MIME type for a format name, e.g. `"fasta"` -> `"text/x-fasta"`.
pub fn mime_for(name: &str) -> Result<&'static str, ConfigError> {
    ResponseFormat::from_name(name).map(|f| f.mime())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("json", "application/json")]
    #[case("xml", "text/xml")]
    #[case("nh", "text/x-nh")]
    #[case("phyloxml", "text/x-phyloxml+xml")]
    #[case("orthoxml", "text/x-orthoxml+xml")]
    #[case("gff3", "text/x-gff3")]
    #[case("fasta", "text/x-fasta")]
    #[case("bed", "text/x-bed")]
    #[case("seqxml", "text/x-seqxml+xml")]
    #[case("text", "text/plain")]
    #[case("yaml", "text/x-yaml")]
    #[case("jsonp", "text/javascript")]
    fn test_mime_for(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(mime_for(name).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("JSON")]
    #[case("html")]
    #[case("fastq")]
    fn test_unknown_format(#[case] name: &str) {
        assert!(matches!(
            mime_for(name).unwrap_err(),
            ConfigError::UnknownFormat(n) if n == name
        ))
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for format in ResponseFormat::iter() {
            assert_eq!(ResponseFormat::from_name(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_only_json_is_parsed() {
        let parsed: Vec<_> = ResponseFormat::iter().filter(|f| f.is_json()).collect();
        assert_eq!(parsed, vec![ResponseFormat::Json]);
    }
}
