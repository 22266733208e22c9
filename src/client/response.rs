use crate::errors::{check, EnsemblError};
use crate::types::ResponseFormat;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of a successful Ensembl response.
///
/// JSON responses are parsed, every other format is kept as the text the
/// server sent, together with the format it was requested in.
#[derive(Debug, Clone, PartialEq)]
pub enum EnsemblResponse {
    Json(Value),
    Text { format: ResponseFormat, body: String },
}

impl EnsemblResponse {
    pub(crate) async fn decode(
        res: reqwest::Response,
        format: ResponseFormat,
    ) -> Result<Self, EnsemblError> {
        let res = check(res).await?;
        if format.is_json() {
            let bytes = res.bytes().await?;
            Ok(EnsemblResponse::Json(serde_json::from_slice(&bytes)?))
        } else {
            let body = res.text().await?;
            Ok(EnsemblResponse::Text { format, body })
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            EnsemblResponse::Json(value) => Some(value),
            EnsemblResponse::Text { .. } => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            EnsemblResponse::Json(_) => None,
            EnsemblResponse::Text { body, .. } => Some(body),
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            EnsemblResponse::Json(value) => Some(value),
            EnsemblResponse::Text { .. } => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            EnsemblResponse::Json(_) => None,
            EnsemblResponse::Text { body, .. } => Some(body),
        }
    }

    /// Format the response was requested in.
    pub fn format(&self) -> ResponseFormat {
        match self {
            EnsemblResponse::Json(_) => ResponseFormat::Json,
            EnsemblResponse::Text { format, .. } => *format,
        }
    }

    /// Decode a JSON response into `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, EnsemblError> {
        match self {
            EnsemblResponse::Json(value) => Ok(serde_json::from_value(value)?),
            EnsemblResponse::Text { format, .. } => Err(EnsemblError::NotJson(format)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Gene {
        id: String,
        display_name: String,
    }

    #[test]
    fn test_deserialize() {
        let response = EnsemblResponse::Json(json!({
            "id": "ENSG00000157764",
            "display_name": "BRAF",
            "biotype": "protein_coding"
        }));
        let gene: Gene = response.deserialize().unwrap();
        assert_eq!(
            gene,
            Gene {
                id: "ENSG00000157764".to_string(),
                display_name: "BRAF".to_string()
            }
        );
    }

    #[rstest]
    #[case(ResponseFormat::Fasta, ">ENSG00000157764\nACGT\n", "fasta")]
    #[case(ResponseFormat::Nh, "(a,b);", "nh")]
    #[case(ResponseFormat::Text, "ACGT", "text")]
    fn test_deserialize_text_names_its_format(
        #[case] format: ResponseFormat,
        #[case] body: &str,
        #[case] name: &str,
    ) {
        let response = EnsemblResponse::Text {
            format,
            body: body.to_string(),
        };
        let err = response.deserialize::<Gene>().unwrap_err();
        assert!(matches!(err, EnsemblError::NotJson(f) if f == format));
        assert_eq!(
            err.to_string(),
            format!("Response was requested as \"{name}\", not JSON")
        );
    }

    #[test]
    fn test_accessors() {
        let json = EnsemblResponse::Json(json!({"ping": 1}));
        assert_eq!(json.as_json().unwrap()["ping"], 1);
        assert!(json.as_text().is_none());
        assert_eq!(json.format(), ResponseFormat::Json);
        let text = EnsemblResponse::Text {
            format: ResponseFormat::Nh,
            body: "(a,b);".to_string(),
        };
        assert_eq!(text.as_text(), Some("(a,b);"));
        assert_eq!(text.format(), ResponseFormat::Nh);
        assert_eq!(text.into_text().unwrap(), "(a,b);");
    }
}
