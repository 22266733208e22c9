use crate::errors::DispatchError;
use serde_json::Value;

/// The identifying argument of a lookup: either one identifier, which is
/// fetched with `GET`, or a list of identifiers fetched together with `POST`.
///
/// The variant decides the request, not the number of identifiers: a
/// [Identifier::Many] holding a single ID is still sent as a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Single(String),
    Many(Vec<String>),
}

impl Identifier {
    pub fn is_batch(&self) -> bool {
        matches!(self, Identifier::Many(_))
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Single(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Single(value)
    }
}

impl From<&String> for Identifier {
    fn from(value: &String) -> Self {
        Identifier::Single(value.clone())
    }
}

impl From<Vec<String>> for Identifier {
    fn from(value: Vec<String>) -> Self {
        Identifier::Many(value)
    }
}

impl From<Vec<&str>> for Identifier {
    fn from(value: Vec<&str>) -> Self {
        value.as_slice().into()
    }
}

impl From<&[&str]> for Identifier {
    fn from(value: &[&str]) -> Self {
        Identifier::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Identifier {
    fn from(value: [&str; N]) -> Self {
        value.as_slice().into()
    }
}

/// For identifiers which arrive untyped, e.g. from a JSON document.
impl TryFrom<Value> for Identifier {
    type Error = DispatchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Identifier::Single(s)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(s) => Ok(s),
                    other => Err(DispatchError::NonStringElement {
                        index,
                        kind: json_kind(&other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Identifier::Many),
            other => Err(DispatchError::UnsupportedShape(json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
