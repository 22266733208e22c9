//! Optional parameters of an Ensembl REST call, sent in the query string.
//!
//! Parameters without a value are left out of the request entirely, so
//! `set_opt("expand", None::<bool>)` and not calling `set` at all produce
//! the same URL.

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Value of one query parameter.
///
/// Booleans are sent as `1` and `0`, which is how the Ensembl REST
/// documentation spells flags such as `expand=1`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Serialize for ParameterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterValue::Bool(b) => serializer.serialize_u8(u8::from(*b)),
            ParameterValue::Int(i) => serializer.serialize_i64(*i),
            ParameterValue::Float(f) => serializer.serialize_f64(*f),
            ParameterValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl Display for ParameterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterValue::Bool(b) => write!(f, "{}", u8::from(*b)),
            ParameterValue::Int(i) => write!(f, "{i}"),
            ParameterValue::Float(x) => write!(f, "{x}"),
            ParameterValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Bool(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Int(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Int(value.into())
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        ParameterValue::Int(value.into())
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Float(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Str(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Str(value)
    }
}

/// Ordered query parameters. A key may repeat, e.g. `feature=gene&feature=transcript`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Vec<(String, ParameterValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing earlier values of the same key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter if it has a value. `None` removes the key.
    pub fn set_opt<V: Into<ParameterValue>>(
        mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        let key = key.into();
        match value {
            Some(v) => self.insert(key, v),
            None => self.remove(&key),
        }
        self
    }

    /// Add one entry per value under the same key.
    pub fn set_all<V: Into<ParameterValue>>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let key = key.into();
        self.remove(&key);
        self.0
            .extend(values.into_iter().map(|v| (key.clone(), v.into())));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        let key = key.into();
        self.remove(&key);
        self.0.push((key, value.into()));
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// First value of a key.
    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Append all parameters of `other`, which win over existing keys.
    pub fn merge(mut self, other: Params) -> Self {
        for (key, _) in other.0.iter() {
            self.remove(key);
        }
        self.0.extend(other.0);
        self
    }

    /// The query string as it goes on the wire, without the leading `?`.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

/// Collect `(key, Option<value>)` pairs, dropping every pair without a value.
impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, Option<V>)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, Option<V>)>>(iter: T) -> Self {
        Params(
            iter.into_iter()
                .filter_map(|(k, v)| v.map(|v| (k.into(), v.into())))
                .collect(),
        )
    }
}
