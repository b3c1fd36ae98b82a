//! Shared domain types.
//!
//! Everything here is transient: a record is read, encoded, scored and dropped
//! within a single prediction call.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::EncodeError;

/// A single raw attribute value as supplied by the data-entry side.
///
/// Codes arrive as integers, grades and rates as floats. JSON numbers without a
/// fractional part deserialize as `Int`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
}

impl RawValue {
    pub fn as_f64(self) -> f64 {
        match self {
            RawValue::Int(v) => v as f64,
            RawValue::Float(v) => v,
        }
    }

    /// Interpret the value as a classification code.
    ///
    /// A float with no fractional part counts as that integer; anything else is
    /// not a code at all and will land in the fallback bucket.
    pub fn as_code(self) -> Option<i64> {
        match self {
            RawValue::Int(v) => Some(v),
            RawValue::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i64),
            RawValue::Float(_) => None,
        }
    }

    /// Parse a text cell. Integers win over floats; non-finite numbers are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Some(RawValue::Int(v));
        }
        let v = s.parse::<f64>().ok()?;
        if v.is_finite() { Some(RawValue::Float(v)) } else { None }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(v) => write!(f, "{v}"),
            RawValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Raw input record: attribute name -> value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInputRecord {
    values: BTreeMap<String, RawValue>,
}

impl RawInputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literals and tests.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<RawValue> {
        self.values.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<RawValue> {
        self.values.get(field).copied()
    }

    /// Fetch a field the encoder cannot do without.
    pub fn require(&self, field: &str) -> Result<RawValue, EncodeError> {
        self.get(field).ok_or_else(|| EncodeError::missing_field(field))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RawValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, RawValue)> for RawInputRecord {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Ordered feature vector, laid out exactly as the classifier expects.
///
/// Serializes as a JSON object whose key order is the vector order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn from_parts(names: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The numeric row handed to `Classifier::predict`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.values[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Binary outcome of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Graduate,
    Dropout,
}

impl Label {
    /// The training target's `{0, 1}` encoding.
    pub fn class(self) -> u8 {
        match self {
            Label::Graduate => 0,
            Label::Dropout => 1,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Label::Graduate => "Graduate",
            Label::Dropout => "Dropout",
        }
    }
}

/// Classifier verdict for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: Label,
    /// Present when the classifier exposes a probability.
    pub dropout_probability: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_interpretation() {
        assert_eq!(RawValue::Int(42).as_code(), Some(42));
        assert_eq!(RawValue::Float(42.0).as_code(), Some(42));
        assert_eq!(RawValue::Float(1.5).as_code(), None);
        assert_eq!(RawValue::Float(f64::NAN).as_code(), None);
    }

    #[test]
    fn parse_prefers_integers_and_rejects_non_finite() {
        assert_eq!(RawValue::parse(" 17 "), Some(RawValue::Int(17)));
        assert_eq!(RawValue::parse("13.4"), Some(RawValue::Float(13.4)));
        assert_eq!(RawValue::parse("NaN"), None);
        assert_eq!(RawValue::parse("inf"), None);
        assert_eq!(RawValue::parse("abc"), None);
    }

    #[test]
    fn json_numbers_keep_their_kind() {
        let rec: RawInputRecord = serde_json::from_str(r#"{"Course": 9500, "GDP": 1.74}"#).unwrap();
        assert_eq!(rec.get("Course"), Some(RawValue::Int(9500)));
        assert_eq!(rec.get("GDP"), Some(RawValue::Float(1.74)));
        assert_eq!(
            rec.require("Gender"),
            Err(EncodeError::missing_field("Gender"))
        );
    }

    #[test]
    fn feature_vector_serializes_in_order() {
        let fv = FeatureVector::from_parts(
            vec!["b".to_string(), "a".to_string()],
            vec![2.0, 1.0],
        );
        let json = serde_json::to_string(&fv).unwrap();
        assert_eq!(json, r#"{"b":2.0,"a":1.0}"#);
        assert_eq!(fv.get("a"), Some(1.0));
        assert_eq!(fv.get("c"), None);
    }

    #[test]
    fn label_classes() {
        assert_eq!(Label::Graduate.class(), 0);
        assert_eq!(Label::Dropout.class(), 1);
    }
}
