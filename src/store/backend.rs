//! Persistence backend abstraction.
//!
//! A [`PreferenceStore`] is a flat string-keyed store of scalar values,
//! shaped like the platform preference stores (user defaults, shared
//! preferences) that mobile hosts provide.

use serde::{Deserialize, Serialize, Serializer};

/// A scalar value held by a [`PreferenceStore`].
///
/// JSON has no representation for infinities or NaN, so non-finite
/// numbers serialize as their text form (`"inf"`, `"-inf"`, `"NaN"`).
/// [`as_double`](Self::as_double) parses them back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    /// Text value
    String(String),
    /// Floating point value
    Double(f64),
}

impl PreferenceValue {
    /// Read the value as text.
    ///
    /// Numbers are coerced to their decimal representation.
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Double(d) => d.to_string(),
        }
    }

    /// Read the value as a number.
    ///
    /// Text is parsed when it holds a number and reads as `0.0` otherwise.
    pub fn as_double(&self) -> f64 {
        match self {
            Self::String(s) => s.trim().parse().unwrap_or(0.0),
            Self::Double(d) => *d,
        }
    }
}

impl Serialize for PreferenceValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Double(d) if d.is_finite() => serializer.serialize_f64(*d),
            Self::Double(d) => serializer.collect_str(d),
        }
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<f64> for PreferenceValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

/// Key-value persistence backend.
///
/// Every call is atomic on its own. No call reports failure: backends
/// that can fail internally log the failure and carry on.
pub trait PreferenceStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    fn set_value(&self, key: &str, value: PreferenceValue);

    /// Returns the raw value stored under `key`.
    fn value(&self, key: &str) -> Option<PreferenceValue>;

    /// Removes `key`. Removing an absent key is a no-op.
    fn remove_object(&self, key: &str);

    /// Returns every stored key in ascending order.
    fn keys(&self) -> Vec<String>;

    /// Returns the value under `key` as text, or `None` when absent.
    fn string(&self, key: &str) -> Option<String> {
        self.value(key).map(|v| v.as_string())
    }

    /// Returns the value under `key` as a number, or `0.0` when absent.
    fn double(&self, key: &str) -> f64 {
        self.value(key).map_or(0.0, |v| v.as_double())
    }

    /// Checks whether `key` holds a value.
    fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PreferenceValue::from("https://wallet.example"), "https://wallet.example")]
    #[case(PreferenceValue::from(1.5), "1.5")]
    #[case(PreferenceValue::from(1_700_000_000.0), "1700000000")]
    fn test_as_string_coercion(#[case] value: PreferenceValue, #[case] expected: &str) {
        assert_eq!(value.as_string(), expected);
    }

    #[rstest]
    #[case(PreferenceValue::from(42.25), 42.25)]
    #[case(PreferenceValue::from("17.5"), 17.5)]
    #[case(PreferenceValue::from(" 3 "), 3.0)]
    #[case(PreferenceValue::from("not a number"), 0.0)]
    #[case(PreferenceValue::from(""), 0.0)]
    fn test_as_double_coercion(#[case] value: PreferenceValue, #[case] expected: f64) {
        assert_eq!(value.as_double(), expected);
    }

    #[test]
    fn test_untagged_serialization() {
        let text = serde_json::to_string(&PreferenceValue::from("abc")).unwrap();
        assert_eq!(text, "\"abc\"");

        let number = serde_json::to_string(&PreferenceValue::from(2.5)).unwrap();
        assert_eq!(number, "2.5");

        let decoded: PreferenceValue = serde_json::from_str("12").unwrap();
        assert_eq!(decoded, PreferenceValue::Double(12.0));
    }

    #[rstest]
    #[case(f64::INFINITY, "\"inf\"")]
    #[case(f64::NEG_INFINITY, "\"-inf\"")]
    #[case(f64::NAN, "\"NaN\"")]
    fn test_non_finite_serializes_as_text(#[case] number: f64, #[case] expected: &str) {
        let text = serde_json::to_string(&PreferenceValue::Double(number)).unwrap();
        assert_eq!(text, expected);

        let decoded: PreferenceValue = serde_json::from_str(&text).unwrap();
        let reread = decoded.as_double();
        if number.is_nan() {
            assert!(reread.is_nan());
        } else {
            assert_eq!(reread, number);
        }
    }
}
