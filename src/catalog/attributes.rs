//! Entity attribute values.
//!
//! Attributes are keyed by name and hold one of two value shapes:
//!
//! - `Text`: scalar or comma-separated values ("Ionia", "Mage, Assassin")
//! - `Year`: ordinal values compared by order (release year)
//!
//! How a text value is compared (exact or as a token list) is decided by the
//! schema, not by the value.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing entity attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for an entity attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Text value, possibly a comma-separated list.
    Text(String),
    /// Year value.
    Year(i32),
}

impl AttributeValue {
    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Year(_) => None,
        }
    }

    /// Get as year if this is a Year value.
    #[must_use]
    pub fn as_year(&self) -> Option<i32> {
        match self {
            AttributeValue::Year(y) => Some(*y),
            AttributeValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Year(y) => write!(f, "{}", y),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Year(v)
    }
}

/// Split a comma-separated value into trimmed, non-empty tokens.
pub fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Collection of attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_key() {
        let key1 = AttributeKey::new("region");
        let key2: AttributeKey = "region".into();
        assert_eq!(key1, key2);
        assert_eq!(key1.as_str(), "region");
    }

    #[test]
    fn test_attribute_value_text() {
        let val: AttributeValue = "Ionia".into();
        assert_eq!(val.as_text(), Some("Ionia"));
        assert_eq!(val.as_year(), None);
        assert_eq!(val.to_string(), "Ionia");
    }

    #[test]
    fn test_attribute_value_year() {
        let val: AttributeValue = 2011.into();
        assert_eq!(val.as_year(), Some(2011));
        assert_eq!(val.as_text(), None);
        assert_eq!(val.to_string(), "2011");
    }

    #[test]
    fn test_tokens() {
        let parts: Vec<_> = tokens(" Mage ,Assassin,, ").collect();
        assert_eq!(parts, vec!["Mage", "Assassin"]);
        assert_eq!(tokens("").count(), 0);
    }

    #[test]
    fn test_attributes_map() {
        let mut attrs = Attributes::default();
        attrs.insert("region".into(), "Ionia".into());
        attrs.insert("releaseDate".into(), 2011.into());

        assert_eq!(
            attrs.get(&AttributeKey::new("region")).and_then(|v| v.as_text()),
            Some("Ionia")
        );
        assert_eq!(
            attrs.get(&AttributeKey::new("releaseDate")).and_then(|v| v.as_year()),
            Some(2011)
        );
    }
}
