//! Attribute schema.
//!
//! Every entity in a catalog shares one schema: an ordered list of attribute
//! specs. The order is the column order of verdict rows and summary lines.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeKey;

/// Attribute keys of the champion schema.
pub mod keys {
    pub const REGION: &str = "region";
    pub const RESOURCE: &str = "resource";
    pub const LANE: &str = "lane";
    pub const GENRE: &str = "genre";
    pub const ATTACK_TYPE: &str = "attackType";
    pub const GENDER: &str = "gender";
    pub const RELEASE_YEAR: &str = "releaseDate";
}

/// How an attribute is compared against the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Scalar text, strict equality.
    Exact,
    /// Comma-separated text, token intersection.
    List,
    /// Year, equality and order.
    Year,
}

impl AttributeKind {
    /// Description of the expected value, used in load errors.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            AttributeKind::Exact | AttributeKind::List => "a string",
            AttributeKind::Year => "a year",
        }
    }
}

/// One column of the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Key in the entity data.
    pub key: AttributeKey,
    /// Column header.
    pub label: String,
    /// Comparison rule.
    pub kind: AttributeKind,
}

impl AttributeSpec {
    /// Create a new attribute spec.
    pub fn new(
        key: impl Into<AttributeKey>,
        label: impl Into<String>,
        kind: AttributeKind,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Ordered attribute specs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    specs: Vec<AttributeSpec>,
}

impl Schema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven-column champion schema.
    ///
    /// Every text column is a comma-separated list, so a shared token
    /// ("Mana" in "Mana, Rage") scores `Partial`.
    #[must_use]
    pub fn champions() -> Self {
        Self::new()
            .with(AttributeSpec::new(keys::REGION, "Region", AttributeKind::List))
            .with(AttributeSpec::new(keys::RESOURCE, "Resource", AttributeKind::List))
            .with(AttributeSpec::new(keys::LANE, "Lane", AttributeKind::List))
            .with(AttributeSpec::new(keys::GENRE, "Genre", AttributeKind::List))
            .with(AttributeSpec::new(keys::ATTACK_TYPE, "Atk Type", AttributeKind::List))
            .with(AttributeSpec::new(keys::GENDER, "Gender", AttributeKind::List))
            .with(AttributeSpec::new(keys::RELEASE_YEAR, "Year", AttributeKind::Year))
    }

    /// Append a spec (builder pattern).
    #[must_use]
    pub fn with(mut self, spec: AttributeSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Find the spec for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeSpec> {
        self.specs.iter().find(|s| s.key.as_str() == key)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate over specs in column order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.specs.iter()
    }

    /// Column headers in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_champion_schema_order() {
        let schema = Schema::champions();
        let labels: Vec<_> = schema.labels().collect();
        assert_eq!(
            labels,
            vec!["Region", "Resource", "Lane", "Genre", "Atk Type", "Gender", "Year"]
        );
    }

    #[test]
    fn test_get_spec() {
        let schema = Schema::champions();
        assert_eq!(schema.get(keys::RELEASE_YEAR).unwrap().kind, AttributeKind::Year);
        assert_eq!(schema.get(keys::GENRE).unwrap().kind, AttributeKind::List);
        assert_eq!(schema.get(keys::RESOURCE).unwrap().kind, AttributeKind::List);
        assert_eq!(schema.get(keys::GENDER).unwrap().kind, AttributeKind::List);
        assert!(schema.get("mana").is_none());
    }

    #[test]
    fn test_schema_serialization() {
        let schema = Schema::champions();
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains(r#""kind":"year""#));

        let deserialized: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, deserialized);
    }
}
