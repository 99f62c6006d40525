//! Catalog entities.
//!
//! An `Entity` is one guessable item (a champion): a stable identifier, a
//! display name, and the attribute values described by the catalog schema.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Unique, stable identifier for a catalog entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Static entity record.
///
/// ## Example
///
/// ```
/// use daily_guess::catalog::{Entity, EntityId};
///
/// let ahri = Entity::new(EntityId::new(103), "Ahri")
///     .with_attr("region", "Ionia")
///     .with_attr("releaseDate", 2011);
///
/// assert_eq!(ahri.get_text("region"), Some("Ionia"));
/// assert_eq!(ahri.get_year("releaseDate"), Some(2011));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,

    /// Display name, matched case-insensitively.
    pub name: String,

    /// Attribute values keyed by schema key. Absent keys have no value.
    pub attributes: Attributes,
}

impl Entity {
    /// Create an entity with no attribute values.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: Attributes::default(),
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(|v| v.as_text())
    }

    /// Get a year attribute.
    #[must_use]
    pub fn get_year(&self, key: &str) -> Option<i32> {
        self.get_attr(key).and_then(|v| v.as_year())
    }

    /// Case-folded name used for matching.
    #[must_use]
    pub fn match_key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Fold a name or raw input for case-insensitive exact matching.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
