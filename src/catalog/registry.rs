//! Entity catalog.
//!
//! The `Catalog` stores every guessable entity in a stable order and
//! provides lookup by ID and by case-insensitive name. It is validated once
//! on construction and immutable afterwards.

use log::info;
use rustc_hash::FxHashMap;

use super::attributes::AttributeValue;
use super::entity::{normalize_name, Entity, EntityId};
use super::schema::{AttributeKind, Schema};
use crate::core::error::{CatalogError, GuessError};

/// Immutable, ordered collection of entities.
///
/// ## Example
///
/// ```
/// use daily_guess::catalog::{Catalog, Entity, EntityId, Schema};
///
/// let catalog = Catalog::new(
///     Schema::champions(),
///     vec![Entity::new(EntityId::new(1), "Annie"), Entity::new(EntityId::new(2), "Ahri")],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.lookup("aHRi").unwrap().id, EntityId::new(2));
/// assert!(catalog.lookup("Ahr").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    schema: Schema,
    entities: Vec<Entity>,
    by_id: FxHashMap<EntityId, usize>,
    by_name: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating every entity against the schema.
    ///
    /// Fails on an empty list, duplicate IDs or names, blank names, unknown
    /// attribute keys and values of the wrong shape.
    pub fn new(schema: Schema, entities: Vec<Entity>) -> Result<Self, CatalogError> {
        if entities.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = FxHashMap::default();
        let mut by_name = FxHashMap::default();

        for (index, entity) in entities.iter().enumerate() {
            let name = entity.match_key();
            if name.is_empty() {
                return Err(CatalogError::EmptyName(entity.id));
            }
            if by_id.insert(entity.id, index).is_some() {
                return Err(CatalogError::DuplicateId(entity.id));
            }
            if by_name.insert(name, index).is_some() {
                return Err(CatalogError::DuplicateName(entity.name.clone()));
            }
            check_attributes(&schema, entity)?;
        }

        info!("loaded catalog with {} entities", entities.len());

        Ok(Self {
            schema,
            entities,
            by_id,
            by_name,
        })
    }

    /// The attribute schema shared by all entities.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Find an entity by exact name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        self.by_name
            .get(&normalize_name(name))
            .map(|&index| &self.entities[index])
    }

    /// Resolve raw player input to an entity.
    pub fn resolve(&self, input: &str) -> Result<&Entity, GuessError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GuessError::EmptyInput);
        }
        self.lookup(trimmed)
            .ok_or_else(|| GuessError::UnknownEntity(trimmed.to_string()))
    }

    /// Get an entity by ID.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.by_id.get(&id).map(|&index| &self.entities[index])
    }

    /// Check if an ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All entities in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    /// Iterate over entities in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entity names in catalog order, for populating an input list.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }

    /// Entities whose name starts with `prefix`, ignoring case.
    ///
    /// Only for autocomplete; guesses are resolved by exact name.
    pub fn suggest<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a Entity> + 'a {
        let prefix = normalize_name(prefix);
        self.entities
            .iter()
            .filter(move |e| !prefix.is_empty() && e.match_key().starts_with(&prefix))
    }

    /// Number of entities. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always false; empty catalogs are rejected on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

fn check_attributes(schema: &Schema, entity: &Entity) -> Result<(), CatalogError> {
    for (key, value) in &entity.attributes {
        let spec = schema
            .get(key.as_str())
            .ok_or_else(|| CatalogError::UnknownAttribute {
                entity: entity.id,
                key: key.as_str().to_string(),
            })?;

        let matches = match (spec.kind, value) {
            (AttributeKind::Exact | AttributeKind::List, AttributeValue::Text(_)) => true,
            (AttributeKind::Year, AttributeValue::Year(_)) => true,
            _ => false,
        };
        if !matches {
            return Err(CatalogError::InvalidAttribute {
                entity: entity.id,
                key: key.as_str().to_string(),
                expected: spec.kind.expected(),
            });
        }
    }
    Ok(())
}
