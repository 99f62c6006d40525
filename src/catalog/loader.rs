//! Loading catalogs from JSON.
//!
//! The data is a JSON array of flat records:
//!
//! ```json
//! [
//!   { "id": 103, "name": "Ahri", "region": "Ionia", "genre": "Mage, Assassin",
//!     "releaseDate": 2011 }
//! ]
//! ```
//!
//! Every key other than `id` and `name` must be a schema key. `null` or an
//! absent key means "no value". Year columns accept an integer or a string
//! holding one.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::attributes::AttributeValue;
use super::entity::{Entity, EntityId};
use super::registry::Catalog;
use super::schema::{AttributeKind, Schema};
use crate::core::error::CatalogError;

#[derive(Debug, Deserialize)]
struct EntityRecord {
    id: u32,
    name: String,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(schema: Schema, json: &str) -> Result<Self, CatalogError> {
        let records: Vec<EntityRecord> = serde_json::from_str(json)?;
        let entities = records
            .into_iter()
            .map(|record| to_entity(&schema, record))
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(schema, entities)
    }

    /// Read and parse a catalog file.
    pub fn load<P: AsRef<Path>>(schema: Schema, path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(schema, &content)
    }
}

fn to_entity(schema: &Schema, record: EntityRecord) -> Result<Entity, CatalogError> {
    let id = EntityId::new(record.id);
    let mut entity = Entity::new(id, record.name);

    for (key, raw) in record.fields {
        let spec = schema
            .get(&key)
            .ok_or_else(|| CatalogError::UnknownAttribute {
                entity: id,
                key: key.clone(),
            })?;

        if raw.is_null() {
            continue;
        }

        let value = match spec.kind {
            AttributeKind::Exact | AttributeKind::List => raw.as_str().map(AttributeValue::from),
            AttributeKind::Year => parse_year(&raw).map(AttributeValue::Year),
        };

        match value {
            Some(value) => {
                entity.attributes.insert(spec.key.clone(), value);
            }
            None => {
                return Err(CatalogError::InvalidAttribute {
                    entity: id,
                    key,
                    expected: spec.kind.expected(),
                })
            }
        }
    }

    Ok(entity)
}

fn parse_year(raw: &Value) -> Option<i32> {
    match raw {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"[
        { "id": 1, "name": "Annie", "region": "Runeterra", "resource": "Mana",
          "lane": "Middle, Support", "genre": "Mage", "attackType": "Ranged",
          "gender": "Female", "releaseDate": 2009 },
        { "id": 103, "name": "Ahri", "region": "Ionia", "genre": "Mage, Assassin",
          "gender": null, "releaseDate": "2011" }
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(Schema::champions(), DATA).unwrap();
        assert_eq!(catalog.len(), 2);

        let annie = catalog.lookup("annie").unwrap();
        assert_eq!(annie.id, EntityId::new(1));
        assert_eq!(annie.get_text("lane"), Some("Middle, Support"));
        assert_eq!(annie.get_year("releaseDate"), Some(2009));

        let ahri = catalog.lookup("Ahri").unwrap();
        assert_eq!(ahri.get_year("releaseDate"), Some(2011));
        assert_eq!(ahri.get_text("gender"), None);
        assert_eq!(ahri.get_text("resource"), None);
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::from_json(Schema::champions(), DATA).unwrap();
        let ids: Vec<_> = catalog.iter().map(|e| e.id.raw()).collect();
        assert_eq!(ids, vec![1, 103]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let json = r#"[{ "id": 1, "name": "Annie", "title": "the Dark Child" }]"#;
        let err = Catalog::from_json(Schema::champions(), json).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownAttribute { ref key, .. } if key == "title"));
    }

    #[test]
    fn test_bad_year_rejected() {
        let json = r#"[{ "id": 1, "name": "Annie", "releaseDate": "Feb 2009" }]"#;
        let err = Catalog::from_json(Schema::champions(), json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAttribute { .. }));
    }

    #[test]
    fn test_non_string_text_rejected() {
        let json = r#"[{ "id": 1, "name": "Annie", "lane": ["Middle"] }]"#;
        assert!(Catalog::from_json(Schema::champions(), json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json(Schema::champions(), "[{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));

        let err = Catalog::from_json(Schema::champions(), r#"[{ "name": "Annie" }]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_empty_array() {
        let err = Catalog::from_json(Schema::champions(), "[]").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load(Schema::champions(), "/nonexistent/champions.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
