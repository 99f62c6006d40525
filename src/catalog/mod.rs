//! Catalog system: entities, attributes, schema, and lookup.
//!
//! ## Key Types
//!
//! - `EntityId`: Stable identifier for a guessable entity
//! - `Entity`: Name plus attribute values
//! - `Schema`: Ordered attribute specs shared by every entity
//! - `Catalog`: Validated, immutable, ordered entity collection
//!
//! Catalogs are loaded once at startup (see `Catalog::from_json`) and never
//! mutated. Any problem with the data is a `CatalogError`.

pub mod attributes;
pub mod entity;
pub mod loader;
pub mod registry;
pub mod schema;

pub use attributes::{tokens, AttributeKey, AttributeValue, Attributes};
pub use entity::{normalize_name, Entity, EntityId};
pub use registry::Catalog;
pub use schema::{keys, AttributeKind, AttributeSpec, Schema};
