use crate::{
    MAX_INDEXED_ATTRIBUTES,
    model::{AttributeModel, EntityModel},
};
use std::collections::HashMap;

///
/// IndexRegistry
///
/// Per-entity-type description of which attributes are indexed. An explicit
/// object constructed at startup and passed to the maintainer; never mutated
/// after registration completes. Pure lookup, no failure modes.
///

#[derive(Debug, Default)]
pub struct IndexRegistry(HashMap<&'static str, &'static EntityModel>);

impl IndexRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register one entity model. Re-registering a name replaces the model.
    pub fn register(&mut self, model: &'static EntityModel) {
        debug_assert!(
            model.indexed.len() <= MAX_INDEXED_ATTRIBUTES,
            "entity '{}' declares {} indexed attributes (limit {MAX_INDEXED_ATTRIBUTES})",
            model.entity_name,
            model.indexed.len(),
        );
        self.0.insert(model.entity_name, model);
    }

    /// Ordered indexed attributes for an entity type.
    ///
    /// An entity type with zero indexed attributes, or one that was never
    /// registered, yields an empty slice.
    #[must_use]
    pub fn indexed_attributes(&self, entity_name: &str) -> &'static [AttributeModel] {
        self.0.get(entity_name).map_or(&[], |model| model.indexed)
    }
}

///
/// TESTS
///
