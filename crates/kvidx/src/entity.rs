use crate::value::AttributeValue;
use derive_more::{Deref, Display};
use std::collections::BTreeMap;
use ulid::Ulid;

///
/// EntityId
///
/// Opaque entity identity. Callers may assign any non-empty string; when none
/// is assigned, a ULID is generated at creation.
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EntityId(String);

impl EntityId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, store-unique id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

///
/// EntityKind
///
/// Read-only view the maintainer needs from an entity: its type name, its
/// identity, and its current attribute values. The maintainer writes nothing
/// back through this trait; the only entity-adjacent state it owns is the
/// indices-of-entity set kept in the store.
///

pub trait EntityKind {
    /// Stable external name of the entity type, as registered.
    fn entity_name(&self) -> &'static str;

    /// Unique identity of this instance.
    fn id(&self) -> &EntityId;

    /// Current value of one attribute, if set.
    fn attribute(&self, name: &str) -> Option<&AttributeValue>;
}

///
/// Record
///
/// Dynamic entity used by tests and the benchmark harness: an id plus a map
/// from attribute name to value. Schema-backed callers implement
/// `EntityKind` directly on their own types instead.
///

#[derive(Clone, Debug)]
pub struct Record {
    entity_name: &'static str,
    id: EntityId,
    attributes: BTreeMap<&'static str, AttributeValue>,
}

impl Record {
    #[must_use]
    pub fn new(entity_name: &'static str, id: impl Into<EntityId>) -> Self {
        Self {
            entity_name,
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_generated_id(entity_name: &'static str) -> Self {
        Self::new(entity_name, EntityId::generate())
    }

    /// Builder-style attribute assignment.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<AttributeValue>) {
        self.attributes.insert(name, value.into());
    }

    pub fn unset(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

impl EntityKind for Record {
    fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn record_reads_back_attributes() {
        let record = Record::new("Widget", "w1").with("zero", "3");

        assert_eq!(record.entity_name(), "Widget");
        assert_eq!(record.id().as_str(), "w1");
        assert_eq!(
            record.attribute("zero"),
            Some(&AttributeValue::Scalar(Value::Text("3".into())))
        );
        assert_eq!(record.attribute("missing"), None);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = Record::with_generated_id("Widget");
        let b = Record::with_generated_id("Widget");
        assert_ne!(a.id(), b.id());
    }
}
