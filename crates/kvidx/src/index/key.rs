use crate::{entity::EntityId, value::Value};
use derive_more::Display;

///
/// IndexKey
///
/// Deterministic string identifying the set of entity ids sharing one
/// (attribute, value) pair: `<entity>:idx:<attribute>:<value>`.
///
/// The rendering of `value` comes from `Value::Display` and must stay stable;
/// index keys written by one process version must be derivable by the next.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IndexKey(String);

impl IndexKey {
    #[must_use]
    pub fn new(entity_name: &str, attribute: &str, value: &Value) -> Self {
        Self(format!("{entity_name}:idx:{attribute}:{value}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Key of the indices-of-entity set: the per-entity bookkeeping set holding
/// every index key the entity currently participates in.
#[must_use]
pub fn indices_of_entity_key(entity_name: &str, id: &EntityId) -> String {
    format!("{entity_name}:{id}:_indices")
}

///
/// TESTS
///
