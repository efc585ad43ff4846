//! Core runtime for kvidx: entity traits, attribute values, the index
//! registry, and index maintenance against a set-capable key-value store.
#![warn(unreachable_pub)]

pub mod entity;
pub mod index;
pub mod model;
pub mod registry;
pub mod store;
pub mod value;

///
/// CONSTANTS
///

/// Maximum number of indexed attributes allowed on an entity model.
///
/// Keeps the per-entity command plan bounded; enforced at registration.
pub const MAX_INDEXED_ATTRIBUTES: usize = 16;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, plans, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        entity::{EntityId, EntityKind, Record},
        index::{ExecMode, IndexMaintainer},
        model::{AttributeKind, AttributeModel, EntityModel},
        registry::IndexRegistry,
        value::{AttributeValue, Value},
    };
}
