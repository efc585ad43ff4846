//! Pending-operation computation for the maintenance paths.
//!
//! Planning is pure: it reads the registry and the entity and produces the
//! ordered command list. Applying a plan is a separate mechanical step so
//! both execution modes share exactly one computed plan.

use crate::{
    entity::{EntityId, EntityKind},
    index::key::{IndexKey, indices_of_entity_key},
    model::AttributeKind,
    registry::IndexRegistry,
    store::StoreCommand,
    value::{AttributeValue, Value},
};
use std::slice;

///
/// IndexPlan
///
/// Ordered store commands computed for one maintenance call, plus the number
/// of logical index entries they touch.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IndexPlan {
    commands: Vec<StoreCommand>,
    entries: usize,
}

impl IndexPlan {
    #[must_use]
    pub fn commands(&self) -> &[StoreCommand] {
        &self.commands
    }

    pub(crate) fn into_commands(self) -> Vec<StoreCommand> {
        self.commands
    }

    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Member-values contributed by one attribute on this call.
///
/// A missing value, or a value whose runtime shape disagrees with the
/// declared `AttributeKind`, contributes nothing; neither is an error.
fn member_values(kind: AttributeKind, value: Option<&AttributeValue>) -> &[Value] {
    match (kind, value) {
        (AttributeKind::Scalar, Some(AttributeValue::Scalar(v))) => slice::from_ref(v),
        (AttributeKind::MultiValued, Some(AttributeValue::Many(vs))) => vs,
        _ => &[],
    }
}

/// Plan the add path: for every member-value of every indexed attribute, one
/// `SADD` into the index set and one `SADD` into the indices-of-entity set,
/// in registry order.
pub(crate) fn plan_add<E: EntityKind>(registry: &IndexRegistry, entity: &E) -> IndexPlan {
    let entity_name = entity.entity_name();
    let id = entity.id();
    let indices_key = indices_of_entity_key(entity_name, id);

    let mut plan = IndexPlan::default();
    for attribute in registry.indexed_attributes(entity_name) {
        for value in member_values(attribute.kind, entity.attribute(attribute.name)) {
            let index_key = IndexKey::new(entity_name, attribute.name, value);

            plan.commands.push(StoreCommand::SAdd {
                key: index_key.as_str().to_owned(),
                member: id.as_str().to_owned(),
            });
            plan.commands.push(StoreCommand::SAdd {
                key: indices_key.clone(),
                member: index_key.into_string(),
            });
            plan.entries += 1;
        }
    }

    plan
}

/// Plan the delete path removals: one `SREM` per index key currently recorded
/// in the indices-of-entity set. Deleting the bookkeeping set itself is not
/// part of this plan; the maintainer issues it afterwards.
pub(crate) fn plan_removals(index_keys: Vec<String>, id: &EntityId) -> IndexPlan {
    let entries = index_keys.len();
    let commands = index_keys
        .into_iter()
        .map(|key| StoreCommand::SRem {
            key,
            member: id.as_str().to_owned(),
        })
        .collect();

    IndexPlan { commands, entries }
}

///
/// TESTS
///
