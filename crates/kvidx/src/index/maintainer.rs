use crate::{
    entity::EntityKind,
    index::{key::indices_of_entity_key, plan, plan::IndexPlan},
    registry::IndexRegistry,
    store::{Reply, StoreClient, StoreCommand, StoreError},
};
use thiserror::Error as ThisError;

///
/// ExecMode
///
/// How a computed plan is transmitted to the store. The plan is identical
/// across modes; only the round-trip count differs. Always an explicit
/// per-call argument, never ambient state.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecMode {
    /// One blocking round trip per command, in plan order.
    PerCommand,
    /// The whole plan as a single batch in one round trip.
    Pipelined,
}

impl ExecMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerCommand => "per-command",
            Self::Pipelined => "pipelined",
        }
    }
}

///
/// IndexError
///

#[derive(Debug, ThisError)]
pub enum IndexError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

///
/// IndexWriteReport
///
/// Outcome of one maintenance call: logical index entries touched and store
/// commands issued (including bookkeeping reads/deletes on the delete path).
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexWriteReport {
    pub entries: usize,
    pub commands: usize,
    pub mode: ExecMode,
}

///
/// IndexMaintainer
///
/// Translates an entity's indexed attributes into set-membership operations
/// and applies them against a store client, one command per round trip or as
/// a single pipelined batch. Mutates store state only; never writes back to
/// the entity.
///

pub struct IndexMaintainer<'a> {
    registry: &'a IndexRegistry,
}

impl<'a> IndexMaintainer<'a> {
    #[must_use]
    pub const fn new(registry: &'a IndexRegistry) -> Self {
        Self { registry }
    }

    /// Compute the add-path plan for an entity without applying it.
    #[must_use]
    pub fn plan_add<E: EntityKind>(&self, entity: &E) -> IndexPlan {
        plan::plan_add(self.registry, entity)
    }

    /// Add every index entry implied by the entity's current indexed
    /// attribute values, and record each index key in the entity's
    /// indices-of-entity set.
    pub fn add_to_indices<C: StoreClient, E: EntityKind>(
        &self,
        client: &mut C,
        entity: &E,
        mode: ExecMode,
    ) -> Result<IndexWriteReport, IndexError> {
        let plan = plan::plan_add(self.registry, entity);
        let report = IndexWriteReport {
            entries: plan.entries(),
            commands: plan.len(),
            mode,
        };
        apply(client, plan, mode)?;

        Ok(report)
    }

    /// Remove the entity from every index set recorded in its
    /// indices-of-entity set, then delete the bookkeeping set itself.
    ///
    /// The recorded set is the source of truth for what to remove; attribute
    /// values are never re-derived, so removal stays complete even when the
    /// entity's attributes have already changed.
    pub fn remove_from_indices<C: StoreClient, E: EntityKind>(
        &self,
        client: &mut C,
        entity: &E,
        mode: ExecMode,
    ) -> Result<IndexWriteReport, IndexError> {
        let indices_key = indices_of_entity_key(entity.entity_name(), entity.id());

        let reply = client.execute(StoreCommand::SMembers {
            key: indices_key.clone(),
        })?;
        let index_keys = match reply {
            Reply::Members(keys) => keys,
            other => {
                return Err(StoreError::UnexpectedReply {
                    command: "SMEMBERS",
                    reply: format!("{other:?}"),
                }
                .into());
            }
        };

        let plan = plan::plan_removals(index_keys, entity.id());
        let report = IndexWriteReport {
            entries: plan.entries(),
            // SMEMBERS + removals + DEL.
            commands: plan.len() + 2,
            mode,
        };
        apply(client, plan, mode)?;

        // The bookkeeping key is deleted only after every removal has been
        // acknowledged, as its own round trip outside the batch boundary.
        client.execute(StoreCommand::Del { key: indices_key })?;

        Ok(report)
    }
}

/// Mechanical transmission of a computed plan. An empty plan issues nothing.
fn apply<C: StoreClient>(client: &mut C, plan: IndexPlan, mode: ExecMode) -> Result<(), IndexError> {
    if plan.is_empty() {
        return Ok(());
    }

    match mode {
        ExecMode::PerCommand => {
            for command in plan.into_commands() {
                client.execute(command)?;
            }
        }
        ExecMode::Pipelined => {
            client.pipeline(plan.into_commands())?;
        }
    }

    Ok(())
}
