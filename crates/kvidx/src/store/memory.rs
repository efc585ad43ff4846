use crate::store::{Reply, StoreClient, StoreCommand, StoreError};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

///
/// StoreStats
///
/// Round-trip and command counters. One `execute` call is one round trip;
/// one `pipeline` call is one round trip regardless of batch size.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StoreStats {
    pub round_trips: u64,
    pub commands: u64,
}

///
/// MemoryStore
///
/// In-process reference store used by tests and the benchmark harness. Keeps
/// the same command semantics a remote store would: idempotent `SADD`, no-op
/// `SREM` on absent members, and a set key that disappears when its last
/// member is removed.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    sets: BTreeMap<String, BTreeSet<String>>,
    stats: StoreStats,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete every key. Counters are left intact; see `reset_stats`.
    pub fn flush(&mut self) {
        self.sets.clear();
    }

    pub fn reset_stats(&mut self) {
        self.stats = StoreStats::default();
    }

    #[must_use]
    pub const fn stats(&self) -> StoreStats {
        self.stats
    }

    #[must_use]
    pub fn key_exists(&self, key: &str) -> bool {
        self.sets.contains_key(key)
    }

    /// Members of the set at `key`, empty if the key is absent.
    #[must_use]
    pub fn set_members(&self, key: &str) -> Vec<String> {
        self.sets
            .get(key)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether any set in the store contains `member`.
    #[must_use]
    pub fn any_set_contains(&self, member: &str) -> bool {
        self.sets.values().any(|members| members.contains(member))
    }

    /// Point-in-time copy of every set, for state comparison in tests and
    /// diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.sets.clone()
    }

    fn apply(&mut self, command: StoreCommand) -> Reply {
        self.stats.commands += 1;

        match command {
            StoreCommand::SAdd { key, member } => {
                Reply::Added(self.sets.entry(key).or_default().insert(member))
            }
            StoreCommand::SRem { key, member } => {
                let Some(members) = self.sets.get_mut(&key) else {
                    return Reply::Removed(false);
                };
                let removed = members.remove(&member);
                if members.is_empty() {
                    self.sets.remove(&key);
                }
                Reply::Removed(removed)
            }
            StoreCommand::SMembers { key } => Reply::Members(self.set_members(&key)),
            StoreCommand::Del { key } => Reply::Deleted(self.sets.remove(&key).is_some()),
        }
    }
}

impl StoreClient for MemoryStore {
    fn execute(&mut self, command: StoreCommand) -> Result<Reply, StoreError> {
        self.stats.round_trips += 1;
        Ok(self.apply(command))
    }

    fn pipeline(&mut self, commands: Vec<StoreCommand>) -> Result<Vec<Reply>, StoreError> {
        self.stats.round_trips += 1;
        Ok(commands.into_iter().map(|cmd| self.apply(cmd)).collect())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn sadd(key: &str, member: &str) -> StoreCommand {
        StoreCommand::SAdd {
            key: key.into(),
            member: member.into(),
        }
    }

    #[test]
    fn sadd_is_idempotent() {
        let mut store = MemoryStore::new();
        assert_eq!(store.execute(sadd("k", "a")).unwrap(), Reply::Added(true));
        assert_eq!(store.execute(sadd("k", "a")).unwrap(), Reply::Added(false));
        assert_eq!(store.set_members("k"), vec!["a".to_string()]);
    }

    #[test]
    fn srem_on_absent_member_is_noop() {
        let mut store = MemoryStore::new();
        let reply = store
            .execute(StoreCommand::SRem {
                key: "k".into(),
                member: "a".into(),
            })
            .unwrap();
        assert_eq!(reply, Reply::Removed(false));
    }

    #[test]
    fn removing_last_member_drops_the_key() {
        let mut store = MemoryStore::new();
        store.execute(sadd("k", "a")).unwrap();
        store
            .execute(StoreCommand::SRem {
                key: "k".into(),
                member: "a".into(),
            })
            .unwrap();
        assert!(!store.key_exists("k"));
    }

    #[test]
    fn del_removes_the_key() {
        let mut store = MemoryStore::new();
        store.execute(sadd("k", "a")).unwrap();
        assert_eq!(
            store.execute(StoreCommand::Del { key: "k".into() }).unwrap(),
            Reply::Deleted(true)
        );
        assert!(!store.key_exists("k"));
    }

    #[test]
    fn pipeline_replies_arrive_in_submission_order() {
        let mut store = MemoryStore::new();
        let replies = store
            .pipeline(vec![
                sadd("k", "a"),
                sadd("k", "b"),
                StoreCommand::SMembers { key: "k".into() },
            ])
            .unwrap();

        assert_eq!(
            replies,
            vec![
                Reply::Added(true),
                Reply::Added(true),
                Reply::Members(vec!["a".into(), "b".into()]),
            ]
        );
    }

    #[test]
    fn pipeline_counts_one_round_trip() {
        let mut store = MemoryStore::new();
        store.pipeline(vec![sadd("k", "a"), sadd("k", "b")]).unwrap();
        store.execute(sadd("k", "c")).unwrap();

        let stats = store.stats();
        assert_eq!(stats.round_trips, 2);
        assert_eq!(stats.commands, 3);
    }

    #[test]
    fn flush_clears_keys_but_keeps_counters() {
        let mut store = MemoryStore::new();
        store.execute(sadd("k", "a")).unwrap();
        store.flush();

        assert!(!store.key_exists("k"));
        assert_eq!(store.stats().commands, 1);
    }
}
