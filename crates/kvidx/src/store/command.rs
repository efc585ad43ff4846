use std::fmt::{self, Display};

///
/// StoreCommand
///
/// The command surface the maintainer consumes, abstracted from any specific
/// store's wire protocol. All set commands are safe to repeat: `SAdd` is
/// idempotent and `SRem` is a no-op on absent members.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreCommand {
    SAdd { key: String, member: String },
    SRem { key: String, member: String },
    SMembers { key: String },
    Del { key: String },
}

impl StoreCommand {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SAdd { .. } => "SADD",
            Self::SRem { .. } => "SREM",
            Self::SMembers { .. } => "SMEMBERS",
            Self::Del { .. } => "DEL",
        }
    }
}

impl Display for StoreCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SAdd { key, member } | Self::SRem { key, member } => {
                write!(f, "{} {key} {member}", self.name())
            }
            Self::SMembers { key } | Self::Del { key } => write!(f, "{} {key}", self.name()),
        }
    }
}

///
/// Reply
///
/// Per-command result. Pipelined execution returns one reply per queued
/// command, in submission order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    /// Member was newly added (false if already present).
    Added(bool),
    /// Member was present and removed (false if absent).
    Removed(bool),
    /// All members of the set, unordered as far as callers are concerned.
    Members(Vec<String>),
    /// Key existed and was deleted (false if absent).
    Deleted(bool),
}

///
/// TESTS
///
