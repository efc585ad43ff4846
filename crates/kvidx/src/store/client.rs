use crate::store::{Reply, StoreCommand, StoreError};

///
/// StoreClient
///
/// Boundary trait for the key-value store connection.
///
/// `execute` costs one round trip per command. `pipeline` transmits the whole
/// command sequence as one batch in a single round trip; the store executes
/// the batch in submission order and returns per-command replies in that
/// order. A batch is a latency boundary, not an atomicity boundary:
/// concurrent readers may observe a partial prefix of its effects.
///

pub trait StoreClient {
    fn execute(&mut self, command: StoreCommand) -> Result<Reply, StoreError>;

    fn pipeline(&mut self, commands: Vec<StoreCommand>) -> Result<Vec<Reply>, StoreError>;
}
