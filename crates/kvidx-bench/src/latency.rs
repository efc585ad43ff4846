use kvidx::store::{Reply, StoreClient, StoreCommand, StoreError};
use std::{thread, time::Duration};

///
/// LatencyClient
///
/// Store client wrapper charging a fixed delay per round trip, so the cost
/// of round-trip count is measurable against an in-process store. A pipeline
/// call pays the delay once regardless of batch size, matching the wire
/// behavior the modes differ on.
///

pub struct LatencyClient<C> {
    inner: C,
    delay: Duration,
}

impl<C> LatencyClient<C> {
    pub const fn new(inner: C, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub const fn inner(&self) -> &C {
        &self.inner
    }

    pub const fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    fn round_trip(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl<C: StoreClient> StoreClient for LatencyClient<C> {
    fn execute(&mut self, command: StoreCommand) -> Result<Reply, StoreError> {
        self.round_trip();
        self.inner.execute(command)
    }

    fn pipeline(&mut self, commands: Vec<StoreCommand>) -> Result<Vec<Reply>, StoreError> {
        self.round_trip();
        self.inner.pipeline(commands)
    }
}
