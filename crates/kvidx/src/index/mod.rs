mod key;
mod maintainer;
mod plan;


pub use key::{IndexKey, indices_of_entity_key};
pub use maintainer::{ExecMode, IndexError, IndexMaintainer, IndexWriteReport};
pub use plan::IndexPlan;
