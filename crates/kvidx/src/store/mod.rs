mod client;
mod command;
mod error;
mod memory;

pub use client::*;
pub use command::*;
pub use error::*;
pub use memory::*;
