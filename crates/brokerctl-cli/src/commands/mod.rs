//! Command execution: wires the adapters into the core dispatcher.

pub mod pipeline;
pub mod usage;
