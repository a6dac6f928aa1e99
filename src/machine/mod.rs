//! The transition engine.
//!
//! # Key Concepts
//!
//! - **Goto**: least-common-ancestor transition that exits and enters only
//!   the states that differ, running hooks in order
//! - **Jump**: unconditional reset to a target's topology, no hooks
//! - **Configuration**: bounded or unbounded depth, cycle handling

mod config;
mod engine;
mod transition;

pub use config::{CyclePolicy, MachineConfig, MachineConfigBuilder};
pub use engine::StateMachine;
pub use transition::Transition;
