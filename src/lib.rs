//! Nested State: a hierarchical state machine engine
//!
//! States form a tree through upward `super_state` links. The machine tracks
//! the active path from the root down to the current leaf and moves between
//! leaves by exiting and entering only the states that actually change, using
//! the least common ancestor of the source and target paths.
//!
//! # Core Concepts
//!
//! - **State**: a flat `Copy` value implementing the `State` trait, with
//!   optional enter and exit hooks
//! - **Topology**: the root-first ancestor chain of a state, resolved on
//!   demand
//! - **StateMachine**: the caller-owned engine holding the active path
//!
//! # Example
//!
//! ```rust
//! use nested_state::{state_tree, StateMachine};
//!
//! state_tree! {
//!     enum Phase {
//!         A,
//!         B: A,
//!         C: B,
//!         D: A,
//!     }
//! }
//!
//! let mut machine: StateMachine<Phase> = StateMachine::new();
//!
//! let transition = machine.goto(Phase::C, &mut ()).unwrap();
//! assert_eq!(transition.entered(), &[Phase::A, Phase::B, Phase::C]);
//!
//! let transition = machine.goto(Phase::D, &mut ()).unwrap();
//! assert_eq!(transition.exited(), &[Phase::C, Phase::B]);
//! assert_eq!(transition.entered(), &[Phase::D]);
//! assert_eq!(machine.top(), Some(Phase::D));
//! assert!(machine.is_in(Phase::A));
//! ```

pub mod core;
pub mod error;
pub mod machine;
mod macros;

// Re-export commonly used types
pub use crate::core::{Depth, State, Topology};
pub use error::{MachineError, Result};
pub use machine::{CyclePolicy, MachineConfig, MachineConfigBuilder, StateMachine, Transition};
