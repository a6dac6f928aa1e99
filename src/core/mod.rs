//! Core hierarchy types and logic.
//!
//! This module contains the pure parts of the engine:
//! - State definitions via the `State` trait
//! - Upward topology resolution
//! - The active path record
//! - Hierarchy auditing
//!
//! Nothing here runs hooks; the [`machine`](crate::machine) module drives
//! transitions on top of these types.

mod audit;
mod stack;
mod state;
mod topology;

pub use audit::{audit, check, HierarchyViolation};
pub use stack::{ActiveStack, Depth};
pub use state::State;
pub use topology::{common_prefix_len, topology, Path, Topology, Truncation, DEFAULT_MAX_DEPTH};
