//! Core State trait for hierarchical states.
//!
//! A state is a flat value that knows its direct super-state and carries
//! optional enter and exit behavior. Navigation is upward only: a state never
//! tracks its sub-states.

use crate::machine::StateMachine;
use std::fmt::Debug;

/// Trait for hierarchical states.
///
/// States are small `Copy` values, usually enum variants or thin handles onto
/// data the application owns. The engine only ever stores copies of these
/// values; it never allocates, owns or frees the data behind them.
///
/// Two states are the same node of the hierarchy iff they compare equal.
///
/// # Required Traits
///
/// - `Copy`: the active path records states by value
/// - `Eq`: the least-common-ancestor diff compares states element-wise
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Caller Contract
///
/// The chain `super_state()`, `super_state().super_state()`, ... must be
/// finite and acyclic. The engine detects a cycle and stops at its first
/// repetition, but the resulting path is only a best effort.
///
/// # Example
///
/// ```rust
/// use nested_state::core::State;
/// use nested_state::StateMachine;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Door {
///     Closed,
///     Locked,
///     Open,
/// }
///
/// impl State for Door {
///     type Context = Vec<String>;
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///             Self::Open => "Open",
///         }
///     }
///
///     fn super_state(&self) -> Option<Self> {
///         match self {
///             Self::Locked => Some(Self::Closed),
///             _ => None,
///         }
///     }
///
///     fn on_enter(&self, _machine: &mut StateMachine<Self>, log: &mut Vec<String>) {
///         log.push(format!("enter {}", self.name()));
///     }
/// }
///
/// let mut machine: StateMachine<Door> = StateMachine::new();
/// let mut log = Vec::new();
/// machine.goto(Door::Locked, &mut log).unwrap();
///
/// assert_eq!(log, ["enter Closed", "enter Locked"]);
/// assert!(machine.is_in(Door::Closed));
/// ```
pub trait State: Copy + Eq + Debug {
    /// Application data handed to every hook.
    ///
    /// Use `()` when hooks need nothing beyond the machine itself.
    type Context;

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// The direct super-state, or `None` for a root.
    fn super_state(&self) -> Option<Self>;

    /// Runs after this state has been pushed onto the active path.
    ///
    /// The machine already reports this state as `top()`. The hook may start
    /// another transition on `machine`; see [`StateMachine::goto`] for how
    /// reentrant transitions interleave.
    ///
    /// Default implementation does nothing.
    fn on_enter(&self, _machine: &mut StateMachine<Self>, _context: &mut Self::Context) {}

    /// Runs after this state has been popped from the active path.
    ///
    /// The machine no longer reports this state as active when the hook runs.
    ///
    /// Default implementation does nothing.
    fn on_exit(&self, _machine: &mut StateMachine<Self>, _context: &mut Self::Context) {}

    /// Check if this state has no super-state.
    fn is_root(&self) -> bool {
        self.super_state().is_none()
    }
}
