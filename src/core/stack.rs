//! The active path of a machine.

use super::state::State;
use super::topology::{Path, DEFAULT_MAX_DEPTH};
use crate::error::{MachineError, Result};
use serde::{Deserialize, Serialize};

/// Capacity of an active path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    /// At most this many states may be active at once.
    Bounded(usize),

    /// The path grows as needed.
    Unbounded,
}

impl Depth {
    /// The bound, or `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Depth::Bounded(limit) => Some(*limit),
            Depth::Unbounded => None,
        }
    }

    /// Check if a path of `len` states fits.
    pub fn admits(&self, len: usize) -> bool {
        self.limit().is_none_or(|limit| len <= limit)
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Bounded(DEFAULT_MAX_DEPTH)
    }
}

/// Ordered record of the currently active states, root first, leaf last.
///
/// For every position `i > 0`, `states[i].super_state() == Some(states[i - 1])`
/// as long as the machine only mutates the stack through its own
/// transitions. The stack records copies of states and never owns the data
/// behind them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStack<S> {
    states: Path<S>,
    depth: Depth,
}

impl<S: State> ActiveStack<S> {
    /// Create an empty stack with the given capacity.
    pub fn new(depth: Depth) -> Self {
        Self {
            states: Path::new(),
            depth,
        }
    }

    pub fn capacity(&self) -> Depth {
        self.depth
    }

    /// Drop every active state without running any hook.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Append `state` as the new leaf.
    ///
    /// Fails with [`MachineError::CapacityExceeded`] when the stack is full,
    /// leaving it unchanged.
    pub fn push(&mut self, state: S) -> Result<()> {
        if !self.depth.admits(self.states.len() + 1) {
            return Err(MachineError::CapacityExceeded {
                state: state.name().to_string(),
                max_depth: self.states.len(),
            });
        }
        self.states.push(state);
        Ok(())
    }

    /// Remove and return the leaf.
    pub fn pop(&mut self) -> Option<S> {
        self.states.pop()
    }

    /// The leaf-most active state.
    pub fn top(&self) -> Option<S> {
        self.states.last().copied()
    }

    /// Check if `state` is anywhere on the active path.
    pub fn contains(&self, state: S) -> bool {
        self.states.contains(&state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.states
    }
}
