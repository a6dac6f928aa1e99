//! Engine error types.

use thiserror::Error;

const EINVAL: i32 = 22;
const ENOMEM: i32 = 12;

/// Errors reported by the state machine engine.
///
/// Every error is reported synchronously by the operation that hit it. None
/// of them roll back work already committed: a `CapacityExceeded` raised
/// while entering states leaves the exits and the entries below the bound in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("capacity exceeded: cannot enter '{state}' beyond maximum depth {max_depth}")]
    CapacityExceeded { state: String, max_depth: usize },

    #[error("cyclic topology: super-state chain of '{state}' revisits '{repeated}'")]
    CyclicTopology { state: String, repeated: String },
}

impl MachineError {
    /// Returns the negative errno-style code for this error.
    ///
    /// Invalid arguments and rejected topologies map to `-EINVAL`; depth
    /// overflow maps to `-ENOMEM`.
    pub fn error_code(&self) -> i32 {
        match self {
            MachineError::InvalidArgument { .. } => -EINVAL,
            MachineError::CapacityExceeded { .. } => -ENOMEM,
            MachineError::CyclicTopology { .. } => -EINVAL,
        }
    }

    /// Returns whether the error left the machine partially transitioned.
    pub fn is_partial(&self) -> bool {
        matches!(self, MachineError::CapacityExceeded { .. })
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, MachineError>;
