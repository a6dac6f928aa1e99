//! Machine configuration.

use crate::core::Depth;
use crate::error::{MachineError, Result};
use serde::{Deserialize, Serialize};

/// What the engine does when a target's super-state chain is cyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Treat the first repetition as the effective root, log a warning and
    /// carry on with the truncated path.
    #[default]
    Truncate,

    /// Fail with [`MachineError::CyclicTopology`] before touching the path.
    Reject,
}

/// Construction-time configuration of a [`StateMachine`](super::StateMachine).
///
/// Deserializes from any serde format; missing fields take their defaults.
///
/// ```rust
/// use nested_state::{CyclePolicy, Depth, MachineConfig};
///
/// let config = MachineConfig::default();
/// assert_eq!(config.max_depth, Depth::Bounded(7));
/// assert_eq!(config.on_cycle, CyclePolicy::Truncate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Capacity of the active path.
    pub max_depth: Depth,

    /// Handling of cyclic super-state chains.
    pub on_cycle: CyclePolicy,
}

impl MachineConfig {
    /// Configuration with no depth bound.
    pub fn unbounded() -> Self {
        Self {
            max_depth: Depth::Unbounded,
            ..Self::default()
        }
    }

    pub fn builder() -> MachineConfigBuilder {
        MachineConfigBuilder::new()
    }

    /// Reject configurations no machine can run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Depth::Bounded(0) {
            return Err(MachineError::InvalidArgument {
                reason: "bounded maximum depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for machine configuration
#[derive(Debug, Clone, Default)]
pub struct MachineConfigBuilder {
    max_depth: Depth,
    on_cycle: CyclePolicy,
}

impl MachineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the active path to `n` states
    pub fn max_depth(mut self, n: usize) -> Self {
        self.max_depth = Depth::Bounded(n);
        self
    }

    /// Let the active path grow as needed
    pub fn unbounded(mut self) -> Self {
        self.max_depth = Depth::Unbounded;
        self
    }

    /// Set cyclic topology handling
    pub fn on_cycle(mut self, policy: CyclePolicy) -> Self {
        self.on_cycle = policy;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<MachineConfig> {
        let config = MachineConfig {
            max_depth: self.max_depth,
            on_cycle: self.on_cycle,
        };
        config.validate()?;
        Ok(config)
    }
}
