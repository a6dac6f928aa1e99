//! Hierarchical state machine engine.

use crate::core::{ActiveStack, State, Topology, Truncation};
use crate::error::{MachineError, Result};
use crate::machine::config::{CyclePolicy, MachineConfig};
use crate::machine::transition::Transition;

/// Hierarchical state machine.
///
/// The machine owns nothing but its active path: the root-first sequence of
/// active states ending in the current leaf. States and their hooks belong to
/// the caller.
///
/// # Lifecycle
///
/// A new machine is empty. [`goto`](Self::goto) and [`jump`](Self::jump)
/// make it active; further `goto` calls move it between leaves.
/// [`init`](Self::init) is the only way back to empty that runs no hooks,
/// and there is no transition to "nothing": model a stopped machine as an
/// explicit root state.
///
/// # Concurrency
///
/// Every operation runs to completion on the caller's thread. The machine is
/// not synchronised; share it between threads only behind external locking.
///
/// # Example
///
/// ```rust
/// use nested_state::{state_tree, StateMachine};
///
/// state_tree! {
///     enum Light {
///         Off,
///         On,
///         Dim: On,
///         Bright: On,
///     }
/// }
///
/// let mut machine: StateMachine<Light> = StateMachine::new();
/// let transition = machine.goto(Light::Dim, &mut ()).unwrap();
/// assert_eq!(transition.entered(), &[Light::On, Light::Dim]);
///
/// let transition = machine.goto(Light::Bright, &mut ()).unwrap();
/// assert_eq!(transition.exited(), &[Light::Dim]);
/// assert_eq!(transition.entered(), &[Light::Bright]);
/// assert!(machine.is_in(Light::On));
/// ```
#[derive(Debug, Clone)]
pub struct StateMachine<S: State> {
    stack: ActiveStack<S>,
    config: MachineConfig,
}

impl<S: State> StateMachine<S> {
    /// Create an empty machine bounded to the default maximum depth.
    pub fn new() -> Self {
        Self::from_valid_config(MachineConfig::default())
    }

    /// Create an empty machine whose active path grows as needed.
    pub fn unbounded() -> Self {
        Self::from_valid_config(MachineConfig::unbounded())
    }

    /// Create an empty machine, rejecting invalid configuration.
    pub fn with_config(config: MachineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: MachineConfig) -> Self {
        Self {
            stack: ActiveStack::new(config.max_depth),
            config,
        }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Reset the active path to empty.
    ///
    /// No exit hook runs; this is a construction-time reset, not a live
    /// transition.
    pub fn init(&mut self) {
        self.stack.clear();
    }

    /// The current leaf, or `None` when the machine is empty.
    #[doc(alias = "at")]
    pub fn top(&self) -> Option<S> {
        self.stack.top()
    }

    /// Check if `state` is the current leaf or one of its super-states.
    #[doc(alias = "in")]
    pub fn is_in(&self, state: S) -> bool {
        self.stack.contains(state)
    }

    /// Number of active states.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The active path, root first.
    pub fn path(&self) -> &[S] {
        self.stack.as_slice()
    }

    /// Resolve the topology of `leaf` the way transitions do, applying the
    /// configured cycle policy.
    pub fn topology(&self, leaf: S) -> Result<Topology<S>> {
        let topology = Topology::resolve(leaf, None);

        if let Some(Truncation::Cycle { repeated }) = topology.truncation() {
            match self.config.on_cycle {
                CyclePolicy::Truncate => {
                    tracing::warn!(
                        "Cyclic topology for {}: truncated at repeated {}, effective root {:?}",
                        leaf.name(),
                        repeated.name(),
                        topology.root()
                    );
                }
                CyclePolicy::Reject => {
                    return Err(MachineError::CyclicTopology {
                        state: leaf.name().to_string(),
                        repeated: repeated.name().to_string(),
                    });
                }
            }
        }

        Ok(topology)
    }

    /// Install the topology of `target` as the active path without running
    /// any hook.
    ///
    /// The previous path is discarded whatever it was. Jumping to `None`
    /// leaves the machine empty. When the topology is deeper than a bounded
    /// machine allows, the root-most states that fit are installed and the
    /// call fails with [`MachineError::CapacityExceeded`].
    pub fn jump(&mut self, target: impl Into<Option<S>>) -> Result<()> {
        let Some(target) = target.into() else {
            self.stack.clear();
            return Ok(());
        };

        let topology = self.topology(target)?;
        self.stack.clear();
        for state in topology.iter() {
            if let Err(err) = self.stack.push(state) {
                tracing::warn!(
                    "Jump to {} stopped at depth {}: {}",
                    target.name(),
                    self.stack.len(),
                    err
                );
                return Err(err);
            }
        }

        tracing::debug!("Jump to {} installed {}", target.name(), topology);
        Ok(())
    }

    /// Transition to `target`, exiting and entering only the states that
    /// differ between the current path and the target's topology.
    ///
    /// Going to the current leaf, or to `None`, does nothing. Otherwise the
    /// machine pops every state below the least common ancestor, running each
    /// `on_exit` right after its pop (innermost first), then pushes each new
    /// state and runs its `on_enter` right after the push (outermost first).
    ///
    /// # Errors
    ///
    /// Fails with [`MachineError::CapacityExceeded`] when a bounded machine
    /// cannot push the next state. The transition is not atomic: the exits
    /// and the entries that fit have already happened, and the machine stays
    /// in that partially transitioned state. The partial [`Transition`] is
    /// not returned: [`path`](Self::path) is the only view after the
    /// failure. Its states past the shared prefix are the entries that ran,
    /// and the exits that ran are the previous path past the same prefix,
    /// where the prefix is `self.topology(target)?.shared_with(previous)`.
    ///
    /// With [`CyclePolicy::Reject`], fails with
    /// [`MachineError::CyclicTopology`] before any hook runs.
    ///
    /// # Reentrancy
    ///
    /// Hooks may call `goto` or `jump` on the machine they receive. Each push
    /// or pop is complete before its hook runs, so a nested transition sees a
    /// consistent path. The outer transition, however, keeps entering the
    /// states of the topology it resolved up front: if a nested transition
    /// changes the path under it, the two sets of effects interleave. Hooks
    /// that transition should do so last, from the innermost state they
    /// expect to be entered.
    pub fn goto(
        &mut self,
        target: impl Into<Option<S>>,
        context: &mut S::Context,
    ) -> Result<Transition<S>> {
        let Some(target) = target.into() else {
            return Ok(Transition::noop());
        };
        if self.top() == Some(target) {
            return Ok(Transition::new(self.depth()));
        }

        let topology = self.topology(target)?;
        let shared = topology.shared_with(self.path());
        let mut transition = Transition::new(shared);

        while self.stack.len() > shared {
            let Some(state) = self.stack.pop() else {
                break;
            };
            tracing::trace!("Exit {}", state.name());
            transition.record_exit(state);
            state.on_exit(self, context);
        }

        for &state in &topology.states()[shared..] {
            if let Err(err) = self.stack.push(state) {
                tracing::warn!(
                    "Goto {} partially applied: exited {}, entered {} of {}: {}",
                    target.name(),
                    transition.exited().len(),
                    transition.entered().len(),
                    topology.len() - shared,
                    err
                );
                return Err(err);
            }
            tracing::trace!("Enter {}", state.name());
            transition.record_entry(state);
            state.on_enter(self, context);
        }

        tracing::debug!(
            "Goto {}: exited {}, entered {}",
            target.name(),
            transition.exited().len(),
            transition.entered().len()
        );
        Ok(transition)
    }

    /// Maximum active depth, or `None` when unbounded.
    pub fn max_depth(&self) -> Option<usize> {
        self.stack.capacity().limit()
    }

    /// Check if the active path is a contiguous chain of super-states.
    pub fn is_consistent(&self) -> bool {
        self.path()
            .windows(2)
            .all(|pair| pair[1].super_state() == Some(pair[0]))
    }
}

impl<S: State> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}
