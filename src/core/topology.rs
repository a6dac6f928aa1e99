//! Upward topology resolution.
//!
//! A state's topology is its ancestor chain ordered root-first, ending with
//! the state itself. Resolution walks `super_state()` links upward and then
//! reverses, so the cost is linear in the depth of the state.

use super::state::State;
use smallvec::SmallVec;
use std::fmt;

/// Default maximum active depth of a bounded machine.
///
/// Seven pointers and a length fit in eight machine words. A design that
/// needs more than seven levels of nesting is usually better flattened.
pub const DEFAULT_MAX_DEPTH: usize = 7;

/// Inline storage for a root-first sequence of states.
pub type Path<S> = SmallVec<[S; DEFAULT_MAX_DEPTH]>;

/// Why a resolved topology stops short of the true root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation<S> {
    /// The super-state chain revisits `repeated`. The walk stopped before
    /// inserting it a second time, so the outermost recorded state acts as
    /// the effective root.
    Cycle { repeated: S },

    /// The chain is longer than `limit`; the outermost ancestors beyond the
    /// limit were not recorded.
    Depth { limit: usize },
}

/// Root-first ancestor chain of a single state.
///
/// Topologies are transient: the engine computes one per transition and
/// discards it once the transition has been applied.
///
/// # Example
///
/// ```rust
/// use nested_state::core::{topology, Topology};
/// use nested_state::state_tree;
///
/// state_tree! {
///     enum Abc {
///         A,
///         B: A,
///         C: B,
///     }
/// }
///
/// let path = topology(Some(Abc::C), None);
/// assert_eq!(path.states(), &[Abc::A, Abc::B, Abc::C]);
/// assert_eq!(path.leaf(), Some(Abc::C));
/// assert!(path.is_complete());
///
/// let none: Topology<Abc> = topology(None, None);
/// assert!(none.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology<S> {
    states: Path<S>,
    truncation: Option<Truncation<S>>,
}

impl<S: State> Topology<S> {
    /// Resolve the topology of `leaf`, recording at most `limit` states.
    ///
    /// `None` records the whole chain. Cycle detection always runs, so the
    /// walk terminates even when the caller contract is broken, and its cost
    /// stays linear in the length of the chain.
    pub fn resolve(leaf: S, limit: Option<usize>) -> Self {
        let (mut states, repeated) = walk_up(leaf);
        let mut truncation = repeated.map(|repeated| Truncation::Cycle { repeated });

        if let Some(limit) = limit {
            // A cyclic chain counts its repeated state as one more hop.
            let exceeded = match repeated {
                Some(_) => limit <= states.len(),
                None => limit < states.len(),
            };
            if exceeded {
                states.truncate(limit);
                truncation = Some(Truncation::Depth { limit });
            }
        }

        states.reverse();
        Self { states, truncation }
    }

    /// Root-first states, leaf last.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The outermost recorded state.
    pub fn root(&self) -> Option<S> {
        self.states.first().copied()
    }

    /// The state this topology was resolved for.
    pub fn leaf(&self) -> Option<S> {
        self.states.last().copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Why the walk stopped early, if it did.
    pub fn truncation(&self) -> Option<Truncation<S>> {
        self.truncation
    }

    /// Check if the walk reached a true root.
    pub fn is_complete(&self) -> bool {
        self.truncation.is_none()
    }

    /// Number of leading positions where `self` and `other` hold the same
    /// state.
    pub fn shared_with(&self, other: &[S]) -> usize {
        common_prefix_len(&self.states, other)
    }

    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.states.iter().copied()
    }
}

impl<S> Default for Topology<S> {
    fn default() -> Self {
        Self {
            states: Path::new(),
            truncation: None,
        }
    }
}

impl<S: State> fmt::Display for Topology<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(state.name())?;
        }
        Ok(())
    }
}

/// Compute the root-first topology of `leaf`.
///
/// An absent leaf has an empty topology. With `max_depth` set, at most that
/// many states are recorded and the outermost ancestors are dropped; the
/// result then reports [`Truncation::Depth`] instead of failing silently.
pub fn topology<S: State>(leaf: Option<S>, max_depth: Option<usize>) -> Topology<S> {
    match leaf {
        Some(leaf) => Topology::resolve(leaf, max_depth),
        None => Topology::default(),
    }
}

/// Walk `super_state()` links from `leaf`, leaf first.
///
/// Uses Brent's cycle detection so the guard costs no more than the walk
/// itself. On a cycle the chain is cut just before the first repeated state,
/// which is returned alongside it.
fn walk_up<S: State>(leaf: S) -> (Path<S>, Option<S>) {
    let mut states: Path<S> = Path::new();
    states.push(leaf);

    let mut tortoise = leaf;
    let mut power = 1;
    let mut lambda = 1;
    let mut next = leaf.super_state();

    while let Some(state) = next {
        states.push(state);
        if state == tortoise {
            // The cycle has period `lambda`; its first state is the earliest
            // one repeated `lambda` hops later.
            let start = states
                .iter()
                .zip(&states[lambda..])
                .position(|(a, b)| a == b)
                .unwrap_or(states.len() - 1 - lambda);
            let repeated = states[start];
            states.truncate(start + lambda);
            return (states, Some(repeated));
        }
        if power == lambda {
            tortoise = state;
            power *= 2;
            lambda = 0;
        }
        lambda += 1;
        next = state.super_state();
    }

    (states, None)
}

/// Length of the longest common prefix of two root-first paths.
pub fn common_prefix_len<S: PartialEq>(left: &[S], right: &[S]) -> usize {
    left.iter()
        .zip(right)
        .take_while(|(l, r)| l == r)
        .count()
}
