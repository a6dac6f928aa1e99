//! Up-front validation of a state hierarchy.
//!
//! The engine tolerates malformed super-state chains at run time (cycles are
//! cut at their first repetition, over-deep chains fail on entry). Auditing a
//! hierarchy before any machine runs reports every such problem at once,
//! using `Validation` to accumulate ALL violations instead of stopping at the
//! first.

use super::stack::Depth;
use super::state::State;
use super::topology::{Topology, Truncation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A malformed super-state chain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HierarchyViolation {
    #[error("super-state chain of '{state}' revisits '{repeated}'")]
    Cyclic { state: String, repeated: String },

    #[error("'{state}' sits at depth {depth}, beyond maximum depth {max_depth}")]
    TooDeep {
        state: String,
        depth: usize,
        max_depth: usize,
    },
}

/// Check one state's chain against `max_depth`.
pub fn check<S: State>(
    state: S,
    max_depth: Depth,
) -> Validation<(), NonEmptyVec<HierarchyViolation>> {
    let topology = Topology::resolve(state, None);

    if let Some(Truncation::Cycle { repeated }) = topology.truncation() {
        return Validation::fail(HierarchyViolation::Cyclic {
            state: state.name().to_string(),
            repeated: repeated.name().to_string(),
        });
    }

    match max_depth {
        Depth::Bounded(max_depth) if topology.len() > max_depth => {
            Validation::fail(HierarchyViolation::TooDeep {
                state: state.name().to_string(),
                depth: topology.len(),
                max_depth,
            })
        }
        _ => Validation::success(()),
    }
}

/// Audit every state in `states`, accumulating ALL violations.
///
/// # Example
///
/// ```rust
/// use nested_state::core::{audit, Depth};
/// use nested_state::state_tree;
///
/// state_tree! {
///     enum Tree {
///         Root,
///         Child: Root,
///         Grandchild: Child,
///     }
/// }
///
/// let all = [Tree::Root, Tree::Child, Tree::Grandchild];
/// assert!(audit(all, Depth::Bounded(3)).is_success());
/// assert!(audit(all, Depth::Bounded(2)).is_failure());
/// ```
pub fn audit<S, I>(states: I, max_depth: Depth) -> Validation<(), NonEmptyVec<HierarchyViolation>>
where
    S: State,
    I: IntoIterator<Item = S>,
{
    let checks: Vec<Validation<(), NonEmptyVec<HierarchyViolation>>> = states
        .into_iter()
        .map(|state| check(state, max_depth))
        .collect();

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}
