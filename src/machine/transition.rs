//! Record of a completed transition.

use crate::core::{Path, State};

/// The states a `goto` exited and entered, in the order their hooks ran.
///
/// `exited` runs innermost first; `entered` runs outermost first. A state
/// reached through a malformed (overlapping) topology may appear in both:
/// it left one nesting and re-entered another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    exited: Path<S>,
    entered: Path<S>,
    shared: usize,
}

impl<S: State> Transition<S> {
    pub(crate) fn new(shared: usize) -> Self {
        Self {
            exited: Path::new(),
            entered: Path::new(),
            shared,
        }
    }

    /// A transition that changed nothing.
    pub fn noop() -> Self {
        Self::new(0)
    }

    pub(crate) fn record_exit(&mut self, state: S) {
        self.exited.push(state);
    }

    pub(crate) fn record_entry(&mut self, state: S) {
        self.entered.push(state);
    }

    /// Exited states, innermost first.
    pub fn exited(&self) -> &[S] {
        &self.exited
    }

    /// Entered states, outermost first.
    pub fn entered(&self) -> &[S] {
        &self.entered
    }

    /// Length of the prefix the source and target paths shared, i.e. the
    /// depth of their least common ancestor.
    pub fn shared(&self) -> usize {
        self.shared
    }

    /// Check if no hook ran.
    pub fn is_noop(&self) -> bool {
        self.exited.is_empty() && self.entered.is_empty()
    }
}

impl<S: State> Default for Transition<S> {
    fn default() -> Self {
        Self::noop()
    }
}
