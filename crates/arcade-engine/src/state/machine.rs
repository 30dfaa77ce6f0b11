//! Per-entity behavior states.
//!
//! Each entity owns one [`StateMachine`] built from every variant of its
//! state enum up front. Switching picks a pre-built variant by kind, resets
//! the transient per-state data and runs the new variant's `enter` hook.

use std::fmt::Debug;
use crate::input::keys::InputState;

/// Per-state scratch data that is reset on every switch (e.g. an animation frame).
pub trait Transient {
    fn reset(&mut self);
}

impl Transient for () {
    fn reset(&mut self) {}
}

/// One discrete behavior mode of an entity.
pub trait BehaviorState {
    /// Entity data the state reads and mutates.
    type Owner;
    /// Discriminant used to select states.
    type Kind: Copy + Eq + Debug;

    fn kind(&self) -> Self::Kind;

    /// Runs once when this state becomes current.
    fn enter(&mut self, _owner: &mut Self::Owner) {}

    /// Inspect held keys and return the state to switch to, if any.
    fn handle_input(&mut self, owner: &Self::Owner, input: &InputState) -> Option<Self::Kind>;
}

/// Holds every state of an entity and tracks which one is current.
#[derive(Debug, Clone)]
pub struct StateMachine<S, T = ()> {
    states: Vec<S>,
    current: usize,
    transient: T,
}

impl<S: BehaviorState, T: Transient> StateMachine<S, T> {
    /// Build from the full set of states, starting in `initial` without running its `enter`.
    ///
    /// Panics if `initial` is not among `states`.
    pub fn new(states: Vec<S>, initial: S::Kind, transient: T) -> Self {
        let current = Self::index_of(&states, initial);
        Self {
            states,
            current,
            transient,
        }
    }

    fn index_of(states: &[S], kind: S::Kind) -> usize {
        match states.iter().position(|s| s.kind() == kind) {
            Some(idx) => idx,
            None => panic!("no state registered for {:?}", kind),
        }
    }

    pub fn current(&self) -> &S {
        &self.states[self.current]
    }

    pub fn current_kind(&self) -> S::Kind {
        self.current().kind()
    }

    pub fn is(&self, kind: S::Kind) -> bool {
        self.current_kind() == kind
    }

    pub fn transient(&self) -> &T {
        &self.transient
    }

    pub fn transient_mut(&mut self) -> &mut T {
        &mut self.transient
    }

    /// Switch to the pre-built state for `kind`, reset transient data and run `enter`.
    ///
    /// Panics if no state of that kind was registered.
    pub fn set_state(&mut self, kind: S::Kind, owner: &mut S::Owner) {
        let next = Self::index_of(&self.states, kind);
        log::debug!("state {:?} -> {:?}", self.current_kind(), kind);
        self.current = next;
        self.transient.reset();
        self.states[next].enter(owner);
    }

    /// Let the current state react to input. A requested transition is applied
    /// immediately, so it is in effect before the owner's physics runs.
    pub fn handle_input(&mut self, owner: &mut S::Owner, input: &InputState) -> Option<S::Kind> {
        let next = self.states[self.current].handle_input(owner, input)?;
        self.set_state(next, owner);
        Some(next)
    }
}
