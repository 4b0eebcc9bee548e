use super::*;
use crate::GameState;
use crate::Outcome;

/// Assigns branch probabilities at every undecided node.
///
/// `choices` are the node's outgoing keys in generator order. The returned
/// [`Distribution`] must weight exactly those keys with non-negative rationals
/// summing to one; the solver aborts otherwise. Policies see only the current
/// state, never the history that led to it.
pub trait Policy {
    fn decide(&self, state: &GameState, choices: &[Outcome]) -> Distribution;
}

impl<F> Policy for F
where
    F: Fn(&GameState, &[Outcome]) -> Distribution,
{
    fn decide(&self, state: &GameState, choices: &[Outcome]) -> Distribution {
        self(state, choices)
    }
}
