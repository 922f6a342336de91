//! One-way lifecycles for decisions and tensions.

use std::fmt::Debug;

use super::ValidationError;

/// A status enum whose legal moves are listed in a transition table.
pub trait StateMachine: Copy + PartialEq + Debug + 'static {
    /// Every allowed `(from, to)` pair.
    const TRANSITIONS: &'static [(Self, Self)];

    fn can_transition_to(&self, target: Self) -> bool {
        Self::TRANSITIONS
            .iter()
            .any(|&(from, to)| from == *self && to == target)
    }

    /// Moves to `target`, or explains why the lifecycle forbids it.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{:?} cannot become {:?}", self, target),
            ));
        }
        Ok(target)
    }

    /// True when no transition leaves this status.
    fn is_terminal(&self) -> bool {
        Self::TRANSITIONS.iter().all(|&(from, _)| from != *self)
    }
}
