//! Transition rules for lifecycle enums.

use super::ValidationError;

/// A `Copy` enum whose values form a state machine.
///
/// Implementors list their edges; checked transitions and terminal detection
/// come from the provided methods.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Every state reachable in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }

    /// True when no edge leaves this state.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
