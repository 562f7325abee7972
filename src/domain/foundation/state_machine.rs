//! Lifecycle transitions for status enums such as `PostStatus` and
//! `SubscriptionStatus`.

use super::ValidationError;

/// A status enum with a fixed set of allowed moves.
///
/// ```ignore
/// let status = PostStatus::Draft.transition_to(PostStatus::Published)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns `target` if the move is allowed.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{:?} cannot move to {:?}", self, target),
            ));
        }
        Ok(target)
    }

    /// No further moves are possible.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
