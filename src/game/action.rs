//! Abstract player actions.

/// An action delivered to the match. Physical keys are mapped to these by the
/// input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump while playing; start or confirm otherwise.
    Flap,
    /// Start a new match from the final results.
    Restart,
    /// Anything else. Ignored.
    Other,
}
