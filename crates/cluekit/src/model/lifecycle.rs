//! Status lifecycle: the legal transition graph.

use super::types::Status;

/// Adjacency table of the lifecycle graph.
///
/// Self-edges are deliberately absent, and `Deprecated` has no outgoing edges.
static TRANSITIONS: [(Status, &[Status]); 4] = [
    (Status::Draft, &[Status::Reviewed, Status::Deprecated]),
    (
        Status::Reviewed,
        &[Status::Approved, Status::Draft, Status::Deprecated],
    ),
    (Status::Approved, &[Status::Deprecated]),
    (Status::Deprecated, &[]),
];

/// States reachable in one step from `current`.
pub fn allowed_transitions(current: Status) -> &'static [Status] {
    TRANSITIONS
        .iter()
        .find(|(from, _)| *from == current)
        .map(|(_, next)| *next)
        .unwrap_or(&[])
}

/// Check whether moving from `current` to `new` is a legal state change.
pub fn can_transition(current: Status, new: Status) -> bool {
    allowed_transitions(current).contains(&new)
}

impl Status {
    /// True for absorbing states with no way out.
    pub fn is_terminal(&self) -> bool {
        allowed_transitions(*self).is_empty()
    }
}
