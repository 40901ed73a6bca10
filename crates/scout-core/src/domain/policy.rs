//! PolicyDecision: what the underlying ranking policy itself chose.

use serde::{Deserialize, Serialize};

/// The ranking policy's own choice, paired with policy-specific metadata.
///
/// Retained inside a [`Decision`](super::Decision) for offline evaluation
/// and auditing; nothing in this crate acts on it. Both slots are opaque
/// generics, and both keep their natural field names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision<TAction, TPolicyState> {
    /// The action the policy would have surfaced without exploration.
    pub action: TAction,

    /// Policy-specific metadata (e.g. model version, predicted scores).
    pub policy_state: TPolicyState,
}

impl<TAction, TPolicyState> PolicyDecision<TAction, TPolicyState> {
    /// Pair a policy's action with its metadata. Pure aggregation.
    pub fn new(action: TAction, policy_state: TPolicyState) -> Self {
        Self {
            action,
            policy_state,
        }
    }
}
