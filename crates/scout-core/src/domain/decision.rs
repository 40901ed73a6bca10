//! Decision model: the record an exploration algorithm emits per choice.

use serde::{Deserialize, Serialize};

use super::policy::PolicyDecision;

/// One decision event produced by an online exploration algorithm.
///
/// Binds together:
/// - the action surfaced to the caller (scalar id or ranked list),
/// - explorer metadata describing *why* that action was chosen,
/// - the underlying policy's own choice, kept purely for offline auditing,
/// - a flag telling the write path whether to persist this record.
///
/// The three generic slots are independent and opaque: this type never
/// interprets or validates their contents. Downstream log consumers depend
/// on the wire shape, which is asymmetric to the in-memory layout on
/// purpose: `action` goes out under the stable short key `"a"`, the state
/// slots keep their field names, and `should_record` never reaches the wire
/// (it defaults to `false` on decode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision<TAction, TExplorerState, TPolicyState> {
    /// The action shown to the caller.
    #[serde(rename = "a")]
    pub action: TAction,

    /// Explorer metadata (probability, epsilon, predicted ranking, ...).
    pub explorer_state: TExplorerState,

    /// What the non-exploring policy would have done. Logged, never acted on.
    pub policy_decision: PolicyDecision<TAction, TPolicyState>,

    /// Local control flag: persist this record or not. Never serialized.
    #[serde(skip)]
    pub should_record: bool,
}

impl<TAction, TExplorerState, TPolicyState> Decision<TAction, TExplorerState, TPolicyState> {
    /// Aggregate the four fields into a record.
    ///
    /// Pure and infallible: nothing is validated, derived, or defaulted.
    /// Callers with no explorer/policy state to report substitute their own
    /// sentinel types (e.g. `Option::None` or a unit struct).
    pub fn new(
        action: TAction,
        explorer_state: TExplorerState,
        policy_decision: PolicyDecision<TAction, TPolicyState>,
        should_record: bool,
    ) -> Self {
        Self {
            action,
            explorer_state,
            policy_decision,
            should_record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_an_exact_snapshot_of_its_inputs() {
        let policy = PolicyDecision::new(vec![2, 7], 0.5_f64);
        let d = Decision::new(vec![7, 2], 0.25_f64, policy.clone(), true);

        assert_eq!(d.action, vec![7, 2]);
        assert_eq!(d.explorer_state, 0.25);
        assert_eq!(d.policy_decision, policy);
        assert!(d.should_record);
    }

    #[test]
    fn should_record_false_is_preserved() {
        let d = Decision::new(1_u32, (), PolicyDecision::new(1_u32, ()), false);
        assert!(!d.should_record);
    }

    #[test]
    fn state_slots_accept_caller_sentinels() {
        // An algorithm with nothing to report can pass None for either slot.
        let d: Decision<u32, Option<f64>, Option<f64>> =
            Decision::new(3, None, PolicyDecision::new(3, None), true);
        assert!(d.explorer_state.is_none());
        assert!(d.policy_decision.policy_state.is_none());
    }
}
