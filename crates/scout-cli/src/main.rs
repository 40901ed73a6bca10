use rand::Rng;
use serde::{Deserialize, Serialize};

use scout_core::{Decision, MemorySink, PolicyDecision, Recorder};

/// Explorer metadata for the demo's epsilon-greedy chooser.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EpsilonGreedyState {
    epsilon: f64,
    probability: f64,
    explored: bool,
}

/// Metadata from the simulated ranking policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RankerState {
    model_version: String,
    score: f64,
}

const NUM_ACTIONS: u32 = 5;
const EPSILON: f64 = 0.2;

/// Stand-in ranking policy: deterministic in the context, with a score.
fn rank(context: u32) -> (u32, RankerState) {
    let action = context % NUM_ACTIONS + 1;
    let state = RankerState {
        model_version: "ranker-v1".to_string(),
        score: 0.9,
    };
    (action, state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // (A) The write path: one recorder over an in-memory sink.
    let recorder = Recorder::new(MemorySink::new());

    // (B) A simulated exploration loop. The library only sees the Decision
    //     records this loop emits; choosing is entirely the caller's job.
    let mut rng = rand::thread_rng();
    for tick in 0..10_u32 {
        let (policy_action, ranker_state) = rank(tick);

        let explored = rng.gen_bool(EPSILON);
        let action = if explored {
            rng.gen_range(1..=NUM_ACTIONS)
        } else {
            policy_action
        };
        let probability = if action == policy_action {
            1.0 - EPSILON + EPSILON / NUM_ACTIONS as f64
        } else {
            EPSILON / NUM_ACTIONS as f64
        };

        // Sample the log: skip every fourth decision.
        let should_record = tick % 4 != 0;

        let decision = Decision::new(
            action,
            EpsilonGreedyState {
                epsilon: EPSILON,
                probability,
                explored,
            },
            PolicyDecision::new(policy_action, ranker_state),
            should_record,
        );

        let outcome = recorder.record(&decision).await.expect("record decision");
        println!(
            "tick {tick}: action={action} policy_action={policy_action} explored={explored} -> {outcome:?}"
        );
    }

    // (C) Show what actually reached the log.
    let lines = recorder.sink().lines().await;
    println!("\nrecorded {} of 10 decisions:", lines.len());
    for line in &lines {
        println!("{}", line.as_str());
    }

    // (D) Downstream consumers read the action from the fixed "a" key.
    if let Some(line) = lines.first() {
        let v: serde_json::Value = serde_json::from_str(line.as_str()).expect("valid record");
        println!("\nfirst record: a={} probability={}", v["a"], v["explorer_state"]["probability"]);
    }
}
