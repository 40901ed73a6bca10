//! Wire codec for decision records.
//!
//! One JSON object per decision: the action under the stable short key
//! `"a"`, the explorer/policy state slots under their natural field names,
//! and no trace of `should_record`. Downstream log ingestion depends on
//! these literal keys, so the shape is part of the crate's contract.
//!
//! Determinism: serde_json emits struct fields in declaration order, so
//! encoding the same inputs twice yields byte-identical output — provided
//! concrete state types avoid iteration-order-random containers (use
//! `BTreeMap` where a map is needed).

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::Decision;

/// Errors from the wire codec, split by direction.
///
/// An `Encode` failure means a substituted state type cannot be represented
/// as JSON (e.g. a map with non-string keys). That is a programming error in
/// the calling algorithm, surfaced to the caller so the audit log never
/// silently loses a record.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encode decision: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("decode decision: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encode a decision record to JSON bytes.
pub fn encode<TAction, TExplorerState, TPolicyState>(
    decision: &Decision<TAction, TExplorerState, TPolicyState>,
) -> Result<Vec<u8>, CodecError>
where
    TAction: Serialize,
    TExplorerState: Serialize,
    TPolicyState: Serialize,
{
    serde_json::to_vec(decision).map_err(CodecError::Encode)
}

/// Encode a decision record to a JSON string (one JSONL line, no newline).
pub fn encode_string<TAction, TExplorerState, TPolicyState>(
    decision: &Decision<TAction, TExplorerState, TPolicyState>,
) -> Result<String, CodecError>
where
    TAction: Serialize,
    TExplorerState: Serialize,
    TPolicyState: Serialize,
{
    serde_json::to_string(decision).map_err(CodecError::Encode)
}

/// Decode an encoded decision back into a record.
///
/// Lossless for `action`, `explorer_state`, and `policy_decision`.
/// `should_record` has no wire representation and comes back `false`.
pub fn decode<TAction, TExplorerState, TPolicyState>(
    bytes: &[u8],
) -> Result<Decision<TAction, TExplorerState, TPolicyState>, CodecError>
where
    TAction: DeserializeOwned,
    TExplorerState: DeserializeOwned,
    TPolicyState: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}
