//! DecisionSink port: where encoded decision records go.

use async_trait::async_trait;
use thiserror::Error;

/// A decision record that has already been through the wire codec.
///
/// Sinks consume encoded lines, never the generic record: the generic
/// boundary ends at the codec, and a sink must not depend on the concrete
/// action/state types that produced a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDecision(String);

impl EncodedDecision {
    pub fn new(line: String) -> Self {
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Errors a sink can report back to the write path.
///
/// Retrying is a sink-internal concern (a remote-backed sink may retry its
/// own writes); nothing upstream retries on these.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("sink closed")]
    Closed,
}

/// Append-only log collaborator for decision records.
///
/// Implementations are expected to persist one line per call, whole or not
/// at all: a torn line corrupts the audit trail downstream consumers join
/// against.
#[async_trait]
pub trait DecisionSink: Send + Sync {
    async fn append(&self, line: EncodedDecision) -> Result<(), SinkError>;
}
