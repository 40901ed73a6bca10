//! Recorder: gate on `should_record`, encode, append.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::codec::{self, CodecError};
use crate::domain::Decision;
use crate::ports::{DecisionSink, EncodedDecision, SinkError};

/// What happened to a record handed to [`Recorder::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Encoded and appended to the sink.
    Recorded,

    /// `should_record` was false; the codec and sink were never invoked.
    Skipped,
}

/// Composite error for the write path. Neither variant is retried here.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("encode for recording: {0}")]
    Codec(#[from] CodecError),

    #[error("append to sink: {0}")]
    Sink(#[from] SinkError),
}

/// The complete write path: one sink, any number of concurrent callers.
///
/// Exploration algorithms hand each emitted [`Decision`] to `record`;
/// whether anything is persisted is decided by the record's own
/// `should_record` flag, not by the recorder.
pub struct Recorder<S> {
    sink: S,
}

impl<S: DecisionSink> Recorder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Persist a decision if its `should_record` flag says so.
    ///
    /// Encode failures mean a substituted state type cannot be represented
    /// on the wire; they surface as [`RecordError::Codec`] and nothing is
    /// appended.
    pub async fn record<TAction, TExplorerState, TPolicyState>(
        &self,
        decision: &Decision<TAction, TExplorerState, TPolicyState>,
    ) -> Result<RecordOutcome, RecordError>
    where
        TAction: Serialize,
        TExplorerState: Serialize,
        TPolicyState: Serialize,
    {
        if !decision.should_record {
            return Ok(RecordOutcome::Skipped);
        }

        let line = codec::encode_string(decision)?;
        self.sink.append(EncodedDecision::new(line)).await?;
        debug!("decision recorded");
        Ok(RecordOutcome::Recorded)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
