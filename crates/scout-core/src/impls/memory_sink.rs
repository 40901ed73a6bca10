//! In-memory sink implementation.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::{DecisionSink, EncodedDecision, SinkError};

/// Sink that accumulates encoded decisions in memory, in append order.
///
/// Meant for tests and development; offers accessors to inspect what a
/// write path actually recorded.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<EncodedDecision>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, oldest first.
    pub async fn lines(&self) -> Vec<EncodedDecision> {
        self.lines.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.lines.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.lines.lock().await.is_empty()
    }

    /// Take everything appended so far, leaving the sink empty.
    pub async fn drain(&self) -> Vec<EncodedDecision> {
        std::mem::take(&mut *self.lines.lock().await)
    }
}

#[async_trait]
impl DecisionSink for MemorySink {
    async fn append(&self, line: EncodedDecision) -> Result<(), SinkError> {
        self.lines.lock().await.push(line);
        Ok(())
    }
}
