//! Application layer: the write path from a decision record to a sink.

pub mod recorder;

pub use self::recorder::{RecordError, RecordOutcome, Recorder};
