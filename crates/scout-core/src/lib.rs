//! scout-core
//!
//! Core building blocks for decision logging in online exploration.
//!
//! An exploration algorithm (epsilon-greedy, softmax, a ranked-list
//! explorer, ...) emits one [`Decision`] per choice: the action it
//! surfaced, opaque metadata about how it chose, the underlying policy's
//! own choice for offline auditing, and a flag saying whether the record
//! should be persisted. This crate owns the record's shape, its fixed wire
//! encoding, and the write path to a log sink. It never chooses actions,
//! computes probabilities, or learns.
//!
//! # Modules
//! - **domain**: the [`Decision`] record and its nested [`PolicyDecision`]
//! - **codec**: the wire encoding (`"a"` key, no `should_record`)
//! - **ports**: the [`DecisionSink`] abstraction
//! - **app**: the [`Recorder`] write path
//! - **impls**: sink implementations (in-memory, JSONL files)

pub mod app;
pub mod codec;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{RecordError, RecordOutcome, Recorder};
pub use codec::CodecError;
pub use domain::{Decision, PolicyDecision};
pub use impls::{JsonlSink, JsonlSinkConfig, MemorySink};
pub use ports::{DecisionSink, EncodedDecision, SinkError};
