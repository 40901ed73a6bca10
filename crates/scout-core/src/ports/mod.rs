//! Ports: abstraction seams toward external collaborators.
//!
//! The only collaborator this crate talks to is the log sink that persists
//! encoded decision records. Everything upstream of the sink (exploration
//! algorithms, policies) calls *into* this crate and needs no port.

pub mod sink;

pub use self::sink::{DecisionSink, EncodedDecision, SinkError};
