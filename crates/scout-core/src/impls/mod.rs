//! Sink implementations.
//!
//! - [`MemorySink`]: in-memory, for tests and development.
//! - [`JsonlSink`]: month-partitioned JSONL files, for real logs.

pub mod jsonl_sink;
pub mod memory_sink;

pub use self::jsonl_sink::{JsonlSink, JsonlSinkConfig};
pub use self::memory_sink::MemorySink;
