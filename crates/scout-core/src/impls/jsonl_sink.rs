//! JSONL file sink: one decision per line, month-partitioned files.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

use crate::ports::{DecisionSink, EncodedDecision, SinkError};

/// Configuration for [`JsonlSink`].
#[derive(Debug, Clone)]
pub struct JsonlSinkConfig {
    /// Directory the month-partitioned files live in. Created on first
    /// append if missing.
    pub dir: PathBuf,
}

impl JsonlSinkConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory from the `SCOUT_DATA` environment variable, falling back
    /// to `./scout-events`.
    pub fn from_env() -> Self {
        let dir = std::env::var("SCOUT_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("scout-events"));
        Self { dir }
    }
}

/// Sink that appends one encoded decision per line to `YYYY-MM.jsonl`
/// files under the configured directory.
///
/// Appends are serialized through a mutex so concurrent writers emit whole
/// lines, never torn ones. Failures are logged at `warn` and returned to
/// the caller; this sink does not retry.
pub struct JsonlSink {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlSink {
    pub fn new(config: JsonlSinkConfig) -> Self {
        Self {
            dir: config.dir,
            write_lock: Mutex::new(()),
        }
    }

    fn file_name(now: DateTime<Utc>) -> String {
        format!("{:04}-{:02}.jsonl", now.year(), now.month())
    }
}

#[async_trait]
impl DecisionSink for JsonlSink {
    async fn append(&self, line: EncodedDecision) -> Result<(), SinkError> {
        let _guard = self.write_lock.lock().await;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .inspect_err(|err| {
                warn!(dir = %self.dir.display(), error = %err, "failed to create sink directory");
            })?;

        let path = self.dir.join(Self::file_name(Utc::now()));
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .inspect_err(|err| {
                warn!(path = %path.display(), error = %err, "failed to open sink file");
            })?;

        // One write per record keeps the line whole on disk.
        let mut buf = line.into_string();
        buf.push('\n');
        file.write_all(buf.as_bytes()).await.inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "failed to append decision");
        })?;
        file.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn files_are_partitioned_by_month() {
        let t = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        assert_eq!(JsonlSink::file_name(t), "2026-08.jsonl");

        let t = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        assert_eq!(JsonlSink::file_name(t), "2025-01.jsonl");
    }

    #[tokio::test]
    async fn append_writes_one_parseable_line_per_decision() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = JsonlSink::new(JsonlSinkConfig::new(tmp.path()));

        sink.append(EncodedDecision::new(r#"{"a":7}"#.to_string()))
            .await
            .unwrap();
        sink.append(EncodedDecision::new(r#"{"a":[3,1,4]}"#.to_string()))
            .await
            .unwrap();

        let mut entries: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        let path = entries.pop().unwrap();
        assert_eq!(path.extension().unwrap(), "jsonl");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(v.get("a").is_some());
        }
        assert_eq!(lines[0], r#"{"a":7}"#);
    }

    #[tokio::test]
    async fn append_keeps_earlier_lines() {
        let tmp = tempfile::tempdir().unwrap();

        // Two sink instances over the same directory, as across restarts.
        let first = JsonlSink::new(JsonlSinkConfig::new(tmp.path()));
        first
            .append(EncodedDecision::new(r#"{"a":1}"#.to_string()))
            .await
            .unwrap();

        let second = JsonlSink::new(JsonlSinkConfig::new(tmp.path()));
        second
            .append(EncodedDecision::new(r#"{"a":2}"#.to_string()))
            .await
            .unwrap();

        let path = tmp.path().join(JsonlSink::file_name(Utc::now()));
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "{\"a\":1}\n{\"a\":2}\n");
    }
}
