//! Append-only observability log: one JSONL record per workflow invocation.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// Input text is truncated to this many characters for log readability.
/// Output text is stored unabridged.
const INPUT_PREFIX_LEN: usize = 200;

/// One workflow invocation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRecord {
    pub timestamp: DateTime<Utc>,
    pub workflow: String,
    pub input: String,
    pub output: String,
    pub status: String,
}

/// Durable JSONL trace log. Writes are best-effort: a failed append is
/// logged and swallowed, never surfaced to the workflow caller.
#[derive(Debug, Clone)]
pub struct TraceLog {
    path: PathBuf,
}

impl TraceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn append(&self, workflow: &str, input: &str, output: &str) {
        let record = TraceRecord {
            timestamp: Utc::now(),
            workflow: workflow.to_string(),
            input: truncate_input(input),
            output: output.to_string(),
            status: "success".to_string(),
        };

        if let Err(e) = self.try_append(&record).await {
            warn!("trace log write failed: {e}");
        }
    }

    async fn try_append(&self, record: &TraceRecord) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        Ok(())
    }

    /// The most recent `n` records in chronological order (newest last).
    /// A missing log file is an empty history, not an error; unparseable
    /// lines are skipped.
    pub async fn recent(&self, n: usize) -> Vec<TraceRecord> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        let records: Vec<TraceRecord> = raw
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();

        let skip = records.len().saturating_sub(n);
        records.into_iter().skip(skip).collect()
    }
}

fn truncate_input(input: &str) -> String {
    let mut chars = input.char_indices();
    match chars.nth(INPUT_PREFIX_LEN) {
        Some((byte_idx, _)) => format!("{}...", &input[..byte_idx]),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn log_in(dir: &tempfile::TempDir) -> TraceLog {
        TraceLog::new(dir.path().join("agent_traces.jsonl"))
    }

    #[tokio::test]
    async fn test_recent_on_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        assert!(log.recent(10).await.is_empty());
    }

    #[tokio::test]
    async fn test_append_then_recent_is_chronological() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        log.append("QuizWorkflow", "topic: trees", "q1").await;
        log.append("DailyPlannerWorkflow", "goals", "plan").await;

        let records = log.recent(10).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].workflow, "QuizWorkflow");
        assert_eq!(records[1].workflow, "DailyPlannerWorkflow");
        assert_eq!(records[1].status, "success");
    }

    #[tokio::test]
    async fn test_recent_caps_at_n_keeping_newest() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        for i in 0..12 {
            log.append("QuizWorkflow", &format!("input {i}"), "out").await;
        }

        let records = log.recent(10).await;
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].input, "input 2");
        assert_eq!(records[9].input, "input 11");
    }

    #[tokio::test]
    async fn test_long_input_is_truncated_output_is_not() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        let long_input = "x".repeat(500);
        let long_output = "y".repeat(500);
        log.append("QuizWorkflow", &long_input, &long_output).await;

        let records = log.recent(1).await;
        assert_eq!(records[0].input.chars().count(), INPUT_PREFIX_LEN + 3);
        assert!(records[0].input.ends_with("..."));
        assert_eq!(records[0].output.len(), 500);
    }

    #[tokio::test]
    async fn test_truncation_respects_multibyte_boundaries() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        let input = "é".repeat(300);
        log.append("QuizWorkflow", &input, "out").await;

        let records = log.recent(1).await;
        assert!(records[0].input.starts_with('é'));
        assert!(records[0].input.ends_with("..."));
    }

    #[tokio::test]
    async fn test_unparseable_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("agent_traces.jsonl");
        let log = TraceLog::new(&path);
        log.append("QuizWorkflow", "in", "out").await;
        let mut raw = tokio::fs::read_to_string(&path).await.unwrap();
        raw.push_str("not json\n");
        tokio::fs::write(&path, raw).await.unwrap();

        assert_eq!(log.recent(10).await.len(), 1);
    }

    #[tokio::test]
    async fn test_append_to_unwritable_path_does_not_panic() {
        let log = TraceLog::new("/proc/definitely/not/writable/traces.jsonl");
        log.append("QuizWorkflow", "in", "out").await;
    }
}
