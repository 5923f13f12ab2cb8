use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scan::ScanType;

/// Structured classification of one adapter run, replacing comparison
/// against sentinel strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The tool produced output.
    Found,
    /// The tool ran and printed nothing.
    Empty,
    /// The subprocess failed to spawn or exited non-zero.
    Failed(String),
}

/// Result of one adapter invocation. Immutable once produced; owned by the
/// orchestrator for the duration of a single request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub scan_type: ScanType,
    /// Unmodified tool output, the authoritative record.
    pub raw: String,
    /// Labeled display block derived from `raw`.
    pub rendered: String,
    /// Wall-clock time of this branch alone, not cumulative.
    pub elapsed: Duration,
    pub kind: OutcomeKind,
}

impl ScanOutcome {
    pub fn failed(&self) -> bool {
        matches!(self.kind, OutcomeKind::Failed(_))
    }
}

/// One persisted row of the result log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: i64,
    pub url: String,
    pub nmap: String,
    pub assetfinder: String,
    pub nuclei: String,
    /// Unix timestamp in milliseconds.
    pub created_at: u64,
}
