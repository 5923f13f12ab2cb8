use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use urlscan_types::{OutcomeKind, ScanOutcome, ScanRequest, ScanType};

use crate::adapters;
use crate::exec::{CommandExecutor, ExecError};

/// Sequences the per-tool adapters for one request and aggregates their
/// outcomes. Linear and sequential: no retries, no internal parallelism;
/// a failing adapter records a `Failed` outcome and the remaining adapters
/// still run.
pub struct ScanEngine {
    executor: Arc<dyn CommandExecutor>,
}

impl ScanEngine {
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Run every requested scan type in fixed priority order (nmap,
    /// assetfinder, nuclei), regardless of the order they were submitted.
    /// Each adapter executes exactly once; the report backs both the
    /// rendered response and the store write.
    pub async fn run(&self, request: &ScanRequest) -> ScanReport {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(request.scan_types.len());

        for scan_type in ScanType::ALL {
            if !request.wants(scan_type) {
                continue;
            }

            let command =
                adapters::command_for(scan_type, &request.target, &request.template_categories);
            info!(%scan_type, target = %request.target, "running scan");

            // Timed per branch in isolation, not since orchestration start.
            let branch_start = Instant::now();
            let outcome = match self.executor.run(&command).await {
                Ok(raw) => {
                    let (rendered, kind) = adapters::render(scan_type, &raw);
                    ScanOutcome {
                        scan_type,
                        raw,
                        rendered,
                        elapsed: branch_start.elapsed(),
                        kind,
                    }
                }
                Err(e) => {
                    warn!(%scan_type, error = %e, "scan command failed");
                    // Keep whatever the tool printed before dying as the raw
                    // record; the rendered block carries the error text.
                    let raw = match &e {
                        ExecError::NonZero { output, .. } => output.clone(),
                        ExecError::Spawn(_) => String::new(),
                    };
                    ScanOutcome {
                        scan_type,
                        raw,
                        rendered: adapters::render_failure(scan_type, &e.to_string()),
                        elapsed: branch_start.elapsed(),
                        kind: OutcomeKind::Failed(e.to_string()),
                    }
                }
            };
            outcomes.push(outcome);
        }

        ScanReport {
            outcomes,
            total_duration: start.elapsed(),
        }
    }
}

/// Aggregated result of one orchestration run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Outcomes in execution (priority) order.
    pub outcomes: Vec<ScanOutcome>,
    pub total_duration: Duration,
}

impl ScanReport {
    pub fn outcome(&self, scan_type: ScanType) -> Option<&ScanOutcome> {
        self.outcomes.iter().find(|o| o.scan_type == scan_type)
    }

    /// Labeled blocks concatenated in execution order, separated by blank
    /// lines: the text shown on the results page.
    pub fn combined_text(&self) -> String {
        let mut text = String::new();
        for outcome in &self.outcomes {
            text.push_str(&outcome.rendered);
            text.push('\n');
        }
        text
    }

    /// Text persisted for `scan_type`; empty when the branch did not run.
    pub fn stored_text(&self, scan_type: ScanType) -> &str {
        self.outcome(scan_type)
            .map(|o| o.rendered.as_str())
            .unwrap_or("")
    }

    /// Isolated duration of one branch, if it ran.
    pub fn elapsed(&self, scan_type: ScanType) -> Option<Duration> {
        self.outcome(scan_type).map(|o| o.elapsed)
    }
}
