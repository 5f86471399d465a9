//! Scenario runner: validates a scenario, searches every target, and
//! packages the outcomes as a digest-bound report.
//!
//! # Pipeline
//!
//! ```text
//! validate() → [search_traced() → digest()] × targets → report body → canonical_hash
//! ```
//!
//! The runner owns logging and presentation. The search core stays silent.

use bisect_kernel::canon::{canonical_json_bytes, CanonError};
use bisect_kernel::hash::{canonical_hash, ContentHash};
use bisect_search::search::SearchResult;
use bisect_search::trace::{result_to_json, search_traced};

use crate::scenario::{ScenarioError, ScenarioV1};

/// Domain prefix for scenario report hashing.
pub const DOMAIN_SCENARIO_REPORT: &[u8] = b"BISECT::SCENARIO_REPORT::V1\0";

pub const SCENARIO_REPORT_SCHEMA_VERSION: &str = "scenario_report.v1";

/// Error during a scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Pre-flight validation failed; nothing was searched.
    ScenarioRejected(ScenarioError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScenarioRejected(e) => write!(f, "scenario rejected: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ScenarioRejected(e) => Some(e),
            Self::CanonFailed { .. } => None,
        }
    }
}

impl From<ScenarioError> for RunError {
    fn from(e: ScenarioError) -> Self {
        Self::ScenarioRejected(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::CanonFailed {
            detail: e.to_string(),
        }
    }
}

/// Result of searching one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcomeV1 {
    pub target: i64,
    pub result: SearchResult,
    pub probe_count: usize,
    /// Digest of the full probe trace for this target.
    pub trace_digest: ContentHash,
}

/// Outcomes for every target of a scenario, in target order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReportV1 {
    pub scenario_id: String,
    pub scenario_digest: ContentHash,
    pub sequence_len: usize,
    pub outcomes: Vec<TargetOutcomeV1>,
    /// Digest over the canonical report body (everything above).
    pub digest: ContentHash,
}

impl ScenarioReportV1 {
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_found()).count()
    }

    /// Canonical JSON of the report body. The `digest` field is not part of
    /// the body; it is computed from these bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn body_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        report_body_bytes(
            &self.scenario_id,
            &self.scenario_digest,
            self.sequence_len,
            &self.outcomes,
        )
    }
}

fn report_body_bytes(
    scenario_id: &str,
    scenario_digest: &ContentHash,
    sequence_len: usize,
    outcomes: &[TargetOutcomeV1],
) -> Result<Vec<u8>, CanonError> {
    let outcomes_json: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|o| {
            serde_json::json!({
                "probe_count": o.probe_count,
                "result": result_to_json(o.result),
                "target": o.target,
                "trace_digest": o.trace_digest.as_str(),
            })
        })
        .collect();
    canonical_json_bytes(&serde_json::json!({
        "outcomes": outcomes_json,
        "scenario_digest": scenario_digest.as_str(),
        "scenario_id": scenario_id,
        "schema_version": SCENARIO_REPORT_SCHEMA_VERSION,
        "sequence_len": sequence_len,
    }))
}

/// Run every target of `scenario` through the traced search.
///
/// # Errors
///
/// [`RunError::ScenarioRejected`] if validation fails (no target is
/// searched), or [`RunError::CanonFailed`] if a digest cannot be computed.
pub fn run_scenario(scenario: &ScenarioV1) -> Result<ScenarioReportV1, RunError> {
    if let Err(e) = scenario.validate() {
        log::warn!("scenario {:?} rejected: {e}", scenario.scenario_id);
        return Err(e.into());
    }
    log::info!(
        "running scenario {}: {} targets over {} elements",
        scenario.scenario_id,
        scenario.targets.len(),
        scenario.sequence.len()
    );

    let scenario_digest = scenario.digest()?;
    let mut outcomes = Vec::with_capacity(scenario.targets.len());
    for &target in &scenario.targets {
        let trace = search_traced(&scenario.sequence, &target);
        let trace_digest = trace.digest()?;
        log::debug!(
            "target {target}: {:?} after {} probes ({trace_digest})",
            trace.result,
            trace.probe_count()
        );
        outcomes.push(TargetOutcomeV1 {
            target,
            result: trace.result,
            probe_count: trace.probe_count(),
            trace_digest,
        });
    }

    let body = report_body_bytes(
        &scenario.scenario_id,
        &scenario_digest,
        scenario.sequence.len(),
        &outcomes,
    )?;
    let digest = canonical_hash(DOMAIN_SCENARIO_REPORT, &body);
    log::info!("scenario {} report {digest}", scenario.scenario_id);

    Ok(ScenarioReportV1 {
        scenario_id: scenario.scenario_id.clone(),
        scenario_digest,
        sequence_len: scenario.sequence.len(),
        outcomes,
        digest,
    })
}

/// Human-readable line for one outcome.
#[must_use]
pub fn render_outcome(outcome: &TargetOutcomeV1) -> String {
    match outcome.result {
        SearchResult::Found(index) => format!("Element found at {index}th index"),
        SearchResult::NotFound => "Element Not Found".to_string(),
    }
}
