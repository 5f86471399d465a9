//! Scenario configuration: which sorted sequence to search and for what.
//!
//! A scenario is plain data, read from JSON:
//!
//! ```text
//! {
//!   "schema_version": "scenario.v1",
//!   "scenario_id": "demo",
//!   "sequence": [2, 10, 23, 44, 100, 121],
//!   "targets": [3, 2, 44, 121]
//! }
//! ```
//!
//! [`ScenarioV1::validate`] is the pre-flight gate. The search core trusts its
//! sortedness precondition; this is where untrusted input is checked.

use std::path::Path;

use bisect_kernel::canon::{canonical_json_bytes, CanonError};
use bisect_kernel::hash::{canonical_hash, ContentHash};
use bisect_search::order::first_inversion;

/// Domain prefix for scenario content hashing.
pub const DOMAIN_SCENARIO: &[u8] = b"BISECT::SCENARIO::V1\0";

pub const SCENARIO_SCHEMA_VERSION: &str = "scenario.v1";

/// Error loading or validating a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// I/O error reading the scenario file.
    Io { detail: String },
    /// Not valid JSON, or not a JSON object.
    ParseError { detail: String },
    /// `schema_version` is not [`SCENARIO_SCHEMA_VERSION`].
    VersionMismatch { found: String },
    MissingField { field: &'static str },
    InvalidField { field: &'static str, detail: String },
    EmptyScenarioId,
    /// `sequence[index] < sequence[index - 1]`.
    UnsortedSequence { index: usize },
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::ParseError { detail } => write!(f, "scenario parse error: {detail}"),
            Self::VersionMismatch { found } => {
                write!(
                    f,
                    "scenario version mismatch: expected {SCENARIO_SCHEMA_VERSION}, found {found}"
                )
            }
            Self::MissingField { field } => write!(f, "scenario missing field: {field}"),
            Self::InvalidField { field, detail } => {
                write!(f, "scenario field {field} invalid: {detail}")
            }
            Self::EmptyScenarioId => write!(f, "scenario_id must not be empty"),
            Self::UnsortedSequence { index } => {
                write!(f, "sequence is not sorted: element {index} is smaller than its predecessor")
            }
        }
    }
}

impl std::error::Error for ScenarioError {}

/// A sorted sequence and the targets to look up in it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioV1 {
    pub scenario_id: String,
    pub sequence: Vec<i64>,
    pub targets: Vec<i64>,
}

impl Default for ScenarioV1 {
    /// The classic demonstration: a miss, the first element, a middle
    /// element and the last element.
    fn default() -> Self {
        Self {
            scenario_id: "demo".into(),
            sequence: vec![2, 10, 23, 44, 100, 121],
            targets: vec![3, 2, 44, 121],
        }
    }
}

impl ScenarioV1 {
    /// Pre-flight checks. Must pass before any target is searched.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::EmptyScenarioId`] or
    /// [`ScenarioError::UnsortedSequence`] with the first offending index.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.scenario_id.is_empty() {
            return Err(ScenarioError::EmptyScenarioId);
        }
        if let Some(index) = first_inversion(&self.sequence) {
            return Err(ScenarioError::UnsortedSequence { index });
        }
        Ok(())
    }

    /// Parse from JSON bytes. Does not call [`Self::validate`].
    ///
    /// # Errors
    ///
    /// Returns a [`ScenarioError`] describing the first malformed field.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ScenarioError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| ScenarioError::ParseError {
                detail: e.to_string(),
            })?;
        let Some(obj) = value.as_object() else {
            return Err(ScenarioError::ParseError {
                detail: "top-level value is not an object".into(),
            });
        };

        let version = obj
            .get("schema_version")
            .ok_or(ScenarioError::MissingField {
                field: "schema_version",
            })?;
        if version.as_str() != Some(SCENARIO_SCHEMA_VERSION) {
            return Err(ScenarioError::VersionMismatch {
                found: version.to_string(),
            });
        }

        let scenario_id = obj
            .get("scenario_id")
            .ok_or(ScenarioError::MissingField {
                field: "scenario_id",
            })?
            .as_str()
            .ok_or_else(|| ScenarioError::InvalidField {
                field: "scenario_id",
                detail: "not a string".into(),
            })?
            .to_string();

        Ok(Self {
            scenario_id,
            sequence: int_array(obj, "sequence")?,
            targets: int_array(obj, "targets")?,
        })
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "scenario_id": self.scenario_id,
            "schema_version": SCENARIO_SCHEMA_VERSION,
            "sequence": self.sequence,
            "targets": self.targets,
        })
    }

    /// Content hash of the canonical scenario JSON under [`DOMAIN_SCENARIO`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(DOMAIN_SCENARIO, &bytes))
    }
}

fn int_array(
    obj: &serde_json::Map<String, serde_json::Value>,
    field: &'static str,
) -> Result<Vec<i64>, ScenarioError> {
    let items = obj
        .get(field)
        .ok_or(ScenarioError::MissingField { field })?
        .as_array()
        .ok_or_else(|| ScenarioError::InvalidField {
            field,
            detail: "not an array".into(),
        })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_i64().ok_or_else(|| ScenarioError::InvalidField {
                field,
                detail: format!("element {i} is not a 64-bit integer: {item}"),
            })
        })
        .collect()
}

/// Read and validate a scenario file.
///
/// # Errors
///
/// [`ScenarioError::Io`] if the file cannot be read, otherwise any parse or
/// validation error.
pub fn load_scenario(path: &Path) -> Result<ScenarioV1, ScenarioError> {
    let bytes = std::fs::read(path).map_err(|e| ScenarioError::Io {
        detail: format!("{}: {e}", path.display()),
    })?;
    let scenario = ScenarioV1::from_json_bytes(&bytes)?;
    scenario.validate()?;
    Ok(scenario)
}
