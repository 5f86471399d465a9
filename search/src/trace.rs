//! `ProbeTraceV1`: the ordered record of comparisons a search made.
//!
//! A trace is produced by the same loop as [`crate::search::search`]; tracing
//! observes the loop and never steers it. Traces serialize to canonical JSON
//! and hash under [`DOMAIN_PROBE_TRACE`].

use std::cmp::Ordering;

use bisect_kernel::canon::{canonical_json_bytes, CanonError};
use bisect_kernel::hash::{canonical_hash, ContentHash};

use crate::error::TraceVerifyError;
use crate::search::{bisect, Probe, SearchResult};

/// Domain prefix for probe trace content hashing.
pub const DOMAIN_PROBE_TRACE: &[u8] = b"BISECT::PROBE_TRACE::V1\0";

/// Schema tag written into every serialized trace.
pub const PROBE_TRACE_SCHEMA_VERSION: &str = "probe_trace.v1";

/// How the probed element compared to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOrderingV1 {
    /// Element sorts before the target; search continues above `mid`.
    Less,
    Equal,
    /// Element sorts after the target; search continues below `mid`.
    Greater,
}

impl ProbeOrderingV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Greater => "greater",
        }
    }
}

impl From<Ordering> for ProbeOrderingV1 {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// A single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeV1 {
    /// Position in the probe sequence, starting at 0.
    pub step: u64,
    /// Inclusive interval searched at this step.
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    pub ordering: ProbeOrderingV1,
}

/// The complete record of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTraceV1 {
    pub sequence_len: usize,
    pub probes: Vec<ProbeV1>,
    pub result: SearchResult,
}

impl ProbeTraceV1 {
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails. All fields are
    /// integers or strings, so this only happens on a kernel bug.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical bytes under [`DOMAIN_PROBE_TRACE`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from [`Self::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_PROBE_TRACE, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "probes": self.probes.iter().map(probe_to_json).collect::<Vec<_>>(),
            "result": result_to_json(self.result),
            "schema_version": PROBE_TRACE_SCHEMA_VERSION,
            "sequence_len": self.sequence_len,
        })
    }
}

fn probe_to_json(p: &ProbeV1) -> serde_json::Value {
    serde_json::json!({
        "high": p.high,
        "low": p.low,
        "mid": p.mid,
        "ordering": p.ordering.as_str(),
        "step": p.step,
    })
}

/// JSON form of a [`SearchResult`]: `{"type":"found","index":i}` or
/// `{"type":"not_found"}`.
#[must_use]
pub fn result_to_json(result: SearchResult) -> serde_json::Value {
    match result {
        SearchResult::Found(index) => serde_json::json!({"type": "found", "index": index}),
        SearchResult::NotFound => serde_json::json!({"type": "not_found"}),
    }
}

/// Upper bound on probes for a sequence of length `len`: `floor(log2(len)) + 1`.
#[must_use]
pub fn max_probes(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        len.ilog2() as usize + 1
    }
}

/// Run [`crate::search::search_by`] and record every probe.
#[must_use]
pub fn trace_by<T, F>(sequence: &[T], mut cmp: F) -> ProbeTraceV1
where
    F: FnMut(&T) -> Ordering,
{
    debug_assert!(
        crate::order::is_partitioned_by(sequence, &mut cmp),
        "search precondition violated: sequence is not partitioned by comparator"
    );
    let mut probes = Vec::with_capacity(max_probes(sequence.len()));
    let result = bisect(sequence, cmp, |p: Probe| {
        probes.push(ProbeV1 {
            step: probes.len() as u64,
            low: p.low,
            high: p.high,
            mid: p.mid,
            ordering: p.ordering.into(),
        });
    });
    ProbeTraceV1 {
        sequence_len: sequence.len(),
        probes,
        result,
    }
}

/// Traced form of [`crate::search::search`]. `trace.result` equals what
/// `search` returns for the same arguments.
///
/// # Panics
///
/// In debug builds only, panics if `sequence` is not sorted.
#[must_use]
pub fn search_traced<T: Ord>(sequence: &[T], target: &T) -> ProbeTraceV1 {
    debug_assert!(
        crate::order::is_sorted(sequence),
        "search precondition violated: sequence is not sorted"
    );
    trace_by(sequence, |element| element.cmp(target))
}

/// Check a trace against the halving rules, without access to the searched slice.
///
/// Verifies step numbering, interval bounds, that each interval is the one
/// the previous probe left, the floor midpoint, the probe-count bound, and
/// that `result` matches the final probe.
///
/// # Errors
///
/// Returns the first [`TraceVerifyError`] found.
pub fn verify_trace(trace: &ProbeTraceV1) -> Result<(), TraceVerifyError> {
    let bound = max_probes(trace.sequence_len);
    if trace.probes.len() > bound {
        return Err(TraceVerifyError::TooManyProbes {
            count: trace.probes.len(),
            bound,
        });
    }

    let mut expected = trace.sequence_len.checked_sub(1).map(|high| (0, high));
    for (position, probe) in trace.probes.iter().enumerate() {
        if probe.step != position as u64 {
            return Err(TraceVerifyError::StepOutOfOrder {
                position,
                step: probe.step,
            });
        }
        if probe.low > probe.mid || probe.mid > probe.high || probe.high >= trace.sequence_len {
            return Err(TraceVerifyError::ProbeOutOfBounds {
                step: probe.step,
                detail: format!(
                    "low={} mid={} high={} len={}",
                    probe.low, probe.mid, probe.high, trace.sequence_len
                ),
            });
        }
        let Some((low, high)) = expected else {
            return Err(TraceVerifyError::IntervalMismatch {
                step: probe.step,
                detail: "probe after the interval was exhausted".into(),
            });
        };
        if (probe.low, probe.high) != (low, high) {
            return Err(TraceVerifyError::IntervalMismatch {
                step: probe.step,
                detail: format!(
                    "expected [{low}, {high}], got [{}, {}]",
                    probe.low, probe.high
                ),
            });
        }
        if probe.mid != low + (high - low) / 2 {
            return Err(TraceVerifyError::IntervalMismatch {
                step: probe.step,
                detail: format!("mid {} is not the floor midpoint", probe.mid),
            });
        }
        expected = match probe.ordering {
            ProbeOrderingV1::Equal => {
                if position + 1 != trace.probes.len() {
                    return Err(TraceVerifyError::EqualBeforeEnd { step: probe.step });
                }
                None
            }
            ProbeOrderingV1::Greater => probe
                .mid
                .checked_sub(1)
                .filter(|&next| next >= low)
                .map(|next| (low, next)),
            ProbeOrderingV1::Less => Some((probe.mid + 1, high)).filter(|&(l, h)| l <= h),
        };
    }

    match (trace.probes.last(), trace.result) {
        (Some(last), SearchResult::Found(index))
            if last.ordering == ProbeOrderingV1::Equal && last.mid == index =>
        {
            Ok(())
        }
        (Some(last), SearchResult::NotFound)
            if last.ordering != ProbeOrderingV1::Equal && expected.is_none() =>
        {
            Ok(())
        }
        (None, SearchResult::NotFound) if trace.sequence_len == 0 => Ok(()),
        (last, result) => Err(TraceVerifyError::ResultMismatch {
            detail: format!(
                "result {result:?} with final probe {:?}",
                last.map(|p| (p.mid, p.ordering))
            ),
        }),
    }
}
