//! Typed trace verification errors.
//!
//! Searching itself never fails. These errors come from checking a
//! [`crate::trace::ProbeTraceV1`] that was built outside the search loop.

/// A structural invariant of a probe trace does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceVerifyError {
    /// Probe `step` fields are not `0, 1, 2, ...`.
    StepOutOfOrder { position: usize, step: u64 },
    /// `low <= mid <= high < sequence_len` does not hold.
    ProbeOutOfBounds { step: u64, detail: String },
    /// A probe's interval is not the one its predecessor left behind.
    IntervalMismatch { step: u64, detail: String },
    /// An `equal` probe that is not the final one.
    EqualBeforeEnd { step: u64 },
    /// More probes than the logarithmic bound allows.
    TooManyProbes { count: usize, bound: usize },
    /// The recorded result disagrees with the final probe.
    ResultMismatch { detail: String },
}

impl std::fmt::Display for TraceVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepOutOfOrder { position, step } => {
                write!(f, "probe at position {position} has step {step}")
            }
            Self::ProbeOutOfBounds { step, detail } => {
                write!(f, "probe {step} out of bounds: {detail}")
            }
            Self::IntervalMismatch { step, detail } => {
                write!(f, "probe {step} interval mismatch: {detail}")
            }
            Self::EqualBeforeEnd { step } => {
                write!(f, "probe {step} is equal but not the final probe")
            }
            Self::TooManyProbes { count, bound } => {
                write!(f, "{count} probes exceed bound of {bound}")
            }
            Self::ResultMismatch { detail } => write!(f, "result mismatch: {detail}"),
        }
    }
}

impl std::error::Error for TraceVerifyError {}
