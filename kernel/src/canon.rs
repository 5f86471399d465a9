//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! Every digest in the workspace is computed over bytes produced here.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":2}`.
//! 3. Numbers must be integers (`i64` or `u64`). Floats are rejected so that
//!    digests never depend on float formatting.
//!
//! Key ordering comes from `serde_json::Map`, which is a `BTreeMap` unless the
//! `preserve_order` feature is enabled. [`canonical_json_bytes`] re-sorts
//! explicitly so the output does not depend on that feature.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { path: String, raw: String },
    /// `serde_json` refused to write the value.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { path, raw } => {
                write!(f, "non-integer number in canonical JSON at {path}: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not representable
/// as `i64` or `u64`, with a JSON-pointer-style path to the offending value.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let sorted = sorted_integers_only(value, &mut String::new())?;
    serde_json::to_vec(&sorted).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// Rebuild `value` with sorted object keys, rejecting non-integer numbers.
fn sorted_integers_only(
    value: &serde_json::Value,
    path: &mut String,
) -> Result<serde_json::Value, CanonError> {
    match value {
        serde_json::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Ok(value.clone())
            } else {
                Err(CanonError::NonIntegerNumber {
                    path: if path.is_empty() { "/".into() } else { path.clone() },
                    raw: n.to_string(),
                })
            }
        }
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let len = path.len();
                path.push('/');
                path.push_str(&i.to_string());
                out.push(sorted_integers_only(item, path)?);
                path.truncate(len);
            }
            Ok(serde_json::Value::Array(out))
        }
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for key in keys {
                let len = path.len();
                path.push('/');
                path.push_str(key);
                out.insert(key.clone(), sorted_integers_only(&map[key], path)?);
                path.truncate(len);
            }
            Ok(serde_json::Value::Object(out))
        }
        serde_json::Value::Null | serde_json::Value::Bool(_) | serde_json::Value::String(_) => {
            Ok(value.clone())
        }
    }
}
