//! Content hashes with domain separation.
//!
//! **Exactly one place defines canonical hashing.** Every artifact kind gets
//! its own null-terminated domain prefix, declared next to the type it
//! hashes (for example `DOMAIN_PROBE_TRACE` in the search crate).

use sha2::{Digest, Sha256};

/// Algorithm tag written in front of every digest.
pub const HASH_ALGORITHM: &str = "sha256";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` on a missing colon, an empty side, or a digest that is
    /// not lowercase hex.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        let digest = &s[colon + 1..];
        if colon == 0 || digest.is_empty() {
            return None;
        }
        if !digest
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 over `domain || data`, formatted as `"sha256:<hex>"`.
///
/// `domain` must be null-terminated so that no prefix of one domain can be
/// confused with another.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    debug_assert!(domain.ends_with(&[0]), "domain prefix must be null-terminated");
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let full = format!("{HASH_ALGORITHM}:{}", hex::encode(hasher.finalize()));
    ContentHash {
        colon: HASH_ALGORITHM.len(),
        full,
    }
}
