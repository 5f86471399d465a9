//! Seeded generator for sorted sequences and search targets.
//!
//! Every randomized lock test derives its cases from a fixed seed, so a
//! failure message naming the seed and case number is enough to replay it.
//!
//! Sequence elements are always even. Targets drawn "absent" are always odd,
//! so absence never needs a membership check against the sequence.

/// `SplitMix64` PRNG. Small, fast, and identical on every platform.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform-ish value in `0..bound`. Modulo bias is irrelevant at test sizes.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "below() needs a non-zero bound");
        self.next_u64() % bound
    }

    pub fn coin(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }
}

/// A generated search case.
#[derive(Debug, Clone)]
pub struct SearchCase {
    pub sequence: Vec<i64>,
    pub target: i64,
    /// Whether `target` occurs in `sequence`.
    pub present: bool,
}

/// Sorted sequence of `len` even values. `spread` controls how often values
/// repeat: a small spread gives long runs of duplicates.
pub fn sorted_even_sequence(rng: &mut SplitMix64, len: usize, spread: u64) -> Vec<i64> {
    let half_spread = i64::try_from(spread / 2).unwrap_or(i64::MAX / 4);
    let mut sequence: Vec<i64> = (0..len)
        .map(|_| {
            let offset = i64::try_from(rng.below(spread.max(1))).unwrap_or(0);
            (offset - half_spread) * 2
        })
        .collect();
    sequence.sort_unstable();
    sequence
}

/// One case with length in `0..=max_len`. About half the targets are drawn
/// from the sequence; the rest are odd values, below, inside or above it.
pub fn generate_case(rng: &mut SplitMix64, max_len: usize) -> SearchCase {
    let len = usize::try_from(rng.below(max_len as u64 + 1)).unwrap_or(0);
    // Alternate between dense-duplicate and sparse sequences.
    let spread = if rng.coin() {
        (len as u64 / 4).max(1)
    } else {
        len as u64 * 8 + 16
    };
    let sequence = sorted_even_sequence(rng, len, spread);

    if !sequence.is_empty() && rng.coin() {
        let index = usize::try_from(rng.below(len as u64)).unwrap_or(0);
        return SearchCase {
            target: sequence[index],
            sequence,
            present: true,
        };
    }

    // Odd values in [-2 * reach, 2 * reach] cover below, inside and above.
    let reach = spread + 4;
    let offset = i64::try_from(rng.below(reach * 2)).unwrap_or(0);
    let even = (offset - i64::try_from(reach).unwrap_or(0)) * 2;
    SearchCase {
        target: even + 1,
        sequence,
        present: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SplitMix64::new(42);
        let mut b = SplitMix64::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn known_first_output() {
        // Reference value for SplitMix64 seeded with 0.
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next_u64(), 0xE220_A839_7B1D_CDAF);
    }

    #[test]
    fn generated_cases_respect_contract() {
        let mut rng = SplitMix64::new(7);
        for _ in 0..200 {
            let case = generate_case(&mut rng, 64);
            assert!(case.sequence.windows(2).all(|w| w[0] <= w[1]));
            assert!(case.sequence.iter().all(|v| v % 2 == 0));
            assert_eq!(case.present, case.sequence.contains(&case.target));
        }
    }
}
