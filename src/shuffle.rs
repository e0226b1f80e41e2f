//! Seeded Fisher-Yates shuffle, published at:
//! <https://en.wikipedia.org/wiki/Fisher%E2%80%93Yates_shuffle>
//!
//! Used to produce reproducible scrambled fixtures, not fit for
//! cryptographic or fairness-critical permutation.

use rand::prelude::*;

/// Permutes `v` in place, driven by a generator seeded from `seed`.
///
/// The same seed bytes over the same input always yield the same permutation
/// within one build of this crate. Reproducibility across crate versions is
/// not promised, it is pinned to `rand`'s `StdRng` algorithm.
///
/// The index draw goes through [`Rng::gen_range`], which rejection-samples
/// instead of reducing a raw draw modulo the range size, so the slight
/// non-uniformity of modulo-based Fisher-Yates ports does not apply here.
pub fn shuffle<T>(v: &mut [T], seed: impl AsRef<[u8]>) {
    let mut rng = StdRng::from_seed(expand_seed(seed.as_ref()));

    // After each swap v[i] is in its final place.
    for i in (1..v.len()).rev() {
        let j = rng.gen_range(0..=i);
        v.swap(i, j);
    }
}

// --- IMPL ---

/// Folds arbitrarily many seed bytes into the fixed-width `StdRng` seed.
/// The per-slot multiplier keeps the fold position-dependent, so
/// rearranged seed bytes produce a different seed state.
fn expand_seed(bytes: &[u8]) -> [u8; 32] {
    let mut seed = [0u8; 32];

    for (i, b) in bytes.iter().enumerate() {
        let slot = &mut seed[i % 32];
        *slot = slot.wrapping_mul(31).wrapping_add(*b);
    }

    seed
}
