//! Seeded random source construction.
//!
//! Every generator in this crate threads an injectable RNG so the same seed
//! always produces identical output. `ChaCha8` is the canonical source; the
//! helpers here resolve an optional caller-supplied seed so that even
//! unseeded runs report the seed they used and remain reproducible.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Resolve the seed for a generation run.
///
/// Returns the requested seed when present, otherwise draws a fresh seed from
/// the operating system so the run can be replayed later.
#[must_use]
pub fn resolve_seed(requested: Option<u64>) -> u64 {
    requested.unwrap_or_else(|| ChaCha8Rng::from_os_rng().next_u64())
}

/// Construct the deterministic RNG for a seed value.
#[must_use]
pub fn rng_for_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
