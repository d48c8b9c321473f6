//! Weighted categorical allocation with exact-sum reconciliation.
//!
//! Mapping a total count onto percentage weights with naive flooring loses
//! records, and guaranteeing a minimum of one per category can overshoot the
//! total for small counts. This module implements a single reserve-first
//! policy:
//!
//! - `total < categories`: the `total` heaviest categories receive exactly
//!   one each; the rest receive zero.
//! - `total >= categories`: one slot is reserved per category up front; the
//!   remainder is split proportionally by integer flooring, and the flooring
//!   shortfall is handed out one-by-one round-robin across categories in
//!   descending weight order.
//!
//! The returned counts always sum to exactly `total`.

use rand::Rng;
use rand::seq::SliceRandom;

/// Allocate `total` across categories proportionally to `weights`.
///
/// Weights are relative (they need not sum to 100). Every category receives
/// at least one whenever `total >= weights.len()`.
///
/// # Examples
///
/// ```
/// use demo_data::allocate;
///
/// let counts = allocate(100, &[50, 30, 20]);
/// assert_eq!(counts.iter().sum::<usize>(), 100);
/// assert!(counts.iter().all(|&c| c >= 1));
/// ```
#[must_use]
#[expect(
    clippy::indexing_slicing,
    reason = "order holds indices drawn from 0..weights.len(), so every lookup is in bounds"
)]
pub fn allocate(total: usize, weights: &[u32]) -> Vec<usize> {
    let categories = weights.len();
    if categories == 0 {
        return Vec::new();
    }

    // Stable descending-weight order decides who receives reserved slots
    // and shortfall top-ups first.
    let mut order: Vec<usize> = (0..categories).collect();
    order.sort_by(|&a, &b| weights[b].cmp(&weights[a]).then(a.cmp(&b)));

    let mut counts = vec![0_usize; categories];

    if total < categories {
        for &index in order.iter().take(total) {
            counts[index] = 1;
        }
        return counts;
    }

    let weight_sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    let remainder = total - categories;

    let mut assigned = 0_usize;
    for (index, count) in counts.iter_mut().enumerate() {
        let share = if weight_sum == 0 {
            0
        } else {
            usize::try_from(remainder as u64 * u64::from(weights[index]) / weight_sum)
                .unwrap_or(remainder)
        };
        *count = 1 + share;
        assigned += share;
    }

    let mut shortfall = remainder - assigned;
    let mut cursor = 0_usize;
    while shortfall > 0 {
        counts[order[cursor % categories]] += 1;
        cursor += 1;
        shortfall -= 1;
    }

    counts
}

/// Expand per-category counts into a shuffled assignment pool.
///
/// The pool holds one reference per allocated slot and is consumed by index,
/// so the realised distribution matches the allocation exactly rather than
/// merely in expectation.
pub fn assignment_pool<'a, T, R: Rng>(
    categories: &'a [T],
    counts: &[usize],
    rng: &mut R,
) -> Vec<&'a T> {
    debug_assert_eq!(categories.len(), counts.len());
    let mut pool = Vec::with_capacity(counts.iter().sum());
    for (category, &count) in categories.iter().zip(counts) {
        for _ in 0..count {
            pool.push(category);
        }
    }
    pool.shuffle(rng);
    pool
}
