//! Grid spacing analysis.
//!
//! ## Purpose
//!
//! This module inspects node coordinates before any stencil is evaluated:
//! it detects the direction of the grid, finds coinciding nodes that would
//! zero a stencil denominator, and flags spacings that are non-zero but
//! small relative to the grid extent.
//!
//! ## Design notes
//!
//! * **Read-only**: All functions borrow the grid and never reorder it.
//! * **Single pass**: Each scan is O(n) and stops at the first hit where a
//!   single answer is required.
//!
//! ## Key concepts
//!
//! * **Stencil pairs**: The three-point stencils subtract `x[i+1] - x[i]`
//!   and `x[i+1] - x[i-1]`; both kinds of pair must be non-zero.
//! * **Relative degeneracy**: A spacing is degenerate when
//!   `|x[i+1] - x[i]| <= tol * (max(x) - min(x))`.
//!
//! ## Non-goals
//!
//! * This module does not sort, deduplicate or regrid the input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

/// Ordering of the grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridDirection {
    /// Every step is positive.
    #[default]
    Increasing,

    /// Every step is negative.
    Decreasing,

    /// Steps change sign somewhere along the grid.
    Unordered,
}

impl GridDirection {
    /// Classify a grid with non-zero adjacent spacing.
    pub fn detect<T: Float>(x: &[T]) -> Self {
        let mut rising = false;
        let mut falling = false;
        for w in x.windows(2) {
            let dx = w[1] - w[0];
            if dx > T::zero() {
                rising = true;
            } else if dx < T::zero() {
                falling = true;
            }
        }
        match (rising, falling) {
            (true, false) => GridDirection::Increasing,
            (false, true) => GridDirection::Decreasing,
            _ => GridDirection::Unordered,
        }
    }

    /// Whether the grid is strictly monotonic.
    pub fn is_monotonic(self) -> bool {
        self != GridDirection::Unordered
    }
}

/// Find the first pair of coinciding nodes used by a common stencil.
///
/// Checks neighbours `(i, i + 1)` and the outer pair `(i - 1, i + 1)` of
/// every three-node stencil. Returns the pair with the smallest right index.
pub fn find_zero_spacing<T: Float>(x: &[T]) -> Option<(usize, usize)> {
    for right in 1..x.len() {
        if right >= 2 && x[right] == x[right - 2] {
            return Some((right - 2, right));
        }
        if x[right] == x[right - 1] {
            return Some((right - 1, right));
        }
    }
    None
}

/// Index of the first node where the grid stops moving in its initial
/// direction, if any.
pub fn first_reversal<T: Float>(x: &[T]) -> Option<usize> {
    if x.len() < 2 {
        return None;
    }
    let rising = x[1] > x[0];
    x.windows(2)
        .position(|w| if rising { w[1] <= w[0] } else { w[1] >= w[0] })
        .map(|i| i + 1)
}

/// Intervals whose spacing is at or below `tol` times the grid extent.
///
/// Returns the index `i` of each flagged interval `x[i]..x[i + 1]`.
pub fn degenerate_intervals<T: Float>(x: &[T], tol: T) -> Vec<usize> {
    let (lo, hi) = x
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let threshold = tol * (hi - lo);

    x.windows(2)
        .enumerate()
        .filter(|(_, w)| (w[1] - w[0]).abs() <= threshold)
        .map(|(i, _)| i)
        .collect()
}
