//! Centered three-point stencil for interior nodes.
//!
//! ## Purpose
//!
//! This module evaluates the second-order centered derivative at every
//! interior node of a possibly non-uniform grid.
//!
//! ## Design notes
//!
//! * **Pointwise**: [`centered_fd2`] depends only on nodes `i - 1`, `i` and
//!   `i + 1`, so interior nodes are independent of each other.
//! * **Parallel**: With the `parallel` feature the interior pass can be
//!   split across rayon workers. Each node runs the same scalar code, so
//!   results match the sequential pass bit for bit.
//!
//! ## Key concepts
//!
//! ```text
//! dx01 = x[i-1] - x[i],  dx10 = x[i+1] - x[i]
//!
//!          dx01² f[i+1] + (dx10² - dx01²) f[i] - dx10² f[i-1]
//! f'(x_i) ≈ --------------------------------------------------
//!                    dx10 · dx01 · (dx01 - dx10)
//! ```
//!
//! With uniform spacing `h` this is `(f[i+1] - f[i-1]) / 2h`.
//!
//! ## Invariants
//!
//! * `out.len() == x.len() == f.len()`; only `out[1..n-1]` is written.
//!
//! ## Non-goals
//!
//! * This module does not handle the two edge nodes (see `math::boundary`).

use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Centered second-order derivative at interior node `i`.
///
/// Requires `1 <= i <= x.len() - 2`.
#[inline]
pub fn centered_fd2<T: Float>(x: &[T], f: &[T], i: usize) -> T {
    let dx01 = x[i - 1] - x[i];
    let dx10 = x[i + 1] - x[i];

    let dx01_sq = dx01 * dx01;
    let dx10_sq = dx10 * dx10;

    let num = dx01_sq * f[i + 1] + (dx10_sq - dx01_sq) * f[i] - dx10_sq * f[i - 1];
    let den = dx10 * dx01 * (dx01 - dx10);

    num / den
}

/// Fill `out[1..n-1]` with centered derivatives.
pub fn interior_pass<T: Float>(x: &[T], f: &[T], out: &mut [T]) {
    let n = x.len();
    if n < 3 {
        return;
    }
    for (offset, slot) in out[1..n - 1].iter_mut().enumerate() {
        *slot = centered_fd2(x, f, offset + 1);
    }
}

/// Parallel counterpart of [`interior_pass`].
#[cfg(feature = "parallel")]
pub fn interior_pass_parallel<T: Float + Send + Sync>(x: &[T], f: &[T], out: &mut [T]) {
    let n = x.len();
    if n < 3 {
        return;
    }
    out[1..n - 1]
        .par_iter_mut()
        .enumerate()
        .for_each(|(offset, slot)| *slot = centered_fd2(x, f, offset + 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_spacing_matches_central_difference() {
        let x = [0.0, 0.5, 1.0];
        let f = [1.0, 4.0, 2.0];
        let d = centered_fd2(&x, &f, 1);
        assert!((d - (2.0 - 1.0) / 1.0).abs() < 1e-12);
    }

    #[test]
    fn edges_left_untouched() {
        let x = [0.0, 1.0, 3.0, 4.0];
        let f = [0.0, 1.0, 9.0, 16.0];
        let mut out = [-1.0; 4];
        interior_pass(&x, &f, &mut out);
        assert_eq!(out[0], -1.0);
        assert_eq!(out[3], -1.0);
        assert!((out[1] - 2.0).abs() < 1e-12);
        assert!((out[2] - 6.0).abs() < 1e-12);
    }
}
