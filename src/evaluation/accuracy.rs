//! Accuracy metrics for derivative estimates.
//!
//! ## Purpose
//!
//! This module measures how far a derivative estimate is from a reference:
//! pointwise error norms, the observed order of accuracy under grid
//! refinement, and a parity check between two independently computed
//! derivatives.
//!
//! ## Design notes
//!
//! * **Pure**: Every function borrows its inputs and allocates nothing.
//! * **Generic**: Works for any `Float` type.
//!
//! ## Key concepts
//!
//! * **Observed order**: `p = ln(e_coarse / e_fine) / ln(r)` for refinement
//!   ratio `r`. A second-order scheme gives `p ≈ 2`.
//! * **Normalized reduction**: `(e_0 / e_k) / 4^k` after `k` doublings,
//!   close to 1 for a second-order scheme.
//!
//! ## Non-goals
//!
//! * This module does not compute derivatives itself.

use num_traits::Float;

use crate::primitives::errors::FdError;

/// Pointwise error norms between an estimate and a reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorNorms<T> {
    /// Largest absolute difference.
    pub max_abs: T,

    /// Mean absolute difference.
    pub mean_abs: T,

    /// Root-mean-square difference.
    pub rms: T,
}

impl<T: Float> ErrorNorms<T> {
    /// Compute error norms between `estimate` and `reference`.
    pub fn compute(estimate: &[T], reference: &[T]) -> Result<Self, FdError> {
        check_pair(estimate, reference)?;

        let (max_abs, sum_abs, sum_sq) = estimate.iter().zip(reference).fold(
            (T::zero(), T::zero(), T::zero()),
            |(max_abs, sum_abs, sum_sq), (&a, &b)| {
                let e = (a - b).abs();
                (max_abs.max(e), sum_abs + e, sum_sq + e * e)
            },
        );
        let n = T::from(estimate.len()).unwrap_or_else(T::one);

        Ok(Self {
            max_abs,
            mean_abs: sum_abs / n,
            rms: (sum_sq / n).sqrt(),
        })
    }
}

/// Observed order of accuracy between two refinement levels.
pub fn observed_order<T: Float>(coarse_error: T, fine_error: T, refinement: T) -> T {
    (coarse_error / fine_error).ln() / refinement.ln()
}

/// Error reduction after `doublings` grid doublings, divided by `4^doublings`.
pub fn normalized_reduction<T: Float>(baseline_error: T, refined_error: T, doublings: i32) -> T {
    let four = T::one() + T::one() + T::one() + T::one();
    (baseline_error / refined_error) / four.powi(doublings)
}

/// Whether two derivative sequences agree within `tolerance` everywhere.
pub fn agrees_within<T: Float>(a: &[T], b: &[T], tolerance: T) -> Result<bool, FdError> {
    check_pair(a, b)?;
    Ok(a.iter().zip(b).all(|(&u, &v)| (u - v).abs() <= tolerance))
}

fn check_pair<T>(a: &[T], b: &[T]) -> Result<(), FdError> {
    if a.len() != b.len() {
        return Err(FdError::MismatchedInputs {
            x_len: a.len(),
            f_len: b.len(),
        });
    }
    if a.is_empty() {
        return Err(FdError::TooFewPoints { got: 0, min: 1 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norms_of_known_difference() {
        let norms = ErrorNorms::compute(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 6.0]).unwrap();
        assert_eq!(norms.max_abs, 2.0);
        assert_eq!(norms.mean_abs, 0.5);
        assert_eq!(norms.rms, 1.0);
    }

    #[test]
    fn order_of_quartered_error_is_two() {
        let p: f64 = observed_order(0.8, 0.2, 2.0);
        assert!((p - 2.0).abs() < 1e-12);
        let r: f64 = normalized_reduction(0.8, 0.05, 2);
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_pair_is_rejected() {
        let empty: [f64; 0] = [];
        assert!(agrees_within(&empty, &empty, 1.0).is_err());
    }
}
