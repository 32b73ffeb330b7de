#![cfg(feature = "dev")]
//! Tests for input validation and grid analysis.
//!
//! ## Test Organization
//!
//! 1. **Shape Checks** - Lengths and minimum size
//! 2. **Finite Checks** - NaN and infinity in either array
//! 3. **Spacing Checks** - Coinciding stencil nodes and direction
//! 4. **Parameter Checks** - Tolerance and duplicates

use findiff_rs::internals::engine::validator::Validator;
use findiff_rs::internals::math::spacing::{
    GridDirection, degenerate_intervals, find_zero_spacing, first_reversal,
};
use findiff_rs::internals::primitives::errors::FdError;

// ============================================================================
// Shape Checks
// ============================================================================

#[test]
fn test_length_checked_before_size() {
    // Both rules are violated; the length mismatch is reported first
    let err = Validator::validate_inputs(&[0.0, 1.0], &[0.0]).unwrap_err();
    assert_eq!(err, FdError::MismatchedInputs { x_len: 2, f_len: 1 });
}

#[test]
fn test_minimum_points() {
    assert_eq!(Validator::MIN_POINTS, 3);
    assert!(Validator::validate_inputs(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).is_ok());
    assert_eq!(
        Validator::validate_inputs(&[0.0, 1.0], &[0.0, 1.0]),
        Err(FdError::TooFewPoints { got: 2, min: 3 })
    );
}

// ============================================================================
// Finite Checks
// ============================================================================

#[test]
fn test_non_finite_reports_position() {
    let err = Validator::validate_inputs(&[0.0, 1.0, 2.0], &[0.0, 1.0, f64::NAN]).unwrap_err();
    assert_eq!(err, FdError::InvalidNumericValue("f[2]=NaN".to_string()));

    let err =
        Validator::validate_inputs(&[0.0, f64::NEG_INFINITY, 2.0], &[0.0; 3]).unwrap_err();
    assert_eq!(err, FdError::InvalidNumericValue("x[1]=-inf".to_string()));
}

// ============================================================================
// Spacing Checks
// ============================================================================

#[test]
fn test_zero_spacing_at_edges() {
    assert_eq!(
        Validator::validate_spacing(&[1.0, 1.0, 2.0, 3.0]),
        Err(FdError::ZeroSpacing { left: 0, right: 1 })
    );
    assert_eq!(
        Validator::validate_spacing(&[0.0, 1.0, 2.0, 2.0]),
        Err(FdError::ZeroSpacing { left: 2, right: 3 })
    );
}

#[test]
fn test_non_monotonic_grid_without_zero_spacing_passes_spacing_check() {
    let x = [0.0, 2.0, 1.0, 3.0];
    assert!(Validator::validate_spacing(&x).is_ok());
    assert_eq!(
        Validator::validate_monotonic(&x),
        Err(FdError::NonMonotonicGrid { index: 2 })
    );
    assert_eq!(GridDirection::detect(&x), GridDirection::Unordered);
}

#[test]
fn test_monotonic_grids_pass() {
    assert!(Validator::validate_monotonic(&[0.0, 0.1, 5.0]).is_ok());
    assert!(Validator::validate_monotonic(&[5.0, 0.1, 0.0]).is_ok());
    assert_eq!(first_reversal(&[5.0, 0.1, 0.0]), None);
    assert!(GridDirection::Decreasing.is_monotonic());
    assert!(!GridDirection::Unordered.is_monotonic());
}

#[test]
fn test_zero_spacing_scan_stops_at_first_pair() {
    assert_eq!(
        find_zero_spacing(&[0.0, 1.0, 1.0, 2.0, 2.0]),
        Some((1, 2))
    );
}

#[test]
fn test_degenerate_intervals_use_grid_extent() {
    // Extent 10, tolerance 1e-3 -> threshold 0.01
    let x = [0.0, 0.005, 5.0, 5.02, 10.0];
    assert_eq!(degenerate_intervals(&x, 1e-3), vec![0]);
    assert_eq!(degenerate_intervals(&x, 3e-3), vec![0, 2]);
}

// ============================================================================
// Parameter Checks
// ============================================================================

#[test]
fn test_tolerance_validation() {
    assert!(Validator::validate_tolerance(1e-6).is_ok());
    assert_eq!(
        Validator::validate_tolerance(0.0),
        Err(FdError::InvalidTolerance(0.0))
    );
    assert_eq!(
        Validator::validate_tolerance(-2.0),
        Err(FdError::InvalidTolerance(-2.0))
    );
    assert!(matches!(
        Validator::validate_tolerance(f64::NAN),
        Err(FdError::InvalidTolerance(_))
    ));
}

#[test]
fn test_duplicate_validation() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("parallel")),
        Err(FdError::DuplicateParameter {
            parameter: "parallel"
        })
    );
}
