//! Input validation for finite-difference configuration and data.
//!
//! ## Purpose
//!
//! This module checks grid and sample arrays, and builder parameters,
//! before any derivative is computed. It guarantees that every stencil
//! denominator is built from distinct coordinates.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape Checks**: Equal lengths and at least three nodes.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Stencil Pairs**: Every coordinate pair subtracted by a stencil differs.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not flag near-zero spacing (see the executor).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::spacing::{find_zero_spacing, first_reversal};
use crate::primitives::errors::FdError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for finite-difference inputs and configuration.
///
/// All methods return `Result<(), FdError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Minimum number of nodes for the three-point stencils.
    pub const MIN_POINTS: usize = 3;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate grid and sample arrays.
    pub fn validate_inputs<T: Float>(x: &[T], f: &[T]) -> Result<(), FdError> {
        // Check 1: Matching lengths
        if x.len() != f.len() {
            return Err(FdError::MismatchedInputs {
                x_len: x.len(),
                f_len: f.len(),
            });
        }

        // Check 2: Enough nodes for the one-sided stencil
        if x.len() < Self::MIN_POINTS {
            return Err(FdError::TooFewPoints {
                got: x.len(),
                min: Self::MIN_POINTS,
            });
        }

        // Check 3: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(f, "f")?;

        Ok(())
    }

    /// Validate that no stencil subtracts two equal coordinates.
    pub fn validate_spacing<T: Float>(x: &[T]) -> Result<(), FdError> {
        match find_zero_spacing(x) {
            Some((left, right)) => Err(FdError::ZeroSpacing { left, right }),
            None => Ok(()),
        }
    }

    /// Validate that the grid is strictly increasing or strictly decreasing.
    pub fn validate_monotonic<T: Float>(x: &[T]) -> Result<(), FdError> {
        match first_reversal(x) {
            Some(index) => Err(FdError::NonMonotonicGrid { index }),
            None => Ok(()),
        }
    }

    fn validate_finite<T: Float>(vals: &[T], name: &str) -> Result<(), FdError> {
        match vals.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(FdError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                vals[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the relative spacing tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), FdError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(FdError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FdError> {
        if let Some(param) = duplicate_param {
            return Err(FdError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
