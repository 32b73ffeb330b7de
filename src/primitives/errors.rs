//! Error types for finite-difference differentiation.
//!
//! ## Purpose
//!
//! This module defines the error type returned by every fallible operation
//! in the crate. Errors are grouped into three categories through
//! [`ErrorKind`] so callers can tell a shape problem from a degenerate grid.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is hand-written; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//! * **Comparable**: Errors are `Clone + PartialEq` so tests can match them.
//!
//! ## Invariants
//!
//! * Every error is raised before any output buffer is allocated.
//!
//! ## Non-goals
//!
//! * This module does not attempt recovery or input correction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Broad category of an [`FdError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Shape, length or grid problems with the caller's arrays.
    InvalidInput,

    /// Spacing that is non-zero but flagged as too small to trust.
    NumericDegeneracy,

    /// Invalid builder configuration.
    Configuration,
}

/// Errors produced while configuring or running a differentiation.
#[derive(Debug, Clone, PartialEq)]
pub enum FdError {
    /// Grid and sample arrays have different lengths.
    MismatchedInputs {
        /// Number of grid nodes.
        x_len: usize,
        /// Number of function samples.
        f_len: usize,
    },

    /// Fewer nodes than the three-point stencils need.
    TooFewPoints {
        /// Number of nodes supplied.
        got: usize,
        /// Minimum number of nodes required.
        min: usize,
    },

    /// Two nodes used by the same stencil share a coordinate.
    ZeroSpacing {
        /// Index of the first coinciding node.
        left: usize,
        /// Index of the second coinciding node.
        right: usize,
    },

    /// The grid changes direction (strict monotonicity policy only).
    NonMonotonicGrid {
        /// Index of the node where the direction reverses.
        index: usize,
    },

    /// NaN or infinite value in the inputs.
    InvalidNumericValue(String),

    /// Spacing below the configured tolerance under the `Reject` policy.
    DegenerateSpacing {
        /// Index `i` of the interval between node `i` and `i + 1`.
        index: usize,
        /// Offending spacing `x[i + 1] - x[i]`.
        spacing: f64,
    },

    /// Spacing tolerance is not finite or not positive.
    InvalidTolerance(f64),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl FdError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FdError::MismatchedInputs { .. }
            | FdError::TooFewPoints { .. }
            | FdError::ZeroSpacing { .. }
            | FdError::NonMonotonicGrid { .. }
            | FdError::InvalidNumericValue(_) => ErrorKind::InvalidInput,
            FdError::DegenerateSpacing { .. } => ErrorKind::NumericDegeneracy,
            FdError::InvalidTolerance(_) | FdError::DuplicateParameter { .. } => {
                ErrorKind::Configuration
            }
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

impl fmt::Display for FdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FdError::MismatchedInputs { x_len, f_len } => {
                write!(f, "Length mismatch: x has {} points, f has {}", x_len, f_len)
            }
            FdError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            FdError::ZeroSpacing { left, right } => write!(
                f,
                "Zero spacing: x[{}] and x[{}] coincide",
                left, right
            ),
            FdError::NonMonotonicGrid { index } => write!(
                f,
                "Non-monotonic grid: direction reverses at x[{}]",
                index
            ),
            FdError::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            FdError::DegenerateSpacing { index, spacing } => write!(
                f,
                "Degenerate spacing: x[{}]..x[{}] = {} is below tolerance",
                index,
                index + 1,
                spacing
            ),
            FdError::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", tol)
            }
            FdError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FdError {}
