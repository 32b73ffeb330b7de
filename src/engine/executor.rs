//! Execution engine for finite-difference differentiation.
//!
//! ## Purpose
//!
//! This module runs a full second-order differentiation pass over a
//! validated grid: it screens the spacing against the configured tolerance,
//! evaluates the one-sided stencil at both edges and the centered stencil
//! at every interior node, and assembles the [`DerivativeResult`].
//!
//! ## Design notes
//!
//! * **Atomic**: Degeneracy screening happens before the output is
//!   allocated, so a rejected grid never yields a partial result.
//! * **Deterministic**: Sequential and parallel passes evaluate the same
//!   scalar stencil per node and produce identical bits.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Grid Policy**: Whether the grid must be strictly monotonic.
//! * **Degeneracy Policy**: What to do with spacing under the tolerance.
//!
//! ## Invariants
//!
//! * Inputs have equal length, at least three nodes, finite values and
//!   distinct stencil coordinates.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::centered::interior_pass;
#[cfg(feature = "parallel")]
use crate::algorithms::centered::interior_pass_parallel;
use crate::engine::output::DerivativeResult;
use crate::math::boundary::edge_derivative;
use crate::math::spacing::{GridDirection, degenerate_intervals};
use crate::primitives::errors::FdError;
use crate::primitives::window::Edge;

// ============================================================================
// Policies
// ============================================================================

/// Ordering requirement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridPolicy {
    /// Only coinciding stencil nodes are rejected.
    #[default]
    AnyOrder,

    /// The grid must be strictly increasing or strictly decreasing.
    StrictlyMonotonic,
}

/// Handling of spacing at or below the configured tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneracyPolicy {
    /// Record flagged intervals in the result.
    #[default]
    Ignore,

    /// Record flagged intervals and emit a warning event.
    Warn,

    /// Fail with [`FdError::DegenerateSpacing`] on the first flagged interval.
    Reject,
}

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one differentiation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fd2Config<T> {
    /// Ordering requirement on the grid.
    pub grid_policy: GridPolicy,

    /// Relative spacing tolerance; `None` disables the screen.
    pub spacing_tolerance: Option<T>,

    /// Handling of flagged spacing.
    pub degeneracy_policy: DegeneracyPolicy,

    /// Evaluate the interior pass in parallel.
    pub parallel: bool,
}

impl<T> Default for Fd2Config<T> {
    fn default() -> Self {
        Self {
            grid_policy: GridPolicy::default(),
            spacing_tolerance: None,
            degeneracy_policy: DegeneracyPolicy::default(),
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs second-order differentiation passes.
pub struct Fd2Executor;

impl Fd2Executor {
    /// Differentiate a validated grid.
    pub fn run<T>(x: &[T], f: &[T], config: &Fd2Config<T>) -> Result<DerivativeResult<T>, FdError>
    where
        T: Float + Debug + Send + Sync,
    {
        let degenerate_nodes = match config.spacing_tolerance {
            Some(tol) => Some(Self::screen_spacing(x, tol, config.degeneracy_policy)?),
            None => None,
        };

        tracing::debug!(
            target: "findiff::executor",
            n = x.len(),
            parallel = config.parallel,
            "running second-order pass"
        );

        let dfdx = Self::derivative(x, f, config.parallel);

        Ok(DerivativeResult {
            x: x.to_vec(),
            dfdx,
            direction: GridDirection::detect(x),
            degenerate_nodes,
        })
    }

    /// Compute the derivative vector for a validated grid.
    pub fn derivative<T>(x: &[T], f: &[T], parallel: bool) -> Vec<T>
    where
        T: Float + Send + Sync,
    {
        let n = x.len();
        let mut dfdx = vec![T::zero(); n];

        Self::interior(x, f, &mut dfdx, parallel);

        dfdx[0] = edge_derivative(Edge::Left, x, f);
        dfdx[n - 1] = edge_derivative(Edge::Right, x, f);

        dfdx
    }

    #[cfg(feature = "parallel")]
    fn interior<T: Float + Send + Sync>(x: &[T], f: &[T], out: &mut [T], parallel: bool) {
        if parallel {
            interior_pass_parallel(x, f, out);
        } else {
            interior_pass(x, f, out);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn interior<T: Float>(x: &[T], f: &[T], out: &mut [T], _parallel: bool) {
        interior_pass(x, f, out);
    }

    /// Apply the degeneracy policy and return the flagged intervals.
    fn screen_spacing<T: Float>(
        x: &[T],
        tol: T,
        policy: DegeneracyPolicy,
    ) -> Result<Vec<usize>, FdError> {
        let flagged = degenerate_intervals(x, tol);
        let spacing_at = |i: usize| (x[i + 1] - x[i]).to_f64().unwrap_or(f64::NAN);

        match policy {
            DegeneracyPolicy::Ignore => {}
            DegeneracyPolicy::Warn => {
                for &index in &flagged {
                    tracing::warn!(
                        target: "findiff::executor",
                        index,
                        spacing = spacing_at(index),
                        "near-degenerate grid spacing"
                    );
                }
            }
            DegeneracyPolicy::Reject => {
                if let Some(&index) = flagged.first() {
                    return Err(FdError::DegenerateSpacing {
                        index,
                        spacing: spacing_at(index),
                    });
                }
            }
        }

        Ok(flagged)
    }
}
