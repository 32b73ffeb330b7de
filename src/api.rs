//! High-level API for finite-difference differentiation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the
//! [`fd2`] function for the common case, and a fluent builder for
//! configuring grid checks, the spacing screen and parallel execution.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to an adapter builder.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Fd2Builder`] via `Fd2::new()`.
//! 2. Chain configuration methods (`.spacing_tolerance()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)`.
//! 4. Call `.build()` and then `.differentiate(&x, &f)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use num_traits::Float;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchFd2, BatchFd2Builder};
pub use crate::algorithms::centered::centered_fd2;
pub use crate::engine::executor::{DegeneracyPolicy, GridPolicy};
pub use crate::engine::output::DerivativeResult;
pub use crate::evaluation::accuracy::{
    ErrorNorms, agrees_within, normalized_reduction, observed_order,
};
pub use crate::math::boundary::one_sided_fd2;
pub use crate::math::spacing::GridDirection;
pub use crate::primitives::errors::{ErrorKind, FdError};
pub use crate::primitives::window::{Edge, StencilWindow};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

/// Second-order derivative of `f` with respect to `x`.
///
/// Uses the default configuration: any grid order, no spacing screen,
/// sequential execution.
///
/// # Errors
///
/// Returns [`FdError`] when the lengths differ, fewer than three nodes are
/// given, a value is not finite, or two stencil nodes coincide.
pub fn fd2<T: Float + Debug + Send + Sync>(x: &[T], f: &[T]) -> Result<Vec<T>, FdError> {
    Fd2Builder::new()
        .adapter(Batch)
        .build()?
        .differentiate(x, f)
        .map(DerivativeResult::into_derivative)
}

/// Fluent builder for configuring differentiation.
#[derive(Debug, Clone)]
pub struct Fd2Builder<T> {
    /// Grid ordering requirement (default: AnyOrder).
    pub grid_policy: Option<GridPolicy>,

    /// Relative spacing tolerance (default: none).
    pub spacing_tolerance: Option<T>,

    /// Handling of flagged spacing (default: Ignore).
    pub degeneracy_policy: Option<DegeneracyPolicy>,

    /// Parallel execution of the interior pass (default: false).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for Fd2Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Fd2Builder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: Fd2Adapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            grid_policy: None,
            spacing_tolerance: None,
            degeneracy_policy: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the grid ordering requirement.
    pub fn grid_policy(mut self, policy: GridPolicy) -> Self {
        if self.grid_policy.is_some() {
            self.duplicate_param = Some("grid_policy");
        }
        self.grid_policy = Some(policy);
        self
    }

    /// Require a strictly increasing or strictly decreasing grid.
    pub fn strictly_monotonic(self) -> Self {
        self.grid_policy(GridPolicy::StrictlyMonotonic)
    }

    /// Set the relative spacing tolerance.
    ///
    /// A spacing `|x[i+1] - x[i]|` at or below `tolerance * (max(x) - min(x))`
    /// is flagged and handled by the degeneracy policy.
    pub fn spacing_tolerance(mut self, tolerance: T) -> Self {
        if self.spacing_tolerance.is_some() {
            self.duplicate_param = Some("spacing_tolerance");
        }
        self.spacing_tolerance = Some(tolerance);
        self
    }

    /// Set the handling of flagged spacing.
    pub fn degeneracy_policy(mut self, policy: DegeneracyPolicy) -> Self {
        if self.degeneracy_policy.is_some() {
            self.duplicate_param = Some("degeneracy_policy");
        }
        self.degeneracy_policy = Some(policy);
        self
    }

    /// Evaluate the interior pass in parallel (requires the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait Fd2Adapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`Fd2Builder`] into a specialized execution builder.
    fn convert(builder: Fd2Builder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> Fd2Adapter<T> for Batch {
    type Output = BatchFd2Builder<T>;

    fn convert(builder: Fd2Builder<T>) -> Self::Output {
        let mut result = BatchFd2Builder::default();

        if let Some(gp) = builder.grid_policy {
            result.grid_policy = gp;
        }
        if let Some(tol) = builder.spacing_tolerance {
            result.spacing_tolerance = Some(tol);
        }
        if let Some(dp) = builder.degeneracy_policy {
            result.degeneracy_policy = dp;
        }
        if let Some(p) = builder.parallel {
            result.parallel = p;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
