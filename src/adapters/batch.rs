//! Batch adapter for finite-difference differentiation.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes a complete
//! grid and sample array held in memory, validates them, and hands them to
//! the execution engine in a single pass.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire grid in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built [`BatchFd2`] borrows its inputs and can be
//!   called any number of times; it holds no state between calls.
//!
//! ## Key concepts
//!
//! * **Batch Processing**: Validates, screens, and executes in one call.
//!
//! ## Invariants
//!
//! * Input arrays x and f must have the same length.
//! * All values must be finite.
//! * At least 3 nodes are required.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not sort or regrid the input.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{DegeneracyPolicy, Fd2Config, Fd2Executor, GridPolicy};
use crate::engine::output::DerivativeResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::FdError;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch differentiator.
#[derive(Debug, Clone)]
pub struct BatchFd2Builder<T> {
    /// Ordering requirement on the grid.
    pub grid_policy: GridPolicy,

    /// Relative spacing tolerance.
    pub spacing_tolerance: Option<T>,

    /// Handling of spacing under the tolerance.
    pub degeneracy_policy: DegeneracyPolicy,

    /// Parallel execution of the interior pass.
    pub parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchFd2Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchFd2Builder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            grid_policy: GridPolicy::default(),
            spacing_tolerance: None,
            degeneracy_policy: DegeneracyPolicy::default(),
            parallel: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the grid ordering requirement.
    pub fn grid_policy(mut self, policy: GridPolicy) -> Self {
        self.grid_policy = policy;
        self
    }

    /// Set the relative spacing tolerance.
    pub fn spacing_tolerance(mut self, tolerance: T) -> Self {
        self.spacing_tolerance = Some(tolerance);
        self
    }

    /// Set the handling of spacing under the tolerance.
    pub fn degeneracy_policy(mut self, policy: DegeneracyPolicy) -> Self {
        self.degeneracy_policy = policy;
        self
    }

    /// Evaluate the interior pass in parallel.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch differentiator.
    pub fn build(self) -> Result<BatchFd2<T>, FdError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate spacing tolerance
        if let Some(tol) = self.spacing_tolerance {
            Validator::validate_tolerance(tol)?;
        }

        Ok(BatchFd2 {
            config: Fd2Config {
                grid_policy: self.grid_policy,
                spacing_tolerance: self.spacing_tolerance,
                degeneracy_policy: self.degeneracy_policy,
                parallel: self.parallel,
            },
        })
    }
}

// ============================================================================
// Batch Differentiator
// ============================================================================

/// Batch second-order differentiator.
#[derive(Debug, Clone, Copy)]
pub struct BatchFd2<T> {
    config: Fd2Config<T>,
}

impl<T: Float + Debug + Send + Sync> BatchFd2<T> {
    /// Differentiate `f` with respect to `x`.
    pub fn differentiate(&self, x: &[T], f: &[T]) -> Result<DerivativeResult<T>, FdError> {
        Validator::validate_inputs(x, f)?;
        Validator::validate_spacing(x)?;
        if self.config.grid_policy == GridPolicy::StrictlyMonotonic {
            Validator::validate_monotonic(x)?;
        }

        Fd2Executor::run(x, f, &self.config)
    }

    /// Resolved configuration.
    pub fn config(&self) -> &Fd2Config<T> {
        &self.config
    }
}
