//! # findiff-rs: Second-Order Finite Differences on Non-Uniform Grids
//!
//! Numerical first derivatives of sampled 1D functions, for grids whose
//! spacing need not be constant.
//!
//! ## What does it compute?
//!
//! Given node coordinates `x[0..n]` and samples `f[0..n]`, the crate returns
//! an estimate of `df/dx` at every node:
//!
//! - **Interior nodes** use the three-point centered stencil built from the
//!   quadratic through `x[i-1]`, `x[i]`, `x[i+1]`.
//! - **Edge nodes** use a three-point one-sided stencil: nodes `(0, 1, 2)` at
//!   the left edge and `(n-1, n-2, n-3)` at the right edge.
//!
//! Both stencils are second-order accurate: halving the spacing quarters the
//! truncation error. Both are exact for polynomials of degree two or less,
//! whatever the spacing.
//!
//! ```text
//!  one-sided        centered           centered        one-sided
//!     ●───────●───────●  ...  ●───────●───────●───────●
//!    x0      x1      x2     x[i-1]   x[i]   x[i+1]   x[n-1]
//! ```
//!
//! With uniform spacing `h` the interior stencil reduces to the classic
//! `(f[i+1] - f[i-1]) / 2h`.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use findiff_rs::prelude::*;
//!
//! let x = vec![0.0, 0.5, 1.5, 3.0];
//! let f: Vec<f64> = x.iter().map(|v| v * v).collect();
//!
//! let dfdx = fd2(&x, &f)?;
//!
//! for (d, xi) in dfdx.iter().zip(&x) {
//!     assert!((d - 2.0 * xi).abs() < 1e-12);
//! }
//! # Result::<(), FdError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use findiff_rs::prelude::*;
//!
//! let x = vec![0.0, 0.1, 0.25, 0.45, 0.7, 1.0];
//! let f: Vec<f64> = x.iter().map(|v| 3.0 * v + 1.0).collect();
//!
//! let model = Fd2::new()
//!     .strictly_monotonic()          // Reject grids that change direction
//!     .spacing_tolerance(1e-9)       // Flag spacing below 1e-9 of the extent
//!     .degeneracy_policy(Warn)       // Emit a tracing warning when flagged
//!     .parallel(false)               // Interior pass on the calling thread
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.differentiate(&x, &f)?;
//! assert!(result.dfdx.iter().all(|d| (d - 3.0).abs() < 1e-12));
//! println!("{}", result);
//! # Result::<(), FdError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 6
//!   Grid: Increasing
//!   Degenerate intervals: 0
//!
//! Derivative:
//!              X          dF/dX
//!   ---------------------------
//!       0.000000       3.000000
//!       0.100000       3.000000
//!       0.250000       3.000000
//!       0.450000       3.000000
//!       0.700000       3.000000
//!       1.000000       3.000000
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, FdError>`. Errors are raised before
//! any output is allocated, so a failed call never yields a partial result.
//! [`FdError::kind`](prelude::FdError::kind) separates shape problems from
//! degenerate grids:
//!
//! ```rust
//! use findiff_rs::prelude::*;
//!
//! let err = fd2(&[0.0, 1.0, 2.0], &[1.0, 2.0]).unwrap_err();
//! assert_eq!(err, FdError::MismatchedInputs { x_len: 3, f_len: 2 });
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//!
//! let err = fd2(&[0.0, 1.0], &[1.0, 2.0]).unwrap_err();
//! assert_eq!(err, FdError::TooFewPoints { got: 2, min: 3 });
//!
//! let err = fd2(&[0.0, 1.0, 1.0, 2.0], &[0.0; 4]).unwrap_err();
//! assert_eq!(err, FdError::ZeroSpacing { left: 1, right: 2 });
//! ```
//!
//! ## Parameters
//!
//! | Parameter             | Default     | Options                              | Description                                  |
//! |-----------------------|-------------|--------------------------------------|----------------------------------------------|
//! | **grid_policy**       | `AnyOrder`  | `AnyOrder`, `StrictlyMonotonic`      | Ordering requirement on the grid            |
//! | **spacing_tolerance** | None        | (0, ∞)                               | Relative threshold for near-zero spacing     |
//! | **degeneracy_policy** | `Ignore`    | `Ignore`, `Warn`, `Reject`           | Handling of spacing under the threshold      |
//! | **parallel**          | false       | true/false                           | Rayon interior pass (`parallel` feature)     |
//!
//! Each parameter may be set once; setting one twice makes `build()` fail
//! with `FdError::DuplicateParameter`.
//!
//! ### Near-Zero Spacing
//!
//! Only *exactly* coinciding nodes are an error by default. Nodes that are
//! extremely close yield large, inaccurate derivatives but are otherwise
//! processed unchanged. Setting a `spacing_tolerance` lets the caller see
//! (`Ignore`), log (`Warn`) or refuse (`Reject`) such intervals; the
//! stencils themselves are never altered.
//!
//! The stencils square the spacing, so coordinates or spacings above about
//! `1e154` (for `f64`) overflow and return non-finite derivatives without an
//! error, even though every input is finite. Rescale such grids first.
//!
//! ```rust
//! use findiff_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 1.0 + 1e-12, 2.0];
//! let f = vec![0.0, 1.0, 1.0, 2.0];
//!
//! let err = Fd2::new()
//!     .spacing_tolerance(1e-9)
//!     .degeneracy_policy(Reject)
//!     .adapter(Batch)
//!     .build()?
//!     .differentiate(&x, &f)
//!     .unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::NumericDegeneracy);
//! # Result::<(), FdError>::Ok(())
//! ```
//!
//! ### Parallel Execution
//!
//! With the `parallel` cargo feature, `.parallel(true)` evaluates interior
//! nodes with rayon. Each node runs the same scalar code as the sequential
//! pass, so both modes return identical bits.
//!
//! ## Measuring Accuracy
//!
//! The evaluation helpers compare an estimate with a known derivative:
//!
//! ```rust
//! use findiff_rs::prelude::*;
//! use std::f64::consts::PI;
//!
//! let max_error = |n: usize| -> f64 {
//!     let x: Vec<f64> = (0..n).map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64).collect();
//!     let f: Vec<f64> = x.iter().map(|v| (PI * v).cos()).collect();
//!     let exact: Vec<f64> = x.iter().map(|v| -PI * (PI * v).sin()).collect();
//!     let dfdx = fd2(&x, &f).unwrap();
//!     ErrorNorms::compute(&dfdx, &exact).unwrap().max_abs
//! };
//!
//! let order = observed_order(max_error(101), max_error(201), 2.0);
//! assert!((order - 2.0).abs() < 0.1);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! findiff-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Fornberg, B. (1988). "Generation of Finite Difference Formulas on Arbitrarily Spaced Grids"
//! - LeVeque, R. J. (2007). "Finite Difference Methods for Ordinary and Partial Differential Equations"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type and the three-point stencil window.
mod primitives;

// Layer 1: Math - pure mathematical functions.
//
// Contains grid spacing analysis and the one-sided boundary stencil.
mod math;

// Layer 2: Algorithms - core stencils.
//
// Contains the centered interior stencil and its sequential and
// parallel passes.
mod algorithms;

// Layer 2: Evaluation - accuracy measurement.
//
// Contains error norms, observed order of accuracy and parity checks.
mod evaluation;

// Layer 3: Engine - orchestration and execution control.
//
// Contains validation, the differentiation pass and result assembly.
mod engine;

// Layer 4: Adapters - execution mode adapters.
//
// Contains the batch adapter.
mod adapters;

// High-level fluent API.
//
// Provides the `Fd2` builder and the `fd2` function.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use findiff_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch,
        BatchFd2, BatchFd2Builder,
        DegeneracyPolicy,
        DegeneracyPolicy::{Ignore, Reject, Warn},
        DerivativeResult, Edge, ErrorKind, ErrorNorms, Fd2Builder as Fd2, FdError, GridDirection,
        GridPolicy,
        GridPolicy::{AnyOrder, StrictlyMonotonic},
        StencilWindow, agrees_within, centered_fd2, fd2, normalized_reduction, observed_order,
        one_sided_fd2,
    };
}

// ============================================================================
// Internal Modules (dev)
// ============================================================================

/// Internal modules for development and testing.
///
/// This module is only available with the `dev` feature enabled.
/// It exposes internal modules for testing and benchmarking purposes.
#[doc(hidden)]
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation helpers.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
