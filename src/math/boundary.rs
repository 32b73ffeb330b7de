//! One-sided boundary stencil.
//!
//! ## Purpose
//!
//! The centered stencil needs a neighbour on each side, which the first and
//! last grid nodes lack. This module provides the second-order one-sided
//! stencil used there instead.
//!
//! ## Design notes
//!
//! * **Mirrored indexing**: The right edge reuses the left-edge formula on a
//!   [`StencilWindow`] whose local order is mirrored. The scalar result is
//!   attributed to the physical edge node unchanged.
//! * **Allocation-free**: Works on a copied three-point window.
//!
//! ## Key concepts
//!
//! For a window `(x0, x1, x2)`, `(f0, f1, f2)` with `x0` the boundary:
//!
//! ```text
//! dx10 = x1 - x0,  dx20 = x2 - x0,  dx21 = x2 - x1
//!
//!          dx20² f1 - dx10² f2 + (dx10² - dx20²) f0
//! f'(x0) ≈ ----------------------------------------
//!                   dx10 · dx20 · dx21
//! ```
//!
//! This is the derivative at `x0` of the quadratic through the three
//! points, so it is exact for polynomials of degree two or less.
//!
//! ## Invariants
//!
//! * The three window coordinates are pairwise distinct (checked upstream).
//!
//! ## Non-goals
//!
//! * This module does not pad or extrapolate the data beyond its edges.

use num_traits::Float;

use crate::primitives::window::{Edge, StencilWindow};

/// Second-order one-sided derivative at local position 0 of `window`.
#[inline]
pub fn one_sided_fd2<T: Float>(window: &StencilWindow<T>) -> T {
    let [x0, x1, x2] = window.x;
    let [f0, f1, f2] = window.f;

    let dx20 = x2 - x0;
    let dx10 = x1 - x0;
    let dx21 = x2 - x1;

    let dx10_sq = dx10 * dx10;
    let dx20_sq = dx20 * dx20;

    let num = dx20_sq * f1 - dx10_sq * f2 + (dx10_sq - dx20_sq) * f0;
    let den = dx10 * dx20 * dx21;

    num / den
}

/// One-sided derivative at the requested grid edge.
///
/// Both slices must hold at least three elements.
#[inline]
pub fn edge_derivative<T: Float>(edge: Edge, x: &[T], f: &[T]) -> T {
    one_sided_fd2(&StencilWindow::at(edge, x, f))
}
