//! Three-point stencil windows for boundary differentiation.
//!
//! ## Purpose
//!
//! This module provides [`StencilWindow`], a fixed three-node view of the
//! grid used by the one-sided boundary stencil. A window stores its nodes in
//! *local* stencil order: position 0 is always the boundary node, position 1
//! the nearest interior neighbour and position 2 the far neighbour.
//!
//! ## Key concepts
//!
//! * **Leading window**: nodes `(0, 1, 2)` taken as they are.
//! * **Trailing window**: nodes `(n-1, n-2, n-3)`, i.e. the last three nodes
//!   relabeled so the right edge sits at local position 0. No array is
//!   reversed; only the indexing is mirrored.
//!
//! ## Invariants
//!
//! * A window is only built from slices with at least three elements.

use num_traits::Float;

/// Which edge of the grid a window belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// First node of the grid.
    Left,

    /// Last node of the grid.
    Right,
}

/// Three `(x, f)` pairs in local stencil order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StencilWindow<T> {
    /// Node coordinates; `x[0]` is the boundary node.
    pub x: [T; 3],

    /// Function samples aligned with `x`.
    pub f: [T; 3],
}

impl<T: Float> StencilWindow<T> {
    /// Build a window directly from local-order values.
    pub fn new(x: [T; 3], f: [T; 3]) -> Self {
        Self { x, f }
    }

    /// Window anchored at the left edge: nodes `(0, 1, 2)`.
    ///
    /// Both slices must hold at least three elements.
    #[inline]
    pub fn leading(x: &[T], f: &[T]) -> Self {
        Self {
            x: [x[0], x[1], x[2]],
            f: [f[0], f[1], f[2]],
        }
    }

    /// Window anchored at the right edge: nodes `(n-1, n-2, n-3)`.
    ///
    /// Both slices must hold at least three elements.
    #[inline]
    pub fn trailing(x: &[T], f: &[T]) -> Self {
        let n = x.len();
        Self {
            x: [x[n - 1], x[n - 2], x[n - 3]],
            f: [f[n - 1], f[n - 2], f[n - 3]],
        }
    }

    /// Window for the requested edge.
    #[inline]
    pub fn at(edge: Edge, x: &[T], f: &[T]) -> Self {
        match edge {
            Edge::Left => Self::leading(x, f),
            Edge::Right => Self::trailing(x, f),
        }
    }
}
