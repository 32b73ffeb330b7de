//! Result container for a differentiation run.
//!
//! ## Purpose
//!
//! This module defines [`DerivativeResult`], the owned output of a
//! differentiation. It carries the derivative alongside a copy of the grid
//! and what was learned about the grid while computing it.
//!
//! ## Invariants
//!
//! * `x.len() == dfdx.len()` and both equal the input length.
//! * `degenerate_nodes` is `Some` only when a spacing tolerance was set.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::{self, Display, Formatter};
use num_traits::Float;

use crate::math::spacing::GridDirection;

/// Output of [`BatchFd2::differentiate`](crate::adapters::batch::BatchFd2::differentiate).
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeResult<T> {
    /// Grid coordinates, copied from the input.
    pub x: Vec<T>,

    /// Estimated first derivative at each node.
    pub dfdx: Vec<T>,

    /// Ordering of the grid.
    pub direction: GridDirection,

    /// Intervals `x[i]..x[i + 1]` flagged as near-degenerate.
    pub degenerate_nodes: Option<Vec<usize>>,
}

impl<T: Float> DerivativeResult<T> {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.dfdx.len()
    }

    /// Whether the result holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.dfdx.is_empty()
    }

    /// Whether any interval was flagged as near-degenerate.
    pub fn has_degenerate_spacing(&self) -> bool {
        self.degenerate_nodes
            .as_ref()
            .is_some_and(|nodes| !nodes.is_empty())
    }

    /// Consume the result and return only the derivative.
    pub fn into_derivative(self) -> Vec<T> {
        self.dfdx
    }
}

impl<T: Float + Display> Display for DerivativeResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Grid: {:?}", self.direction)?;
        if let Some(nodes) = &self.degenerate_nodes {
            writeln!(f, "  Degenerate intervals: {}", nodes.len())?;
        }
        writeln!(f)?;
        writeln!(f, "Derivative:")?;
        writeln!(f, "  {:>12} {:>14}", "X", "dF/dX")?;
        writeln!(f, "  ---------------------------")?;
        for (xi, di) in self.x.iter().zip(self.dfdx.iter()) {
            writeln!(f, "  {:>12.6} {:>14.6}", xi, di)?;
        }
        Ok(())
    }
}
