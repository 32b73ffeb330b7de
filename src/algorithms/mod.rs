//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! Core derivative stencils:
//! - The centered three-point stencil for interior nodes
//!
//! The one-sided edge stencil lives in `math::boundary`.

/// Centered stencil and interior pass.
pub mod centered;
