//! Layer 1: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Grid spacing analysis (direction, coinciding nodes, degeneracy)
//! - The one-sided boundary stencil
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms / Evaluation
//!   ↓
//! Layer 1: Math ← You are here
//! ```

/// Grid spacing analysis.
pub mod spacing;

/// One-sided stencil for the grid edges.
pub mod boundary;
