//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Fundamental data structures shared by every other layer:
//! - The crate error type and its categories
//! - The three-point stencil window used at the grid edges
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
//! Layer 1: Math / Primitives ← You are here
//! ```

/// Error type and error categories.
pub mod errors;

/// Three-point stencil windows.
pub mod window;
