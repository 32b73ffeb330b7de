//! Layer 4: Adapters
//!
//! # Purpose
//!
//! Execution adapters that connect the public builder to the engine.
//! Differentiation of an in-memory grid is a single batch pass.

/// Batch (whole-array) adapter.
pub mod batch;
