//! Layer 2: Evaluation
//!
//! # Purpose
//!
//! Post-processing of derivative estimates:
//! - Error norms against a reference derivative
//! - Observed order of accuracy under refinement
//! - Parity checks between two independent implementations

/// Error norms, convergence order and parity checks.
pub mod accuracy;
