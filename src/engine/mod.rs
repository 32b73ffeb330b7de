//! Layer 3: Engine
//!
//! # Purpose
//!
//! Orchestration of a differentiation run:
//! - Input and configuration validation
//! - Spacing screen, edge stencils and interior pass
//! - Result assembly

/// Input and parameter validation.
pub mod validator;

/// Differentiation pass and policies.
pub mod executor;

/// Result container.
pub mod output;
