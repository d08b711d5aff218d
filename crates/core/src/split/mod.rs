//! Per-participant share computation.
//!
//! This module implements the split engine:
//! - Split methods (equal, percentage, fixed, weighted shares)
//! - Share computation with the exact-sum guarantee
//! - Error types for split validation

pub mod engine;
pub mod error;
pub mod method;

#[cfg(test)]
mod props;

pub use engine::SplitEngine;
pub use error::SplitError;
pub use method::SplitMethod;
