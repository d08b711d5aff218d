//! Shared types and errors for Splitra.
//!
//! This crate provides the common value types used across all other crates:
//! - Exact decimal money type (`MoneyAmount`) with rounding and formatting
//! - Currency codes and display-format configuration
//! - Typed IDs for type-safe entity references
//! - Money-level error types

pub mod error;
pub mod types;

pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, CurrencyFormat, GroupId, MoneyAmount, PersonId, RecordId, RoundingMode};
