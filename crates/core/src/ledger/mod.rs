//! Expense records and balance derivations.
//!
//! This module implements the ledger functionality:
//! - The canonical expense record shape and its lifecycle
//! - Balance aggregation (outstanding and historical sheets)
//! - Tri-state balance classification
//! - Settlement transfer suggestions
//! - An optional cached aggregation entry point
//! - Error types for ledger operations

pub mod aggregate;
pub mod cache;
pub mod classify;
pub mod error;
pub mod record;
pub mod settle;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::{BalanceAggregator, BalanceSheet, PartialBalances, PersonBalance};
pub use cache::BalanceCache;
pub use classify::{BalanceClassification, BalanceClassifier};
pub use error::LedgerError;
pub use record::{ExpenseRecord, RecordSource};
pub use settle::{SettlementPlanner, Transfer};
