//! Ledger error types.

use splitra_shared::RecordId;
use thiserror::Error;

use crate::split::SplitError;

/// Errors that can occur during balance aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A record's split computation failed, aborting the whole batch.
    ///
    /// Aggregation is atomic by default: a silently wrong balance is worse
    /// than a visible failure. Callers that prefer degradation use
    /// [`crate::ledger::BalanceAggregator::aggregate_partial`] instead.
    #[error("Failed to aggregate record {record_id}: {cause}")]
    AggregationFailure {
        /// The record whose split failed.
        record_id: RecordId,
        /// The underlying split failure.
        #[source]
        cause: SplitError,
    },
}

impl LedgerError {
    /// Returns the error code for presentation-layer messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AggregationFailure { .. } => "AGGREGATION_FAILURE",
        }
    }
}
