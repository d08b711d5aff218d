//! Split error types for validation and computation failures.

use rust_decimal::Decimal;
use splitra_shared::{MoneyAmount, MoneyError, PersonId};
use thiserror::Error;

/// Errors that can occur while validating or computing a split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    // ========== Participant Errors ==========
    /// A split needs at least one participant.
    #[error("Participant set is empty")]
    EmptyParticipantSet,

    /// The same participant appears twice in the participant set.
    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(PersonId),

    // ========== Method-Map Coverage Errors ==========
    /// The split method has no entry for a participant.
    #[error("No share entry for participant {0}")]
    MissingShare(PersonId),

    /// The split method has an entry for someone outside the participant set.
    #[error("Share entry for {0} does not match any participant")]
    UnknownParticipant(PersonId),

    // ========== Method-Value Errors ==========
    /// A percentage entry is negative.
    #[error("Percentage for participant {participant} must not be negative, got {percent}")]
    InvalidPercent {
        /// The participant with the offending entry.
        participant: PersonId,
        /// The offending percentage.
        percent: Decimal,
    },

    /// Percentages do not sum to 100.
    #[error("Percentages must sum to 100, got {actual}")]
    InvalidPercentTotal {
        /// The actual percentage sum.
        actual: Decimal,
    },

    /// A weight entry is negative.
    #[error("Weight for participant {participant} must not be negative, got {weight}")]
    InvalidWeight {
        /// The participant with the offending entry.
        participant: PersonId,
        /// The offending weight.
        weight: Decimal,
    },

    /// Fixed shares do not sum to the record total.
    #[error("Fixed shares sum to {actual}, expected {expected}")]
    SplitMismatch {
        /// The record total the shares must reach.
        expected: MoneyAmount,
        /// The sum the shares actually reached.
        actual: MoneyAmount,
    },

    // ========== Money Errors ==========
    /// Underlying money arithmetic failed (e.g. an all-zero weight sum
    /// divides by zero).
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl SplitError {
    /// Returns the error code for presentation-layer messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyParticipantSet => "EMPTY_PARTICIPANT_SET",
            Self::DuplicateParticipant(_) => "DUPLICATE_PARTICIPANT",
            Self::MissingShare(_) => "MISSING_SHARE",
            Self::UnknownParticipant(_) => "UNKNOWN_PARTICIPANT",
            Self::InvalidPercent { .. } => "INVALID_PERCENT",
            Self::InvalidPercentTotal { .. } => "INVALID_PERCENT_TOTAL",
            Self::InvalidWeight { .. } => "INVALID_WEIGHT",
            Self::SplitMismatch { .. } => "SPLIT_MISMATCH",
            Self::Money(err) => err.error_code(),
        }
    }
}
