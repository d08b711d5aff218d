//! Split methods for dividing an expense between participants.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitra_shared::{MoneyAmount, PersonId};

/// How an expense total is divided between its participants.
///
/// Replaces the source app's string-keyed method branching ("Equally",
/// "By Percentage", ...) with a tagged sum type so the engine can match
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "shares", rename_all = "snake_case")]
pub enum SplitMethod {
    /// Every participant owes the same share, up to one minor unit.
    Equal,
    /// Each participant owes a percentage of the total. Percentages must be
    /// non-negative and sum to exactly 100.
    Percentage(BTreeMap<PersonId, Decimal>),
    /// Shares are given directly and must sum to the total exactly.
    Fixed(BTreeMap<PersonId, MoneyAmount>),
    /// Each participant owes in proportion to a weight (e.g. 2 shares of a
    /// vacation house vs 1). Weights must be non-negative with a positive sum.
    Shares(BTreeMap<PersonId, Decimal>),
}

impl SplitMethod {
    /// Stable name for logging and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Percentage(_) => "percentage",
            Self::Fixed(_) => "fixed",
            Self::Shares(_) => "shares",
        }
    }
}
