//! Tri-state classification of net balances.
//!
//! A pure, total function of a net amount and an epsilon tolerance. The
//! epsilon absorbs residual decimal noise introduced at the lossy float
//! import boundary; exact pipelines produce exact zeros anyway.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use splitra_shared::{MoneyAmount, PersonId};

use super::aggregate::BalanceSheet;

/// What a net balance means for the user.
///
/// Non-`Settled` classifications drive reminder eligibility in the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "amount", rename_all = "snake_case")]
pub enum BalanceClassification {
    /// Others owe the user this amount.
    OwedToUser(MoneyAmount),
    /// The user owes others this amount (always positive).
    OwedByUser(MoneyAmount),
    /// Even, within tolerance.
    Settled,
}

/// Balance classification entry points.
pub struct BalanceClassifier;

impl BalanceClassifier {
    /// Default tolerance: 0.001 currency units.
    #[must_use]
    pub fn default_epsilon() -> MoneyAmount {
        MoneyAmount::from_minor_units(1, 3)
    }

    /// Classifies a net balance against an epsilon tolerance.
    #[must_use]
    pub fn classify(net: MoneyAmount, epsilon: MoneyAmount) -> BalanceClassification {
        let tolerance = epsilon.abs();
        if net > tolerance {
            BalanceClassification::OwedToUser(net)
        } else if net < -tolerance {
            BalanceClassification::OwedByUser(net.abs())
        } else {
            BalanceClassification::Settled
        }
    }

    /// Classifies a net balance with the default epsilon.
    #[must_use]
    pub fn classify_default(net: MoneyAmount) -> BalanceClassification {
        Self::classify(net, Self::default_epsilon())
    }

    /// Classifies every outstanding balance on a sheet.
    #[must_use]
    pub fn classify_outstanding(
        sheet: &BalanceSheet,
        epsilon: MoneyAmount,
    ) -> HashMap<PersonId, BalanceClassification> {
        sheet
            .outstanding
            .iter()
            .map(|(person_id, balance)| (*person_id, Self::classify(balance.net(), epsilon)))
            .collect()
    }
}
