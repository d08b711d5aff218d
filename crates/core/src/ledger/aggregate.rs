//! Per-person balance aggregation.
//!
//! Folds expense records into per-person balances. Two derived quantities
//! come out of one pass and are never conflated:
//!
//! - `outstanding` - unsettled records only; feeds classification and
//!   reminder eligibility
//! - `historical` - every record; feeds gross-total views
//!
//! The fold is commutative over the record set: remainder distribution is
//! resolved entirely inside each record's own split, never across records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use splitra_shared::{CurrencyFormat, MoneyAmount, PersonId, RecordId};

use super::error::LedgerError;
use super::record::ExpenseRecord;
use crate::split::SplitError;

/// A person's aggregated position across a record set.
///
/// Purely derived - always recomputed from the full record set, never
/// mutated directly by collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBalance {
    /// The person this balance belongs to.
    pub person_id: PersonId,
    /// Sum of totals this person paid.
    pub gross_paid: MoneyAmount,
    /// Sum of shares this person owes.
    pub gross_owed: MoneyAmount,
}

impl PersonBalance {
    /// Creates an empty balance for a person.
    #[must_use]
    pub const fn new(person_id: PersonId) -> Self {
        Self {
            person_id,
            gross_paid: MoneyAmount::ZERO,
            gross_owed: MoneyAmount::ZERO,
        }
    }

    /// Net position: `gross_paid - gross_owed`.
    ///
    /// Positive means others owe this person; negative means this person
    /// owes others.
    #[must_use]
    pub fn net(&self) -> MoneyAmount {
        self.gross_paid - self.gross_owed
    }

    fn add_paid(&mut self, amount: MoneyAmount) {
        self.gross_paid += amount;
    }

    fn add_owed(&mut self, amount: MoneyAmount) {
        self.gross_owed += amount;
    }
}

/// Result of aggregating a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Balances over unsettled records only.
    pub outstanding: HashMap<PersonId, PersonBalance>,
    /// Balances over every record, settled included.
    pub historical: HashMap<PersonId, PersonBalance>,
}

impl BalanceSheet {
    /// Net outstanding position for a person (zero if unknown).
    #[must_use]
    pub fn outstanding_net(&self, person_id: PersonId) -> MoneyAmount {
        self.outstanding
            .get(&person_id)
            .map_or(MoneyAmount::ZERO, PersonBalance::net)
    }

    /// Historical balance for a person, if any record mentions them.
    #[must_use]
    pub fn historical_balance(&self, person_id: PersonId) -> Option<&PersonBalance> {
        self.historical.get(&person_id)
    }
}

/// Partial aggregation result: what could be computed, plus what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialBalances {
    /// Balances over the records that split successfully.
    pub sheet: BalanceSheet,
    /// Records that were skipped, with the reason.
    pub failures: Vec<(RecordId, SplitError)>,
}

/// Balance aggregation entry points.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Folds records into a balance sheet, atomically.
    ///
    /// The first record whose split computation fails aborts the whole
    /// batch: a silently wrong balance is worse than a visible failure.
    ///
    /// # Errors
    ///
    /// `AggregationFailure` naming the offending record and the split
    /// failure underneath.
    pub fn aggregate(
        records: &[ExpenseRecord],
        format: &CurrencyFormat,
    ) -> Result<BalanceSheet, LedgerError> {
        let mut sheet = BalanceSheet::default();
        for record in records {
            let shares = record.compute_shares(format.scale).map_err(|cause| {
                LedgerError::AggregationFailure {
                    record_id: record.id(),
                    cause,
                }
            })?;
            Self::apply(&mut sheet.historical, record, &shares);
            if !record.is_settled() {
                Self::apply(&mut sheet.outstanding, record, &shares);
            }
        }
        Ok(sheet)
    }

    /// Folds records into a balance sheet, skipping records that fail.
    ///
    /// Explicit opt-in degradation: failed record ids come back alongside
    /// the partial sheet so the caller can surface them.
    #[must_use]
    pub fn aggregate_partial(
        records: &[ExpenseRecord],
        format: &CurrencyFormat,
    ) -> PartialBalances {
        let mut sheet = BalanceSheet::default();
        let mut failures = Vec::new();
        for record in records {
            match record.compute_shares(format.scale) {
                Ok(shares) => {
                    Self::apply(&mut sheet.historical, record, &shares);
                    if !record.is_settled() {
                        Self::apply(&mut sheet.outstanding, record, &shares);
                    }
                }
                Err(cause) => {
                    tracing::warn!(
                        record_id = %record.id(),
                        error = %cause,
                        "skipping record in partial aggregation"
                    );
                    failures.push((record.id(), cause));
                }
            }
        }
        PartialBalances { sheet, failures }
    }

    /// Applies one record to a balance map: the payer is credited the full
    /// total, every participant is debited their share.
    fn apply(
        balances: &mut HashMap<PersonId, PersonBalance>,
        record: &ExpenseRecord,
        shares: &[(PersonId, MoneyAmount)],
    ) {
        balances
            .entry(record.payer_id())
            .or_insert_with(|| PersonBalance::new(record.payer_id()))
            .add_paid(record.total_amount());
        for (person, share) in shares {
            balances
                .entry(*person)
                .or_insert_with(|| PersonBalance::new(*person))
                .add_owed(*share);
        }
    }
}
