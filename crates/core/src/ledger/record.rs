//! Canonical expense record shape.
//!
//! The app's expense-like entities (plain transactions, group expenses,
//! split bills, shared subscriptions) are translated into this one shape
//! before they enter the ledger. Participant order is captured once at
//! creation and stays stable so remainder distribution is reproducible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use splitra_shared::{MoneyAmount, PersonId, RecordId};

use crate::split::{SplitEngine, SplitError, SplitMethod};

/// The app entity a record was translated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// A plain one-off transaction.
    Transaction,
    /// An expense inside a standing group.
    GroupExpense,
    /// An ad-hoc split bill.
    SplitBill,
    /// A recurring shared subscription charge.
    SharedSubscription,
}

/// A validated shared-expense record.
///
/// The payer is credited the full total; every participant (payer included,
/// if present in the participant set) is debited their computed share.
/// Records are immutable: edits go through [`ExpenseRecord::revised`], which
/// produces a new logical version instead of mutating history. Only the
/// `settled` flag toggles in place, independent of amounts and participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    id: RecordId,
    source: RecordSource,
    total_amount: MoneyAmount,
    payer_id: PersonId,
    participant_ids: Vec<PersonId>,
    split_method: SplitMethod,
    timestamp: DateTime<Utc>,
    settled: bool,
    version: i64,
    description: Option<String>,
}

impl ExpenseRecord {
    /// Creates a new record, validating participants against the split
    /// method.
    ///
    /// # Errors
    ///
    /// Fails when the participant set is empty or has duplicates, or the
    /// method's map does not cover it exactly.
    pub fn new(
        source: RecordSource,
        total_amount: MoneyAmount,
        payer_id: PersonId,
        participant_ids: Vec<PersonId>,
        split_method: SplitMethod,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, SplitError> {
        SplitEngine::validate(&participant_ids, &split_method)?;
        Ok(Self {
            id: RecordId::new(),
            source,
            total_amount,
            payer_id,
            participant_ids,
            split_method,
            timestamp,
            settled: false,
            version: 1,
            description: None,
        })
    }

    /// Produces a new logical version of this record with an edited split.
    ///
    /// The record id is kept so history stays linked; the version counter
    /// increments. The settled flag carries over unchanged.
    ///
    /// # Errors
    ///
    /// Same validation as [`ExpenseRecord::new`].
    pub fn revised(
        &self,
        total_amount: MoneyAmount,
        participant_ids: Vec<PersonId>,
        split_method: SplitMethod,
    ) -> Result<Self, SplitError> {
        SplitEngine::validate(&participant_ids, &split_method)?;
        Ok(Self {
            total_amount,
            participant_ids,
            split_method,
            version: self.version + 1,
            description: self.description.clone(),
            ..*self
        })
    }

    /// Returns a copy with the settled flag set.
    ///
    /// Settling removes the record from outstanding balances while its
    /// amounts keep counting toward historical gross totals.
    #[must_use]
    pub fn with_settled(mut self, settled: bool) -> Self {
        self.settled = settled;
        self
    }

    /// Attaches a free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Computes this record's per-participant shares at the given scale.
    ///
    /// # Errors
    ///
    /// Propagates split computation failures (e.g. a fixed-share mismatch).
    pub fn compute_shares(&self, scale: u32) -> Result<Vec<(PersonId, MoneyAmount)>, SplitError> {
        SplitEngine::compute_shares(
            self.total_amount,
            &self.participant_ids,
            &self.split_method,
            scale,
        )
    }

    /// The record id, stable across revisions.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// The app entity this record was translated from.
    #[must_use]
    pub const fn source(&self) -> RecordSource {
        self.source
    }

    /// The full amount the payer put down.
    #[must_use]
    pub const fn total_amount(&self) -> MoneyAmount {
        self.total_amount
    }

    /// Who paid.
    #[must_use]
    pub const fn payer_id(&self) -> PersonId {
        self.payer_id
    }

    /// The participants, in creation order.
    #[must_use]
    pub fn participants(&self) -> &[PersonId] {
        &self.participant_ids
    }

    /// How the total is divided.
    #[must_use]
    pub const fn split_method(&self) -> &SplitMethod {
        &self.split_method
    }

    /// When the expense happened.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether the record has been settled.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// The logical version, starting at 1.
    #[must_use]
    pub const fn version(&self) -> i64 {
        self.version
    }

    /// Optional free-form description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn money(s: &str) -> MoneyAmount {
        s.parse().unwrap()
    }

    fn record(total: &str, payer: PersonId, participants: Vec<PersonId>) -> ExpenseRecord {
        ExpenseRecord::new(
            RecordSource::SplitBill,
            money(total),
            payer,
            participants,
            SplitMethod::Equal,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_record_defaults() {
        let payer = PersonId::new();
        let record = record("30", payer, vec![payer, PersonId::new()]);

        assert_eq!(record.version(), 1);
        assert!(!record.is_settled());
        assert_eq!(record.description(), None);
        assert_eq!(record.source(), RecordSource::SplitBill);
    }

    #[test]
    fn test_new_rejects_empty_participants() {
        let result = ExpenseRecord::new(
            RecordSource::Transaction,
            money("10"),
            PersonId::new(),
            vec![],
            SplitMethod::Equal,
            Utc::now(),
        );
        assert_eq!(result.unwrap_err(), SplitError::EmptyParticipantSet);
    }

    #[test]
    fn test_new_rejects_duplicate_participants() {
        let person = PersonId::new();
        let result = ExpenseRecord::new(
            RecordSource::Transaction,
            money("10"),
            person,
            vec![person, person],
            SplitMethod::Equal,
            Utc::now(),
        );
        assert_eq!(result.unwrap_err(), SplitError::DuplicateParticipant(person));
    }

    #[test]
    fn test_new_rejects_uncovered_method_map() {
        let payer = PersonId::new();
        let other = PersonId::new();
        let method = SplitMethod::Percentage(BTreeMap::from([(payer, "100".parse().unwrap())]));
        let result = ExpenseRecord::new(
            RecordSource::GroupExpense,
            money("10"),
            payer,
            vec![payer, other],
            method,
            Utc::now(),
        );
        assert_eq!(result.unwrap_err(), SplitError::MissingShare(other));
    }

    #[test]
    fn test_revised_bumps_version_and_keeps_id() {
        let payer = PersonId::new();
        let other = PersonId::new();
        let original = record("30", payer, vec![payer, other]);

        let revised = original
            .revised(money("45"), vec![payer, other], SplitMethod::Equal)
            .unwrap();

        assert_eq!(revised.id(), original.id());
        assert_eq!(revised.version(), 2);
        assert_eq!(revised.total_amount(), money("45"));
        assert_eq!(original.total_amount(), money("30"));
    }

    #[test]
    fn test_settled_toggles_independently() {
        let payer = PersonId::new();
        let original = record("30", payer, vec![payer, PersonId::new()]);
        let settled = original.clone().with_settled(true);

        assert!(settled.is_settled());
        assert_eq!(settled.version(), original.version());
        assert_eq!(settled.total_amount(), original.total_amount());
    }

    #[test]
    fn test_compute_shares_convenience() {
        let payer = PersonId::new();
        let other = PersonId::new();
        let record = record("30", payer, vec![payer, other]);

        let shares = record.compute_shares(2).unwrap();
        assert_eq!(shares, vec![(payer, money("15")), (other, money("15"))]);
    }

    #[test]
    fn test_participant_order_is_stable() {
        let people: Vec<PersonId> = (0..5).map(|_| PersonId::new()).collect();
        let record = record("10", people[0], people.clone());
        assert_eq!(record.participants(), people.as_slice());
    }
}
