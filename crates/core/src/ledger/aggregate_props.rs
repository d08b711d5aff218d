//! Property-based tests for balance aggregation.
//!
//! - Order independence of the record fold
//! - Determinism of repeated aggregation
//! - Value conservation (nets sum to zero)
//! - Settled records only ever affect the historical sheet

use chrono::Utc;
use proptest::prelude::*;
use splitra_shared::{CurrencyFormat, MoneyAmount, PersonId};

use super::aggregate::BalanceAggregator;
use super::record::{ExpenseRecord, RecordSource};
use crate::split::SplitMethod;

const POOL_SIZE: usize = 6;

/// One synthetic record: (total minor units, payer index, participant
/// count, settled flag).
type RecordSpec = (i64, usize, usize, bool);

fn record_specs() -> impl Strategy<Value = Vec<RecordSpec>> {
    prop::collection::vec(
        (
            -1_000_000i64..1_000_000i64,
            0usize..POOL_SIZE,
            1usize..=POOL_SIZE,
            any::<bool>(),
        ),
        1..12,
    )
}

fn build_records(pool: &[PersonId], specs: &[RecordSpec]) -> Vec<ExpenseRecord> {
    specs
        .iter()
        .map(|(units, payer_idx, participant_count, settled)| {
            ExpenseRecord::new(
                RecordSource::GroupExpense,
                MoneyAmount::from_minor_units(*units, 2),
                pool[*payer_idx],
                pool[..*participant_count].to_vec(),
                SplitMethod::Equal,
                Utc::now(),
            )
            .unwrap()
            .with_settled(*settled)
        })
        .collect()
}

fn person_pool() -> Vec<PersonId> {
    (0..POOL_SIZE).map(|_| PersonId::new()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* record set, aggregating in reverse order yields the same
    /// sheet: remainder distribution resolves inside each record, never
    /// across records.
    #[test]
    fn prop_aggregation_is_order_independent(specs in record_specs()) {
        let pool = person_pool();
        let format = CurrencyFormat::default();
        let mut records = build_records(&pool, &specs);

        let forward = BalanceAggregator::aggregate(&records, &format).unwrap();
        records.reverse();
        let backward = BalanceAggregator::aggregate(&records, &format).unwrap();

        prop_assert_eq!(forward, backward);
    }

    /// *For any* record set, aggregating twice yields identical sheets.
    #[test]
    fn prop_aggregation_is_deterministic(specs in record_specs()) {
        let pool = person_pool();
        let format = CurrencyFormat::default();
        let records = build_records(&pool, &specs);

        let first = BalanceAggregator::aggregate(&records, &format).unwrap();
        let second = BalanceAggregator::aggregate(&records, &format).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* record set, every unit paid is owed by someone: the nets
    /// of each sheet sum to exactly zero.
    #[test]
    fn prop_nets_sum_to_zero(specs in record_specs()) {
        let pool = person_pool();
        let format = CurrencyFormat::default();
        let records = build_records(&pool, &specs);

        let sheet = BalanceAggregator::aggregate(&records, &format).unwrap();

        let outstanding_total: MoneyAmount =
            sheet.outstanding.values().map(super::aggregate::PersonBalance::net).sum();
        let historical_total: MoneyAmount =
            sheet.historical.values().map(super::aggregate::PersonBalance::net).sum();

        prop_assert_eq!(outstanding_total, MoneyAmount::ZERO);
        prop_assert_eq!(historical_total, MoneyAmount::ZERO);
    }

    /// *For any* record set, the outstanding sheet equals a full
    /// aggregation of just the unsettled records.
    #[test]
    fn prop_outstanding_ignores_settled_records(specs in record_specs()) {
        let pool = person_pool();
        let format = CurrencyFormat::default();
        let records = build_records(&pool, &specs);

        let sheet = BalanceAggregator::aggregate(&records, &format).unwrap();

        let unsettled: Vec<ExpenseRecord> = records
            .iter()
            .filter(|record| !record.is_settled())
            .cloned()
            .collect();
        let unsettled_sheet = BalanceAggregator::aggregate(&unsettled, &format).unwrap();

        prop_assert_eq!(sheet.outstanding, unsettled_sheet.historical);
    }
}
