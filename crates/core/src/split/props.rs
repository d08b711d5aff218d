//! Property-based tests for split computation.
//!
//! - Exact-sum invariant across methods, totals, counts and scales
//! - Bounded spread for equal splits
//! - Sign symmetry for refunds
//! - Determinism of remainder distribution

use proptest::prelude::*;
use rust_decimal::Decimal;
use splitra_shared::{MoneyAmount, PersonId};

use super::engine::SplitEngine;
use super::method::SplitMethod;

fn people(count: usize) -> Vec<PersonId> {
    (0..count).map(|_| PersonId::new()).collect()
}

fn share_amounts(shares: &[(PersonId, MoneyAmount)]) -> Vec<MoneyAmount> {
    shares.iter().map(|(_, amount)| *amount).collect()
}

/// Strategy for signed totals in minor units (refunds included).
fn total_amount() -> impl Strategy<Value = MoneyAmount> {
    (-10_000_000i64..10_000_000i64).prop_map(|units| MoneyAmount::from_minor_units(units, 2))
}

/// Strategy for participant counts (1 to 20).
fn participant_count() -> impl Strategy<Value = usize> {
    1usize..=20
}

/// Strategy for non-negative integer percentages summing to exactly 100.
///
/// Cut-point construction: sorted cuts in 0..=100 turn into segment widths,
/// which always total 100 and may include zeros.
fn percentages_summing_to_100() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..=100, 1..8).prop_map(|mut cuts| {
        cuts.push(0);
        cuts.push(100);
        cuts.sort_unstable();
        cuts.windows(2)
            .map(|pair| Decimal::from(pair[1] - pair[0]))
            .collect()
    })
}

/// Strategy for weight sets with at least one positive entry.
fn positive_weights() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..1000, 1..=12)
        .prop_filter("needs a positive weight", |weights| {
            weights.iter().any(|w| *w > 0)
        })
        .prop_map(|weights| weights.into_iter().map(Decimal::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Exact-sum invariant
    // =========================================================================

    /// *For any* total, count and scale, equal-split shares sum to the total
    /// exactly.
    #[test]
    fn prop_equal_split_sum_exact(
        total in total_amount(),
        count in participant_count(),
        scale in 0u32..=4,
    ) {
        let participants = people(count);
        let shares =
            SplitEngine::compute_shares(total, &participants, &SplitMethod::Equal, scale).unwrap();

        prop_assert_eq!(share_amounts(&shares).iter().sum::<MoneyAmount>(), total);
        prop_assert_eq!(shares.len(), count);
    }

    /// *For any* total representable at the split scale, the spread between
    /// the largest and smallest equal share is at most one minor unit.
    #[test]
    fn prop_equal_split_spread_within_one_unit(
        total in total_amount(),
        count in participant_count(),
    ) {
        let participants = people(count);
        let shares =
            SplitEngine::compute_shares(total, &participants, &SplitMethod::Equal, 2).unwrap();
        let amounts = share_amounts(&shares);

        let max = amounts.iter().copied().max().unwrap();
        let min = amounts.iter().copied().min().unwrap();
        prop_assert!(max - min <= MoneyAmount::from_minor_units(1, 2));
    }

    /// *For any* percentage table summing to 100, shares sum to the total
    /// exactly.
    #[test]
    fn prop_percentage_split_sum_exact(
        total in total_amount(),
        percents in percentages_summing_to_100(),
    ) {
        let participants = people(percents.len());
        let method = SplitMethod::Percentage(
            participants.iter().copied().zip(percents).collect(),
        );
        let shares = SplitEngine::compute_shares(total, &participants, &method, 2).unwrap();

        prop_assert_eq!(share_amounts(&shares).iter().sum::<MoneyAmount>(), total);
    }

    /// *For any* weight set with a positive sum, shares sum to the total
    /// exactly.
    #[test]
    fn prop_weighted_split_sum_exact(
        total in total_amount(),
        weights in positive_weights(),
    ) {
        let participants = people(weights.len());
        let method = SplitMethod::Shares(
            participants.iter().copied().zip(weights).collect(),
        );
        let shares = SplitEngine::compute_shares(total, &participants, &method, 2).unwrap();

        prop_assert_eq!(share_amounts(&shares).iter().sum::<MoneyAmount>(), total);
    }

    // =========================================================================
    // Sign symmetry and determinism
    // =========================================================================

    /// *For any* total, splitting the negated total negates every share.
    #[test]
    fn prop_equal_split_sign_symmetric(
        total in total_amount(),
        count in participant_count(),
    ) {
        let participants = people(count);
        let positive =
            SplitEngine::compute_shares(total, &participants, &SplitMethod::Equal, 2).unwrap();
        let negated =
            SplitEngine::compute_shares(-total, &participants, &SplitMethod::Equal, 2).unwrap();

        for ((_, a), (_, b)) in positive.iter().zip(negated.iter()) {
            prop_assert_eq!(*b, -*a);
        }
    }

    /// *For any* inputs, computing the same split twice gives identical
    /// shares.
    #[test]
    fn prop_split_is_deterministic(
        total in total_amount(),
        weights in positive_weights(),
    ) {
        let participants = people(weights.len());
        let method = SplitMethod::Shares(
            participants.iter().copied().zip(weights).collect(),
        );

        let first = SplitEngine::compute_shares(total, &participants, &method, 2).unwrap();
        let second = SplitEngine::compute_shares(total, &participants, &method, 2).unwrap();
        prop_assert_eq!(first, second);
    }

    // =========================================================================
    // Money arithmetic round-trip
    // =========================================================================

    /// *For any* amounts a and b, `a + b - b == a` exactly.
    #[test]
    fn prop_add_sub_round_trip(
        a in total_amount(),
        b in total_amount(),
    ) {
        prop_assert_eq!(a + b - b, a);
    }
}
