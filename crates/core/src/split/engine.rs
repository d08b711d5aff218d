//! Share computation using the Largest Remainder Method.
//!
//! Every method guarantees that the computed shares sum EXACTLY to the
//! record total (no minor units lost or invented):
//! 1. Calculate exact raw shares
//! 2. Round each down at the currency's minor unit
//! 3. Distribute the leftover minor units deterministically
//!
//! Equal splits hand leftover units to the first participants in record
//! order; percentage and weighted splits rank participants by largest
//! truncated fractional remainder, ties broken by record order. Negative
//! totals (refunds) split sign-symmetrically.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use splitra_shared::{MoneyAmount, MoneyError, PersonId};

use super::error::SplitError;
use super::method::SplitMethod;

/// Split computation engine.
///
/// Stateless; all operations are pure functions over immutable inputs.
pub struct SplitEngine;

impl SplitEngine {
    /// Validates a participant set against a split method.
    ///
    /// Checks that the set is non-empty and duplicate-free, that the
    /// method's map covers the set exactly, and that percentages/weights
    /// are well-formed. Used both at record construction and before every
    /// share computation.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in participant order.
    pub fn validate(participants: &[PersonId], method: &SplitMethod) -> Result<(), SplitError> {
        if participants.is_empty() {
            return Err(SplitError::EmptyParticipantSet);
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for person in participants {
            if !seen.insert(*person) {
                return Err(SplitError::DuplicateParticipant(*person));
            }
        }

        match method {
            SplitMethod::Equal => Ok(()),
            SplitMethod::Percentage(percents) => {
                Self::validate_coverage(participants, &seen, percents)?;
                let mut sum = Decimal::ZERO;
                for (person, percent) in percents {
                    if *percent < Decimal::ZERO {
                        return Err(SplitError::InvalidPercent {
                            participant: *person,
                            percent: *percent,
                        });
                    }
                    sum += *percent;
                }
                if sum != Decimal::ONE_HUNDRED {
                    return Err(SplitError::InvalidPercentTotal { actual: sum });
                }
                Ok(())
            }
            SplitMethod::Fixed(shares) => Self::validate_coverage(participants, &seen, shares),
            SplitMethod::Shares(weights) => {
                Self::validate_coverage(participants, &seen, weights)?;
                for (person, weight) in weights {
                    if *weight < Decimal::ZERO {
                        return Err(SplitError::InvalidWeight {
                            participant: *person,
                            weight: *weight,
                        });
                    }
                }
                Ok(())
            }
        }
    }

    /// Computes the per-participant shares for a record total.
    ///
    /// Returns one `(participant, share)` pair per participant, in the
    /// record's fixed participant order. The shares sum to `total` exactly.
    ///
    /// # Errors
    ///
    /// Fails with the first validation violation, a `SplitMismatch` for
    /// fixed shares that do not reach the total, or `DivisionByZero` for an
    /// all-zero weight set.
    pub fn compute_shares(
        total: MoneyAmount,
        participants: &[PersonId],
        method: &SplitMethod,
        scale: u32,
    ) -> Result<Vec<(PersonId, MoneyAmount)>, SplitError> {
        Self::validate(participants, method)?;

        let amounts = match method {
            SplitMethod::Equal => Self::equal_amounts(total, participants.len(), scale),
            SplitMethod::Percentage(percents) => {
                let weights: Vec<Decimal> = participants.iter().map(|p| percents[p]).collect();
                Self::proportional_amounts(total, &weights, scale)?
            }
            SplitMethod::Shares(share_weights) => {
                let weights: Vec<Decimal> =
                    participants.iter().map(|p| share_weights[p]).collect();
                Self::proportional_amounts(total, &weights, scale)?
            }
            SplitMethod::Fixed(shares) => {
                let amounts: Vec<MoneyAmount> =
                    participants.iter().map(|p| shares[p]).collect();
                let actual: MoneyAmount = amounts.iter().sum();
                if actual != total {
                    return Err(SplitError::SplitMismatch {
                        expected: total,
                        actual,
                    });
                }
                amounts
            }
        };

        Ok(participants.iter().copied().zip(amounts).collect())
    }

    /// Checks that a method map's keys are exactly the participant set.
    fn validate_coverage<V>(
        participants: &[PersonId],
        participant_set: &HashSet<PersonId>,
        map: &BTreeMap<PersonId, V>,
    ) -> Result<(), SplitError> {
        for key in map.keys() {
            if !participant_set.contains(key) {
                return Err(SplitError::UnknownParticipant(*key));
            }
        }
        if map.len() != participants.len() {
            for person in participants {
                if !map.contains_key(person) {
                    return Err(SplitError::MissingShare(*person));
                }
            }
        }
        Ok(())
    }

    /// Equal split, sign-symmetric over the total.
    fn equal_amounts(total: MoneyAmount, count: usize, scale: u32) -> Vec<MoneyAmount> {
        let negative = total.is_negative();
        let magnitude = total.abs().into_decimal();
        let mut shares = Self::equal_magnitudes(magnitude, count, scale);
        if negative {
            for share in &mut shares {
                *share = -*share;
            }
        }
        shares.into_iter().map(MoneyAmount::from_decimal).collect()
    }

    /// Equal split of a non-negative magnitude.
    fn equal_magnitudes(total: Decimal, count: usize, scale: u32) -> Vec<Decimal> {
        let unit = Decimal::new(1, scale);
        let count_dec = Decimal::from(count as u64);

        let base = (total / count_dec).round_dp_with_strategy(scale, RoundingStrategy::ToZero);
        let mut shares = vec![base; count];

        // Leftover whole minor units go to the first participants in order
        let remainder = total - base * count_dec;
        let extra = (remainder / unit)
            .round_dp_with_strategy(0, RoundingStrategy::ToZero)
            .to_u64()
            .unwrap_or(0);
        let extra = usize::try_from(extra).unwrap_or(0).min(count);
        for share in shares.iter_mut().take(extra) {
            *share += unit;
        }

        // A total finer than the minor unit leaves a sub-unit residue; it
        // stays with the first participant so the sum is exact for any
        // input precision
        let allocated: Decimal = shares.iter().copied().sum();
        let residue = total - allocated;
        if !residue.is_zero() {
            shares[0] += residue;
        }
        shares
    }

    /// Proportional split (percentage or weighted), sign-symmetric.
    fn proportional_amounts(
        total: MoneyAmount,
        weights: &[Decimal],
        scale: u32,
    ) -> Result<Vec<MoneyAmount>, SplitError> {
        let weight_sum: Decimal = weights.iter().copied().sum();
        if weight_sum.is_zero() {
            return Err(SplitError::Money(MoneyError::DivisionByZero));
        }

        let negative = total.is_negative();
        let magnitude = total.abs().into_decimal();
        let mut shares = Self::largest_remainder(magnitude, weights, weight_sum, scale);
        if negative {
            for share in &mut shares {
                *share = -*share;
            }
        }
        Ok(shares.into_iter().map(MoneyAmount::from_decimal).collect())
    }

    /// Largest Remainder Method over a non-negative magnitude.
    fn largest_remainder(
        total: Decimal,
        weights: &[Decimal],
        weight_sum: Decimal,
        scale: u32,
    ) -> Vec<Decimal> {
        let unit = Decimal::new(1, scale);

        // Exact raw shares, then floor each at the minor unit
        let raw: Vec<Decimal> = weights.iter().map(|w| total * *w / weight_sum).collect();
        let mut shares: Vec<Decimal> = raw
            .iter()
            .map(|r| r.round_dp_with_strategy(scale, RoundingStrategy::ToZero))
            .collect();

        let allocated: Decimal = shares.iter().copied().sum();
        let remainder = total - allocated;
        let units = (remainder / unit)
            .round_dp_with_strategy(0, RoundingStrategy::ToZero)
            .to_u64()
            .unwrap_or(0);
        let units = usize::try_from(units).unwrap_or(0).min(shares.len());

        // Rank by largest truncated fractional remainder; the stable sort
        // keeps record order on ties
        let fractions: Vec<Decimal> = raw
            .iter()
            .zip(shares.iter())
            .map(|(r, s)| *r - *s)
            .collect();
        let mut order: Vec<usize> = (0..shares.len()).collect();
        order.sort_by(|&a, &b| fractions[b].cmp(&fractions[a]));

        for &idx in order.iter().take(units) {
            shares[idx] += unit;
        }

        // Sub-unit residue goes to the top-ranked entry, keeping the sum
        // exact for any input precision
        let allocated: Decimal = shares.iter().copied().sum();
        let residue = total - allocated;
        if !residue.is_zero() {
            shares[order[0]] += residue;
        }
        shares
    }
}
