//! Exact decimal money type.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! `MoneyAmount` wraps `rust_decimal::Decimal` for arbitrary precision.
//! Binary floats enter the system through exactly one door,
//! [`MoneyAmount::from_f64_lossy`], which collaborators call deliberately at
//! their import boundary.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;
use crate::types::currency::CurrencyFormat;

/// Rounding modes for presentation-boundary rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Round away from zero.
    Up,
    /// Round toward zero (truncate).
    Down,
    /// Round to nearest; midpoints go away from zero.
    Nearest,
    /// Round to nearest; midpoints go to the even neighbor.
    Bankers,
}

impl RoundingMode {
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Nearest => RoundingStrategy::MidpointAwayFromZero,
            Self::Bankers => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// An exact, signed decimal money amount.
///
/// The value is a base-10 decimal (arbitrary-precision significand plus
/// scale). Intermediate ledger arithmetic is never rounded; rounding happens
/// only through [`MoneyAmount::rounded`] and [`MoneyAmount::formatted`] at
/// presentation boundaries.
///
/// Serializes as a decimal string so persistence round-trips are lossless.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MoneyAmount(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl MoneyAmount {
    /// The zero amount.
    pub const ZERO: MoneyAmount = MoneyAmount(Decimal::ZERO);

    /// Creates an amount from an exact decimal value.
    #[must_use]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates an amount from integer minor units at the given scale.
    ///
    /// `from_minor_units(1050, 2)` is 10.50; `from_minor_units(1050, 0)`
    /// is 1050 (a scale-0 currency such as JPY).
    #[must_use]
    pub fn from_minor_units(units: i64, scale: u32) -> Self {
        Self(Decimal::new(units, scale))
    }

    /// One-way lossy import from binary floating point.
    ///
    /// This is the only sanctioned float entry point. The conversion picks
    /// the nearest representable decimal; callers downstream absorb the
    /// residual error with the classifier epsilon. Non-finite input fails
    /// with `InvalidAmount`.
    pub fn from_f64_lossy(value: f64) -> Result<Self, MoneyError> {
        Decimal::from_f64(value)
            .map(Self)
            .ok_or_else(|| MoneyError::InvalidAmount(value.to_string()))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn into_decimal(self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: MoneyAmount) -> Option<MoneyAmount> {
        self.0.checked_add(rhs.0).map(MoneyAmount)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: MoneyAmount) -> Option<MoneyAmount> {
        self.0.checked_sub(rhs.0).map(MoneyAmount)
    }

    /// Divides by a decimal scalar.
    ///
    /// # Errors
    ///
    /// Fails with `DivisionByZero` on a zero divisor.
    pub fn checked_div(self, divisor: Decimal) -> Result<MoneyAmount, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(self.0 / divisor))
    }

    /// Divides by an integer scalar.
    ///
    /// # Errors
    ///
    /// Fails with `DivisionByZero` on a zero divisor.
    pub fn checked_div_int(self, divisor: i64) -> Result<MoneyAmount, MoneyError> {
        self.checked_div(Decimal::from(divisor))
    }

    /// Rounds to `scale` decimal places with the given mode.
    ///
    /// Presentation-boundary operation: the returned value is a new amount,
    /// the original stays exact.
    #[must_use]
    pub fn rounded(&self, scale: u32, mode: RoundingMode) -> Self {
        Self(self.0.round_dp_with_strategy(scale, mode.strategy()))
    }

    /// Renders a fixed-scale display string, e.g. `-$12.50`.
    ///
    /// The symbol and scale come from the caller's [`CurrencyFormat`]; the
    /// underlying exact value is not mutated.
    #[must_use]
    pub fn formatted(&self, format: &CurrencyFormat) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(format.scale, RoundingStrategy::MidpointNearestEven);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        let abs = rounded.abs();
        format!(
            "{sign}{symbol}{abs:.prec$}",
            symbol = format.symbol,
            prec = format.scale as usize
        )
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MoneyAmount {
    type Err = MoneyError;

    /// Parses an exact decimal string, e.g. `"12.34"` or `"-0.005"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str_exact(s.trim())
            .map(Self)
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))
    }
}

impl From<Decimal> for MoneyAmount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<MoneyAmount> for Decimal {
    fn from(value: MoneyAmount) -> Self {
        value.0
    }
}

impl Add for MoneyAmount {
    type Output = MoneyAmount;

    fn add(self, rhs: MoneyAmount) -> Self::Output {
        MoneyAmount(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyAmount {
    fn add_assign(&mut self, rhs: MoneyAmount) {
        self.0 += rhs.0;
    }
}

impl Sub for MoneyAmount {
    type Output = MoneyAmount;

    fn sub(self, rhs: MoneyAmount) -> Self::Output {
        MoneyAmount(self.0 - rhs.0)
    }
}

impl SubAssign for MoneyAmount {
    fn sub_assign(&mut self, rhs: MoneyAmount) {
        self.0 -= rhs.0;
    }
}

impl Neg for MoneyAmount {
    type Output = MoneyAmount;

    fn neg(self) -> Self::Output {
        MoneyAmount(-self.0)
    }
}

impl Mul<i64> for MoneyAmount {
    type Output = MoneyAmount;

    fn mul(self, rhs: i64) -> Self::Output {
        MoneyAmount(self.0 * Decimal::from(rhs))
    }
}

impl Mul<Decimal> for MoneyAmount {
    type Output = MoneyAmount;

    fn mul(self, rhs: Decimal) -> Self::Output {
        MoneyAmount(self.0 * rhs)
    }
}

impl Sum for MoneyAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a MoneyAmount> for MoneyAmount {
    fn sum<I: Iterator<Item = &'a MoneyAmount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
