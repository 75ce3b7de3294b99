//! Protect before using zero, negative or sub-cent amount for deposits and withdraws.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places of currency minor unit
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Represent strictly positive financial amount of money, in whole minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Create new amount from mantissa `num` and `scale`, so `Amount::new(1050, 2)` is `10.50`.
    ///
    /// Fails for `num == 0` and for values finer than a cent. Panics if `scale` exceeds 28.
    pub fn new(num: u64, scale: u32) -> Result<Amount, AmountErr> {
        Decimal::from_i128_with_scale(num.into(), scale).try_into()
    }

    /// Value rounded to currency minor unit (two decimal places)
    pub fn to_minor_units(&self) -> Decimal {
        to_minor_units(self.0)
    }
}

/// Round `value` to currency minor unit, half away from zero. Result has always scale 2.
pub fn to_minor_units(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MINOR_UNIT_SCALE);
    rounded
}

/// `true` if `value` has no digits below currency minor unit. Trailing zeros don't count.
pub fn is_whole_minor_units(value: Decimal) -> bool {
    value.normalize().scale() <= MINOR_UNIT_SCALE
}

/// represent error when transaction want to operate on invalid amount of money
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountErr {
    /// zero or negative
    #[error("amount must be positive")]
    NotPositive,
    /// has digits below a cent
    #[error("amount is finer than currency minor unit")]
    BelowMinorUnit,
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_zero() || value.is_sign_negative() {
            Err(AmountErr::NotPositive)
        } else if !is_whole_minor_units(value) {
            Err(AmountErr::BelowMinorUnit)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_minor_units())
    }
}
