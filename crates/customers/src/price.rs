use serde::{Deserialize, Serialize};

use coffeeshop_core::ValueObject;

/// Price in smallest currency unit (e.g., cents).
///
/// No range validation: zero and negative amounts are representable. Addition
/// saturates at the `i64` bounds.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl ValueObject for Price {}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl<'a> core::iter::Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
