//! Integers as they appear in terms.

use std::{fmt, num::ParseIntError, str::FromStr};

/// Signed 64-bit integer that remembers the sign of zero.
///
/// Negative zero arises only from the literal `-0` and from negating zero.
/// It behaves like zero in arithmetic and comparisons,
/// but it is modulated with a negative sign.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Integer
{
    value: i64,

    // INVARIANT: If set, value is zero.
    negative_zero: bool,
}

impl Integer
{
    /// Positive zero.
    pub const ZERO: Self = Self{value: 0, negative_zero: false};

    /// Negative zero.
    pub const NEGATIVE_ZERO: Self = Self{value: 0, negative_zero: true};

    /// The numeric value; negative zero yields zero.
    pub fn value(self) -> i64
    {
        self.value
    }

    /// Whether the sign is negative, including for negative zero.
    pub fn is_negative(self) -> bool
    {
        self.value < 0 || self.negative_zero
    }

    /// The absolute value.
    pub fn magnitude(self) -> u64
    {
        self.value.unsigned_abs()
    }

    /// Create an integer from its sign and absolute value.
    ///
    /// Returns [`None`] if the result does not fit in 64 bits.
    pub fn from_sign_magnitude(negative: bool, magnitude: u64) -> Option<Self>
    {
        match (negative, magnitude) {
            (false, 0) => Some(Self::ZERO),
            (true,  0) => Some(Self::NEGATIVE_ZERO),
            (false, _) => i64::try_from(magnitude).ok().map(Self::from),
            (true,  _) =>
                // -(2^63) is representable even though 2^63 is not.
                0i64.checked_sub_unsigned(magnitude).map(Self::from),
        }
    }

    /// Negate the integer, flipping the sign of zero.
    ///
    /// Returns [`None`] on overflow.
    pub fn checked_neg(self) -> Option<Self>
    {
        if self.value == 0 {
            Some(Self{value: 0, negative_zero: !self.negative_zero})
        } else {
            self.value.checked_neg().map(Self::from)
        }
    }
}

impl From<i64> for Integer
{
    fn from(value: i64) -> Self
    {
        Self{value, negative_zero: false}
    }
}

impl FromStr for Integer
{
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let value: i64 = s.parse()?;
        let negative_zero = value == 0 && s.starts_with('-');
        Ok(Self{value, negative_zero})
    }
}

impl fmt::Display for Integer
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        // Negative zero prints like zero.
        write!(f, "{}", self.value)
    }
}
