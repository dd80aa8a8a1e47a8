//! Share and point value types.
//!
//! A share is one evaluation point $(x, y)$ of the hidden polynomial, with
//! $y$ still encoded as a digit string in a stated positional base. Decoding
//! turns it into a [`Point`]; points that fail the off-curve check surface as
//! [`WrongPoint`]s.

extern crate alloc;
use alloc::string::String;
use core::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

/// An encoded share: one evaluation point awaiting base decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// The x-coordinate (the share index).
    pub x: i64,

    /// Positional base the value is written in (2..=36).
    pub base: u32,

    /// Digit string of the y-value in `base`.
    pub digits: String,
}

impl Share {
    /// Creates a new share. Base and digit validation happen at decode time.
    pub fn new(x: i64, base: u32, digits: impl Into<String>) -> Self {
        Self {
            x,
            base,
            digits: digits.into(),
        }
    }
}

/// A decoded share: an exact evaluation point of the hidden polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    /// The x-coordinate.
    pub x: i64,

    /// The decoded y-value. Arbitrary precision: share values routinely
    /// exceed native integer range.
    pub y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }

    /// The x-coordinate lifted into the coefficient domain.
    pub fn x_rational(&self) -> BigRational {
        BigRational::from_integer(BigInt::from(self.x))
    }

    /// The y-value lifted into the coefficient domain.
    pub fn y_rational(&self) -> BigRational {
        BigRational::from_integer(self.y.clone())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point that does not lie on the reconstructed curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongPoint {
    /// The x-coordinate of the offending share.
    pub x: i64,

    /// The observed (decoded) y-value.
    pub y: BigInt,

    /// The value the reconstructed polynomial predicts at `x`.
    pub expected: BigRational,
}
