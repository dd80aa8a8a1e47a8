//! Polynomial recovery from threshold shares.
//!
//! This module implements the reconstruction side of a Shamir-style sharing
//! scheme over exact rational arithmetic: base-decoding of share values,
//! Lagrange interpolation of the unique degree-`(k-1)` polynomial through the
//! selected points, and detection of shares that do not lie on the recovered
//! curve.
//!
//! # Components
//! - `share`: Share, point and wrong-point value types.
//! - `decode`: Positional-base decoding of share values.
//! - `polynomial`: Coefficient arithmetic over arbitrary-precision rationals.
//! - `interpolate`: Lagrange interpolation.
//! - `detect`: Off-curve point detection.
//! - `reconstruct`: The forward pipeline and its result type.
//!
//! # Precision
//! All arithmetic runs over `BigRational` (arbitrary-precision integer
//! numerator/denominator). Scalar divisions produced during interpolation stay
//! exact, so the recovered constant term and the off-curve check never suffer
//! rounding drift regardless of `k` or share magnitude.

pub mod share;
pub mod decode;
pub mod polynomial;
pub mod interpolate;
pub mod detect;
pub mod reconstruct;

use core::fmt;

use crate::config::RecoverConfig;

/// Errors for recovery operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryError {
    /// Base outside the supported radix range (2..=36).
    InvalidBase { base: u32 },
    /// A digit character with no value in the stated base.
    InvalidDigit { base: u32, digit: char },
    /// Share carries an empty digit string.
    EmptyDigits,
    /// Threshold configuration error (k == 0).
    InvalidThreshold,
    /// Fewer points supplied than the threshold requires.
    InsufficientPoints { have: usize, need: usize },
    /// Two interpolation points share an x-coordinate.
    DuplicateX { x: i64 },
    /// Scalar division by zero during interpolation.
    DivisionByZero,
}

impl fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryError::InvalidBase { base } => {
                write!(f, "Base {} is outside the supported range 2..=36", base)
            }
            RecoveryError::InvalidDigit { base, digit } => {
                write!(f, "Digit {:?} is not valid in base {}", digit, base)
            }
            RecoveryError::EmptyDigits => write!(f, "Share value has no digits"),
            RecoveryError::InvalidThreshold => write!(f, "Threshold must be at least 1"),
            RecoveryError::InsufficientPoints { have, need } => {
                write!(f, "Need {} points but only {} were supplied", need, have)
            }
            RecoveryError::DuplicateX { x } => {
                write!(f, "Duplicate x-coordinate {} in interpolation set", x)
            }
            RecoveryError::DivisionByZero => write!(f, "Scalar division by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RecoveryError {}

/// Trait for polynomial reconstruction schemes.
///
/// Abstract interface to support future extensions (e.g., other coefficient
/// domains or robust subset selection).
pub trait ReconstructionScheme {
    type Share;
    type Output;
    type Error;

    /// Recovers the polynomial behind `shares` using threshold `k`.
    fn reconstruct(
        &self,
        shares: &[Self::Share],
        k: usize,
        config: &RecoverConfig,
    ) -> Result<Self::Output, Self::Error>;
}

/// Lagrange interpolation over arbitrary-precision rationals.
pub struct LagrangeRecovery;

impl ReconstructionScheme for LagrangeRecovery {
    type Share = share::Share;
    type Output = reconstruct::Reconstruction;
    type Error = RecoveryError;

    fn reconstruct(
        &self,
        shares: &[Self::Share],
        k: usize,
        config: &RecoverConfig,
    ) -> Result<Self::Output, Self::Error> {
        reconstruct::reconstruct(shares, k, config)
    }
}
