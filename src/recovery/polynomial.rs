//! Polynomial arithmetic over arbitrary-precision rationals.
//!
//! Coefficients are dense and ordered by degree: index `i` holds the
//! coefficient of `x^i`, so a vector of length `d + 1` represents a
//! polynomial of degree at most `d`. Every operation is pure and exact;
//! scalar divisions introduced during interpolation stay as fractions instead
//! of decaying to floating point.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, Mul};

use num_rational::BigRational;
use num_traits::{One, Zero};

use super::RecoveryError;

/// A dense univariate polynomial with exact rational coefficients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<BigRational>,
}

impl Polynomial {
    /// Wraps a coefficient vector, lowest degree first.
    pub fn new(coeffs: Vec<BigRational>) -> Self {
        Self { coeffs }
    }

    /// Builds a polynomial from integer coefficients, lowest degree first.
    pub fn from_integers(coeffs: &[i64]) -> Self {
        Self {
            coeffs: coeffs
                .iter()
                .map(|&c| BigRational::from_integer(c.into()))
                .collect(),
        }
    }

    /// The zero polynomial, as the single coefficient `[0]`.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![BigRational::zero()],
        }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self {
            coeffs: vec![BigRational::one()],
        }
    }

    /// Coefficients, lowest degree first.
    pub fn coeffs(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Upper bound on the degree (coefficient count minus one).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// The coefficient `a_0`, i.e. the value at `x = 0`.
    pub fn constant_term(&self) -> BigRational {
        self.coeffs.first().cloned().unwrap_or_else(BigRational::zero)
    }

    /// Adds two polynomials. The shorter operand is padded with implicit
    /// zeros; the result has `max(len(a), len(b))` coefficients.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            let mut sum = BigRational::zero();
            if let Some(a) = self.coeffs.get(i) {
                sum += a;
            }
            if let Some(b) = other.coeffs.get(i) {
                sum += b;
            }
            result.push(sum);
        }
        Polynomial { coeffs: result }
    }

    /// Multiplies two polynomials by convolution. The result has
    /// `len(a) + len(b) - 1` coefficients.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.coeffs.is_empty() || other.coeffs.is_empty() {
            return Polynomial::default();
        }
        let mut result =
            vec![BigRational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }
        Polynomial { coeffs: result }
    }

    /// Multiplies every coefficient by `scalar`.
    pub fn scale(&self, scalar: &BigRational) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| c * scalar).collect(),
        }
    }

    /// Divides every coefficient by `scalar`.
    ///
    /// # Returns
    /// * `Err(RecoveryError::DivisionByZero)` when `scalar` is zero; only
    ///   reachable from interpolation when two x-coordinates coincide.
    pub fn scale_div(&self, scalar: &BigRational) -> Result<Polynomial, RecoveryError> {
        if scalar.is_zero() {
            return Err(RecoveryError::DivisionByZero);
        }
        Ok(Polynomial {
            coeffs: self.coeffs.iter().map(|c| c / scalar).collect(),
        })
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    ///
    /// Runs in the coefficient domain end-to-end, so no rounding error
    /// accumulates across terms of increasing degree.
    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        let mut iter = self.coeffs.iter().rev();
        let mut result = match iter.next() {
            Some(last) => last.clone(),
            None => return BigRational::zero(),
        };
        for coeff in iter {
            result = result * x + coeff;
        }
        result
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::mul(self, rhs)
    }
}
