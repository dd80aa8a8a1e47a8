//! The reconstruction pipeline.
//!
//! A single forward pass: decode every share, select the interpolation
//! subset, recover the polynomial, then check the remaining points against
//! the recovered curve. No retries, no backtracking; any malformed share or
//! degenerate point set aborts immediately, since a partial reconstruction is
//! meaningless.

extern crate alloc;
use alloc::vec::Vec;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::config::{RecoverConfig, SelectionPolicy};

use super::decode::decode_share;
use super::detect::find_wrong_points;
use super::interpolate::interpolate;
use super::polynomial::Polynomial;
use super::share::{Point, Share, WrongPoint};
use super::RecoveryError;

/// Result of a reconstruction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// All decoded points, in input order.
    pub points: Vec<Point>,

    /// The recovered polynomial.
    pub polynomial: Polynomial,

    /// The polynomial's value at `x = 0`; the reconstructed secret in
    /// secret-sharing use.
    pub constant_term: BigRational,

    /// Points beyond the interpolation subset that do not lie on the curve.
    pub wrong_points: Vec<WrongPoint>,
}

impl Reconstruction {
    /// The constant term as an integer, when it is one.
    ///
    /// Shares produced by an integer-coefficient polynomial always yield an
    /// integral constant term; `None` signals that the selected subset was
    /// not generated by such a polynomial.
    pub fn secret(&self) -> Option<BigInt> {
        if self.constant_term.is_integer() {
            Some(self.constant_term.to_integer())
        } else {
            None
        }
    }
}

/// Recovers the hidden polynomial from `shares` using threshold `k`.
///
/// # Arguments
/// * `shares` - The encoded shares, in input order.
/// * `k` - The threshold; `k` points determine the degree-`(k-1)` polynomial.
/// * `config` - Selection policy and off-curve tolerance.
///
/// # Returns
/// * `Ok(Reconstruction)` - Decoded points, polynomial, constant term and any
///   off-curve points among the non-interpolated remainder.
/// * `Err(RecoveryError)` - On malformed shares or a degenerate point set.
pub fn reconstruct(
    shares: &[Share],
    k: usize,
    config: &RecoverConfig,
) -> Result<Reconstruction, RecoveryError> {
    // 1. Validate the threshold against the supplied share count.
    if k == 0 {
        return Err(RecoveryError::InvalidThreshold);
    }
    if shares.len() < k {
        return Err(RecoveryError::InsufficientPoints {
            have: shares.len(),
            need: k,
        });
    }

    // 2. Decode every share to an exact point.
    let mut points = Vec::with_capacity(shares.len());
    for share in shares {
        points.push(decode_share(share)?);
    }

    // 3. Select the interpolation subset.
    let selected = match config.selection {
        SelectionPolicy::FirstK => &points[..k],
    };

    // 4. Interpolate and check the remainder against the curve.
    let polynomial = interpolate(selected)?;
    let wrong_points = find_wrong_points(&points, &polynomial, k, &config.residual_tolerance);
    let constant_term = polynomial.constant_term();

    log::info!(
        "Reconstructed degree-{} polynomial from {} of {} shares; {} off-curve",
        polynomial.degree(),
        k,
        points.len(),
        wrong_points.len()
    );

    Ok(Reconstruction {
        points,
        polynomial,
        constant_term,
        wrong_points,
    })
}
