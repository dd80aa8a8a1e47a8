//! Off-curve point detection.
//!
//! After interpolation the points that were not part of the selected subset
//! are checked against the recovered polynomial. A point whose residual
//! exceeds the configured tolerance is reported as wrong, never raised as an
//! error: a corrupted share is data for the caller, not a failure of the
//! engine.

extern crate alloc;
use alloc::vec::Vec;

use num_rational::BigRational;
use num_traits::Signed;

use super::polynomial::Polynomial;
use super::share::{Point, WrongPoint};

/// Flags every point from index `used` onward whose observed `y` deviates
/// from the polynomial's prediction by more than `tolerance`.
///
/// With exact arithmetic the tolerance defaults to zero, so any nonzero
/// residual flags the point. Inputs are not mutated; the result list is the
/// only output.
pub fn find_wrong_points(
    points: &[Point],
    polynomial: &Polynomial,
    used: usize,
    tolerance: &BigRational,
) -> Vec<WrongPoint> {
    let mut wrong = Vec::new();
    for point in points.iter().skip(used) {
        let expected = polynomial.evaluate(&point.x_rational());
        let residual = (point.y_rational() - &expected).abs();
        if &residual > tolerance {
            log::warn!(
                "Point off curve: x = {}, y = {}, expected {}",
                point.x,
                point.y,
                expected
            );
            wrong.push(WrongPoint {
                x: point.x,
                y: point.y.clone(),
                expected,
            });
        }
    }
    wrong
}
