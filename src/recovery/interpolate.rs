//! Lagrange interpolation over exact rationals.
//!
//! Given `k` points with pairwise distinct x-coordinates, produces the unique
//! polynomial of degree at most `k - 1` passing through all of them, as a
//! full coefficient vector (not just its value at a single abscissa).

extern crate alloc;
use alloc::vec;

use num_rational::BigRational;

use super::polynomial::Polynomial;
use super::share::Point;
use super::RecoveryError;

/// Interpolates the unique degree-`(k-1)` polynomial through `points`.
///
/// For each point `i` the basis polynomial
/// `L_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)` is built by repeatedly
/// multiplying by the linear factor `(x - x_j)` and dividing by the scalar
/// `(x_i - x_j)`, then scaled by `y_i` and accumulated into the running sum.
///
/// # Arguments
/// * `points` - The interpolation set; x-coordinates must be pairwise
///   distinct.
///
/// # Returns
/// * `Ok(Polynomial)` - The interpolating polynomial, exact.
/// * `Err(RecoveryError)` - `DuplicateX` on coinciding x-coordinates,
///   `InsufficientPoints` on an empty set.
pub fn interpolate(points: &[Point]) -> Result<Polynomial, RecoveryError> {
    if points.is_empty() {
        return Err(RecoveryError::InsufficientPoints { have: 0, need: 1 });
    }

    // 1. Validation: pairwise distinct x-coordinates.
    // Simple O(N^2) scan; N is a threshold count and stays small.
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].x == points[j].x {
                return Err(RecoveryError::DuplicateX { x: points[i].x });
            }
        }
    }

    // 2. Accumulate y_i * L_i(x) for every point.
    let mut sum = Polynomial::zero();
    for (i, point) in points.iter().enumerate() {
        let xi = point.x_rational();

        let mut basis = Polynomial::one();
        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            // (x - x_j) as coefficients [-x_j, 1], divided by (x_i - x_j).
            let xj = other.x_rational();
            let factor = Polynomial::new(vec![-xj.clone(), BigRational::from_integer(1.into())]);
            let denominator = &xi - &xj;
            basis = basis.mul(&factor).scale_div(&denominator)?;
        }

        sum = sum.add(&basis.scale(&point.y_rational()));
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn r(n: i64) -> BigRational {
        BigRational::from_integer(n.into())
    }

    #[test]
    fn test_interpolate_quadratic() {
        // f(x) = 2 - 2x + 2x^2 through its own points.
        let points = [Point::new(1, 2), Point::new(2, 6), Point::new(3, 14)];
        let poly = interpolate(&points).unwrap();
        assert_eq!(poly, Polynomial::from_integers(&[2, -2, 2]));
        assert_eq!(poly.constant_term(), r(2));
    }

    #[test]
    fn test_interpolate_fits_training_points() {
        let points = [Point::new(1, 3), Point::new(2, 6), Point::new(3, 11)];
        let poly = interpolate(&points).unwrap();
        // x^2 + 2 is the unique quadratic through these points.
        assert_eq!(poly, Polynomial::from_integers(&[2, 0, 1]));
        for point in &points {
            assert_eq!(poly.evaluate(&point.x_rational()), point.y_rational());
        }
    }

    #[test]
    fn test_interpolate_is_order_independent() {
        let a = [Point::new(1, 2), Point::new(2, 6), Point::new(3, 14)];
        let b = [Point::new(3, 14), Point::new(1, 2), Point::new(2, 6)];
        assert_eq!(interpolate(&a).unwrap(), interpolate(&b).unwrap());
    }

    #[test]
    fn test_interpolate_line() {
        let points = [Point::new(0, 5), Point::new(4, 13)];
        let poly = interpolate(&points).unwrap();
        assert_eq!(poly, Polynomial::from_integers(&[5, 2]));
    }

    #[test]
    fn test_interpolate_single_point() {
        let points = [Point::new(7, 9)];
        let poly = interpolate(&points).unwrap();
        assert_eq!(poly.constant_term(), r(9));
    }

    #[test]
    fn test_interpolate_huge_values_stay_exact() {
        // Constant term beyond u128 range must round-trip exactly.
        let secret = BigInt::from(10).pow(45);
        let y1 = &secret + BigInt::from(3); // f(x) = secret + 3x
        let y2 = &secret + BigInt::from(6);
        let points = [
            Point { x: 1, y: y1 },
            Point { x: 2, y: y2 },
        ];
        let poly = interpolate(&points).unwrap();
        assert_eq!(poly.constant_term(), BigRational::from_integer(secret));
    }

    #[test]
    fn test_interpolate_duplicate_x() {
        let points = [Point::new(1, 3), Point::new(1, 4), Point::new(2, 5)];
        assert_eq!(
            interpolate(&points),
            Err(RecoveryError::DuplicateX { x: 1 })
        );
    }

    #[test]
    fn test_interpolate_empty() {
        assert_eq!(
            interpolate(&[]),
            Err(RecoveryError::InsufficientPoints { have: 0, need: 1 })
        );
    }
}
