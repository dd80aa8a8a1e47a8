//! Configuration management for polyrec.
//!
//! Defines the structure for caller-configurable reconstruction settings.

use num_rational::BigRational;
use num_traits::Zero;

/// Main configuration structure for the reconstruction engine.
///
/// This struct should be populated by the host application (CLI/GUI) and passed
/// to [`crate::recovery::reconstruct::reconstruct`]. There is no ambient global
/// state; every knob travels through this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverConfig {
    /// Which `k` of the supplied points are used for interpolation.
    pub selection: SelectionPolicy,

    /// Maximum residual `|y - f(x)|` a non-interpolated point may show before
    /// it is flagged as wrong. Arithmetic is exact, so the default is zero:
    /// any nonzero residual indicates a corrupted share. Callers feeding
    /// approximate data may widen this.
    pub residual_tolerance: BigRational,
}

impl Default for RecoverConfig {
    fn default() -> Self {
        Self {
            selection: SelectionPolicy::FirstK,
            residual_tolerance: BigRational::zero(),
        }
    }
}

/// Policy for choosing the interpolation subset.
///
/// Only the deterministic first-`k` policy exists today. A robust policy that
/// searches for a majority-agreeing subset among all points would slot in as a
/// second variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Use the first `k` points in input order.
    FirstK,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::FirstK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RecoverConfig::default();
        assert_eq!(config.selection, SelectionPolicy::FirstK);
        assert!(config.residual_tolerance.is_zero());
    }
}
