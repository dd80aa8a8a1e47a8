//! Positional-base decoding of share values.
//!
//! Share values arrive as digit strings in an arbitrary base (2..=36, the
//! standard alphanumeric radix ceiling). Decoding accumulates into a `BigInt`
//! so that values beyond native integer range survive intact.

use num_bigint::BigInt;
use num_traits::Zero;

use super::share::{Point, Share};
use super::RecoveryError;

/// Decodes a digit string in the stated base into an exact integer.
///
/// Digits follow the standard radix alphabet: `0`-`9` then `a`-`z`
/// (case-insensitive) for bases above 10.
///
/// # Arguments
/// * `base` - The positional base, 2..=36.
/// * `digits` - The digit string to decode.
///
/// # Returns
/// * `Ok(BigInt)` - The decoded value.
/// * `Err(RecoveryError)` - If the base is unsupported or a digit is invalid.
pub fn decode_value(base: u32, digits: &str) -> Result<BigInt, RecoveryError> {
    if !(2..=36).contains(&base) {
        return Err(RecoveryError::InvalidBase { base });
    }
    if digits.is_empty() {
        return Err(RecoveryError::EmptyDigits);
    }

    let mut value = BigInt::zero();
    for ch in digits.chars() {
        let digit = ch
            .to_digit(base)
            .ok_or(RecoveryError::InvalidDigit { base, digit: ch })?;
        value = value * base + digit;
    }
    Ok(value)
}

/// Decodes a share into an exact evaluation point.
pub fn decode_share(share: &Share) -> Result<Point, RecoveryError> {
    let y = decode_value(share.base, &share.digits)?;
    let point = Point { x: share.x, y };
    log::debug!(
        "Decoded share: x = {}, y = {} (base {})",
        point.x,
        point.y,
        share.base
    );
    Ok(point)
}
