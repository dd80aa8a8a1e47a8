//! Test-case input model.
//!
//! A test case is a JSON object keyed by share index, each value carrying the
//! positional base and digit string of that share's y-value, plus a reserved
//! `"keys"` entry declaring the share count `n` and threshold `k`:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "2" },
//!     "2": { "base": "2", "value": "110" },
//!     "3": { "base": "16", "value": "e" },
//!     "4": { "base": "10", "value": "26" }
//! }
//! ```
//!
//! Only the structure is modelled here; file reading and output rendering
//! belong to the host application. JSON maps do not preserve insertion order,
//! so shares are handed out in ascending x order, which is the crate's
//! deterministic notion of input order.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::Deserialize;

use crate::recovery::share::Share;

/// Errors for input-structure handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The document is not valid JSON or misses required fields.
    Malformed,
    /// A share entry's key is not an integer index.
    InvalidShareIndex,
    /// A share entry's base is neither an integer nor an integer string.
    InvalidBaseField,
    /// The declared `n` disagrees with the number of share entries.
    ShareCountMismatch { declared: usize, found: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed => write!(f, "Malformed test-case document"),
            InputError::InvalidShareIndex => write!(f, "Share key is not an integer index"),
            InputError::InvalidBaseField => write!(f, "Share base is not an integer"),
            InputError::ShareCountMismatch { declared, found } => {
                write!(f, "Declared {} shares but found {}", declared, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Declared share count and threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Keys {
    /// Total number of shares in the document.
    pub n: usize,
    /// Minimum number of shares that determine the polynomial.
    pub k: usize,
}

/// Base field of a share entry; documents in the wild write it as a string,
/// but a plain integer is accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BaseField {
    Number(u32),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
struct ShareRecord {
    base: BaseField,
    value: String,
}

/// A parsed test case: the reserved `keys` entry plus one record per share.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    keys: Keys,
    #[serde(flatten)]
    entries: BTreeMap<String, ShareRecord>,
}

impl TestCase {
    /// Parses a test case from a JSON document.
    pub fn from_json(document: &str) -> Result<Self, InputError> {
        serde_json::from_str(document).map_err(|_| InputError::Malformed)
    }

    /// The declared threshold `k`.
    pub fn threshold(&self) -> usize {
        self.keys.k
    }

    /// The declared share count `n`.
    pub fn share_count(&self) -> usize {
        self.keys.n
    }

    /// The shares in ascending x order.
    ///
    /// # Returns
    /// * `Err(InputError)` - On a non-integer share key or base, or when the
    ///   entry count disagrees with the declared `n`.
    pub fn shares(&self) -> Result<Vec<Share>, InputError> {
        if self.entries.len() != self.keys.n {
            return Err(InputError::ShareCountMismatch {
                declared: self.keys.n,
                found: self.entries.len(),
            });
        }

        let mut shares = Vec::with_capacity(self.entries.len());
        for (key, record) in &self.entries {
            let x: i64 = key.parse().map_err(|_| InputError::InvalidShareIndex)?;
            let base = match &record.base {
                BaseField::Number(base) => *base,
                BaseField::Text(text) => {
                    text.parse().map_err(|_| InputError::InvalidBaseField)?
                }
            };
            shares.push(Share::new(x, base, record.value.clone()));
        }
        shares.sort_by_key(|share| share.x);
        Ok(shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "2" },
        "2": { "base": "2", "value": "110" },
        "3": { "base": "16", "value": "e" },
        "4": { "base": "10", "value": "26" }
    }"#;

    #[test]
    fn test_parse_document() {
        let case = TestCase::from_json(DOCUMENT).unwrap();
        assert_eq!(case.threshold(), 3);
        assert_eq!(case.share_count(), 4);

        let shares = case.shares().unwrap();
        assert_eq!(shares.len(), 4);
        assert_eq!(shares[0], Share::new(1, 10, "2"));
        assert_eq!(shares[2], Share::new(3, 16, "e"));
    }

    #[test]
    fn test_shares_sorted_numerically() {
        // Lexicographic map order would put "10" before "2".
        let document = r#"{
            "keys": { "n": 3, "k": 2 },
            "10": { "base": "10", "value": "1" },
            "2": { "base": "10", "value": "2" },
            "1": { "base": "10", "value": "3" }
        }"#;
        let shares = TestCase::from_json(document).unwrap().shares().unwrap();
        let xs: Vec<i64> = shares.iter().map(|s| s.x).collect();
        assert_eq!(xs, [1, 2, 10]);
    }

    #[test]
    fn test_integer_base_accepted() {
        let document = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": 16, "value": "ff" }
        }"#;
        let shares = TestCase::from_json(document).unwrap().shares().unwrap();
        assert_eq!(shares[0].base, 16);
    }

    #[test]
    fn test_invalid_share_key() {
        let document = r#"{
            "keys": { "n": 1, "k": 1 },
            "first": { "base": "10", "value": "1" }
        }"#;
        let case = TestCase::from_json(document).unwrap();
        assert_eq!(case.shares(), Err(InputError::InvalidShareIndex));
    }

    #[test]
    fn test_invalid_base_field() {
        let document = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "ten", "value": "1" }
        }"#;
        let case = TestCase::from_json(document).unwrap();
        assert_eq!(case.shares(), Err(InputError::InvalidBaseField));
    }

    #[test]
    fn test_share_count_mismatch() {
        let document = r#"{
            "keys": { "n": 3, "k": 2 },
            "1": { "base": "10", "value": "1" },
            "2": { "base": "10", "value": "2" }
        }"#;
        let case = TestCase::from_json(document).unwrap();
        assert_eq!(
            case.shares(),
            Err(InputError::ShareCountMismatch { declared: 3, found: 2 })
        );
    }

    #[test]
    fn test_malformed_document() {
        assert_eq!(TestCase::from_json("not json"), Err(InputError::Malformed));
        assert_eq!(TestCase::from_json("{}"), Err(InputError::Malformed));
    }
}
