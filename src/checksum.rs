//! UPC/EAN/GTIN check digits and product code repair.
//!
//! Codes scraped from product pages often arrive with spaces or dashes, a
//! wrong final digit, or no check digit at all. `calculate_upc` repairs what
//! it can and rejects the rest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Digit lengths a product code may have.
pub const CODE_LENGTHS: &[usize] = &[8, 11, 12, 13, 14];

/// Prefixes of the "Bookland" EAN range used by ISBN-13.
const ISBN_PREFIXES: &[&str] = &["978", "979"];

/// A digit-only UPC/EAN/GTIN-family product code.
///
/// # Examples
///
/// ```
/// use feed_normalize::checksum::ProductCode;
///
/// let code: ProductCode = "036000291452".parse()?;
/// assert_eq!(code.check_digit(), 2);
/// assert!(code.has_valid_check_digit());
/// # Ok::<(), feed_normalize::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    /// The code as a digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; codes have at least eight digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The final digit as stored.
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.bytes().last().map_or(0, |b| b - b'0')
    }

    /// Whether the final digit matches the weighted checksum of the others.
    #[must_use]
    pub fn has_valid_check_digit(&self) -> bool {
        upc_check_digit(&self.0) == self.check_digit()
    }

    /// See [`is_isbn`].
    #[must_use]
    pub fn is_isbn(&self) -> bool {
        is_isbn(&self.0)
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> Self {
        code.0
    }
}

impl TryFrom<String> for ProductCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if value.bytes().all(|b| b.is_ascii_digit()) && CODE_LENGTHS.contains(&value.len()) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidProductCode(value))
        }
    }
}

/// Strict parsing: the input must already be digits of a supported length.
/// Use [`calculate_upc`] to clean and repair scraped input instead.
impl FromStr for ProductCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.to_string())
    }
}

/// Weighted check digit over every digit except the last.
///
/// Weights alternate 3, 1, 3, … starting with 3 on the digit just left of
/// the (excluded) last position and moving left. The check digit is `0`
/// when the sum is a multiple of ten, else `10 - sum % 10`. Non-digit
/// characters are ignored.
///
/// ```
/// use feed_normalize::checksum::upc_check_digit;
///
/// // 0 3 6 0 0 0 2 9 1 4 5 | 2
/// assert_eq!(upc_check_digit("036000291452"), 2);
/// ```
#[must_use]
pub fn upc_check_digit(code: &str) -> u8 {
    let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();
    let Some((_, payload)) = digits.split_last() else {
        return 0;
    };

    let sum: u32 = payload
        .iter()
        .rev()
        .zip([3, 1].into_iter().cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 10 {
        0 => 0,
        rem => u8::try_from(10 - rem).unwrap_or(0),
    }
}

/// Heuristic ISBN check: 10 or 13 digits starting with `978` or `979`.
///
/// Only the prefix and length are looked at; the ISBN's own check digit is
/// not validated. Non-digit characters are ignored.
#[must_use]
pub fn is_isbn(code: &str) -> bool {
    let digits = digits_only(code);
    matches!(digits.len(), 10 | 13) && ISBN_PREFIXES.iter().any(|prefix| digits.starts_with(prefix))
}

/// Clean a scraped product code and repair its check digit.
///
/// Non-digits are removed first, then by length:
///
/// * 8 or 14 digits: a wrong last digit is replaced by the computed one.
/// * 11, 12 or 13 digits: on mismatch the code is treated as missing its
///   check digit and a computed one is appended (12, 13 or 14 digits). A
///   13-digit ISBN-pattern code is not extended and yields `None`.
/// * anything else: `None`.
///
/// Codes whose check digit is already correct come back unchanged.
///
/// # Examples
///
/// ```
/// use feed_normalize::checksum::calculate_upc;
///
/// let fixed = calculate_upc("9638-5074").map(String::from);
/// assert_eq!(fixed.as_deref(), Some("96385074"));
///
/// // 11-digit UPC-A payload gets its check digit appended.
/// let upc = calculate_upc("03600029145").map(String::from);
/// assert_eq!(upc.as_deref(), Some("036000291452"));
///
/// assert!(calculate_upc("12345").is_none());
/// ```
#[must_use]
pub fn calculate_upc(code: &str) -> Option<ProductCode> {
    let mut digits = digits_only(code);
    let expected = upc_check_digit(&digits);
    let matches_check = digits.bytes().last().is_some_and(|b| b - b'0' == expected);

    match digits.len() {
        8 | 14 => {
            if !matches_check {
                digits.pop();
                digits.push(char::from(b'0' + expected));
            }
        }
        11..=13 => {
            if !matches_check {
                if is_isbn(&digits) {
                    debug!(code = %digits, "ISBN-pattern code has a wrong check digit");
                    return None;
                }
                digits.push('1');
                let appended = upc_check_digit(&digits);
                digits.pop();
                digits.push(char::from(b'0' + appended));
            }
        }
        len => {
            debug!(len, "product code has an unsupported length");
            return None;
        }
    }

    Some(ProductCode(digits))
}

fn digits_only(code: &str) -> String {
    code.chars().filter(char::is_ascii_digit).collect()
}
