//! Inch and foot measurement parsing.

use crate::patterns::LEADING_NUMBER;

/// Typographic glyphs rewritten to ASCII before parsing.
const GLYPHS: &[(char, &str)] = &[
    ('\u{201D}', "\""),  // right double quotation mark
    ('\u{2033}', "\""),  // double prime
    ('\u{2019}', "'"),   // right single quotation mark
    ('\u{2032}', "'"),   // prime
    ('\u{00BC}', "1/4"),
    ('\u{00BD}', "1/2"),
    ('\u{00BE}', "3/4"),
    ('\u{2153}', "1/3"),
    ('\u{2154}', "2/3"),
    ('\u{215B}', "1/8"),
    ('\u{215C}', "3/8"),
    ('\u{215D}', "5/8"),
    ('\u{215E}', "7/8"),
];

/// Parse an inch (`"`) or foot (`'`) measurement into inches.
///
/// The unit comes from the last character: `"` means inches, anything else
/// is read as feet and multiplied by 12. The value is an optional whole
/// number followed by a space and a fraction (`1 1/2"`), a bare fraction
/// (`3/4"`) or a decimal (`2.5'`). Unicode quotes and vulgar fractions are
/// accepted (`1½”`).
///
/// A vulgar fraction written right after a digit is read as a mixed number:
/// `1½"` is 1.5 inches. Plain glyph substitution would have produced `11/2`
/// (5.5 inches); the mixed-number reading is the one used here.
///
/// Returns `None` when the text has no digit or a fraction divides by zero.
///
/// # Examples
///
/// ```
/// use feed_normalize::dimension::parse_inch;
///
/// assert_eq!(parse_inch("1 1/2\""), Some(1.5));
/// assert_eq!(parse_inch("2'"), Some(24.0));
/// assert_eq!(parse_inch("3/4\u{201D}"), Some(0.75));
/// assert_eq!(parse_inch("one inch"), None);
/// ```
#[must_use]
pub fn parse_inch(text: &str) -> Option<f64> {
    let ascii = replace_glyphs(text);
    let size = ascii.trim();
    if !size.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let multiplier = if size.ends_with('"') { 1.0 } else { 12.0 };
    let bare = size.trim_matches(|c: char| c == '"' || c == '\'');

    let mut parts = bare.split(' ');
    let first = parts.next().unwrap_or_default();
    let (whole, fraction) = if is_numeric(first) {
        let fraction = parts.next().filter(|part| !part.is_empty()).unwrap_or("0");
        (leading_number(first), fraction)
    } else {
        (0.0, first)
    };

    Some((whole + fraction_value(fraction)?) * multiplier)
}

/// Rewrite glyphs, separating a vulgar fraction from a digit right before it
/// so `1½` reads as `1 1/2` rather than `11/2`.
fn replace_glyphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match GLYPHS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => {
                if ascii.contains('/') && out.ends_with(|prev: char| prev.is_ascii_digit()) {
                    out.push(' ');
                }
                out.push_str(ascii);
            }
            None => out.push(c),
        }
    }
    out
}

fn fraction_value(token: &str) -> Option<f64> {
    if is_numeric(token) {
        return Some(leading_number(token));
    }

    if token.contains('/') {
        let mut sides = token.split('/');
        let numerator = sides.next().unwrap_or_default();
        let denominator = sides.next().unwrap_or_default();
        if is_numeric(numerator) && is_numeric(denominator) {
            let denominator = leading_number(denominator);
            if denominator == 0.0 {
                return None;
            }
            return Some(leading_number(numerator) / denominator);
        }
    }

    Some(leading_number(token))
}

/// Whole-token numeric check: optional sign, decimal digits, optional
/// exponent, surrounding whitespace allowed.
fn is_numeric(token: &str) -> bool {
    let trimmed = token.trim();
    trimmed.bytes().any(|b| b.is_ascii_digit()) && trimmed.parse::<f64>().is_ok()
}

/// Value of the token's numeric prefix, `0.0` when there is none.
fn leading_number(token: &str) -> f64 {
    LEADING_NUMBER
        .find(token)
        .and_then(|number| number.as_str().trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_and_feet() {
        assert_eq!(parse_inch("12\""), Some(12.0));
        assert_eq!(parse_inch("2.5'"), Some(30.0));
        assert_eq!(parse_inch("  6\"  "), Some(6.0));
    }

    #[test]
    fn test_mixed_fractions() {
        assert_eq!(parse_inch("1 1/2\""), Some(1.5));
        assert_eq!(parse_inch("1/4\""), Some(0.25));
        assert_eq!(parse_inch("2 1/2'"), Some(30.0));
    }

    #[test]
    fn test_unicode_glyphs() {
        assert_eq!(parse_inch("6\u{2019}"), Some(72.0));
        assert_eq!(parse_inch("\u{00BD}\u{201D}"), Some(0.5));
        assert_eq!(parse_inch("1\u{00BD}\u{201D}"), Some(1.5));
        assert_eq!(parse_inch("3 \u{00BE}\u{2033}"), Some(3.75));
    }

    #[test]
    fn test_any_other_suffix_means_feet() {
        assert_eq!(parse_inch("3"), Some(36.0));
        assert_eq!(parse_inch("5 ft"), Some(60.0));
    }

    #[test]
    fn test_no_digits_is_none() {
        assert_eq!(parse_inch(""), None);
        assert_eq!(parse_inch("\"'"), None);
        assert_eq!(parse_inch("N/A"), None);
    }

    #[test]
    fn test_division_by_zero_is_none() {
        assert_eq!(parse_inch("1/0\""), None);
    }

    #[test]
    fn test_unparseable_fraction_uses_numeric_prefix() {
        // "1-1/2": the sides "1-1" and "2" are not both numeric.
        assert_eq!(parse_inch("1-1/2\""), Some(1.0));
        assert_eq!(parse_inch("x 5\""), Some(0.0));
    }

    #[test]
    fn test_double_space_ignores_fraction() {
        assert_eq!(parse_inch("4  1/2\""), Some(4.0));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("12"));
        assert!(is_numeric("1.5"));
        assert!(is_numeric(".5"));
        assert!(is_numeric("1e2"));
        assert!(!is_numeric("1/2"));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric(""));
    }
}
