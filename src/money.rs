//! Price and number extraction from free text.
//!
//! Thousands separators (`,`) are always dropped before matching and only
//! the first numeral in the text is considered. Nothing here localizes
//! amounts or judges whether a price is plausible.

use serde::Serialize;

use crate::patterns::{CURRENCY_AMOUNT, FLOAT_NUMERAL, MONEY_NUMERAL};

/// Currency identified by the marker in front of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Currency {
    /// Pound sterling (`£`, `&pound;`, escaped `\u00a3`).
    Gbp,
    /// US dollar (`$`).
    Usd,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gbp => "GBP",
            Self::Usd => "USD",
        }
    }
}

/// A currency-marked amount found in text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyMatch<'a> {
    /// The matched slice, marker included (`"$ 12.50"`).
    pub text: &'a str,
    /// Currency implied by the marker.
    pub currency: Currency,
    /// Amount after the marker, rounded to cents.
    pub amount: f64,
}

/// Extract the first money amount from the text, rounded to cents.
///
/// Returns `None` when the text holds no numeral at all, which keeps a
/// missing price distinct from a real zero.
///
/// # Examples
///
/// ```
/// use feed_normalize::money::parse_money;
///
/// assert_eq!(parse_money("$1,234.56 each"), Some(1234.56));
/// assert_eq!(parse_money("Call for price"), None);
/// assert_eq!(parse_money("Free: 0.00"), Some(0.0));
/// ```
#[must_use]
pub fn parse_money(text: &str) -> Option<f64> {
    let without_commas = text.replace(',', "");
    let numeral = MONEY_NUMERAL.find(&without_commas)?;
    numeral
        .as_str()
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .map(round_cents)
        .filter(|amount| amount.is_finite())
}

/// Extract the first money amount, `0.0` when there is none.
///
/// Feed validity checks of the form "price > 0" rely on this sentinel; use
/// [`parse_money`] when a missing price must be told apart from zero.
#[must_use]
pub fn get_money(text: &str) -> f64 {
    parse_money(text).unwrap_or(0.0)
}

/// Find a currency marker followed by an amount and return the matched slice.
///
/// Markers are tried in a fixed order (escaped `\u00a3`, `&pound;`, `$`,
/// `£`); the first marker with a match wins even if another marker appears
/// earlier in the text.
///
/// ```
/// use feed_normalize::money::exists_money;
///
/// assert_eq!(exists_money("Now only $ 4.99!"), Some("$ 4.99"));
/// assert_eq!(exists_money("4.99 USD"), None);
/// ```
#[must_use]
pub fn exists_money(text: &str) -> Option<&str> {
    find_money(text).map(|found| found.text)
}

/// Like [`exists_money`], also reporting the currency and the parsed amount.
#[must_use]
pub fn find_money(text: &str) -> Option<MoneyMatch<'_>> {
    CURRENCY_AMOUNT.iter().find_map(|(currency, re)| {
        let caps = re.captures(text)?;
        let whole = caps.get(0)?;
        let amount = caps.get(1).map_or(0.0, |numeral| get_money(numeral.as_str()));
        Some(MoneyMatch {
            text: whole.as_str(),
            currency: *currency,
            amount,
        })
    })
}

/// Extract the first decimal or integer and normalize it to cents.
///
/// Returns `None` when the text has no numeral or the numeral overflows; a
/// numeral that rounds to a cent or less yields `default` (see
/// [`normalize_float`]).
///
/// ```
/// use feed_normalize::money::get_float;
///
/// assert_eq!(get_float("Weight: 1,250.456 lbs", None), Some(1250.46));
/// assert_eq!(get_float("weighs .5 oz", None), Some(0.5));
/// assert_eq!(get_float("0.001", Some(1.0)), Some(1.0));
/// assert_eq!(get_float("n/a", Some(1.0)), None);
/// ```
#[must_use]
pub fn get_float(text: &str, default: Option<f64>) -> Option<f64> {
    let without_commas = text.replace(',', "");
    let numeral = FLOAT_NUMERAL.find(&without_commas)?;
    let value = numeral.as_str().parse::<f64>().ok().filter(|value| value.is_finite())?;
    normalize_float(value, default)
}

/// Round to two decimals; values that do not exceed `0.01` become `default`.
///
/// A single cent or less is treated as "no amount", not as a tiny one.
#[must_use]
pub fn normalize_float(value: f64, default: Option<f64>) -> Option<f64> {
    let rounded = round_cents(value);
    if rounded > 0.01 {
        Some(rounded)
    } else {
        default
    }
}

/// Half-away-from-zero rounding to two decimals. Values too large to scale
/// by 100 have no fractional cents and come back unchanged.
fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if cents.is_finite() {
        cents.round() / 100.0
    } else {
        value
    }
}
