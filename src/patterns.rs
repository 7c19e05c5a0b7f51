//! Compiled regex patterns shared by the normalizers.
//!
//! All patterns are compiled once on first use with `LazyLock`.
//! Patterns are organized by the module that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::money::Currency;

// =============================================================================
// Whitespace Patterns (text)
// =============================================================================

/// Any run of whitespace, Unicode-aware (covers NBSP and friends).
pub static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_RUN regex")
});

/// Runs of plain spaces.
pub static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" +").expect("SPACE_RUN regex")
});

/// Tab or carriage-return runs together with the spaces that follow them.
pub static TAB_OR_CR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\t+|\r+) *").expect("TAB_OR_CR_RUN regex")
});

/// A line break followed by indentation spaces.
pub static NEWLINE_INDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n +").expect("NEWLINE_INDENT regex")
});

/// Consecutive line breaks.
pub static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{2,}").expect("NEWLINE_RUN regex")
});

/// Sentence terminator, the whitespace after it (group 1) and the uppercase
/// letter opening the next sentence.
pub static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.?!;](\s+)\p{Lu}").expect("SENTENCE_BREAK regex")
});

/// Whitespace trim with a lazy body so interior whitespace is untouched.
pub static TRIM_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(.*?)\s*$").expect("TRIM_WHITESPACE regex")
});

// =============================================================================
// Markup Patterns (sanitize)
// =============================================================================

/// Elements removed together with their contents by `cut_tags`.
pub const UNSAFE_ELEMENTS: &[&str] = &["script", "noscript", "style", "video", "a", "iframe"];

/// One pattern per entry of [`UNSAFE_ELEMENTS`], matching the element and
/// everything up to its first closing tag.
pub static UNSAFE_ELEMENT_BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    UNSAFE_ELEMENTS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>"))
                .expect("UNSAFE_ELEMENT_BLOCKS regex")
        })
        .collect()
});

/// Element name at the start of an opening tag body (the text after `<`).
pub static OPENING_TAG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9-]*").expect("OPENING_TAG_NAME regex")
});

/// Element name inside a tag string such as `<div class="x">` or `</li>`.
pub static TAG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*<\s*/?\s*([A-Za-z][A-Za-z0-9-]*)").expect("TAG_NAME regex")
});

/// Attribute-free tag pair with nothing but whitespace between.
pub static EMPTY_TAG_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(\w+)>\s*</(\w+)>").expect("EMPTY_TAG_PAIR regex")
});

// =============================================================================
// Numeral Patterns (money)
// =============================================================================

/// Integer with an optional decimal tail (`12`, `12.`, `12.50`).
pub static MONEY_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]*)?").expect("MONEY_NUMERAL regex")
});

/// Decimal, bare fraction or integer, in that preference order.
pub static FLOAT_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+\.[0-9]+|\.[0-9]+|[0-9]+").expect("FLOAT_NUMERAL regex")
});

/// Currency marker followed by an amount (group 1), checked in this order.
///
/// The first entry matches the literal six characters `\u00a3` left behind
/// when a pound sign survives JSON escaping.
pub static CURRENCY_AMOUNT: LazyLock<Vec<(Currency, Regex)>> = LazyLock::new(|| {
    [
        (Currency::Gbp, r"\\u00a3"),
        (Currency::Gbp, r"&pound;"),
        (Currency::Usd, r"\$"),
        (Currency::Gbp, r"£"),
    ]
    .into_iter()
    .map(|(currency, marker)| {
        let re = Regex::new(&format!(r"{marker}\s*([0-9]*\.?[0-9]+)"))
            .expect("CURRENCY_AMOUNT regex");
        (currency, re)
    })
    .collect()
});

// =============================================================================
// Measurement Patterns (dimension)
// =============================================================================

/// Leading decimal number of a token, as a loose numeric cast reads it.
pub static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("LEADING_NUMBER regex")
});

// =============================================================================
// Charset Declaration Patterns (encoding)
// =============================================================================

/// Label of a `<meta charset=...>` declaration, quoted or bare (group 1).
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// Charset label inside the `content` of an `http-equiv="Content-Type"`
/// meta tag (group 1).
pub static META_CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("META_CONTENT_TYPE_CHARSET regex")
});

// =============================================================================
// Link Patterns (link)
// =============================================================================

/// Optional scheme followed by a host ending in a 2-4 letter zone.
pub static DOMAIN_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?P<protocol>(?:ht|f)tps?)://)?(?P<domain_name>[\pL\d.-]+\.(?P<zone>\pL{2,4}))")
        .expect("DOMAIN_PREFIX regex")
});
