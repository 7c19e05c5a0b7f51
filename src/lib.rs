//! # feed-normalize
//!
//! Normalization and validation of values scraped from product pages.
//!
//! Extracted fields arrive as raw strings: descriptions with stray markup and
//! whitespace, prices with currency symbols, barcodes with missing or wrong
//! check digits, dimensions written as fractions, relative image links. This
//! library turns them into clean, canonical values suitable for storage and
//! comparison.
//!
//! ## Quick Start
//!
//! ```rust
//! use feed_normalize::{calculate_upc, cut_tags, get_money, normalize_src_link, parse_inch, remove_spaces};
//!
//! let title = remove_spaces("  Cold Brew\n   Coffee  ");
//! assert_eq!(title, "Cold Brew Coffee");
//!
//! let description = cut_tags(r#"<div class="desc"><p>Bold <b>roast</b></p><script>x()</script></div>"#, true, &[]);
//! assert_eq!(description, "<p>Bold roast</p>");
//!
//! assert_eq!(get_money("Now $1,299.00"), 1299.0);
//! assert_eq!(parse_inch("1 1/2\""), Some(1.5));
//! assert_eq!(calculate_upc("03600029145").map(String::from).as_deref(), Some("036000291452"));
//!
//! let image = normalize_src_link("../img/mug.png", "https://shop.example.com/p/1")?;
//! assert_eq!(image, "https://shop.example.com/img/mug.png");
//! # Ok::<(), feed_normalize::Error>(())
//! ```
//!
//! ## Modules
//!
//! - **text**: whitespace collapsing, paragraphs, case helpers, trimming
//! - **sanitize**: tag allow-listing, attribute and empty-tag removal
//! - **money**: price, float and currency-marker extraction
//! - **checksum**: UPC/EAN check digits and repair, ISBN heuristic
//! - **dimension**: inch/foot measurement parsing
//! - **link**: relative link resolution
//! - **encoding**: raw bytes to UTF-8
//!
//! Every function is pure and never panics on malformed input. Absence is
//! reported with `Option`; [`Error`] covers invalid arguments only.

mod error;
mod options;
mod patterns;

/// Whitespace, paragraph and case normalization.
pub mod text;

/// Tag and attribute sanitization of markup fragments.
pub mod sanitize;

/// Money and number extraction.
pub mod money;

/// Product code check digits.
pub mod checksum;

/// Inch and foot measurements.
pub mod dimension;

/// Link resolution against a base URL.
pub mod link;

/// Character encoding detection and decoding.
pub mod encoding;

// Public API - re-exports
pub use checksum::{calculate_upc, is_isbn, upc_check_digit, ProductCode};
pub use dimension::parse_inch;
pub use encoding::decode_fragment;
pub use error::{Error, Result};
pub use link::normalize_src_link;
pub use money::{exists_money, find_money, get_float, get_money, normalize_float, parse_money, Currency, MoneyMatch};
pub use options::Options;
pub use sanitize::{cut_empty_tags, cut_tags, cut_tags_attributes, strip_tags};
pub use text::{
    is_not_empty, normalize_space_in_string, paragraphing, remove_spaces, trim_class, trim_whitespace, uc_first,
    uc_words,
};
