//! Simple CLI that reads one raw scraped value from stdin and prints every
//! normalization of it as JSON on stdout.
//!
//! Optional arguments: the declared charset of the input and a base URL for
//! link resolution.
//!
//! ```text
//! printf '$1,299.00' | normalize_stdin
//! printf '../img/a.png' | normalize_stdin utf-8 https://shop.example.com
//! ```

use std::io::{self, Read};

use feed_normalize::{
    calculate_upc, cut_empty_tags, cut_tags, decode_fragment, find_money, get_float, get_money, is_isbn,
    is_not_empty, normalize_space_in_string, normalize_src_link, paragraphing, parse_inch, remove_spaces, uc_words,
    Currency, Options,
};
use serde::Serialize;

const DEFAULT_BASE: &str = "https://example.com";

#[derive(Serialize)]
struct Output {
    input: String,
    not_empty: bool,
    remove_spaces: String,
    normalize_space: String,
    uc_words: String,
    paragraphs: String,
    cut_tags: String,
    cut_empty_tags: String,
    money: f64,
    money_text: Option<String>,
    currency: Option<Currency>,
    float: Option<f64>,
    upc: Option<String>,
    isbn: bool,
    inches: Option<f64>,
    link: Option<String>,
}

fn main() {
    let mut args = std::env::args().skip(1);
    let declared = args.next();
    let base = args.next().unwrap_or_else(|| DEFAULT_BASE.to_string());

    let mut bytes = Vec::new();
    if io::stdin().read_to_end(&mut bytes).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let input = decode_fragment(&bytes, declared.as_deref());
    let value = input.trim();
    let options = Options::default();
    let found = find_money(value);

    let output = Output {
        not_empty: is_not_empty(value),
        remove_spaces: remove_spaces(value),
        normalize_space: normalize_space_in_string(value),
        uc_words: uc_words(value),
        paragraphs: paragraphing(value, options.sentences_per_paragraph),
        cut_tags: cut_tags(value, options.keep_structural_tags, &[]),
        cut_empty_tags: cut_empty_tags(value),
        money: get_money(value),
        money_text: found.as_ref().map(|m| m.text.to_string()),
        currency: found.map(|m| m.currency),
        float: get_float(value, None),
        upc: calculate_upc(value).map(String::from),
        isbn: is_isbn(value),
        inches: parse_inch(value),
        link: normalize_src_link(value, &base).ok(),
        input: value.to_string(),
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
