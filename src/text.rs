//! Whitespace, paragraph and case normalization for plain text.
//!
//! `remove_spaces` and `normalize_space_in_string` are not interchangeable:
//! the first flattens everything onto one line, the second keeps single line
//! breaks and only removes the noise around them.

use regex::Regex;

use crate::error::Result;
use crate::options::Options;
use crate::patterns::{
    NEWLINE_INDENT, NEWLINE_RUN, SENTENCE_BREAK, SPACE_RUN, TAB_OR_CR_RUN, TRIM_WHITESPACE,
    WHITESPACE_RUN,
};
use crate::sanitize::strip_tags;

const NBSP: char = '\u{00A0}';

/// Remove line breaks and collapse repeated whitespace.
///
/// Every `\n` is deleted outright (the words on either side are joined),
/// then each remaining whitespace run becomes a single space and the result
/// is trimmed. Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use feed_normalize::text::remove_spaces;
///
/// assert_eq!(remove_spaces("  Organic \t Kale\u{a0} Chips  "), "Organic Kale Chips");
/// assert_eq!(remove_spaces("Gluten\nFree"), "GlutenFree");
/// ```
#[must_use]
pub fn remove_spaces(text: &str) -> String {
    let without_breaks = text.replace('\n', "");
    WHITESPACE_RUN
        .replace_all(&without_breaks, " ")
        .trim()
        .to_string()
}

/// Remove tabs and carriage returns, collapse spaces and repeated line breaks.
///
/// Single line breaks survive; indentation after a line break is dropped.
///
/// # Examples
///
/// ```
/// use feed_normalize::text::normalize_space_in_string;
///
/// assert_eq!(
///     normalize_space_in_string("Size:\t 10oz\r\n\n\n   Made  in USA"),
///     "Size:10oz\nMade in USA"
/// );
/// ```
#[must_use]
pub fn normalize_space_in_string(text: &str) -> String {
    let spaced = text.replace(NBSP, " ");
    let collapsed = SPACE_RUN.replace_all(spaced.trim(), " ");
    let without_controls = TAB_OR_CR_RUN.replace_all(&collapsed, "");
    let unindented = NEWLINE_INDENT.replace_all(&without_controls, "\n");
    NEWLINE_RUN.replace_all(&unindented, "\n").into_owned()
}

/// Check whether the text has any visible content.
///
/// A string of only whitespace and line breaks is empty. Unlike loosely
/// typed "empty" checks, `"0"` counts as content.
#[must_use]
pub fn is_not_empty(text: &str) -> bool {
    remove_spaces(text).chars().any(|c| !c.is_whitespace())
}

/// Group plain-text sentences into `<p>` paragraphs.
///
/// Text that contains markup is returned unchanged. Sentences end after one
/// of `.?!;` followed by whitespace and an uppercase letter. Every
/// `sentences_per_paragraph` sentences (0 is treated as 1) become one
/// paragraph; a shorter tail still gets its own.
///
/// # Examples
///
/// ```
/// use feed_normalize::text::paragraphing;
///
/// assert_eq!(
///     paragraphing("One. Two! Three? Four.", 2),
///     "<p>One. Two!</p><p>Three? Four.</p>"
/// );
/// assert_eq!(paragraphing("<b>Bold.</b> Text.", 2), "<b>Bold.</b> Text.");
/// ```
#[must_use]
pub fn paragraphing(text: &str, sentences_per_paragraph: usize) -> String {
    if text != strip_tags(text, &[]) {
        return text.to_string();
    }

    let size = sentences_per_paragraph.max(1);
    split_sentences(text)
        .chunks(size)
        .map(|chunk| format!("<p>{}</p>", chunk.join(" ")))
        .collect()
}

/// `paragraphing` with the chunk size taken from `options`.
#[must_use]
pub fn paragraphing_with_options(text: &str, options: &Options) -> String {
    paragraphing(text, options.sentences_per_paragraph)
}

/// Split at the whitespace between a terminator and an uppercase letter.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for caps in SENTENCE_BREAK.captures_iter(text) {
        if let Some(gap) = caps.get(1) {
            sentences.push(&text[start..gap.start()]);
            start = gap.end();
        }
    }
    sentences.push(&text[start..]);

    sentences.retain(|sentence| !sentence.is_empty());
    sentences
}

/// Uppercase the first character, Unicode-aware.
///
/// Characters whose uppercase form is longer expand (`ß` becomes `SS`).
#[must_use]
pub fn uc_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character of every word.
///
/// Words are separated by a single literal space only; tabs and other
/// whitespace stay inside the word.
#[must_use]
pub fn uc_words(text: &str) -> String {
    text.split(' ').map(uc_first).collect::<Vec<_>>().join(" ")
}

/// Trim leading and trailing whitespace without touching the interior.
#[must_use]
pub fn trim_whitespace(text: &str) -> String {
    trim_with(&TRIM_WHITESPACE, text)
}

/// Trim characters of a regex character class from both ends.
///
/// `class` is the body of a character class, e.g. `r"\s"` or `"\"'*"`.
/// The inner match is lazy, so repeated class characters in the middle of
/// the text are preserved.
///
/// ```
/// use feed_normalize::text::trim_class;
///
/// assert_eq!(trim_class("**Sale** price**", r"*")?, "Sale** price");
/// # Ok::<(), feed_normalize::Error>(())
/// ```
pub fn trim_class(text: &str, class: &str) -> Result<String> {
    let re = Regex::new(&format!(r"(?s)^[{class}]*(.*?)[{class}]*$"))?;
    Ok(trim_with(&re, text))
}

fn trim_with(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| text.to_string(), |body| body.as_str().to_string())
}
