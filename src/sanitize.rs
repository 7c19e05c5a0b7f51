//! Markup sanitization for description fragments.
//!
//! Markup is handled as text: elements are matched with patterns and a small
//! tag scanner, never parsed into a tree. The functions accept malformed
//! fragments and always return a string.

use regex::Captures;
use tracing::warn;

use crate::options::Options;
use crate::patterns::{EMPTY_TAG_PAIR, OPENING_TAG_NAME, TAG_NAME, UNSAFE_ELEMENT_BLOCKS};
use crate::text::trim_whitespace;

/// Tags kept by `cut_tags` when structural tags are requested.
pub const STRUCTURAL_TAGS: &[&str] = &[
    "span", "p", "br", "ol", "ul", "li", "table", "thead", "tbody", "th", "tr", "td",
];

/// Reduce a markup fragment to an allow-listed set of bare tags.
///
/// 1. `script`, `noscript`, `style`, `video`, `a` and `iframe` elements are
///    removed together with their contents (link text goes with the link).
/// 2. The remainder is trimmed.
/// 3. Tags outside the allow-list are stripped, keeping their text. The
///    allow-list is [`STRUCTURAL_TAGS`] when `keep_structural_tags` is set,
///    plus every entry of `extra_tags`, given either as a name (`"b"`) or as
///    an opening tag (`"<div class=\"note\">"`).
/// 4. Allowed opening tags lose their attributes.
///
/// # Examples
///
/// ```
/// use feed_normalize::sanitize::cut_tags;
///
/// let html = r#" <div class="desc"><p style="x">Rich <b>dark</b> roast.</p><a href="/more">Read more</a><script>track()</script></div> "#;
/// assert_eq!(cut_tags(html, true, &[]), "<p>Rich dark roast.</p>");
/// assert_eq!(cut_tags(html, true, &["b"]), "<p>Rich <b>dark</b> roast.</p>");
/// assert_eq!(cut_tags(html, false, &[]), "Rich dark roast.");
/// ```
#[must_use]
pub fn cut_tags(markup: &str, keep_structural_tags: bool, extra_tags: &[&str]) -> String {
    let mut cleaned = markup.to_string();
    for block in UNSAFE_ELEMENT_BLOCKS.iter() {
        if block.is_match(&cleaned) {
            cleaned = block.replace_all(&cleaned, "").into_owned();
        }
    }
    let cleaned = trim_whitespace(&cleaned);

    let allowed = allow_list(keep_structural_tags, extra_tags);
    let allowed_refs: Vec<&str> = allowed.iter().map(String::as_str).collect();

    let stripped = strip_tags(&cleaned, &allowed_refs);
    strip_allowed_attributes(&stripped, &allowed_refs)
}

/// `cut_tags` with the allow-list configuration taken from `options`.
#[must_use]
pub fn cut_tags_with_options(markup: &str, options: &Options) -> String {
    let extra: Vec<&str> = options.extra_tags.iter().map(String::as_str).collect();
    cut_tags(markup, options.keep_structural_tags, &extra)
}

fn allow_list(keep_structural_tags: bool, extra_tags: &[&str]) -> Vec<String> {
    let mut allowed: Vec<String> = if keep_structural_tags {
        STRUCTURAL_TAGS.iter().map(|tag| (*tag).to_string()).collect()
    } else {
        Vec::new()
    };

    for entry in extra_tags {
        let name = tag_name(entry).unwrap_or_else(|| entry.trim().to_ascii_lowercase());
        if !name.is_empty() && !allowed.contains(&name) {
            allowed.push(name);
        }
    }
    allowed
}

/// Lowercased element name of a tag string, `None` for bare names and
/// non-element markup (comments, doctypes).
fn tag_name(tag: &str) -> Option<String> {
    TAG_NAME
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().to_ascii_lowercase())
}

fn strip_allowed_attributes(markup: &str, allowed: &[&str]) -> String {
    bare_opening_tags(markup, |name| allowed.iter().any(|tag| tag.eq_ignore_ascii_case(name)))
}

/// Rewrite opening tags accepted by `rewrite` to `<name>`.
///
/// Tag bodies are delimited with [`tag_end`], so a quoted `>` inside an
/// attribute value does not end the tag. Everything else, including an
/// unterminated tag, is copied through.
fn bare_opening_tags(markup: &str, rewrite: impl Fn(&str) -> bool) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(name) = OPENING_TAG_NAME.find(after).map(|name| name.as_str()) else {
            out.push('<');
            rest = after;
            continue;
        };
        let Some(end) = tag_end(after) else {
            out.push_str(&rest[open..]);
            return out;
        };

        if rewrite(name) {
            out.push('<');
            out.push_str(name);
            out.push('>');
        } else {
            out.push_str(&rest[open..=open + 1 + end]);
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Strip every tag whose element name is not in `allowed`.
///
/// Text between tags is kept. Comments, doctypes and processing
/// instructions are always removed. A `<` followed by whitespace (or at the
/// very end) is text, quotes inside a tag may contain `>`, and an
/// unterminated tag swallows the rest of the input. Names compare
/// case-insensitively.
///
/// ```
/// use feed_normalize::sanitize::strip_tags;
///
/// assert_eq!(strip_tags("<P>1 < 2</P><!-- x --><br/>", &["p"]), "<P>1 < 2</P>");
/// ```
#[must_use]
pub fn strip_tags(markup: &str, allowed: &[&str]) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let after = &tail[1..];

        match after.chars().next() {
            None => {
                out.push('<');
                return out;
            }
            Some(c) if c.is_whitespace() => {
                out.push('<');
                rest = after;
                continue;
            }
            Some(_) => {}
        }

        if let Some(comment) = after.strip_prefix("!--") {
            match comment.find("-->") {
                Some(end) => {
                    rest = &comment[end + 3..];
                    continue;
                }
                None => return out,
            }
        }

        let Some(end) = tag_end(after) else {
            return out;
        };
        let tag = &tail[..end + 2];
        let keep = tag_name(tag).is_some_and(|name| allowed.iter().any(|a| a.eq_ignore_ascii_case(&name)));
        if keep {
            out.push_str(tag);
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Byte offset of the `>` closing a tag body, skipping quoted attribute values.
fn tag_end(body: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in body.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return Some(i),
            None => {}
        }
    }
    None
}

/// Strip attributes from every opening tag.
///
/// ```
/// use feed_normalize::sanitize::cut_tags_attributes;
///
/// assert_eq!(
///     cut_tags_attributes(r#"<h1 class="title">Tea</h1><br/>"#),
///     "<h1>Tea</h1><br>"
/// );
/// ```
#[must_use]
pub fn cut_tags_attributes(markup: &str) -> String {
    bare_opening_tags(markup, |_| true)
}

/// Remove tag pairs that enclose only whitespace, including pairs that
/// become empty once their children are removed.
///
/// Uses the default pass bound from [`Options`].
///
/// ```
/// use feed_normalize::sanitize::cut_empty_tags;
///
/// assert_eq!(cut_empty_tags("<p></p><p>x</p>"), "<p>x</p>");
/// assert_eq!(cut_empty_tags("<ul><li> </li></ul>Done"), "Done");
/// ```
#[must_use]
pub fn cut_empty_tags(markup: &str) -> String {
    remove_empty_pairs(markup, Options::default().max_empty_tag_passes)
}

/// `cut_empty_tags` with the pass bound taken from `options`.
#[must_use]
pub fn cut_empty_tags_with_options(markup: &str, options: &Options) -> String {
    remove_empty_pairs(markup, options.max_empty_tag_passes)
}

fn remove_empty_pairs(markup: &str, max_passes: usize) -> String {
    let mut current = markup.to_string();
    let mut passes = 0;

    loop {
        let next = remove_empty_pairs_once(&current);
        if next == current {
            return current;
        }
        if passes == max_passes {
            warn!(max_passes, "empty tag removal stopped before reaching a fixed point");
            return current;
        }
        current = next;
        passes += 1;
    }
}

fn remove_empty_pairs_once(markup: &str) -> String {
    EMPTY_TAG_PAIR
        .replace_all(markup, |caps: &Captures| {
            if caps[1].eq_ignore_ascii_case(&caps[2]) {
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
