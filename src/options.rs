//! Configuration options for the normalizers that take tunables.
//!
//! The plain functions (`cut_tags`, `paragraphing`, `cut_empty_tags`) take
//! their parameters directly; the `*_with_options` variants read them from
//! an `Options` value so a pipeline can configure them in one place.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration options for markup sanitization and paragraphing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use feed_normalize::Options;
///
/// let options = Options {
///     keep_structural_tags: false,
///     extra_tags: vec!["b".to_string()],
///     ..Options::default()
/// };
/// assert_eq!(options.sentences_per_paragraph, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Keep the structural tag set (`span`, `p`, `br`, lists, tables) in `cut_tags`.
    ///
    /// Default: `true`
    pub keep_structural_tags: bool,

    /// Additional tags allowed through `cut_tags`.
    ///
    /// Entries may be bare names (`"b"`) or opening tags (`"<div class=\"x\">"`).
    ///
    /// Default: empty
    pub extra_tags: Vec<String>,

    /// Number of sentences grouped into one `<p>` by `paragraphing`.
    ///
    /// A value of `0` is treated as `1`.
    ///
    /// Default: `3`
    pub sentences_per_paragraph: usize,

    /// Upper bound on removal passes in `cut_empty_tags`.
    ///
    /// Each pass removes every innermost empty tag pair, so this is also the
    /// deepest nesting of empty tags that gets fully removed.
    ///
    /// Default: `64`
    pub max_empty_tag_passes: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            keep_structural_tags: true,
            extra_tags: Vec::new(),
            sentences_per_paragraph: 3,
            max_empty_tag_passes: 64,
        }
    }
}

impl Options {
    /// Parse options from JSON. Missing fields take their default values.
    ///
    /// ```rust
    /// use feed_normalize::Options;
    ///
    /// let options = Options::from_json(r#"{"sentences_per_paragraph": 2}"#)?;
    /// assert_eq!(options.sentences_per_paragraph, 2);
    /// assert!(options.keep_structural_tags);
    /// # Ok::<(), feed_normalize::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
