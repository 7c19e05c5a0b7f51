//! Decoding of raw scraped bytes into UTF-8 text.
//!
//! Fragments arrive as bytes from HTTP bodies or cached pages, in whatever
//! charset the site used. Every normalizer works on `&str`, so bytes go
//! through `decode_fragment` first.

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::patterns::{META_CHARSET, META_CONTENT_TYPE_CHARSET};

/// Bytes examined when sniffing a `<meta>` charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Pick the encoding for a fragment.
///
/// Precedence: byte order mark, then the `declared` label (typically the
/// HTTP `Content-Type` charset), then a `<meta>` declaration within the
/// first 1024 bytes, then UTF-8. Unknown labels are skipped.
#[must_use]
pub fn detect_encoding(bytes: &[u8], declared: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if let Some(label) = declared {
        match Encoding::for_label(label.trim().as_bytes()) {
            Some(encoding) => return encoding,
            None => debug!(label, "ignoring unknown declared charset"),
        }
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LIMIT)]);
    [&META_CHARSET, &META_CONTENT_TYPE_CHARSET]
        .into_iter()
        .filter_map(|re| re.captures(&head)?.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode fragment bytes to a UTF-8 `String`.
///
/// The encoding is chosen by [`detect_encoding`]; a BOM is stripped.
/// Malformed sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use feed_normalize::encoding::decode_fragment;
///
/// assert_eq!(decode_fragment(b"Caf\xE9 cr\xE8me", Some("iso-8859-1")), "Café crème");
/// assert_eq!(decode_fragment("Crème".as_bytes(), None), "Crème");
/// ```
#[must_use]
pub fn decode_fragment(bytes: &[u8], declared: Option<&str>) -> String {
    let encoding = detect_encoding(bytes, declared);
    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}
