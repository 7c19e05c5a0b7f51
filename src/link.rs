//! Resolution of scraped `src`/`href` values against a site's base URL.
//!
//! Image and asset links on product pages come in every shape: relative
//! paths with `../` noise, protocol-relative `//cdn...` hosts, bare hosts
//! without a scheme, or complete URLs. The result here is always an absolute
//! link.

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::patterns::DOMAIN_PREFIX;

/// Path noise removed from a link before it is classified.
const PATH_NOISE: &[&str] = &["../", "./", "\\"];

/// Turn a scraped link into an absolute one using the base `domain`.
///
/// The link is cleaned first: every `../`, `./` and backslash is removed,
/// then leading slashes are trimmed. The cleaned link is then classified:
///
/// * no host prefix: `scheme://host/` of the base is prepended;
/// * a host without a scheme: the base scheme is prepended;
/// * scheme and host: returned as cleaned.
///
/// Only the scheme and host of `domain` are used; its port, path and query
/// are ignored. The host is taken as `url` normalizes it: lowercased, and
/// internationalized names in punycode (`https://Bücher.de` contributes
/// `xn--bcher-kva.de`). A host is anything ending in a dot and a 2-4 letter
/// zone, so a bare file name such as `a.jpg` is read as a host.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when the link needs the base and
/// `domain` does not parse as a URL with a host. A link that already has a
/// scheme and host never looks at `domain`.
///
/// # Examples
///
/// ```
/// use feed_normalize::link::normalize_src_link;
///
/// let base = "https://shop.example.com/catalog/item?id=7";
/// assert_eq!(
///     normalize_src_link("../images/a/pic.png", base)?,
///     "https://shop.example.com/images/a/pic.png"
/// );
/// assert_eq!(
///     normalize_src_link("//cdn.example.net/pic.png", base)?,
///     "https://cdn.example.net/pic.png"
/// );
/// # Ok::<(), feed_normalize::Error>(())
/// ```
pub fn normalize_src_link(link: &str, domain: &str) -> Result<String> {
    let mut cleared = link.to_string();
    for noise in PATH_NOISE {
        cleared = cleared.replace(noise, "");
    }
    let cleared = cleared.trim_start_matches('/');

    let Some(caps) = DOMAIN_PREFIX.captures(cleared) else {
        let base = parse_base(domain)?;
        let host = base.host_str().unwrap_or_default();
        return Ok(format!("{}://{host}/{cleared}", base.scheme()));
    };

    if caps.name("protocol").is_none() {
        let base = parse_base(domain)?;
        return Ok(format!("{}://{cleared}", base.scheme()));
    }

    Ok(cleared.to_string())
}

fn parse_base(domain: &str) -> Result<Url> {
    match Url::parse(domain.trim()) {
        Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => Ok(url),
        Ok(_) => {
            debug!(domain, "base URL has no host");
            Err(Error::InvalidBaseUrl(domain.to_string()))
        }
        Err(err) => {
            debug!(domain, %err, "base URL does not parse");
            Err(Error::InvalidBaseUrl(domain.to_string()))
        }
    }
}
