//! Error types for feed-normalize.
//!
//! Most normalizers degrade to a sentinel (`None`, empty string, caller
//! default) instead of failing. The variants here cover the few entry points
//! that receive an argument which cannot be interpreted at all.

/// Error type for the fallible normalization entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied character class did not compile.
    #[error("invalid character class: {0}")]
    Pattern(#[from] regex::Error),

    /// The base domain for link resolution has no scheme or host.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A product code is not a digit-only string of a supported length.
    #[error("invalid product code: {0}")]
    InvalidProductCode(String),

    /// Options could not be deserialized.
    #[error("invalid options: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, Error>;
