//! siteurl - Site URL and domain equivalence matching
//!
//! This crate decides whether two URL-like or domain-like strings refer to
//! the same site. It is meant for redirect-URI verification and for
//! reconciling a configured site address with the properties an external
//! service reports for it.
//!
//! # Features
//!
//! - **Fail-closed**: malformed input never errors or panics, it simply
//!   never matches
//! - **IDNA-aware**: Unicode hosts match their punycode spelling
//! - **Spoofing-resistant**: bidirectional control characters are stripped
//!   and text is NFC-composed before comparison
//! - **Deterministic**: normalization is idempotent and stateless
//!
//! # Quick Start
//!
//! ```
//! use siteurl::{is_domain_match, is_url_match, normalize_url};
//!
//! // Exact URL matching, trailing slash and IDNA insensitive
//! assert!(is_url_match("http://türkish.com", "http://xn--trkish-3ya.com/"));
//! assert!(!is_url_match("http://example.com", "http://www.example.com"));
//!
//! // Domain matching tolerates a "www." prefix on the compared host
//! assert!(is_domain_match("example.com", "http://www.example.com"));
//! assert!(!is_domain_match("example.com", "blog.example.com"));
//!
//! // The comparable form itself
//! assert_eq!(normalize_url("HTTPS://Example.com/Path/"), "https://example.com/Path/");
//! ```
//!
//! # Matching Rules
//!
//! | Comparison                          | URL match | Domain match |
//! |-------------------------------------|-----------|--------------|
//! | trailing slash only                 | yes       | yes          |
//! | http vs https                       | no        | yes          |
//! | "www." on the compared side         | no        | yes          |
//! | any other subdomain                 | no        | no           |
//! | Unicode host vs its punycode        | yes       | yes          |
//! | compared URL has a path             | by path   | yes          |
//!
//! # Error Handling
//!
//! The match and normalize operations are infallible. [`try_parse_url`]
//! exposes the underlying [`UrlMatchError`] for callers that want to know
//! why an input was rejected.

// Re-export main matching functions
pub use crate::core::{is_domain_match, is_url_match, SiteMatcher, UrlMatcher, WWW_PREFIX};

// Re-export permutation helpers
pub use crate::core::{permute_site_hosts, permute_site_url};

// Re-export normalization functions
pub use crate::url::{
    default_port, host_to_ascii, is_bidi_control, normalize_host, normalize_url, parse_url,
    strip_bidi_controls, to_unicode_host, try_parse_url,
};

// Re-export public types
pub use error::UrlMatchError;
pub use types::{DomainPathPolicy, MatcherConfig, ParsedUrl, UrlParts};

// Module declarations
pub mod error;
pub mod types;
pub mod core;
pub mod url;
