//! URL and domain equivalence matching.
//!
//! Two rule sets are provided:
//! - URL matching is exact on scheme, host, port and path, and is used for
//!   redirect-URI verification.
//! - Domain matching compares hosts only and tolerates a "www." prefix on
//!   the compared host, and is used for site-property ownership checks.

use crate::types::{DomainPathPolicy, MatcherConfig, ParsedUrl, UrlParts};
use crate::url::normalizer::parse_url;

/// Subdomain accepted as an alias of the bare domain in domain matching.
pub const WWW_PREFIX: &str = "www.";

/// URL and domain matching over a [`MatcherConfig`].
///
/// Implementors only provide the configuration; both checks are pure
/// functions of their two arguments.
pub trait UrlMatcher {
    /// Get the matcher configuration.
    fn config(&self) -> &MatcherConfig;

    /// Check whether two URLs are the same after normalization.
    ///
    /// Scheme, host, port and path/query/fragment must all be equal. Unicode
    /// hosts match their punycode spelling; "www." is significant. Input
    /// that cannot be parsed never matches.
    fn is_url_match(&self, url: &str, compare: &str) -> bool {
        let matched = match (parse_url(url), parse_url(compare)) {
            (ParsedUrl::Parsed(left), ParsedUrl::Parsed(right)) => left == right,
            _ => false,
        };
        log::trace!("url match {:?} vs {:?}: {}", url, compare, matched);
        matched
    }

    /// Check whether `compare` (a domain or full URL) belongs to `domain`.
    ///
    /// Matches when the hosts are equal or when the compared host is exactly
    /// "www." followed by the domain. Full URLs are reduced to their host;
    /// by default scheme, port, path, query and fragment are discarded (see
    /// [`DomainPathPolicy`]).
    fn is_domain_match(&self, domain: &str, compare: &str) -> bool {
        let policy = self.config().domain_path_policy;
        let matched = match (domain_host(domain, policy), domain_host(compare, policy)) {
            (Some(domain), Some(compare)) => is_host_or_www(&domain, &compare),
            _ => false,
        };
        log::trace!("domain match {:?} vs {:?}: {}", domain, compare, matched);
        matched
    }
}

/// Stock [`UrlMatcher`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteMatcher {
    config: MatcherConfig,
}

impl SiteMatcher {
    /// Create a matcher with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }
}

impl UrlMatcher for SiteMatcher {
    fn config(&self) -> &MatcherConfig {
        &self.config
    }
}

/// Check whether two URLs match using the default configuration.
///
/// # Examples
///
/// ```
/// use siteurl::is_url_match;
///
/// assert!(is_url_match("http://türkish.com", "http://xn--trkish-3ya.com/"));
/// assert!(!is_url_match("http://example.com", "https://example.com"));
/// assert!(!is_url_match("http://example.com", "http://www.example.com"));
/// ```
pub fn is_url_match(url: &str, compare: &str) -> bool {
    SiteMatcher::default().is_url_match(url, compare)
}

/// Check whether a domain matches a domain or URL using the default
/// configuration.
///
/// # Examples
///
/// ```
/// use siteurl::is_domain_match;
///
/// assert!(is_domain_match("example.com", "www.example.com"));
/// assert!(is_domain_match("türkish.com", "http://xn--trkish-3ya.com/"));
/// assert!(!is_domain_match("example.com", "blog.example.com"));
/// assert!(is_domain_match("example.com", "http://example.com/home"));
/// ```
pub fn is_domain_match(domain: &str, compare: &str) -> bool {
    SiteMatcher::default().is_domain_match(domain, compare)
}

/// Reduce a domain or URL to the host used for domain matching.
fn domain_host(input: &str, policy: DomainPathPolicy) -> Option<String> {
    let parts = match parse_url(input) {
        ParsedUrl::Parsed(parts) => parts,
        ParsedUrl::Unparsed(_) => return None,
    };

    if parts.is_full_url() && !accepts_url(&parts, policy) {
        return None;
    }
    Some(parts.host)
}

fn accepts_url(parts: &UrlParts, policy: DomainPathPolicy) -> bool {
    match policy {
        DomainPathPolicy::RequireRoot => parts.is_root(),
        DomainPathPolicy::IgnorePath => true,
    }
}

fn is_host_or_www(domain: &str, compare: &str) -> bool {
    compare == domain
        || compare
            .strip_prefix(WWW_PREFIX)
            .is_some_and(|bare| bare == domain)
}
