//! Equivalent spellings of a site host or URL.
//!
//! A site can be registered with an external service under any of its
//! www / non-www, Unicode / punycode and http / https spellings. These
//! functions list every such spelling so a caller can look a site up by all
//! of them.

use std::net::IpAddr;

use crate::core::matcher::WWW_PREFIX;
use crate::types::{ParsedUrl, UrlParts};
use crate::url::normalizer::parse_url;
use crate::url::utils::{default_port, to_unicode_host};

/// Schemes produced by [`permute_site_url`], in output order.
const SITE_SCHEMES: [&str; 2] = ["https", "http"];

/// List the equivalent spellings of a host.
///
/// The result is deduplicated and ordered as: punycode bare, punycode www,
/// Unicode bare, Unicode www. IP hosts yield only themselves and input that
/// cannot be parsed yields nothing.
///
/// # Examples
///
/// ```
/// use siteurl::permute_site_hosts;
///
/// assert_eq!(
///     permute_site_hosts("www.türkish.com"),
///     vec!["xn--trkish-3ya.com", "www.xn--trkish-3ya.com", "türkish.com", "www.türkish.com"]
/// );
/// assert_eq!(permute_site_hosts("example.com"), vec!["example.com", "www.example.com"]);
/// ```
pub fn permute_site_hosts(host: &str) -> Vec<String> {
    match parse_url(host) {
        ParsedUrl::Parsed(parts) => host_permutations(&parts.host),
        ParsedUrl::Unparsed(_) => Vec::new(),
    }
}

/// List the equivalent spellings of an http or https URL.
///
/// Every combination of scheme (https first) and host spelling from
/// [`permute_site_hosts`] is produced; userinfo, non-default port, path,
/// query and fragment are kept. Other schemes, bare hosts and unparseable
/// input yield nothing.
///
/// # Examples
///
/// ```
/// use siteurl::permute_site_url;
///
/// let urls = permute_site_url("http://example.com/blog");
/// assert_eq!(
///     urls,
///     vec![
///         "https://example.com/blog",
///         "https://www.example.com/blog",
///         "http://example.com/blog",
///         "http://www.example.com/blog",
///     ]
/// );
/// ```
pub fn permute_site_url(url: &str) -> Vec<String> {
    let parts = match parse_url(url) {
        ParsedUrl::Parsed(parts) => parts,
        ParsedUrl::Unparsed(_) => return Vec::new(),
    };
    if !matches!(parts.scheme.as_deref(), Some("http" | "https")) {
        return Vec::new();
    }

    let hosts = host_permutations(&parts.host);
    let mut urls = Vec::with_capacity(SITE_SCHEMES.len() * hosts.len());

    for scheme in SITE_SCHEMES {
        let port = parts.port.filter(|&p| default_port(scheme) != Some(p));
        for host in &hosts {
            let variant = UrlParts {
                scheme: Some(scheme.to_string()),
                userinfo: parts.userinfo.clone(),
                host: host.clone(),
                port,
                rest: parts.rest.clone(),
            };
            urls.push(variant.to_string());
        }
    }

    urls
}

fn host_permutations(ascii_host: &str) -> Vec<String> {
    if is_ip_host(ascii_host) {
        return vec![ascii_host.to_string()];
    }

    let bare = ascii_host.strip_prefix(WWW_PREFIX).unwrap_or(ascii_host);
    let unicode_bare = to_unicode_host(bare);

    let candidates = [
        bare.to_string(),
        format!("{}{}", WWW_PREFIX, bare),
        unicode_bare.clone(),
        format!("{}{}", WWW_PREFIX, unicode_bare),
    ];

    let mut hosts: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !hosts.contains(&candidate) {
            hosts.push(candidate);
        }
    }
    hosts
}

fn is_ip_host(host: &str) -> bool {
    host.starts_with('[') || host.parse::<IpAddr>().is_ok()
}
