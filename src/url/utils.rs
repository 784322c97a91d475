//! Low-level URL splitting helpers.
//!
//! These operate on already bidi-stripped, NFC-composed input and split it
//! into typed pieces without the path normalization the `url` crate applies
//! to whole URLs, so path, query and fragment stay byte-exact.

use url::Host;
use crate::error::UrlMatchError;

/// Scheme/authority separator.
pub const SCHEME_SEPARATOR: &str = "://";

/// Check whether a scheme is syntactically valid: an ASCII letter followed
/// by letters, digits, '+', '-' or '.'.
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}

/// Get the default port for a scheme, if it has one.
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}

/// Split an input at its first "://" into `(scheme, remainder)`.
pub fn split_scheme(input: &str) -> Option<(&str, &str)> {
    input.split_once(SCHEME_SEPARATOR)
}

/// Split what follows "://" into `(authority, rest)`.
///
/// The authority ends at the first '/', '?' or '#'.
pub fn split_authority(after_scheme: &str) -> (&str, &str) {
    match after_scheme.find(['/', '?', '#']) {
        Some(idx) => after_scheme.split_at(idx),
        None => (after_scheme, ""),
    }
}

/// Split an authority into `(userinfo, host_and_port)` at its last '@'.
pub fn split_userinfo(authority: &str) -> (Option<&str>, &str) {
    match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => (Some(userinfo), host_port),
        None => (None, authority),
    }
}

/// Split `host[:port]` into the host and the raw port text.
///
/// IPv6 literals keep their brackets. An empty port after ':' counts as no
/// port.
pub fn split_port(host_port: &str) -> Result<(&str, Option<&str>), UrlMatchError> {
    let (host, port) = if host_port.starts_with('[') {
        let end = host_port.find(']').ok_or(UrlMatchError::UnterminatedIpLiteral)?;
        let (host, tail) = host_port.split_at(end + 1);
        if tail.is_empty() {
            (host, None)
        } else if let Some(port) = tail.strip_prefix(':') {
            (host, Some(port))
        } else {
            return Err(UrlMatchError::InvalidHost(host_port.to_string()));
        }
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    Ok((host, port.filter(|p| !p.is_empty())))
}

/// Parse a port, dropping it when it is the scheme's default.
pub fn parse_port(port: &str, scheme: &str) -> Result<Option<u16>, UrlMatchError> {
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UrlMatchError::InvalidPort(port.to_string()));
    }
    let value: u16 = port
        .parse()
        .map_err(|_| UrlMatchError::InvalidPort(port.to_string()))?;

    if default_port(scheme) == Some(value) {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Convert a host to its ASCII form.
///
/// Domains are lower-cased and IDNA-encoded (punycode labels); IPv4 and
/// IPv6 literals are rendered canonically, IPv6 inside brackets.
pub fn host_to_ascii(host: &str) -> Result<String, UrlMatchError> {
    if host.is_empty() {
        return Err(UrlMatchError::EmptyHost);
    }

    let ascii = match Host::parse(host)? {
        Host::Domain(domain) => domain,
        Host::Ipv4(addr) => addr.to_string(),
        Host::Ipv6(addr) => format!("[{}]", addr),
    };

    if ascii.is_empty() {
        return Err(UrlMatchError::InvalidHost(host.to_string()));
    }
    Ok(ascii)
}

/// Collapse a lone "/" path to empty, keeping query and fragment.
pub fn strip_root_slash(rest: &str) -> &str {
    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    if &rest[..path_end] == "/" {
        &rest[1..]
    } else {
        rest
    }
}

/// Render a host in its Unicode display form.
///
/// Falls back to the input when the host has no valid Unicode form.
///
/// # Examples
///
/// ```
/// use siteurl::to_unicode_host;
///
/// assert_eq!(to_unicode_host("xn--trkish-3ya.com"), "türkish.com");
/// assert_eq!(to_unicode_host("example.com"), "example.com");
/// ```
pub fn to_unicode_host(host: &str) -> String {
    let (unicode, result) = idna::domain_to_unicode(host);
    if result.is_ok() {
        unicode
    } else {
        host.to_string()
    }
}
