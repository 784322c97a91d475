//! URL and host normalization.

use unicode_normalization::UnicodeNormalization;

use crate::error::UrlMatchError;
use crate::types::{ParsedUrl, UrlParts};
use crate::url::bidi::strip_bidi_controls;
use crate::url::utils::{
    host_to_ascii, is_valid_scheme, parse_port, split_authority, split_port, split_scheme,
    split_userinfo, strip_root_slash,
};

/// Normalize a URL or bare domain into a comparable string.
///
/// This function:
/// 1. Strips bidirectional control characters
/// 2. Applies Unicode canonical composition (NFC) and trims whitespace
/// 3. Lower-cases the scheme and converts the host to ASCII/punycode
/// 4. Keeps path, query and fragment byte-exact, except that a lone "/"
///    path is dropped
///
/// Input that cannot be parsed falls back to its lower-cased, cleaned form
/// instead of failing.
///
/// # Examples
///
/// ```
/// use siteurl::normalize_url;
///
/// assert_eq!(normalize_url("HTTP://Türkish.com/"), "http://xn--trkish-3ya.com");
/// assert_eq!(normalize_url("https://example.com/Path"), "https://example.com/Path");
/// assert_eq!(normalize_url("Example.COM"), "example.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    parse_url(input).into_normalized()
}

/// Normalize a host, or the host of a full URL.
///
/// Returns the fallback string when no host can be extracted.
///
/// # Examples
///
/// ```
/// use siteurl::normalize_host;
///
/// assert_eq!(normalize_host("Türkish.com"), "xn--trkish-3ya.com");
/// assert_eq!(normalize_host("https://www.Example.com/blog"), "www.example.com");
/// ```
pub fn normalize_host(input: &str) -> String {
    match parse_url(input) {
        ParsedUrl::Parsed(parts) => parts.host,
        ParsedUrl::Unparsed(raw) => raw,
    }
}

/// Parse a URL or bare host into its typed, normalized form.
///
/// Never fails: parse errors are logged and turned into
/// [`ParsedUrl::Unparsed`] holding the fallback string.
pub fn parse_url(input: &str) -> ParsedUrl {
    let cleaned = clean_input(input);

    match parse_cleaned(&cleaned) {
        Ok(parts) => ParsedUrl::Parsed(parts),
        Err(err) => {
            log::debug!("falling back for unparseable input {:?}: {}", cleaned, err);
            ParsedUrl::Unparsed(fallback(&cleaned))
        }
    }
}

/// Parse a URL or bare host, reporting why parsing failed.
pub fn try_parse_url(input: &str) -> Result<UrlParts, UrlMatchError> {
    parse_cleaned(&clean_input(input))
}

/// Strip bidi controls, compose to NFC and trim.
fn clean_input(input: &str) -> String {
    let stripped = strip_bidi_controls(input);
    let composed: String = stripped.nfc().collect();
    let trimmed = composed.trim();
    if trimmed.len() == composed.len() {
        composed
    } else {
        trimmed.to_string()
    }
}

fn parse_cleaned(input: &str) -> Result<UrlParts, UrlMatchError> {
    if input.is_empty() {
        return Err(UrlMatchError::Empty);
    }

    match split_scheme(input) {
        Some((scheme, after_scheme)) => parse_full_url(scheme, after_scheme),
        None => Ok(UrlParts::bare_host(host_to_ascii(input)?)),
    }
}

fn parse_full_url(scheme: &str, after_scheme: &str) -> Result<UrlParts, UrlMatchError> {
    if !is_valid_scheme(scheme) {
        return Err(UrlMatchError::InvalidScheme(scheme.to_string()));
    }
    let scheme = scheme.to_ascii_lowercase();

    let (authority, rest) = split_authority(after_scheme);
    let (userinfo, host_port) = split_userinfo(authority);
    let (host, port) = split_port(host_port)?;

    if host.is_empty() {
        return Err(UrlMatchError::EmptyHost);
    }
    let host = host_to_ascii(host)?;
    let port = match port {
        Some(port) => parse_port(port, &scheme)?,
        None => None,
    };

    Ok(UrlParts {
        scheme: Some(scheme),
        userinfo: userinfo.map(str::to_string),
        host,
        port,
        rest: strip_root_slash(rest).to_string(),
    })
}

/// Best-effort form of input that failed to parse.
fn fallback(cleaned: &str) -> String {
    let lowered = cleaned.to_lowercase();
    if unicode_normalization::is_nfc(&lowered) {
        lowered
    } else {
        lowered.nfc().collect()
    }
}
