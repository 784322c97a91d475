//! Error types for URL and host parsing.
//!
//! These errors never escape the public normalize/match operations: they are
//! raised by the typed parser and converted into a fallback string at a
//! single point (see [`crate::url::parse_url`]).

use thiserror::Error;

/// Errors that can occur while splitting or normalizing a URL or host.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlMatchError {
    /// The input is empty after stripping and trimming.
    #[error("Input is empty")]
    Empty,

    /// The scheme before "://" is empty or contains invalid characters.
    #[error("Invalid scheme: {0:?}")]
    InvalidScheme(String),

    /// The URL has no host between "://" and the path.
    #[error("URL has an empty host")]
    EmptyHost,

    /// The host could not be converted to its ASCII form.
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// The port is not a number in 0-65535.
    #[error("Invalid port: {0:?}")]
    InvalidPort(String),

    /// An IPv6 literal is missing its closing bracket.
    #[error("Unterminated IP literal in host")]
    UnterminatedIpLiteral,

    /// Host parsing failed in the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl From<url::ParseError> for UrlMatchError {
    fn from(err: url::ParseError) -> Self {
        UrlMatchError::UrlParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UrlMatchError::EmptyHost.to_string(), "URL has an empty host");
        assert_eq!(
            UrlMatchError::InvalidPort("80a".to_string()).to_string(),
            "Invalid port: \"80a\""
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(UrlMatchError::Empty, UrlMatchError::Empty);
        assert_ne!(UrlMatchError::Empty, UrlMatchError::EmptyHost);
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let url_error = url::ParseError::EmptyHost;
        let err: UrlMatchError = url_error.into();

        match err {
            UrlMatchError::UrlParseError(_) => (),
            _ => panic!("Expected UrlParseError variant"),
        }
    }
}
