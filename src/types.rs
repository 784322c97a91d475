//! Core data structures for URL normalization and matching.

use std::fmt;

/// Components of a successfully parsed URL or bare host.
///
/// All fields are already in normalized form, so two values compare equal
/// exactly when they denote the same normalized URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlParts {
    /// Lower-cased scheme, `None` for a bare host
    pub scheme: Option<String>,
    /// Userinfo before the '@', kept verbatim
    pub userinfo: Option<String>,
    /// ASCII host: lower-case, punycode labels, canonical IP literals
    pub host: String,
    /// Explicit non-default port
    pub port: Option<u16>,
    /// Path, query and fragment, byte-exact ("/" alone collapses to "")
    pub rest: String,
}

impl UrlParts {
    /// Create the parts of a bare host.
    pub fn bare_host(host: String) -> Self {
        Self {
            scheme: None,
            userinfo: None,
            host,
            port: None,
            rest: String::new(),
        }
    }

    /// Whether these parts came from a full URL rather than a bare host.
    pub fn is_full_url(&self) -> bool {
        self.scheme.is_some()
    }

    /// Whether the URL points at the site root: no userinfo and nothing
    /// after the host beyond an optional "/".
    pub fn is_root(&self) -> bool {
        self.userinfo.is_none() && self.rest.is_empty()
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(scheme) = &self.scheme else {
            return f.write_str(&self.host);
        };

        write!(f, "{}://", scheme)?;
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{}@", userinfo)?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        f.write_str(&self.rest)
    }
}

/// Result of parsing a raw input string.
///
/// Downstream logic matches on the variant; an `Unparsed` value never
/// matches anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUrl {
    /// The input was a well-formed URL or host.
    Parsed(UrlParts),
    /// The input could not be parsed; holds the best-effort fallback string.
    Unparsed(String),
}

impl ParsedUrl {
    /// Get the parsed parts, if any.
    pub fn parts(&self) -> Option<&UrlParts> {
        match self {
            ParsedUrl::Parsed(parts) => Some(parts),
            ParsedUrl::Unparsed(_) => None,
        }
    }

    /// Render the normalized string form.
    pub fn into_normalized(self) -> String {
        match self {
            ParsedUrl::Parsed(parts) => parts.to_string(),
            ParsedUrl::Unparsed(raw) => raw,
        }
    }
}

/// How a full URL given to domain matching is reduced to a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPathPolicy {
    /// Only the host is compared; everything else in the URL is discarded.
    #[default]
    IgnorePath,
    /// Only a URL pointing at the site root contributes its host; any path,
    /// query, fragment or userinfo makes the comparison a non-match.
    RequireRoot,
}

/// Matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatcherConfig {
    /// Treatment of path-bearing URLs in domain matching
    pub domain_path_policy: DomainPathPolicy,
}

impl MatcherConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the domain path policy.
    pub fn with_domain_path_policy(mut self, policy: DomainPathPolicy) -> Self {
        self.domain_path_policy = policy;
        self
    }
}
