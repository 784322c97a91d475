//! Core matching functionality.
//!
//! This module contains the site-equivalence operations:
//! - Strict URL matching and www-tolerant domain matching
//! - Host and URL permutations across www, IDNA and scheme spellings

pub mod matcher;
pub mod permute;

// Re-export main functionality
pub use matcher::{is_domain_match, is_url_match, SiteMatcher, UrlMatcher, WWW_PREFIX};
pub use permute::{permute_site_hosts, permute_site_url};
