//! URL processing utilities.
//!
//! This module contains the normalization side of matching:
//! - Bidirectional control character stripping
//! - URL and host normalization (NFC, IDNA, trailing slash, default ports)
//! - Low-level splitting of scheme, authority, port and rest

pub mod bidi;
pub mod normalizer;
pub mod utils;

// Re-export main functionality
pub use bidi::{is_bidi_control, strip_bidi_controls};
pub use normalizer::{normalize_host, normalize_url, parse_url, try_parse_url};
pub use utils::{default_port, host_to_ascii, to_unicode_host};
