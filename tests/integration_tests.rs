//! Property-style tests over a shared corpus of inputs.

use std::net::IpAddr;

use siteurl::*;

fn corpus() -> Vec<&'static str> {
    vec![
        "",
        "   ",
        "example.com",
        "EXAMPLE.COM",
        "www.example.com",
        "http://example.com",
        "http://example.com/",
        "http://example.com/home",
        "https://example.com/?p=1",
        "HTTPS://Example.com:443/Path/?Q=1#Frag",
        "http://example.com:8080/a/b/",
        "http://user:pw@example.com/",
        "http://türkish.com/path",
        "http://tu\u{0308}rkish.com",
        "xn--trkish-3ya.com",
        "\u{202C}ביקדקוםה.קום",
        "https://москва.рф/",
        "http://127.0.0.1/",
        "http://[::1]:3000/x",
        "http://",
        "://nothing",
        "not a url",
        "http://example.com:99999",
        "http://[::1",
        "mailto:someone@example.com",
        "Example.com/Home",
        "http://example.com/ü/Ä",
    ]
}

#[test]
fn test_normalization_is_idempotent() {
    for input in corpus() {
        let once = normalize_url(input);
        let twice = normalize_url(&once);
        assert_eq!(once, twice, "normalize is not idempotent for {:?}", input);
    }
}

#[test]
fn test_host_normalization_is_idempotent() {
    for input in corpus() {
        let once = normalize_host(input);
        assert_eq!(normalize_host(&once), once, "normalize_host not idempotent for {:?}", input);
    }
}

#[test]
fn test_normalization_is_deterministic() {
    for input in corpus() {
        assert_eq!(normalize_url(input), normalize_url(input), "input {:?}", input);
        assert_eq!(parse_url(input), parse_url(input), "input {:?}", input);
    }
}

#[test]
fn test_match_is_reflexive_for_parseable_input() {
    for input in corpus() {
        let parseable = try_parse_url(input).is_ok();
        assert_eq!(is_url_match(input, input), parseable, "url match reflexivity for {:?}", input);
        assert_eq!(
            is_domain_match(input, input),
            parseable,
            "domain match reflexivity for {:?}",
            input
        );
    }
}

#[test]
fn test_domain_match_accepts_any_url_on_the_same_host() {
    for input in corpus() {
        let Ok(parts) = try_parse_url(input) else {
            continue;
        };
        assert!(is_domain_match(&parts.host, input), "{:?} should match its own host", input);

        let is_ip = parts.host.starts_with('[') || parts.host.parse::<IpAddr>().is_ok();
        if is_ip {
            continue;
        }
        assert!(
            is_domain_match(&parts.host, &format!("www.{}", parts.host)),
            "www form of {:?} should match",
            input
        );
    }
}

#[test]
fn test_url_match_is_symmetric() {
    let inputs = corpus();
    for left in &inputs {
        for right in &inputs {
            assert_eq!(
                is_url_match(left, right),
                is_url_match(right, left),
                "symmetry for {:?} / {:?}",
                left,
                right
            );
        }
    }
}

#[test]
fn test_url_match_agrees_with_normalized_equality() {
    let inputs = corpus();
    for left in &inputs {
        for right in &inputs {
            if is_url_match(left, right) {
                assert_eq!(normalize_url(left), normalize_url(right), "{:?} / {:?}", left, right);
            }
        }
    }
}

#[test]
fn test_normalized_output_is_nfc_and_bidi_free() {
    for input in corpus() {
        let normalized = normalize_url(input);
        assert!(!normalized.chars().any(is_bidi_control), "bidi left in {:?}", normalized);
        assert_eq!(strip_bidi_controls(&normalized), normalized);
    }
}

#[test]
fn test_permutations_all_match_as_domains() {
    for host in permute_site_hosts("www.türkish.com") {
        assert!(is_domain_match("türkish.com", &host), "{} should match", host);
    }

    for url in permute_site_url("https://türkish.com/") {
        assert!(is_domain_match("xn--trkish-3ya.com", &url), "{} should match", url);
    }
}
