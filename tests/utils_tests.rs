//! Integration tests for host helpers and site permutations.

use siteurl::{permute_site_hosts, permute_site_url, to_unicode_host, strip_bidi_controls};

#[test]
fn test_permute_site_hosts() {
    assert_eq!(
        permute_site_hosts("türkish.com"),
        vec!["xn--trkish-3ya.com", "www.xn--trkish-3ya.com", "türkish.com", "www.türkish.com"]
    );
    assert_eq!(
        permute_site_hosts("http://WWW.Example.com/blog"),
        vec!["example.com", "www.example.com"]
    );
    assert_eq!(permute_site_hosts("127.0.0.1"), vec!["127.0.0.1"]);
}

#[test]
fn test_permute_site_url() {
    let urls = permute_site_url("https://www.türkish.com/path?x=1");
    assert_eq!(
        urls,
        vec![
            "https://xn--trkish-3ya.com/path?x=1",
            "https://www.xn--trkish-3ya.com/path?x=1",
            "https://türkish.com/path?x=1",
            "https://www.türkish.com/path?x=1",
            "http://xn--trkish-3ya.com/path?x=1",
            "http://www.xn--trkish-3ya.com/path?x=1",
            "http://türkish.com/path?x=1",
            "http://www.türkish.com/path?x=1",
        ]
    );
}

#[test]
fn test_permute_site_url_keeps_port_and_userinfo() {
    let urls = permute_site_url("http://admin@example.com:8080/");
    assert_eq!(urls.len(), 4);
    assert_eq!(urls[0], "https://admin@example.com:8080");
    assert_eq!(urls[3], "http://admin@www.example.com:8080");
}

#[test]
fn test_to_unicode_host() {
    assert_eq!(to_unicode_host("xn--trkish-3ya.com"), "türkish.com");
    assert_eq!(to_unicode_host("www.xn--80adxhks.xn--p1ai"), "www.москва.рф");
    assert_eq!(to_unicode_host("example.com"), "example.com");
}

#[test]
fn test_strip_bidi_controls_public() {
    assert_eq!(strip_bidi_controls("\u{2066}example\u{2069}.com"), "example.com");
}
