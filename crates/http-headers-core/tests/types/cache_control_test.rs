// Tests for Cache-Control values

use std::time::Duration;

use crate::common::{assert_display_parses_back, assert_formats_as, assert_parse_fails, assert_parses_ok};
use http_headers_core::types::{CacheControlHeaderValue, NameValueHeaderValue};

#[test]
fn test_cache_control_display_parse_roundtrip() {
    let cc = CacheControlHeaderValue {
        no_cache: true,
        no_cache_headers: vec!["Set-Cookie".to_string()],
        private: true,
        private_headers: vec!["Authorization".to_string(), "X-Trace".to_string()],
        max_age: Some(Duration::from_secs(0)),
        max_stale: true,
        max_stale_limit: Some(Duration::from_secs(60)),
        extensions: vec![NameValueHeaderValue::with_value("ext", "\"a b\"").unwrap()],
        ..Default::default()
    };
    assert_eq!(
        cc.to_string(),
        "no-cache=\"Set-Cookie\", max-age=0, max-stale=60, private=\"Authorization, X-Trace\", ext=\"a b\""
    );
    assert_display_parses_back(&cc);
}

#[test]
fn test_cache_control_canonical_order() {
    assert_formats_as::<CacheControlHeaderValue>(
        "max-age=10,public ,  no-transform",
        "no-transform, public, max-age=10",
    );
    assert_formats_as::<CacheControlHeaderValue>("proxy-revalidate, only-if-cached", "only-if-cached, proxy-revalidate");
}

#[test]
fn test_cache_control_parse() {
    assert_parses_ok(
        "s-maxage=30",
        CacheControlHeaderValue {
            shared_max_age: Some(Duration::from_secs(30)),
            ..Default::default()
        },
    );
    assert_parses_ok(
        "no-cache",
        CacheControlHeaderValue {
            no_cache: true,
            ..Default::default()
        },
    );

    let cc: CacheControlHeaderValue = "private=\" A ,B\"".parse().unwrap();
    assert_eq!(cc.private_headers, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn test_cache_control_failures() {
    assert_parse_fails::<CacheControlHeaderValue>("");
    assert_parse_fails::<CacheControlHeaderValue>(",");
    assert_parse_fails::<CacheControlHeaderValue>("max-age=");
    assert_parse_fails::<CacheControlHeaderValue>("min-fresh=-1");
    assert_parse_fails::<CacheControlHeaderValue>("private=Authorization");
    assert_parse_fails::<CacheControlHeaderValue>("ext=");
    assert_parse_fails::<CacheControlHeaderValue>("public public");
}
