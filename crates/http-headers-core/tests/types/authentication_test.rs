// Tests for Authorization / WWW-Authenticate values

use crate::common::{assert_display_parses_back, assert_parse_fails, assert_parses_ok};
use http_headers_core::types::AuthenticationHeaderValue;
use http_headers_core::Error;

#[test]
fn test_authentication_display_parse_roundtrip() {
    let bearer = AuthenticationHeaderValue::with_parameter("Bearer", "mF_9.B5f-4.1JqM").unwrap();
    assert_eq!(bearer.to_string(), "Bearer mF_9.B5f-4.1JqM");
    assert_display_parses_back(&bearer);

    let digest = AuthenticationHeaderValue::with_parameter(
        "Digest",
        "username=\"Mufasa\", realm=\"testrealm@host.com\", qop=auth",
    )
    .unwrap();
    assert_display_parses_back(&digest);

    let scheme_only = AuthenticationHeaderValue::new("Negotiate").unwrap();
    assert_eq!(scheme_only.to_string(), "Negotiate");
    assert_display_parses_back(&scheme_only);
}

#[test]
fn test_authentication_parse() {
    assert_parses_ok(
        "  basic   dXNlcjpwYXNz   ",
        AuthenticationHeaderValue::with_parameter("Basic", "dXNlcjpwYXNz").unwrap(),
    );
    assert_parses_ok("NTLM", AuthenticationHeaderValue::new("ntlm").unwrap());

    let auth: AuthenticationHeaderValue = "Custom a=1, b=2".parse().unwrap();
    assert_eq!(auth.scheme(), "Custom");
    assert_eq!(auth.parameter(), Some("a=1, b=2"));
}

#[test]
fn test_authentication_failures() {
    assert_parse_fails::<AuthenticationHeaderValue>("");
    assert_parse_fails::<AuthenticationHeaderValue>("   ");
    assert_parse_fails::<AuthenticationHeaderValue>("\"Basic\" abc");
    assert_parse_fails::<AuthenticationHeaderValue>(", Basic");

    assert_eq!(AuthenticationHeaderValue::new(""), Err(Error::EmptyValue("scheme")));
    assert!(matches!(AuthenticationHeaderValue::new("Two Words"), Err(Error::InvalidFormat(_))));
}

#[test]
fn test_parameter_comparison_is_ordinal() {
    let a = AuthenticationHeaderValue::with_parameter("basic", "abc").unwrap();
    let b = AuthenticationHeaderValue::with_parameter("BASIC", "abc").unwrap();
    let c = AuthenticationHeaderValue::with_parameter("Basic", "ABC").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_parameter_cannot_carry_line_breaks() {
    assert!(matches!(
        AuthenticationHeaderValue::with_parameter("Basic", "abc\r\nX-Injected: 1"),
        Err(Error::InvalidFormat(_))
    ));
    assert_parse_fails::<AuthenticationHeaderValue>("Basic abc\r\nX-Injected: 1");
    assert_parse_fails::<AuthenticationHeaderValue>("Bearer a\nb");

    let mut headers = http_headers_core::headers::HttpHeaders::new();
    assert!(matches!(
        headers.add("Authorization", "Basic abc\r\nX-Injected: 1"),
        Err(Error::InvalidHeaderValue { .. })
    ));
    assert!(!headers.try_add_without_validation("Authorization", "Basic abc\r\nX-Injected: 1"));
    assert_eq!(headers.to_string(), "");
}
