// Tests for the small value types and the shared lexer

use std::time::Duration;

use crate::common::{assert_display_parses_back, assert_formats_as, assert_parse_fails, assert_parses_ok, utc};
use http_headers_core::parser::primitives::{
    format_md5, try_parse_date, try_parse_email, try_parse_host, try_parse_int, try_parse_md5,
    try_parse_time_span_seconds, try_parse_token,
};
use http_headers_core::types::{
    HeaderUri, NameValueHeaderValue, NameValueWithParametersHeaderValue, StringWithQualityHeaderValue,
    TransferCodingHeaderValue, TransferCodingWithQualityHeaderValue,
};
use http_headers_core::{Error, Lexer, TokenKind};

// --- Lexer ---

#[test]
fn test_lexer_token_stream() {
    let mut lexer = Lexer::new(" text/html ; q=\"0.5\", (c)");
    let mut kinds = Vec::new();
    loop {
        let kind = lexer.scan().kind();
        if kind == TokenKind::End {
            break;
        }
        kinds.push(kind);
        // Error tokens do not advance the cursor
        if kind == TokenKind::Error {
            break;
        }
    }
    assert_eq!(
        kinds,
        vec![
            TokenKind::Token,
            TokenKind::SeparatorSlash,
            TokenKind::Token,
            TokenKind::SeparatorSemicolon,
            TokenKind::Token,
            TokenKind::SeparatorEqual,
            TokenKind::QuotedString,
            TokenKind::SeparatorComma,
            TokenKind::OpenParens,
            TokenKind::Token,
            TokenKind::Error,
        ]
    );
}

#[test]
fn test_lexer_dash_handling() {
    let mut lexer = Lexer::new("-5");
    assert_eq!(lexer.scan_with_dash().kind(), TokenKind::SeparatorDash);

    let mut lexer = Lexer::new("-5");
    let token = lexer.scan();
    assert_eq!(token.kind(), TokenKind::Token);
    assert_eq!(lexer.string_value(token), "-5");
}

#[test]
fn test_lexer_rejects_control_characters() {
    assert!(Lexer::is_valid_token("x-forwarded-for"));
    assert!(!Lexer::is_valid_token(""));
    assert!(!Lexer::is_valid_token("a\tb"));
    assert!(!Lexer::is_valid_token("a,b"));

    let mut lexer = Lexer::new("\"bad\u{7}quote\"");
    assert_eq!(lexer.scan().kind(), TokenKind::Error);
}

// --- Scalar parsers ---

#[test]
fn test_scalar_parsers() {
    assert_eq!(try_parse_token(" gzip "), Some("gzip".to_string()));
    assert_eq!(try_parse_token("a b"), None);

    assert_eq!(try_parse_int("42"), Some(42));
    assert_eq!(try_parse_int("-1"), None);
    assert_eq!(try_parse_int("99999999999"), None);

    assert_eq!(try_parse_time_span_seconds("90"), Some(Duration::from_secs(90)));
    assert_eq!(try_parse_time_span_seconds("1.5"), None);

    assert_eq!(try_parse_date("Sun, 06 Nov 1994 08:49:37 GMT"), Some(utc(1994, 11, 6, 8, 49, 37)));
    assert_eq!(try_parse_date("Sunday, 06-Nov-94 08:49:37 GMT"), Some(utc(1994, 11, 6, 8, 49, 37)));
    assert_eq!(try_parse_date("Sun Nov  6 08:49:37 1994"), Some(utc(1994, 11, 6, 8, 49, 37)));
    assert_eq!(try_parse_date("yesterday"), None);
}

#[test]
fn test_md5_host_and_email() {
    let digest = try_parse_md5("Q2hlY2sgSW50ZWdyaXR5IQ==").unwrap();
    assert_eq!(digest, b"Check Integrity!");
    assert_eq!(format_md5(&digest), "Q2hlY2sgSW50ZWdyaXR5IQ==");
    assert_eq!(try_parse_md5("not base64!"), None);

    assert_eq!(try_parse_host("example.com:80"), Some("example.com:80".to_string()));
    assert_eq!(try_parse_host("example.com/path"), None);
    assert_eq!(try_parse_host(""), None);

    assert_eq!(try_parse_email("user@example.com"), Some("user@example.com".to_string()));
    assert!(try_parse_email("User <user@example.com>").is_some());
    assert_eq!(try_parse_email("no-at-sign"), None);
}

// --- Name/value pairs ---

#[test]
fn test_name_value_roundtrip() {
    let plain = NameValueHeaderValue::with_value("level", "1").unwrap();
    let quoted = NameValueHeaderValue::with_value("title", "\"Hello, world\"").unwrap();
    let bare = NameValueHeaderValue::new("secure").unwrap();
    assert_display_parses_back(&plain);
    assert_display_parses_back(&quoted);
    assert_display_parses_back(&bare);

    assert_parses_ok("LEVEL = 1", plain);
    assert_parse_fails::<NameValueHeaderValue>("a=b=c");
    assert_parse_fails::<NameValueHeaderValue>("a; b");
}

#[test]
fn test_name_value_with_parameters() {
    let mut expectation = NameValueWithParametersHeaderValue::with_value("foo", "bar").unwrap();
    expectation
        .parameters_mut()
        .push(NameValueHeaderValue::with_value("x", "\"y\"").unwrap());
    assert_eq!(expectation.to_string(), "foo=bar; x=\"y\"");
    assert_display_parses_back(&expectation);

    assert_parse_fails::<NameValueWithParametersHeaderValue>("foo;");
    assert_parse_fails::<NameValueWithParametersHeaderValue>(";x=y");
}

// --- Weighted strings and transfer codings ---

#[test]
fn test_string_with_quality() {
    let weighted = StringWithQualityHeaderValue::with_quality("en-US", 0.8).unwrap();
    assert_eq!(weighted.to_string(), "en-US; q=0.8");
    assert_display_parses_back(&weighted);

    assert_formats_as::<StringWithQualityHeaderValue>("gzip;q=1", "gzip; q=1.0");
    assert_formats_as::<StringWithQualityHeaderValue>("*;Q=0.001", "*; q=0.001");
    assert_parses_ok("DEFLATE", StringWithQualityHeaderValue::new("deflate").unwrap());

    assert_parse_fails::<StringWithQualityHeaderValue>("gzip;q=1.1");
    assert_parse_fails::<StringWithQualityHeaderValue>("gzip;level=1");
    assert_parse_fails::<StringWithQualityHeaderValue>("gzip;q=");
    assert!(matches!(
        StringWithQualityHeaderValue::with_quality("gzip", 2.0),
        Err(Error::OutOfRange { name: "quality", .. })
    ));
}

#[test]
fn test_transfer_codings() {
    let mut coding = TransferCodingHeaderValue::new("gzip").unwrap();
    coding
        .parameters_mut()
        .push(NameValueHeaderValue::with_value("level", "9").unwrap());
    assert_display_parses_back(&coding);
    assert_parses_ok("GZIP ; level=9", coding);
    assert_parse_fails::<TransferCodingHeaderValue>("gzip, chunked");

    let te = TransferCodingWithQualityHeaderValue::with_quality("trailers", 0.5).unwrap();
    assert_eq!(te.quality(), Some(0.5));
    assert_eq!(te.to_string(), "trailers; q=0.5");
    assert_display_parses_back(&te);
    assert!(TransferCodingWithQualityHeaderValue::with_quality("trailers", 1.01).is_err());
}

// --- URIs ---

#[test]
fn test_header_uri() {
    let absolute: HeaderUri = "https://example.com/docs?page=2".parse().unwrap();
    assert!(absolute.is_absolute());
    assert_display_parses_back(&absolute);

    let relative: HeaderUri = "../images/logo.png".parse().unwrap();
    assert!(!relative.is_absolute());
    assert_eq!(relative.as_str(), "../images/logo.png");
    assert_display_parses_back(&relative);

    assert_parse_fails::<HeaderUri>("");
    assert_parse_fails::<HeaderUri>("/with space");
    assert_parse_fails::<HeaderUri>("http://");
}
