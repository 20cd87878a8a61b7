// Tests for HttpHeaders and the message-part collections

use std::time::Duration;

use crate::common::{init_tracing, utc};
use http_headers_core::prelude::*;

#[test]
fn test_request_message_roundtrip() {
    init_tracing();
    let raw = [
        ("Host", "www.example.com"),
        ("User-Agent", "Mozilla/5.0 (Windows NT 10.0) Gecko/20100101 Firefox/118.0"),
        ("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        ("Accept-Language", "en-US,en;q=0.5"),
        ("If-None-Match", "\"abc\", W/\"def\""),
        ("X-Request-Id", "42"),
    ];

    let mut request = HttpRequestHeaders::new();
    for (name, value) in raw {
        request.add(name, value).unwrap();
    }

    assert_eq!(request.host(), Some("www.example.com"));
    assert_eq!(request.user_agent().len(), 4);
    assert_eq!(request.accept_language().iter().nth(1).and_then(|l| l.quality()), Some(0.5));
    assert!(request.if_none_match().iter().any(|tag| tag.is_weak()));
    assert_eq!(request.get_values("x-request-id").unwrap(), vec!["42"]);

    assert_eq!(
        request.to_string(),
        "Host: www.example.com\r\n\
         User-Agent: Mozilla/5.0 (Windows NT 10.0) Gecko/20100101 Firefox/118.0\r\n\
         Accept: text/html, application/xhtml+xml; q=0.9, */*; q=0.8\r\n\
         Accept-Language: en-US, en; q=0.5\r\n\
         If-None-Match: \"abc\", W/\"def\"\r\n\
         X-Request-Id: 42\r\n"
    );
}

#[test]
fn test_response_message_with_dates() {
    let mut response = HttpResponseHeaders::new();
    response.add("Date", "Tue, 15 Nov 1994 08:12:31 GMT").unwrap();
    response.add("Retry-After", "Fri, 31 Dec 1999 23:59:59 GMT").unwrap();
    response.add("Warning", "110 cache \"stale\", 112 - \"disconnected\"").unwrap();

    assert_eq!(response.date(), Some(&utc(1994, 11, 15, 8, 12, 31)));
    assert_eq!(
        response.retry_after().and_then(|r| r.date()).copied(),
        Some(utc(1999, 12, 31, 23, 59, 59))
    );
    assert_eq!(response.warning().len(), 2);

    response.set_date(None);
    assert!(!response.contains("Date"));
}

#[test]
fn test_names_are_case_insensitive_and_keep_first_spelling() {
    let mut headers = HttpHeaders::new();
    headers.add("x-custom", "a").unwrap();
    headers.add("X-CUSTOM", "b").unwrap();
    headers.add("vary", "Accept").unwrap();

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get_values("X-Custom").unwrap(), vec!["a", "b"]);
    assert_eq!(headers.to_string(), "x-custom: a, b\r\nVary: Accept\r\n");
}

#[test]
fn test_values_are_trimmed_on_validating_add() {
    let mut headers = HttpHeaders::new();
    headers.add("X-Padded", "   value\t").unwrap();
    headers.add("Content-Length", "  12  ").unwrap();
    assert_eq!(headers.get_values("X-Padded").unwrap(), vec!["value"]);
    assert_eq!(headers.get_value::<i64>("Content-Length"), Some(&12));
}

#[test]
fn test_add_values_stops_at_first_error() {
    let mut headers = HttpHeaders::new();
    let result = headers.add_values("If-Match", ["\"a\"", "bad", "\"c\""]);
    assert!(matches!(result, Err(Error::InvalidHeaderValue { .. })));
    assert_eq!(headers.get_values("If-Match").unwrap(), vec!["\"a\""]);
}

#[test]
fn test_invalid_values_survive_typed_reads() {
    let mut headers = HttpHeaders::new();
    headers.try_add_values_without_validation("Accept-Encoding", ["gzip", "q=bad;", "br;q=0.1"]);

    {
        let encodings = headers.get_values_typed::<StringWithQualityHeaderValue>("Accept-Encoding").unwrap();
        let names: Vec<&str> = encodings.iter().map(|e| e.value()).collect();
        assert_eq!(names, vec!["gzip", "br"]);
        assert_eq!(encodings.invalid_values(), &["q=bad;".to_string()]);
    }

    assert_eq!(
        headers.get_values("Accept-Encoding").unwrap(),
        vec!["gzip", "br; q=0.1", "q=bad;"]
    );
}

#[test]
fn test_second_raw_value_of_single_header_is_kept_as_invalid() {
    let mut headers = HttpHeaders::new();
    headers.try_add_without_validation("Location", "/first");
    headers.try_add_without_validation("Location", "/second");

    let location = headers.get_value::<HeaderUri>("Location").unwrap();
    assert_eq!(location.as_str(), "/first");
    assert_eq!(headers.get_values("Location").unwrap(), vec!["/first", "/second"]);
}

#[test]
fn test_typed_read_with_wrong_type_is_none() {
    let mut headers = HttpHeaders::new();
    headers.add("Age", "5").unwrap();
    assert_eq!(headers.get_value::<i32>("Age"), None);
    assert_eq!(headers.get_value::<Duration>("Age"), Some(&Duration::from_secs(5)));
    assert_eq!(headers.get_value::<String>("X-Unknown"), None);
}

#[test]
fn test_set_value_on_unknown_and_list_headers() {
    let mut headers = HttpHeaders::new();
    headers.set_value("X-Version", Some("1.2".to_string())).unwrap();
    assert_eq!(headers.get_values("X-Version").unwrap(), vec!["1.2"]);

    headers.add("Vary", "Accept, Cookie").unwrap();
    headers.set_value("Vary", Some("Origin".to_string())).unwrap();
    assert_eq!(headers.get_values("Vary").unwrap(), vec!["Origin"]);

    assert!(matches!(
        headers.set_value("Vary", Some("not a token".to_string())),
        Err(Error::InvalidHeaderValue { .. })
    ));
    assert!(matches!(
        headers.set_value("Content-Type", Some("text/plain".to_string())),
        Err(Error::InvalidHeaderValue { .. })
    ));
    headers
        .set_value("Content-Type", MediaTypeHeaderValue::try_parse("text/plain"))
        .unwrap();
    assert_eq!(headers.get_values("Content-Type").unwrap(), vec!["text/plain"]);
}

#[test]
fn test_general_collection_accepts_everything() {
    let mut headers = HttpHeaders::new();
    assert_eq!(headers.kind(), HeaderKind::NONE);
    headers.add("Host", "a.example").unwrap();
    headers.add("ETag", "\"x\"").unwrap();
    headers.add("Content-Type", "text/plain").unwrap();
    assert_eq!(headers.len(), 3);
}

#[test]
fn test_request_and_response_headers_cross_over_opaquely() {
    let mut response = HttpResponseHeaders::new();
    response.add("User-Agent", "not (valid").unwrap();
    assert_eq!(response.get_values("User-Agent").unwrap(), vec!["not (valid"]);

    let mut request = HttpRequestHeaders::new();
    request.add("Location", "/a").unwrap();
    request.add("Location", "/b").unwrap();
    assert_eq!(request.get_values("Location").unwrap(), vec!["/a", "/b"]);
    assert_eq!(request.get_value::<HeaderUri>("Location"), None);
}

#[test]
fn test_content_headers_roundtrip() {
    let mut content = HttpContentHeaders::new();
    content
        .add("Content-Disposition", "attachment; filename=\"a b.txt\"")
        .unwrap();
    content.add("Last-Modified", "Wed, 21 Oct 2015 07:28:00 GMT").unwrap();
    content.add("Content-Language", "en, de").unwrap();

    assert_eq!(
        content.content_disposition().and_then(|cd| cd.file_name()).as_deref(),
        Some("a b.txt")
    );
    assert_eq!(content.last_modified(), Some(&utc(2015, 10, 21, 7, 28, 0)));
    assert_eq!(content.content_language().len(), 2);

    content.set_content_md5(Some(vec![0xde, 0xad, 0xbe, 0xef]));
    assert_eq!(content.get_values("Content-MD5").unwrap(), vec!["3q2+7w=="]);
}

#[test]
fn test_clone_is_independent() {
    let mut original = HttpRequestHeaders::new();
    original.add("Accept", "text/plain").unwrap();
    let mut copy = original.clone();
    copy.accept().parse_add("text/html").unwrap();

    assert_eq!(original.accept().len(), 1);
    assert_eq!(copy.accept().len(), 2);
}
