// Tests for the known-header registry

use std::collections::HashSet;

use http_headers_core::headers::{known, lookup, HeaderKind, HeaderValue};

#[test]
fn test_every_known_header_is_registered_once() {
    let mut seen = HashSet::new();
    for info in known::ALL {
        assert!(seen.insert(info.name().to_ascii_lowercase()), "Duplicate header {}", info.name());
        let found = lookup(&info.name().to_ascii_uppercase()).unwrap();
        assert!(std::ptr::eq(found, *info), "Lookup of {} returned another entry", info.name());
        assert!(!info.kind().is_empty(), "{} has no message kind", info.name());
    }
    assert_eq!(seen.len(), 48);
}

#[test]
fn test_kinds() {
    let kind_of = |name: &str| lookup(name).unwrap().kind();
    assert_eq!(kind_of("Host"), HeaderKind::REQUEST);
    assert_eq!(kind_of("ETag"), HeaderKind::RESPONSE);
    assert_eq!(kind_of("Expires"), HeaderKind::CONTENT);
    assert_eq!(kind_of("Via"), HeaderKind::GENERAL);
    assert!(kind_of("Date").contains(HeaderKind::REQUEST | HeaderKind::RESPONSE));
    assert!(!kind_of("Date").intersects(HeaderKind::CONTENT));
}

#[test]
fn test_cardinality_and_separators() {
    let server = lookup("server").unwrap();
    assert!(server.allows_many());
    assert_eq!(server.separator(), " ");

    let accept = lookup("ACCEPT").unwrap();
    assert!(accept.allows_many());
    assert_eq!(accept.separator(), ", ");

    let location = lookup("Location").unwrap();
    assert!(!location.allows_many());
}

#[test]
fn test_minimal_counts() {
    assert_eq!(lookup("Allow").unwrap().parse(""), Some(vec![]));
    assert_eq!(lookup("TE").unwrap().parse(""), Some(vec![]));
    assert_eq!(lookup("Vary").unwrap().parse(""), None);
    assert_eq!(lookup("Accept").unwrap().parse(""), None);
}

#[test]
fn test_registry_parsers_produce_typed_values() {
    let values = lookup("Content-Length").unwrap().parse(" 1024 ").unwrap();
    assert_eq!(values, vec![HeaderValue::Long(1024)]);

    let values = lookup("Max-Forwards").unwrap().parse("3").unwrap();
    assert_eq!(values, vec![HeaderValue::Int(3)]);

    let values = lookup("Age").unwrap().parse("10").unwrap();
    assert_eq!(values, vec![HeaderValue::Seconds(std::time::Duration::from_secs(10))]);

    let values = lookup("Connection").unwrap().parse("keep-alive, Upgrade").unwrap();
    assert_eq!(
        values,
        vec![HeaderValue::Text("keep-alive".to_string()), HeaderValue::Text("Upgrade".to_string())]
    );

    assert!(lookup("Content-Length").unwrap().parse("-1").is_none());
    assert!(lookup("Date").unwrap().parse("tomorrow").is_none());
    assert!(lookup("Host").unwrap().parse("a host").is_none());
}

#[test]
fn test_unknown_names() {
    assert!(lookup("X-Request-Id").is_none());
    assert!(lookup("").is_none());
    assert!(lookup("Content_Type").is_none());
}
