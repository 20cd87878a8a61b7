// Tests for typed list views over header values

use http_headers_core::prelude::*;

#[test]
fn test_add_remove_contains() {
    let mut request = HttpRequestHeaders::new();
    let gzip = StringWithQualityHeaderValue::new("gzip").unwrap();
    let br = StringWithQualityHeaderValue::with_quality("br", 0.5).unwrap();

    {
        let mut encodings = request.accept_encoding();
        assert_eq!(encodings.header_name(), "Accept-Encoding");
        encodings.add(gzip.clone()).unwrap();
        encodings.add(br.clone()).unwrap();
        assert!(encodings.contains(&gzip));
        assert_eq!(encodings.len(), 2);
        assert_eq!(encodings.to_string(), "gzip, br; q=0.5");

        assert!(encodings.remove(&gzip));
        assert!(!encodings.remove(&gzip));
        assert!(!encodings.contains(&gzip));
    }

    assert_eq!(request.get_values("Accept-Encoding").unwrap(), vec!["br; q=0.5"]);
}

#[test]
fn test_parse_add_is_all_or_nothing() {
    let mut response = HttpResponseHeaders::new();
    let mut vary = response.vary();
    vary.parse_add("Accept, Accept-Language").unwrap();
    assert!(matches!(
        vary.parse_add("Cookie, not valid"),
        Err(Error::InvalidHeaderValue { .. })
    ));
    assert!(!vary.try_parse_add(""));
    assert!(vary.try_parse_add("Origin"));

    let names: Vec<&String> = vary.iter().collect();
    assert_eq!(names, vec!["Accept", "Accept-Language", "Origin"]);
}

#[test]
fn test_clear_drops_invalid_values() {
    let mut response = HttpResponseHeaders::new();
    response.try_add_without_validation("Accept-Ranges", "bytes");
    response.try_add_without_validation("Accept-Ranges", "by tes");

    {
        let mut ranges = response.accept_ranges();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges.invalid_values(), &["by tes".to_string()]);
        ranges.clear();
        assert!(ranges.is_empty());
        assert!(ranges.invalid_values().is_empty());
    }

    assert!(!response.contains("Accept-Ranges"));
    assert_eq!(response.to_string(), "");
}

#[test]
fn test_values_that_do_not_format_back_are_rejected() {
    let mut content = HttpContentHeaders::new();
    let mut allow = content.allow();
    assert!(allow.add("GET".to_string()).is_ok());
    assert!(matches!(
        allow.add("GET POST".to_string()),
        Err(Error::InvalidHeaderValue { .. })
    ));
    assert_eq!(allow.len(), 1);
}

#[test]
fn test_one_add_stores_one_value() {
    let mut response = HttpResponseHeaders::new();
    {
        let mut vary = response.vary();
        assert!(matches!(
            vary.add("Accept, Cookie".to_string()),
            Err(Error::InvalidHeaderValue { .. })
        ));
        vary.add("Accept".to_string()).unwrap();
        assert_eq!(vary.len(), 1);
    }
    assert!(response.set_value("Vary", Some("Accept, Cookie".to_string())).is_err());
    assert_eq!(response.get_values("Vary").unwrap(), vec!["Accept"]);
}

#[test]
fn test_typed_view_through_generic_headers() {
    let mut headers = HttpHeaders::new();
    headers.add("Upgrade", "HTTP/2.0, websocket").unwrap();

    let upgrade = headers.get_values_typed::<ProductHeaderValue>("upgrade").unwrap();
    let names: Vec<&str> = upgrade.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["HTTP", "websocket"]);

    // The header's values are products, so a text view sees nothing
    let as_text = headers.get_values_typed::<String>("Upgrade").unwrap();
    assert_eq!(as_text.len(), 0);
    assert!(as_text.is_empty());
    assert_eq!(as_text.iter().count(), 0);
}

#[test]
fn test_single_header_cannot_be_viewed_as_list() {
    let mut headers = HttpHeaders::new();
    assert!(matches!(
        headers.get_values_typed::<EntityTagHeaderValue>("ETag"),
        Err(Error::SingleValueHeader(_))
    ));
}

#[test]
fn test_flags_keep_other_values() {
    let mut response = HttpResponseHeaders::new();
    response.add("Transfer-Encoding", "gzip, CHUNKED").unwrap();
    assert!(response.transfer_encoding_chunked());

    response.set_transfer_encoding_chunked(false);
    assert!(!response.transfer_encoding_chunked());
    assert_eq!(response.get_values("Transfer-Encoding").unwrap(), vec!["gzip"]);

    response.set_transfer_encoding_chunked(true);
    assert_eq!(response.to_string(), "Transfer-Encoding: gzip, chunked\r\n");
}
