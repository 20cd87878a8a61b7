// Tests for media types and Accept entries

use crate::common::{assert_display_parses_back, assert_formats_as, assert_parse_fails, assert_parses_ok};
use http_headers_core::types::{MediaTypeHeaderValue, MediaTypeWithQualityHeaderValue, NameValueHeaderValue};
use http_headers_core::Error;

#[test]
fn test_media_type_parse_and_display() {
    let mut expected = MediaTypeHeaderValue::new("multipart/form-data").unwrap();
    expected
        .parameters_mut()
        .push(NameValueHeaderValue::with_value("boundary", "\"--abc\"").unwrap());

    assert_parses_ok("multipart/form-data; boundary=\"--abc\"", expected.clone());
    assert_parses_ok("multipart/form-data ;boundary=\"--abc\"", expected.clone());
    assert_display_parses_back(&expected);

    assert_formats_as::<MediaTypeHeaderValue>("text/html;charset=utf-8", "text/html; charset=utf-8");
    assert_formats_as::<MediaTypeHeaderValue>("  application/json  ", "application/json");
}

#[test]
fn test_media_type_failures() {
    assert_parse_fails::<MediaTypeHeaderValue>("");
    assert_parse_fails::<MediaTypeHeaderValue>("text");
    assert_parse_fails::<MediaTypeHeaderValue>("/plain");
    assert_parse_fails::<MediaTypeHeaderValue>("text/plain/extra");
    assert_parse_fails::<MediaTypeHeaderValue>("text/plain; charset=");
    assert_parse_fails::<MediaTypeHeaderValue>("text/plain, application/json");
}

#[test]
fn test_media_type_construction_errors() {
    assert_eq!(MediaTypeHeaderValue::new(""), Err(Error::EmptyValue("media_type")));
    assert!(matches!(MediaTypeHeaderValue::new("text"), Err(Error::InvalidFormat(_))));
    assert!(matches!(MediaTypeHeaderValue::new("text/plain; a=b"), Err(Error::InvalidFormat(_))));

    let mut mt = MediaTypeHeaderValue::new("text/plain").unwrap();
    assert!(mt.set_char_set(Some("not valid")).is_err());
    mt.set_char_set(Some("\"quoted\"")).unwrap();
    assert_eq!(mt.char_set(), Some("\"quoted\""));
}

#[test]
fn test_char_set_is_found_case_insensitively() {
    let mt: MediaTypeHeaderValue = "text/plain; CHARSET=latin1; format=flowed".parse().unwrap();
    assert_eq!(mt.char_set(), Some("latin1"));

    let mut mt = mt;
    mt.set_char_set(Some("utf-8")).unwrap();
    assert_eq!(mt.to_string(), "text/plain; CHARSET=utf-8; format=flowed");
}

#[test]
fn test_quality_entries() {
    let entry = MediaTypeWithQualityHeaderValue::with_quality("text/*", 0.25).unwrap();
    assert_eq!(entry.to_string(), "text/*; q=0.25");
    assert_display_parses_back(&entry);

    let parsed: MediaTypeWithQualityHeaderValue = "application/xml;q=0.9".parse().unwrap();
    assert_eq!(parsed.quality(), Some(0.9));
    assert_eq!(parsed.media_type(), "application/xml");

    assert!(MediaTypeWithQualityHeaderValue::with_quality("text/*", 1.5).is_err());
    assert!(MediaTypeWithQualityHeaderValue::with_quality("text/*", -0.1).is_err());

    let mut unweighted = MediaTypeWithQualityHeaderValue::new("image/png").unwrap();
    assert_eq!(unweighted.quality(), None);
    unweighted.set_quality(Some(1.0)).unwrap();
    assert_eq!(unweighted.quality(), Some(1.0));
    unweighted.set_quality(None).unwrap();
    assert!(unweighted.parameters().is_empty());
}

#[test]
fn test_quality_keeps_three_decimals() {
    let entry = MediaTypeWithQualityHeaderValue::with_quality("text/plain", 0.1234).unwrap();
    assert_eq!(entry.quality(), Some(0.123));
    assert_eq!(entry.to_string(), "text/plain; q=0.123");
    assert_display_parses_back(&entry);

    assert!(matches!(
        MediaTypeWithQualityHeaderValue::with_quality("text/plain", f64::NAN),
        Err(Error::OutOfRange { name: "quality", .. })
    ));
}
