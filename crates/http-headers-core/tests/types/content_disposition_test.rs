// Tests for Content-Disposition values

use crate::common::{assert_display_parses_back, assert_parse_fails, assert_parses_ok, utc};
use http_headers_core::types::ContentDispositionHeaderValue;

#[test]
fn test_content_disposition_roundtrip() {
    let mut cd = ContentDispositionHeaderValue::new("attachment").unwrap();
    cd.set_file_name(Some("report 2024.pdf")).unwrap();
    cd.set_size(Some(4096)).unwrap();
    cd.set_creation_date(Some(utc(2024, 2, 29, 12, 0, 0))).unwrap();
    assert_eq!(
        cd.to_string(),
        "attachment; filename=\"report 2024.pdf\"; size=4096; creation-date=\"Thu, 29 Feb 2024 12:00:00 GMT\""
    );
    assert_display_parses_back(&cd);

    let parsed: ContentDispositionHeaderValue = cd.to_string().parse().unwrap();
    assert_eq!(parsed.file_name().as_deref(), Some("report 2024.pdf"));
    assert_eq!(parsed.size(), Some(4096));
    assert_eq!(parsed.creation_date(), Some(utc(2024, 2, 29, 12, 0, 0)));
}

#[test]
fn test_content_disposition_type_is_case_insensitive() {
    assert_parses_ok("INLINE", ContentDispositionHeaderValue::new("inline").unwrap());

    let mut cd = ContentDispositionHeaderValue::new("inline").unwrap();
    assert!(cd.set_disposition_type("").is_err());
    cd.set_disposition_type("attachment").unwrap();
    assert_eq!(cd.disposition_type(), "attachment");
}

#[test]
fn test_content_disposition_failures() {
    assert_parse_fails::<ContentDispositionHeaderValue>("");
    assert_parse_fails::<ContentDispositionHeaderValue>("; filename=a");
    assert_parse_fails::<ContentDispositionHeaderValue>("attachment; filename=");
    assert_parse_fails::<ContentDispositionHeaderValue>("attachment filename=a");
}

#[test]
fn test_already_quoted_names() {
    let mut cd = ContentDispositionHeaderValue::new("form-data").unwrap();
    cd.set_name(Some("\"field 1\"")).unwrap();
    cd.set_file_name(Some("\"photo.jpg\"")).unwrap();
    assert_eq!(cd.to_string(), "form-data; name=\"field 1\"; filename=photo.jpg");
    assert_eq!(cd.name().as_deref(), Some("field 1"));
    assert_display_parses_back(&cd);

    let cd: ContentDispositionHeaderValue = "attachment; filename*=utf-8''%+f".parse().unwrap();
    assert_eq!(cd.file_name_star(), None);
}
