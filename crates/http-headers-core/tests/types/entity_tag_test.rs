// Tests for entity tags and If-Range conditions

use crate::common::{assert_display_parses_back, assert_parse_fails, assert_parses_ok, utc};
use http_headers_core::types::{EntityTagHeaderValue, RangeConditionHeaderValue};
use http_headers_core::Error;

#[test]
fn test_entity_tag_display_parse_roundtrip() {
    let strong = EntityTagHeaderValue::new("\"686897696a7c876b7e\"").unwrap();
    let weak = EntityTagHeaderValue::with_weakness("\"v1.2\"", true).unwrap();
    assert_display_parses_back(&strong);
    assert_display_parses_back(&weak);
    assert_display_parses_back(&EntityTagHeaderValue::any());

    assert_parses_ok("  W/\"v1.2\" ", weak);
    assert_parses_ok("\"\"", EntityTagHeaderValue::new("\"\"").unwrap());
}

#[test]
fn test_entity_tag_failures() {
    assert_parse_fails::<EntityTagHeaderValue>("");
    assert_parse_fails::<EntityTagHeaderValue>("xyzzy");
    assert_parse_fails::<EntityTagHeaderValue>("W/xyzzy");
    assert_parse_fails::<EntityTagHeaderValue>("\"a\", \"b\"");
    assert_parse_fails::<EntityTagHeaderValue>("\"unterminated");

    assert!(matches!(EntityTagHeaderValue::new("plain"), Err(Error::InvalidFormat(_))));
    assert!(EntityTagHeaderValue::new("\"a\" \"b\"").is_err());
}

#[test]
fn test_any_is_never_weak() {
    let any: EntityTagHeaderValue = "*".parse().unwrap();
    assert!(any.is_any());
    assert!(!any.is_weak());
    assert_eq!(any.to_string(), "*");
}

#[test]
fn test_range_condition() {
    let tag = RangeConditionHeaderValue::from_entity_tag("\"abc\"").unwrap();
    assert_display_parses_back(&tag);
    assert!(RangeConditionHeaderValue::from_entity_tag("abc").is_err());

    let date = RangeConditionHeaderValue::from(utc(2015, 10, 21, 7, 28, 0));
    assert_eq!(date.to_string(), "Wed, 21 Oct 2015 07:28:00 GMT");
    assert_display_parses_back(&date);

    assert_parses_ok(
        "Wednesday, 21-Oct-15 07:28:00 GMT",
        RangeConditionHeaderValue::Date(utc(2015, 10, 21, 7, 28, 0)),
    );
    assert_parse_fails::<RangeConditionHeaderValue>("*");
    assert_parse_fails::<RangeConditionHeaderValue>("W/\"a\" trailing");
}
