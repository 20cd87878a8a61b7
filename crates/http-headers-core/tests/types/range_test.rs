// Tests for Range, Content-Range and Retry-After values

use std::time::Duration;

use crate::common::{assert_display_parses_back, assert_formats_as, assert_parse_fails, assert_parses_ok, utc};
use http_headers_core::types::{
    ContentRangeHeaderValue, RangeHeaderValue, RangeItemHeaderValue, RetryConditionHeaderValue,
};
use http_headers_core::Error;

#[test]
fn test_range_display_parse_roundtrip() {
    let mut range = RangeHeaderValue::new();
    range.ranges_mut().push(RangeItemHeaderValue::new(Some(0), Some(0)).unwrap());
    range.ranges_mut().push(RangeItemHeaderValue::new(None, Some(1)).unwrap());
    range.ranges_mut().push(RangeItemHeaderValue::new(Some(9500), None).unwrap());
    assert_eq!(range.to_string(), "bytes=0-0, -1, 9500-");
    assert_display_parses_back(&range);

    assert_parses_ok("bytes = 0-0 ,-1, 9500-", range);
    assert_formats_as::<RangeHeaderValue>("items=1-5", "items=1-5");
}

#[test]
fn test_range_failures() {
    assert_parse_fails::<RangeHeaderValue>("");
    assert_parse_fails::<RangeHeaderValue>("=0-1");
    assert_parse_fails::<RangeHeaderValue>("bytes 0-1");
    assert_parse_fails::<RangeHeaderValue>("bytes=0-1,");
    assert_parse_fails::<RangeHeaderValue>("bytes=10-9");
    assert_parse_fails::<RangeHeaderValue>("bytes=--1");
}

#[test]
fn test_range_unit_validation() {
    let mut range = RangeHeaderValue::with_range(Some(1), None).unwrap();
    assert_eq!(range.set_unit(""), Err(Error::EmptyValue("unit")));
    assert!(range.set_unit("by tes").is_err());
    range.set_unit("pages").unwrap();
    assert_eq!(range.to_string(), "pages=1-");
}

#[test]
fn test_content_range_forms() {
    assert_parses_ok(
        "bytes 0-499/1234",
        ContentRangeHeaderValue::with_range_and_length(0, 499, 1234).unwrap(),
    );
    assert_parses_ok("bytes 0-499/*", ContentRangeHeaderValue::with_range(0, 499).unwrap());
    assert_parses_ok("BYTES */1234", ContentRangeHeaderValue::with_length(1234));

    let value = ContentRangeHeaderValue::with_range_and_length(10, 20, 21).unwrap();
    assert!(value.has_range());
    assert!(value.has_length());
    assert_display_parses_back(&value);
}

#[test]
fn test_content_range_failures() {
    assert_parse_fails::<ContentRangeHeaderValue>("");
    assert_parse_fails::<ContentRangeHeaderValue>("bytes");
    assert_parse_fails::<ContentRangeHeaderValue>("bytes 0-499");
    assert_parse_fails::<ContentRangeHeaderValue>("bytes 500-499/1234");
    assert_parse_fails::<ContentRangeHeaderValue>("bytes */");

    assert!(matches!(
        ContentRangeHeaderValue::with_range_and_length(0, 10, 5),
        Err(Error::OutOfRange { name: "length", .. })
    ));
    assert!(matches!(
        ContentRangeHeaderValue::with_range(3, 2),
        Err(Error::OutOfRange { name: "from", .. })
    ));
}

#[test]
fn test_retry_condition() {
    let delta = RetryConditionHeaderValue::from_delta(Duration::from_secs(0)).unwrap();
    assert_display_parses_back(&delta);
    assert_parses_ok("  300 ", RetryConditionHeaderValue::Delta(Duration::from_secs(300)));

    let date = RetryConditionHeaderValue::from(utc(2001, 1, 1, 0, 0, 0));
    assert_eq!(date.to_string(), "Mon, 01 Jan 2001 00:00:00 GMT");
    assert_display_parses_back(&date);

    assert_parse_fails::<RetryConditionHeaderValue>("soon");
    assert_parse_fails::<RetryConditionHeaderValue>("1.5");
    assert_parse_fails::<RetryConditionHeaderValue>("30, 40");
}

#[test]
fn test_retry_delta_formats_back_or_is_rejected() {
    let max = RetryConditionHeaderValue::from_delta(Duration::from_secs(2_147_483_647)).unwrap();
    assert_display_parses_back(&max);

    assert!(matches!(
        RetryConditionHeaderValue::from_delta(Duration::from_secs(3_000_000_000)),
        Err(Error::OutOfRange { name: "delta", .. })
    ));
    assert!(RetryConditionHeaderValue::from_delta(Duration::from_secs_f64(2.5)).is_err());
    assert_parse_fails::<RetryConditionHeaderValue>("3000000000");
}
