//! The known HTTP/1.1 headers.
//!
//! Names, message kinds, cardinality and value grammar follow RFC 7230–7235.

use crate::headers::header_info::HeaderInfo;
use crate::headers::header_info::HeaderKind as K;
use crate::headers::value::{parsed, parsed_list, HeaderValue};
use crate::parser::collection::try_parse_tokens;
use crate::parser::primitives::{
    try_parse_date, try_parse_email, try_parse_host, try_parse_int, try_parse_long,
    try_parse_md5, try_parse_time_span_seconds, try_parse_uri,
};
use crate::types::{
    AuthenticationHeaderValue, CacheControlHeaderValue, ContentDispositionHeaderValue,
    ContentRangeHeaderValue, EntityTagHeaderValue, MediaTypeHeaderValue,
    MediaTypeWithQualityHeaderValue, NameValueHeaderValue, NameValueWithParametersHeaderValue,
    ProductHeaderValue, ProductInfoHeaderValue, RangeConditionHeaderValue, RangeHeaderValue,
    RetryConditionHeaderValue, StringWithQualityHeaderValue, TransferCodingHeaderValue,
    TransferCodingWithQualityHeaderValue, ViaHeaderValue, WarningHeaderValue,
};

const LIST: &str = ", ";
const SPACE: &str = " ";

fn tokens(input: &str, minimal_count: usize) -> Option<Vec<HeaderValue>> {
    parsed_list(try_parse_tokens(input, minimal_count))
}

fn date(input: &str) -> Option<HeaderValue> {
    parsed(try_parse_date(input))
}

fn uri(input: &str) -> Option<HeaderValue> {
    parsed(try_parse_uri(input))
}

fn authentication(input: &str) -> Option<HeaderValue> {
    parsed(AuthenticationHeaderValue::try_parse(input))
}

fn authentication_list(input: &str, minimal_count: usize) -> Option<Vec<HeaderValue>> {
    parsed_list(AuthenticationHeaderValue::try_parse_list(input, minimal_count))
}

fn entity_tag_list(input: &str, minimal_count: usize) -> Option<Vec<HeaderValue>> {
    parsed_list(EntityTagHeaderValue::try_parse_list(input, minimal_count))
}

fn string_with_quality_list(input: &str, minimal_count: usize) -> Option<Vec<HeaderValue>> {
    parsed_list(StringWithQualityHeaderValue::try_parse_list(input, minimal_count))
}

fn product_info_list(input: &str, minimal_count: usize) -> Option<Vec<HeaderValue>> {
    parsed_list(ProductInfoHeaderValue::try_parse_list(input, minimal_count))
}

// Request

pub static ACCEPT: HeaderInfo = HeaderInfo::many("Accept", K::REQUEST, LIST, 1, |s, n| {
    parsed_list(MediaTypeWithQualityHeaderValue::try_parse_list(s, n))
});
pub static ACCEPT_CHARSET: HeaderInfo =
    HeaderInfo::many("Accept-Charset", K::REQUEST, LIST, 1, string_with_quality_list);
pub static ACCEPT_ENCODING: HeaderInfo =
    HeaderInfo::many("Accept-Encoding", K::REQUEST, LIST, 1, string_with_quality_list);
pub static ACCEPT_LANGUAGE: HeaderInfo =
    HeaderInfo::many("Accept-Language", K::REQUEST, LIST, 1, string_with_quality_list);
pub static AUTHORIZATION: HeaderInfo =
    HeaderInfo::single("Authorization", K::REQUEST, authentication);
pub static EXPECT: HeaderInfo = HeaderInfo::many("Expect", K::REQUEST, LIST, 1, |s, n| {
    parsed_list(NameValueWithParametersHeaderValue::try_parse_list(s, n))
});
pub static FROM: HeaderInfo = HeaderInfo::single("From", K::REQUEST, |s| parsed(try_parse_email(s)));
pub static HOST: HeaderInfo = HeaderInfo::single("Host", K::REQUEST, |s| parsed(try_parse_host(s)));
pub static IF_MATCH: HeaderInfo = HeaderInfo::many("If-Match", K::REQUEST, LIST, 1, entity_tag_list);
pub static IF_MODIFIED_SINCE: HeaderInfo = HeaderInfo::single("If-Modified-Since", K::REQUEST, date);
pub static IF_NONE_MATCH: HeaderInfo =
    HeaderInfo::many("If-None-Match", K::REQUEST, LIST, 1, entity_tag_list);
pub static IF_RANGE: HeaderInfo = HeaderInfo::single("If-Range", K::REQUEST, |s| {
    parsed(RangeConditionHeaderValue::try_parse(s))
});
pub static IF_UNMODIFIED_SINCE: HeaderInfo =
    HeaderInfo::single("If-Unmodified-Since", K::REQUEST, date);
pub static MAX_FORWARDS: HeaderInfo =
    HeaderInfo::single("Max-Forwards", K::REQUEST, |s| parsed(try_parse_int(s)));
pub static PROXY_AUTHORIZATION: HeaderInfo =
    HeaderInfo::single("Proxy-Authorization", K::REQUEST, authentication);
pub static RANGE: HeaderInfo =
    HeaderInfo::single("Range", K::REQUEST, |s| parsed(RangeHeaderValue::try_parse(s)));
pub static REFERER: HeaderInfo = HeaderInfo::single("Referer", K::REQUEST, uri);
pub static TE: HeaderInfo = HeaderInfo::many("TE", K::REQUEST, LIST, 0, |s, n| {
    parsed_list(TransferCodingWithQualityHeaderValue::try_parse_list(s, n))
});
pub static USER_AGENT: HeaderInfo =
    HeaderInfo::many("User-Agent", K::REQUEST, SPACE, 1, product_info_list);

// Response

pub static ACCEPT_RANGES: HeaderInfo = HeaderInfo::many("Accept-Ranges", K::RESPONSE, LIST, 1, tokens);
pub static AGE: HeaderInfo =
    HeaderInfo::single("Age", K::RESPONSE, |s| parsed(try_parse_time_span_seconds(s)));
pub static ETAG: HeaderInfo =
    HeaderInfo::single("ETag", K::RESPONSE, |s| parsed(EntityTagHeaderValue::try_parse(s)));
pub static LOCATION: HeaderInfo = HeaderInfo::single("Location", K::RESPONSE, uri);
pub static PROXY_AUTHENTICATE: HeaderInfo =
    HeaderInfo::many("Proxy-Authenticate", K::RESPONSE, LIST, 1, authentication_list);
pub static RETRY_AFTER: HeaderInfo = HeaderInfo::single("Retry-After", K::RESPONSE, |s| {
    parsed(RetryConditionHeaderValue::try_parse(s))
});
pub static SERVER: HeaderInfo = HeaderInfo::many("Server", K::RESPONSE, SPACE, 1, product_info_list);
pub static VARY: HeaderInfo = HeaderInfo::many("Vary", K::RESPONSE, LIST, 1, tokens);
pub static WWW_AUTHENTICATE: HeaderInfo =
    HeaderInfo::many("WWW-Authenticate", K::RESPONSE, LIST, 1, authentication_list);

// Request and response

pub static CACHE_CONTROL: HeaderInfo = HeaderInfo::single("Cache-Control", K::GENERAL, |s| {
    parsed(CacheControlHeaderValue::try_parse(s))
});
pub static CONNECTION: HeaderInfo = HeaderInfo::many("Connection", K::GENERAL, LIST, 1, tokens);
pub static DATE: HeaderInfo = HeaderInfo::single("Date", K::GENERAL, date);
pub static PRAGMA: HeaderInfo = HeaderInfo::many("Pragma", K::GENERAL, LIST, 1, |s, n| {
    parsed_list(NameValueHeaderValue::try_parse_list(s, n))
});
pub static TRAILER: HeaderInfo = HeaderInfo::many("Trailer", K::GENERAL, LIST, 1, tokens);
pub static TRANSFER_ENCODING: HeaderInfo =
    HeaderInfo::many("Transfer-Encoding", K::GENERAL, LIST, 1, |s, n| {
        parsed_list(TransferCodingHeaderValue::try_parse_list(s, n))
    });
pub static UPGRADE: HeaderInfo = HeaderInfo::many("Upgrade", K::GENERAL, LIST, 1, |s, n| {
    parsed_list(ProductHeaderValue::try_parse_list(s, n))
});
pub static VIA: HeaderInfo = HeaderInfo::many("Via", K::GENERAL, LIST, 1, |s, n| {
    parsed_list(ViaHeaderValue::try_parse_list(s, n))
});
pub static WARNING: HeaderInfo = HeaderInfo::many("Warning", K::GENERAL, LIST, 1, |s, n| {
    parsed_list(WarningHeaderValue::try_parse_list(s, n))
});

// Content

pub static ALLOW: HeaderInfo = HeaderInfo::many("Allow", K::CONTENT, LIST, 0, tokens);
pub static CONTENT_DISPOSITION: HeaderInfo =
    HeaderInfo::single("Content-Disposition", K::CONTENT, |s| {
        parsed(ContentDispositionHeaderValue::try_parse(s))
    });
pub static CONTENT_ENCODING: HeaderInfo =
    HeaderInfo::many("Content-Encoding", K::CONTENT, LIST, 1, tokens);
pub static CONTENT_LANGUAGE: HeaderInfo =
    HeaderInfo::many("Content-Language", K::CONTENT, LIST, 1, tokens);
pub static CONTENT_LENGTH: HeaderInfo =
    HeaderInfo::single("Content-Length", K::CONTENT, |s| parsed(try_parse_long(s)));
pub static CONTENT_LOCATION: HeaderInfo = HeaderInfo::single("Content-Location", K::CONTENT, uri);
pub static CONTENT_MD5: HeaderInfo =
    HeaderInfo::single("Content-MD5", K::CONTENT, |s| parsed(try_parse_md5(s)));
pub static CONTENT_RANGE: HeaderInfo = HeaderInfo::single("Content-Range", K::CONTENT, |s| {
    parsed(ContentRangeHeaderValue::try_parse(s))
});
pub static CONTENT_TYPE: HeaderInfo = HeaderInfo::single("Content-Type", K::CONTENT, |s| {
    parsed(MediaTypeHeaderValue::try_parse(s))
});
pub static EXPIRES: HeaderInfo = HeaderInfo::single("Expires", K::CONTENT, date);
pub static LAST_MODIFIED: HeaderInfo = HeaderInfo::single("Last-Modified", K::CONTENT, date);

/// Every known header, in registry order.
pub static ALL: &[&HeaderInfo] = &[
    &ACCEPT,
    &ACCEPT_CHARSET,
    &ACCEPT_ENCODING,
    &ACCEPT_LANGUAGE,
    &AUTHORIZATION,
    &EXPECT,
    &FROM,
    &HOST,
    &IF_MATCH,
    &IF_MODIFIED_SINCE,
    &IF_NONE_MATCH,
    &IF_RANGE,
    &IF_UNMODIFIED_SINCE,
    &MAX_FORWARDS,
    &PROXY_AUTHORIZATION,
    &RANGE,
    &REFERER,
    &TE,
    &USER_AGENT,
    &ACCEPT_RANGES,
    &AGE,
    &ETAG,
    &LOCATION,
    &PROXY_AUTHENTICATE,
    &RETRY_AFTER,
    &SERVER,
    &VARY,
    &WWW_AUTHENTICATE,
    &CACHE_CONTROL,
    &CONNECTION,
    &DATE,
    &PRAGMA,
    &TRAILER,
    &TRANSFER_ENCODING,
    &UPGRADE,
    &VIA,
    &WARNING,
    &ALLOW,
    &CONTENT_DISPOSITION,
    &CONTENT_ENCODING,
    &CONTENT_LANGUAGE,
    &CONTENT_LENGTH,
    &CONTENT_LOCATION,
    &CONTENT_MD5,
    &CONTENT_RANGE,
    &CONTENT_TYPE,
    &EXPIRES,
    &LAST_MODIFIED,
];
