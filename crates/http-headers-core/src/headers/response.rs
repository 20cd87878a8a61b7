//! Headers of an HTTP response.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::headers::header_info::HeaderKind;
use crate::headers::http_headers::HttpHeaders;
use crate::headers::known;
use crate::types::{
    AuthenticationHeaderValue, CacheControlHeaderValue, EntityTagHeaderValue, HeaderUri,
    NameValueHeaderValue, ProductHeaderValue, ProductInfoHeaderValue, RetryConditionHeaderValue,
    TransferCodingHeaderValue, ViaHeaderValue, WarningHeaderValue,
};

/// Response headers, with typed accessors for every response and general header.
///
/// Content headers are rejected; request headers are stored without parsing.
#[derive(Debug, Clone)]
pub struct HttpResponseHeaders {
    headers: HttpHeaders,
}

header_collection_wrapper!(HttpResponseHeaders);

impl HttpResponseHeaders {
    pub fn new() -> Self {
        HttpResponseHeaders {
            headers: HttpHeaders::with_kind(HeaderKind::RESPONSE),
        }
    }

    general_headers!();

    list_header!(accept_ranges, known::ACCEPT_RANGES, String);
    list_header!(proxy_authenticate, known::PROXY_AUTHENTICATE, AuthenticationHeaderValue);
    list_header!(server, known::SERVER, ProductInfoHeaderValue);
    list_header!(vary, known::VARY, String);
    list_header!(www_authenticate, known::WWW_AUTHENTICATE, AuthenticationHeaderValue);

    single_header!(
        /// Age of the response in a cache.
        age,
        set_age,
        known::AGE,
        Duration
    );
    single_header!(etag, set_etag, known::ETAG, EntityTagHeaderValue);
    single_header!(location, set_location, known::LOCATION, HeaderUri);
    single_header!(retry_after, set_retry_after, known::RETRY_AFTER, RetryConditionHeaderValue);
}
