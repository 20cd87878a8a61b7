//! Headers that describe a message body.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::headers::header_info::HeaderKind;
use crate::headers::http_headers::HttpHeaders;
use crate::headers::known;
use crate::headers::value::HeaderValue;
use crate::types::{
    ContentDispositionHeaderValue, ContentRangeHeaderValue, HeaderUri, MediaTypeHeaderValue,
};

/// Content headers, with typed accessors for each of them.
///
/// Request and response headers are rejected.
#[derive(Debug, Clone)]
pub struct HttpContentHeaders {
    headers: HttpHeaders,
}

header_collection_wrapper!(HttpContentHeaders);

impl HttpContentHeaders {
    pub fn new() -> Self {
        HttpContentHeaders {
            headers: HttpHeaders::with_kind(HeaderKind::CONTENT),
        }
    }

    list_header!(
        /// Methods supported by the target resource; may be empty.
        allow,
        known::ALLOW,
        String
    );
    list_header!(content_encoding, known::CONTENT_ENCODING, String);
    list_header!(content_language, known::CONTENT_LANGUAGE, String);

    single_header!(
        content_disposition,
        set_content_disposition,
        known::CONTENT_DISPOSITION,
        ContentDispositionHeaderValue
    );
    single_header!(content_location, set_content_location, known::CONTENT_LOCATION, HeaderUri);
    single_header!(content_md5, set_content_md5, known::CONTENT_MD5, Vec<u8>);
    single_header!(content_range, set_content_range, known::CONTENT_RANGE, ContentRangeHeaderValue);
    single_header!(content_type, set_content_type, known::CONTENT_TYPE, MediaTypeHeaderValue);
    single_header!(expires, set_expires, known::EXPIRES, DateTime<Utc>);
    single_header!(last_modified, set_last_modified, known::LAST_MODIFIED, DateTime<Utc>);

    pub fn content_length(&mut self) -> Option<i64> {
        self.headers.typed_value::<i64>(&known::CONTENT_LENGTH).copied()
    }

    /// Sets the body length in bytes, which may not be negative.
    pub fn set_content_length(&mut self, length: Option<i64>) -> Result<()> {
        if let Some(length) = length {
            if length < 0 {
                return Err(Error::out_of_range("content_length", length));
            }
        }
        self.headers.store_value(&known::CONTENT_LENGTH, length.map(HeaderValue::Long));
        Ok(())
    }
}
