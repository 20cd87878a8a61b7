//! # Prelude
//!
//! The `http_headers_core` prelude brings the most common types and traits into scope.
//!
//! This is typically imported with `use http_headers_core::prelude::*;`

pub use crate::error::{Error, Result};
pub use crate::headers::{
    HeaderKind, HeaderValue, HttpContentHeaders, HttpHeaderValueCollection, HttpHeaders,
    HttpRequestHeaders, HttpResponseHeaders, TypedHeaderValue,
};
pub use crate::parser::{Lexer, Token, TokenKind};
pub use crate::types::{
    AuthenticationHeaderValue, CacheControlHeaderValue, ContentDispositionHeaderValue,
    ContentRangeHeaderValue, EntityTagHeaderValue, HeaderUri, MediaTypeHeaderValue,
    MediaTypeWithQualityHeaderValue, NameValueHeaderValue, NameValueWithParametersHeaderValue,
    ProductHeaderValue, ProductInfoHeaderValue, RangeConditionHeaderValue, RangeHeaderValue,
    RangeItemHeaderValue, RetryConditionHeaderValue, StringWithQualityHeaderValue,
    TransferCodingHeaderValue, TransferCodingWithQualityHeaderValue, ViaHeaderValue,
    WarningHeaderValue,
};
