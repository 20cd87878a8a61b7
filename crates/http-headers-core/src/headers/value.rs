//! Parsed header values as stored inside a header collection.

use std::fmt;
use std::mem;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parser::lexer::format_http_date;
use crate::parser::primitives::format_md5;
use crate::types::{
    AuthenticationHeaderValue, CacheControlHeaderValue, ContentDispositionHeaderValue,
    ContentRangeHeaderValue, EntityTagHeaderValue, HeaderUri, MediaTypeHeaderValue,
    MediaTypeWithQualityHeaderValue, NameValueHeaderValue, NameValueWithParametersHeaderValue,
    ProductHeaderValue, ProductInfoHeaderValue, RangeConditionHeaderValue, RangeHeaderValue,
    RetryConditionHeaderValue, StringWithQualityHeaderValue, TransferCodingHeaderValue,
    TransferCodingWithQualityHeaderValue, ViaHeaderValue, WarningHeaderValue,
};

/// One parsed value of a known header.
///
/// Scalar headers use the plain variants; structured headers carry their typed
/// value. Which variant a header produces is fixed by its registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeaderValue {
    /// Tokens, hosts and mailboxes
    Text(String),
    Int(i32),
    Long(i64),
    /// Delta-seconds
    Seconds(Duration),
    Date(DateTime<Utc>),
    Uri(HeaderUri),
    /// Raw digest bytes, Base64 on the wire
    Md5(Vec<u8>),
    Authentication(AuthenticationHeaderValue),
    CacheControl(CacheControlHeaderValue),
    ContentDisposition(ContentDispositionHeaderValue),
    ContentRange(ContentRangeHeaderValue),
    EntityTag(EntityTagHeaderValue),
    MediaType(MediaTypeHeaderValue),
    MediaTypeWithQuality(MediaTypeWithQualityHeaderValue),
    NameValue(NameValueHeaderValue),
    NameValueWithParameters(NameValueWithParametersHeaderValue),
    Product(ProductHeaderValue),
    ProductInfo(ProductInfoHeaderValue),
    Range(RangeHeaderValue),
    RangeCondition(RangeConditionHeaderValue),
    RetryCondition(RetryConditionHeaderValue),
    StringWithQuality(StringWithQualityHeaderValue),
    TransferCoding(TransferCodingHeaderValue),
    TransferCodingWithQuality(TransferCodingWithQualityHeaderValue),
    Via(ViaHeaderValue),
    Warning(WarningHeaderValue),
}

impl HeaderValue {
    /// True if both values are the same variant.
    pub fn same_kind(&self, other: &HeaderValue) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Text(text) => f.write_str(text),
            HeaderValue::Int(n) => write!(f, "{}", n),
            HeaderValue::Long(n) => write!(f, "{}", n),
            HeaderValue::Seconds(delta) => write!(f, "{}", delta.as_secs()),
            HeaderValue::Date(date) => f.write_str(&format_http_date(date)),
            HeaderValue::Uri(uri) => write!(f, "{}", uri),
            HeaderValue::Md5(digest) => f.write_str(&format_md5(digest)),
            HeaderValue::Authentication(v) => write!(f, "{}", v),
            HeaderValue::CacheControl(v) => write!(f, "{}", v),
            HeaderValue::ContentDisposition(v) => write!(f, "{}", v),
            HeaderValue::ContentRange(v) => write!(f, "{}", v),
            HeaderValue::EntityTag(v) => write!(f, "{}", v),
            HeaderValue::MediaType(v) => write!(f, "{}", v),
            HeaderValue::MediaTypeWithQuality(v) => write!(f, "{}", v),
            HeaderValue::NameValue(v) => write!(f, "{}", v),
            HeaderValue::NameValueWithParameters(v) => write!(f, "{}", v),
            HeaderValue::Product(v) => write!(f, "{}", v),
            HeaderValue::ProductInfo(v) => write!(f, "{}", v),
            HeaderValue::Range(v) => write!(f, "{}", v),
            HeaderValue::RangeCondition(v) => write!(f, "{}", v),
            HeaderValue::RetryCondition(v) => write!(f, "{}", v),
            HeaderValue::StringWithQuality(v) => write!(f, "{}", v),
            HeaderValue::TransferCoding(v) => write!(f, "{}", v),
            HeaderValue::TransferCodingWithQuality(v) => write!(f, "{}", v),
            HeaderValue::Via(v) => write!(f, "{}", v),
            HeaderValue::Warning(v) => write!(f, "{}", v),
        }
    }
}

/// A Rust type that is stored as one [`HeaderValue`] variant.
///
/// This is what lets [`HttpHeaders::get_value`](crate::headers::HttpHeaders::get_value)
/// and friends hand out typed references into the untyped store.
pub trait TypedHeaderValue: Sized {
    /// Borrows the typed value if `value` holds this type.
    fn from_value(value: &HeaderValue) -> Option<&Self>;

    /// Wraps the typed value.
    fn into_value(self) -> HeaderValue;
}

macro_rules! typed_header_value {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl TypedHeaderValue for $ty {
                fn from_value(value: &HeaderValue) -> Option<&Self> {
                    match value {
                        HeaderValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn into_value(self) -> HeaderValue {
                    HeaderValue::$variant(self)
                }
            }

            impl From<$ty> for HeaderValue {
                fn from(value: $ty) -> Self {
                    HeaderValue::$variant(value)
                }
            }
        )*
    };
}

typed_header_value! {
    Text => String,
    Int => i32,
    Long => i64,
    Seconds => Duration,
    Date => DateTime<Utc>,
    Uri => HeaderUri,
    Md5 => Vec<u8>,
    Authentication => AuthenticationHeaderValue,
    CacheControl => CacheControlHeaderValue,
    ContentDisposition => ContentDispositionHeaderValue,
    ContentRange => ContentRangeHeaderValue,
    EntityTag => EntityTagHeaderValue,
    MediaType => MediaTypeHeaderValue,
    MediaTypeWithQuality => MediaTypeWithQualityHeaderValue,
    NameValue => NameValueHeaderValue,
    NameValueWithParameters => NameValueWithParametersHeaderValue,
    Product => ProductHeaderValue,
    ProductInfo => ProductInfoHeaderValue,
    Range => RangeHeaderValue,
    RangeCondition => RangeConditionHeaderValue,
    RetryCondition => RetryConditionHeaderValue,
    StringWithQuality => StringWithQualityHeaderValue,
    TransferCoding => TransferCodingHeaderValue,
    TransferCodingWithQuality => TransferCodingWithQualityHeaderValue,
    Via => ViaHeaderValue,
    Warning => WarningHeaderValue,
}

/// Wraps an optional parse result.
pub(crate) fn parsed<T: TypedHeaderValue>(value: Option<T>) -> Option<HeaderValue> {
    value.map(T::into_value)
}

/// Wraps an optional list parse result.
pub(crate) fn parsed_list<T: TypedHeaderValue>(values: Option<Vec<T>>) -> Option<Vec<HeaderValue>> {
    values.map(|values| values.into_iter().map(T::into_value).collect())
}
