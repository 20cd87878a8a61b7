//! # HTTP Header Value Types
//!
//! Typed representations of structured HTTP header values.
//!
//! Every type follows the same shape:
//!
//! - `try_parse(&str) -> Option<Self>` never panics and rejects trailing input;
//! - [`FromStr`](std::str::FromStr) reports [`Error::InvalidFormat`](crate::Error::InvalidFormat);
//! - [`Display`](std::fmt::Display) produces text that parses back to an equal value;
//! - constructors and setters validate their arguments with the same grammar
//!   rules the parser uses.
//!
//! ### Content negotiation
//!
//! - [`MediaTypeHeaderValue`], [`MediaTypeWithQualityHeaderValue`]
//! - [`StringWithQualityHeaderValue`]
//! - [`TransferCodingHeaderValue`], [`TransferCodingWithQualityHeaderValue`]
//!
//! ### Caching and conditional requests
//!
//! - [`CacheControlHeaderValue`]
//! - [`EntityTagHeaderValue`], [`RangeConditionHeaderValue`]
//! - [`WarningHeaderValue`]
//!
//! ### Ranges
//!
//! - [`RangeHeaderValue`], [`RangeItemHeaderValue`]
//! - [`ContentRangeHeaderValue`]
//!
//! ### Everything else
//!
//! - [`ContentDispositionHeaderValue`]
//! - [`NameValueHeaderValue`], [`NameValueWithParametersHeaderValue`]
//! - [`ProductHeaderValue`], [`ProductInfoHeaderValue`]
//! - [`RetryConditionHeaderValue`], [`ViaHeaderValue`]
//! - [`AuthenticationHeaderValue`], [`HeaderUri`]
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::types::{EntityTagHeaderValue, MediaTypeHeaderValue};
//!
//! let media: MediaTypeHeaderValue = "text/plain; charset=utf-8".parse().unwrap();
//! assert_eq!(media.char_set(), Some("utf-8"));
//!
//! let tag = EntityTagHeaderValue::try_parse("W/\"abc\"").unwrap();
//! assert!(tag.is_weak());
//! ```

pub(crate) mod parameters;

pub mod authentication;
pub mod cache_control;
pub mod content_disposition;
pub mod content_range;
pub mod entity_tag;
pub mod media_type;
pub mod name_value;
pub mod product;
pub mod range;
pub mod range_condition;
pub mod retry_condition;
pub mod string_with_quality;
pub mod transfer_coding;
pub mod uri;
pub mod via;
pub mod warning;

pub use authentication::AuthenticationHeaderValue;
pub use cache_control::CacheControlHeaderValue;
pub use content_disposition::ContentDispositionHeaderValue;
pub use content_range::ContentRangeHeaderValue;
pub use entity_tag::EntityTagHeaderValue;
pub use media_type::{MediaTypeHeaderValue, MediaTypeWithQualityHeaderValue};
pub use name_value::{NameValueHeaderValue, NameValueWithParametersHeaderValue};
pub use product::{ProductHeaderValue, ProductInfoHeaderValue};
pub use range::{RangeHeaderValue, RangeItemHeaderValue};
pub use range_condition::RangeConditionHeaderValue;
pub use retry_condition::RetryConditionHeaderValue;
pub use string_with_quality::StringWithQualityHeaderValue;
pub use transfer_coding::{TransferCodingHeaderValue, TransferCodingWithQualityHeaderValue};
pub use uri::HeaderUri;
pub use via::ViaHeaderValue;
pub use warning::WarningHeaderValue;
