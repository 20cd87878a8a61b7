//! # Header Registry and Collections
//!
//! - [`header_info`]: [`HeaderKind`], [`HeaderInfo`] and the registry lookup
//! - [`known`]: the registry entries for every known header
//! - [`HttpHeaders`]: the ordered, case-insensitive header store
//! - [`HttpHeaderValueCollection`]: typed view over a list-valued header
//! - [`HttpRequestHeaders`], [`HttpResponseHeaders`], [`HttpContentHeaders`]:
//!   stores restricted to one message part, with typed accessors
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::headers::HttpRequestHeaders;
//!
//! let mut request = HttpRequestHeaders::new();
//! request.add("User-Agent", "curl/8.0 (x86_64-pc-linux-gnu)").unwrap();
//! request.set_connection_close(true);
//!
//! assert_eq!(request.user_agent().len(), 2);
//! assert!(request.connection_close());
//! assert_eq!(
//!     request.to_string(),
//!     "User-Agent: curl/8.0 (x86_64-pc-linux-gnu)\r\nConnection: close\r\n"
//! );
//! ```

/// Getter and setter for a single-valued header whose Rust type cannot hold
/// an invalid value.
macro_rules! single_header {
    ($(#[$meta:meta])* $get:ident, $set:ident, $info:path, $ty:ty) => {
        $(#[$meta])*
        pub fn $get(&mut self) -> Option<&$ty> {
            self.headers.typed_value(&$info)
        }

        pub fn $set(&mut self, value: Option<$ty>) {
            self.headers
                .store_value(&$info, value.map($crate::headers::value::TypedHeaderValue::into_value));
        }
    };
}

/// Typed collection accessor for a list-valued header.
macro_rules! list_header {
    ($(#[$meta:meta])* $get:ident, $info:path, $ty:ty) => {
        $(#[$meta])*
        pub fn $get(&mut self) -> $crate::headers::HttpHeaderValueCollection<'_, $ty> {
            self.headers.collection(&$info)
        }
    };
}

/// Accessors for headers shared by requests and responses.
macro_rules! general_headers {
    () => {
        single_header!(cache_control, set_cache_control, known::CACHE_CONTROL, CacheControlHeaderValue);
        single_header!(date, set_date, known::DATE, DateTime<Utc>);
        list_header!(connection, known::CONNECTION, String);
        list_header!(pragma, known::PRAGMA, NameValueHeaderValue);
        list_header!(trailer, known::TRAILER, String);
        list_header!(transfer_encoding, known::TRANSFER_ENCODING, TransferCodingHeaderValue);
        list_header!(upgrade, known::UPGRADE, ProductHeaderValue);
        list_header!(via, known::VIA, ViaHeaderValue);
        list_header!(warning, known::WARNING, WarningHeaderValue);

        /// True if `Connection` lists `close`.
        pub fn connection_close(&mut self) -> bool {
            self.headers
                .has_list_value::<String>(&known::CONNECTION, |token| token.eq_ignore_ascii_case("close"))
        }

        pub fn set_connection_close(&mut self, close: bool) {
            self.headers.set_list_flag::<String>(&known::CONNECTION, "close", close, |token| {
                token.eq_ignore_ascii_case("close")
            });
        }

        /// True if `Transfer-Encoding` lists `chunked`.
        pub fn transfer_encoding_chunked(&mut self) -> bool {
            self.headers
                .has_list_value::<TransferCodingHeaderValue>(&known::TRANSFER_ENCODING, |coding| {
                    coding.value().eq_ignore_ascii_case("chunked")
                })
        }

        pub fn set_transfer_encoding_chunked(&mut self, chunked: bool) {
            self.headers.set_list_flag::<TransferCodingHeaderValue>(
                &known::TRANSFER_ENCODING,
                "chunked",
                chunked,
                |coding| coding.value().eq_ignore_ascii_case("chunked"),
            );
        }
    };
}

/// Deref plumbing shared by the kind-restricted collections.
macro_rules! header_collection_wrapper {
    ($name:ident) => {
        impl std::ops::Deref for $name {
            type Target = HttpHeaders;

            fn deref(&self) -> &HttpHeaders {
                &self.headers
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut HttpHeaders {
                &mut self.headers
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.headers, f)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

mod bucket;
mod collection;
mod content;
pub mod header_info;
mod http_headers;
pub mod known;
mod request;
mod response;
pub mod value;

pub use collection::HttpHeaderValueCollection;
pub use content::HttpContentHeaders;
pub use header_info::{lookup, HeaderInfo, HeaderKind};
pub use http_headers::HttpHeaders;
pub use request::HttpRequestHeaders;
pub use response::HttpResponseHeaders;
pub use value::{HeaderValue, TypedHeaderValue};
