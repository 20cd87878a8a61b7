//! Typed HTTP/1.1 header values and header collections
//!
//! This crate provides the lexer, value parsers and formatters for structured
//! HTTP header values, plus header collections that parse known headers lazily
//! and keep values that fail to parse.
//!
//! ```rust
//! use http_headers_core::prelude::*;
//!
//! let mut content = HttpContentHeaders::new();
//! content.add("Content-Type", "text/plain; charset=utf-8").unwrap();
//! assert_eq!(content.content_type().unwrap().char_set(), Some("utf-8"));
//!
//! let tag: EntityTagHeaderValue = "W/\"v2\"".parse().unwrap();
//! assert!(tag.is_weak());
//! ```

// Declare modules
pub mod error;
pub mod headers;
pub mod parser;
pub mod prelude;
pub mod types;

// Re-export key public items
pub use error::{Error, Result};
pub use headers::{
    HeaderKind, HttpContentHeaders, HttpHeaderValueCollection, HttpHeaders, HttpRequestHeaders,
    HttpResponseHeaders,
};
pub use parser::{Lexer, Token, TokenKind};
