//! # Entity Tags
//!
//! Values of [`ETag`](https://datatracker.ietf.org/doc/html/rfc7232#section-2.3),
//! `If-Match` and `If-None-Match`.
//!
//! ```text
//! entity-tag = [ weak ] opaque-tag
//! weak       = %x57.2F ; "W/", case-sensitive
//! opaque-tag = quoted-string
//! ```
//!
//! The tag keeps its quotes and compares exactly. `*` is the "any" tag used by
//! conditional requests.
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::types::EntityTagHeaderValue;
//!
//! let etag = EntityTagHeaderValue::try_parse("W/\"xyzzy\"").unwrap();
//! assert!(etag.is_weak());
//! assert_eq!(etag.tag(), "\"xyzzy\"");
//! assert!(EntityTagHeaderValue::try_parse("xyzzy").is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{Lexer, TokenKind};
use crate::parser::primitives::check_quoted_string;

const ANY: &str = "*";

/// An opaque validator, optionally weak.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityTagHeaderValue {
    tag: String,
    is_weak: bool,
}

impl EntityTagHeaderValue {
    /// Creates a strong tag from quoted text, e.g. `"\"v1\""`.
    pub fn new(tag: &str) -> Result<Self> {
        Self::with_weakness(tag, false)
    }

    /// Creates a tag from quoted text, marking it weak when requested.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] unless `tag` is a single quoted-string.
    pub fn with_weakness(tag: &str, is_weak: bool) -> Result<Self> {
        check_quoted_string(tag, "tag")?;
        Ok(EntityTagHeaderValue {
            tag: tag.to_string(),
            is_weak,
        })
    }

    /// The `*` tag.
    pub fn any() -> Self {
        EntityTagHeaderValue {
            tag: ANY.to_string(),
            is_weak: false,
        }
    }

    /// True for the `*` tag.
    pub fn is_any(&self) -> bool {
        self.tag == ANY
    }

    /// The opaque tag, quotes included.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_weak(&self) -> bool {
        self.is_weak
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        let mut lexer = Lexer::new(input);
        match Self::parse_element(&mut lexer)? {
            (value, token) if token == TokenKind::End => value,
            _ => None,
        }
    }

    pub(crate) fn try_parse_list(input: &str, minimal_count: usize) -> Option<Vec<Self>> {
        collection::try_parse(input, minimal_count, Self::parse_element)
    }

    pub(crate) fn parse_element(lexer: &mut Lexer<'_>) -> ElementResult<Self> {
        let mut token = lexer.scan();
        let mut is_weak = false;

        if token == TokenKind::Token {
            let s = lexer.string_value(token);
            if s == ANY {
                return Some((Some(Self::any()), lexer.scan()));
            }
            if s != "W" || lexer.peek_char() != Some(b'/') {
                return None;
            }
            is_weak = true;
            lexer.eat_char();
            token = lexer.scan();
        }

        if token != TokenKind::QuotedString {
            return None;
        }
        let tag = EntityTagHeaderValue {
            tag: lexer.string_value(token).to_string(),
            is_weak,
        };
        Some((Some(tag), lexer.scan()))
    }
}

impl fmt::Display for EntityTagHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_weak {
            write!(f, "W/{}", self.tag)
        } else {
            f.write_str(&self.tag)
        }
    }
}

impl FromStr for EntityTagHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
