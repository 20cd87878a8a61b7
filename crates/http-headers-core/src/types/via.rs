//! # Via
//!
//! One hop of the [`Via`](https://datatracker.ietf.org/doc/html/rfc7230#section-5.7.1) header.
//!
//! ```text
//! Via               = 1#( received-protocol RWS received-by [ RWS comment ] )
//! received-protocol = [ protocol-name "/" ] protocol-version
//! received-by       = ( uri-host [ ":" port ] ) / pseudonym
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::types::ViaHeaderValue;
//!
//! let via = ViaHeaderValue::try_parse("HTTP/1.1 proxy.example.com:8080 (squid)").unwrap();
//! assert_eq!(via.protocol_name(), Some("HTTP"));
//! assert_eq!(via.protocol_version(), "1.1");
//! assert_eq!(via.received_by(), "proxy.example.com:8080");
//! assert_eq!(via.comment(), Some("(squid)"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{Comment, Lexer, Token, TokenKind};
use crate::parser::primitives::{check_comment, check_token};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViaHeaderValue {
    protocol_name: Option<String>,
    protocol_version: String,
    received_by: String,
    comment: Option<String>,
}

impl ViaHeaderValue {
    pub fn new(protocol_version: &str, received_by: &str) -> Result<Self> {
        check_token(protocol_version, "protocol_version")?;
        check_host_and_port(received_by, "received_by")?;
        Ok(ViaHeaderValue {
            protocol_name: None,
            protocol_version: protocol_version.to_string(),
            received_by: received_by.to_string(),
            comment: None,
        })
    }

    pub fn with_protocol_name(protocol_name: &str, protocol_version: &str, received_by: &str) -> Result<Self> {
        let mut via = Self::new(protocol_version, received_by)?;
        check_token(protocol_name, "protocol_name")?;
        via.protocol_name = Some(protocol_name.to_string());
        Ok(via)
    }

    pub fn protocol_name(&self) -> Option<&str> {
        self.protocol_name.as_deref()
    }

    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    pub fn received_by(&self) -> &str {
        &self.received_by
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Sets or clears the trailing `(...)` comment.
    pub fn set_comment(&mut self, comment: Option<&str>) -> Result<()> {
        if let Some(comment) = comment {
            check_comment(comment, "comment")?;
        }
        self.comment = comment.map(str::to_string);
        Ok(())
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

    fn parse_element(lexer: &mut Lexer<'_>) -> ElementResult<Self> {
        let first = lexer.scan();
        if first != TokenKind::Token {
            return None;
        }

        let mut received = lexer.scan();
        let (protocol_name, protocol_version) = if received == TokenKind::SeparatorSlash {
            let version = lexer.scan();
            if version != TokenKind::Token {
                return None;
            }
            received = lexer.scan();
            (Some(lexer.string_value(first).to_string()), lexer.string_value(version))
        } else {
            (None, lexer.string_value(first))
        };

        let received_by = read_host_and_port(lexer, received)?;

        let (comment, token) = match lexer.scan_comment_optional() {
            Comment::Found(comment) => (Some(comment.to_string()), lexer.scan()),
            Comment::NotComment(token) => (None, token),
            Comment::Unterminated => return None,
        };

        let via = ViaHeaderValue {
            protocol_name,
            protocol_version: protocol_version.to_string(),
            received_by,
            comment,
        };
        Some((Some(via), token))
    }
}

/// Reads `host[:port]` starting at the already scanned `host` token.
pub(crate) fn read_host_and_port(lexer: &mut Lexer<'_>, host: Token) -> Option<String> {
    if host != TokenKind::Token {
        return None;
    }
    if lexer.peek_char() != Some(b':') {
        return Some(lexer.string_value(host).to_string());
    }
    lexer.eat_char();
    let port = lexer.scan();
    if port != TokenKind::Token || lexer.try_get_numeric_value(port).is_none() {
        return None;
    }
    Some(lexer.string_value_between(host, port).to_string())
}

/// Checks that `value` is exactly what [`read_host_and_port`] reads back.
pub(crate) fn check_host_and_port(value: &str, name: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::EmptyValue(name));
    }
    let mut lexer = Lexer::new(value);
    let host = lexer.scan();
    match read_host_and_port(&mut lexer, host) {
        Some(parsed) if parsed == value && lexer.scan() == TokenKind::End => Ok(()),
        _ => Err(Error::invalid_format(value)),
    }
}

impl PartialEq for ViaHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        let name_eq = match (&self.protocol_name, &other.protocol_name) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        };
        name_eq
            && self.protocol_version.eq_ignore_ascii_case(&other.protocol_version)
            && self.received_by.eq_ignore_ascii_case(&other.received_by)
            && self.comment == other.comment
    }
}

impl Eq for ViaHeaderValue {}

impl fmt::Display for ViaHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.protocol_name {
            write!(f, "{}/", name)?;
        }
        write!(f, "{} {}", self.protocol_version, self.received_by)?;
        if let Some(comment) = &self.comment {
            write!(f, " {}", comment)?;
        }
        Ok(())
    }
}

impl FromStr for ViaHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
