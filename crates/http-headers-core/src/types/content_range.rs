//! The [`Content-Range`](https://datatracker.ietf.org/doc/html/rfc7233#section-4.2) header.
//!
//! ```text
//! Content-Range = unit SP ( first-pos "-" last-pos / "*" ) "/" ( length / "*" )
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::lexer::{parse_unsigned, Lexer, TokenKind};
use crate::parser::primitives::check_token;

const BYTES: &str = "bytes";

/// A byte range within a complete representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRangeHeaderValue {
    unit: String,
    from: Option<u64>,
    to: Option<u64>,
    length: Option<u64>,
}

impl ContentRangeHeaderValue {
    /// `bytes */length`
    pub fn with_length(length: u64) -> Self {
        ContentRangeHeaderValue {
            unit: BYTES.to_string(),
            from: None,
            to: None,
            length: Some(length),
        }
    }

    /// `bytes from-to/*`
    pub fn with_range(from: u64, to: u64) -> Result<Self> {
        if from > to {
            return Err(Error::out_of_range("from", from));
        }
        Ok(ContentRangeHeaderValue {
            unit: BYTES.to_string(),
            from: Some(from),
            to: Some(to),
            length: None,
        })
    }

    /// `bytes from-to/length`
    pub fn with_range_and_length(from: u64, to: u64, length: u64) -> Result<Self> {
        let mut value = Self::with_range(from, to)?;
        if to >= length {
            return Err(Error::out_of_range("length", length));
        }
        value.length = Some(length);
        Ok(value)
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Replaces the range unit, which must be a token.
    pub fn set_unit(&mut self, unit: &str) -> Result<()> {
        check_token(unit, "unit")?;
        self.unit = unit.to_string();
        Ok(())
    }

    pub fn from(&self) -> Option<u64> {
        self.from
    }

    pub fn to(&self) -> Option<u64> {
        self.to
    }

    pub fn length(&self) -> Option<u64> {
        self.length
    }

    pub fn has_length(&self) -> bool {
        self.length.is_some()
    }

    pub fn has_range(&self) -> bool {
        self.from.is_some()
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        let mut lexer = Lexer::new(input);
        let token = lexer.scan();
        if token != TokenKind::Token {
            return None;
        }
        let mut value = ContentRangeHeaderValue {
            unit: lexer.string_value(token).to_string(),
            from: None,
            to: None,
            length: None,
        };

        let token = lexer.scan();
        if token != TokenKind::Token {
            return None;
        }
        if !lexer.is_star_string_value(token) {
            let (from, to) = match lexer.try_get_position_value(token) {
                // "from - to" with whitespace around the dash
                Some(from) => {
                    if lexer.scan_with_dash() != TokenKind::SeparatorDash {
                        return None;
                    }
                    let to_token = lexer.scan();
                    (from, lexer.try_get_position_value(to_token)?)
                }
                None => {
                    let text = lexer.string_value(token);
                    let (from, to) = text.split_once('-')?;
                    (parse_unsigned::<u64>(from)?, parse_unsigned::<u64>(to)?)
                }
            };
            if to < from {
                return None;
            }
            value.from = Some(from);
            value.to = Some(to);
        }

        if lexer.scan() != TokenKind::SeparatorSlash {
            return None;
        }
        let token = lexer.scan();
        if !lexer.is_star_string_value(token) {
            let length = lexer.try_get_position_value(token)?;
            if matches!(value.to, Some(to) if to >= length) {
                return None;
            }
            value.length = Some(length);
        }

        if lexer.scan() != TokenKind::End {
            return None;
        }
        Some(value)
    }
}

impl PartialEq for ContentRangeHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.unit.eq_ignore_ascii_case(&other.unit)
            && self.from == other.from
            && self.to == other.to
            && self.length == other.length
    }
}

impl Eq for ContentRangeHeaderValue {}

impl fmt::Display for ContentRangeHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.unit)?;
        match (self.from, self.to) {
            (Some(from), Some(to)) => write!(f, "{}-{}", from, to)?,
            _ => f.write_str("*")?,
        }
        match self.length {
            Some(length) => write!(f, "/{}", length),
            None => f.write_str("/*"),
        }
    }
}

impl FromStr for ContentRangeHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
