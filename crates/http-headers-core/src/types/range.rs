//! # Range
//!
//! The [`Range`](https://datatracker.ietf.org/doc/html/rfc7233#section-3.1) request header.
//!
//! ```text
//! Range            = unit "=" 1#range-spec
//! range-spec       = first-pos "-" [ last-pos ] / "-" suffix-length
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::types::RangeHeaderValue;
//!
//! let range = RangeHeaderValue::try_parse("bytes=0-499, -500").unwrap();
//! assert_eq!(range.ranges().len(), 2);
//! assert_eq!(range.ranges()[1].to(), Some(500));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::lexer::{parse_unsigned, Lexer, Token, TokenKind};
use crate::parser::primitives::check_token;

/// One `from-to`, `from-` or `-suffix` range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeItemHeaderValue {
    from: Option<u64>,
    to: Option<u64>,
}

impl RangeItemHeaderValue {
    /// Creates a range; at least one bound is required and `to` may not precede `from`.
    pub fn new(from: Option<u64>, to: Option<u64>) -> Result<Self> {
        match (from, to) {
            (None, None) => Err(Error::MissingValue("from")),
            (Some(from), Some(to)) if to < from => Err(Error::out_of_range("to", to)),
            _ => Ok(RangeItemHeaderValue { from, to }),
        }
    }

    pub fn from(&self) -> Option<u64> {
        self.from
    }

    pub fn to(&self) -> Option<u64> {
        self.to
    }
}

impl fmt::Display for RangeItemHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (None, Some(to)) => write!(f, "-{}", to),
            (Some(from), Some(to)) => write!(f, "{}-{}", from, to),
            (Some(from), None) => write!(f, "{}-", from),
            (None, None) => Ok(()),
        }
    }
}

/// A range unit with one or more ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeHeaderValue {
    unit: String,
    ranges: Vec<RangeItemHeaderValue>,
}

impl Default for RangeHeaderValue {
    fn default() -> Self {
        RangeHeaderValue {
            unit: "bytes".to_string(),
            ranges: Vec::new(),
        }
    }
}

impl RangeHeaderValue {
    /// A `bytes` range with no items yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A `bytes` range with a single item.
    pub fn with_range(from: Option<u64>, to: Option<u64>) -> Result<Self> {
        let mut value = Self::default();
        value.ranges.push(RangeItemHeaderValue::new(from, to)?);
        Ok(value)
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn set_unit(&mut self, unit: &str) -> Result<()> {
        check_token(unit, "unit")?;
        self.unit = unit.to_string();
        Ok(())
    }

    pub fn ranges(&self) -> &[RangeItemHeaderValue] {
        &self.ranges
    }

    pub fn ranges_mut(&mut self) -> &mut Vec<RangeItemHeaderValue> {
        &mut self.ranges
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        let mut lexer = Lexer::new(input);
        let token = lexer.scan();
        if token != TokenKind::Token {
            return None;
        }
        let mut value = RangeHeaderValue {
            unit: lexer.string_value(token).to_string(),
            ranges: Vec::new(),
        };
        if lexer.scan() != TokenKind::SeparatorEqual {
            return None;
        }

        loop {
            let (item, token) = parse_range_item(&mut lexer)?;
            value.ranges.push(item);
            match token.kind() {
                TokenKind::SeparatorComma => continue,
                TokenKind::End => return Some(value),
                _ => return None,
            }
        }
    }
}

/// Reads one range-spec and the token that follows it.
fn parse_range_item(lexer: &mut Lexer<'_>) -> Option<(RangeItemHeaderValue, Token)> {
    let token = lexer.scan_with_dash();
    match token.kind() {
        TokenKind::SeparatorDash => {
            let suffix = lexer.scan();
            let to = lexer.try_get_position_value(suffix)?;
            Some((RangeItemHeaderValue { from: None, to: Some(to) }, lexer.scan()))
        }
        TokenKind::Token => {
            let text = lexer.string_value(token);
            let (from, to, next) = match text.split_once('-') {
                // "from-" or "from-to" inside a single token
                Some((from, "")) => (parse_unsigned::<u64>(from)?, None, lexer.scan()),
                Some((from, to)) => (
                    parse_unsigned::<u64>(from)?,
                    Some(parse_unsigned::<u64>(to)?),
                    lexer.scan(),
                ),
                // "from - [to]" with whitespace around the dash
                None => {
                    let from = parse_unsigned::<u64>(text)?;
                    if lexer.scan_with_dash() != TokenKind::SeparatorDash {
                        return None;
                    }
                    let next = lexer.scan();
                    if next == TokenKind::Token {
                        let to = lexer.try_get_position_value(next)?;
                        (from, Some(to), lexer.scan())
                    } else {
                        (from, None, next)
                    }
                }
            };
            if matches!(to, Some(to) if to < from) {
                return None;
            }
            Some((RangeItemHeaderValue { from: Some(from), to }, next))
        }
        _ => None,
    }
}

impl PartialEq for RangeHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.unit.eq_ignore_ascii_case(&other.unit) && self.ranges == other.ranges
    }
}

impl Eq for RangeHeaderValue {}

impl fmt::Display for RangeHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.unit)?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

impl FromStr for RangeHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
