//! # Name/Value Pairs
//!
//! `name[=value]` items, the building block of parameters and of headers such as
//! [`Pragma`](https://datatracker.ietf.org/doc/html/rfc7234#section-5.4) and
//! [`Expect`](https://datatracker.ietf.org/doc/html/rfc7231#section-5.1.1).
//!
//! ```text
//! name-value  = token [ "=" ( token / quoted-string ) ]
//! parameters  = *( ";" name-value )
//! ```
//!
//! Values keep their quotes when they were quoted on the wire.
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::types::NameValueHeaderValue;
//!
//! let nv = NameValueHeaderValue::try_parse("no-cache").unwrap();
//! assert_eq!(nv.name(), "no-cache");
//! assert_eq!(nv.value(), None);
//!
//! let nv = NameValueHeaderValue::try_parse("realm=\"example\"").unwrap();
//! assert_eq!(nv.value(), Some("\"example\""));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::parser::primitives::check_token;
use crate::types::parameters;

/// A `name[=value]` pair.
///
/// Names compare case-insensitively. Unquoted values compare case-insensitively,
/// quoted values compare exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameValueHeaderValue {
    name: String,
    value: Option<String>,
}

impl NameValueHeaderValue {
    /// Creates a pair without a value.
    pub fn new(name: &str) -> Result<Self> {
        check_token(name, "name")?;
        Ok(NameValueHeaderValue {
            name: name.to_string(),
            value: None,
        })
    }

    /// Creates a pair with a token or quoted-string value.
    pub fn with_value(name: &str, value: &str) -> Result<Self> {
        let mut nv = Self::new(name)?;
        nv.set_value(Some(value))?;
        Ok(nv)
    }

    /// Builds a pair from already-lexed parts.
    pub(crate) fn from_parts(name: String, value: Option<String>) -> Self {
        NameValueHeaderValue { name, value }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value, quotes included.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replaces the value. `None` or an empty string clears it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] unless the value is a single token or quoted-string.
    pub fn set_value(&mut self, value: Option<&str>) -> Result<()> {
        self.value = match value {
            None | Some("") => None,
            Some(v) => {
                let mut lexer = Lexer::new(v);
                let token = lexer.scan();
                if lexer.scan() != TokenKind::End
                    || !matches!(token.kind(), TokenKind::Token | TokenKind::QuotedString)
                {
                    return Err(Error::invalid_format(v));
                }
                Some(lexer.string_value(token).to_string())
            }
        };
        Ok(())
    }

    /// Parses a single `name[=value]`.
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
        let (name, value, token) = parse_pair(lexer)?;
        Some((Some(NameValueHeaderValue { name, value }), token))
    }

    /// Parses `name[=value] *(";" name[=value])`, the semicolon before the first
    /// parameter having already been consumed.
    pub(crate) fn parse_parameters(lexer: &mut Lexer<'_>) -> Option<(Vec<Self>, Token)> {
        let mut list = Vec::new();
        loop {
            let (name, value, token) = parse_pair(lexer)?;
            list.push(NameValueHeaderValue { name, value });
            if token != TokenKind::SeparatorSemicolon {
                return Some((list, token));
            }
        }
    }

    fn is_quoted(&self) -> bool {
        self.value.as_deref().is_some_and(|v| v.starts_with('"'))
    }
}

fn parse_pair(lexer: &mut Lexer<'_>) -> Option<(String, Option<String>, Token)> {
    let name = lexer.scan();
    if name != TokenKind::Token {
        return None;
    }

    let mut token = lexer.scan();
    let mut value = None;
    if token == TokenKind::SeparatorEqual {
        token = lexer.scan();
        if !matches!(token.kind(), TokenKind::Token | TokenKind::QuotedString) {
            return None;
        }
        value = Some(lexer.string_value(token).to_string());
        token = lexer.scan();
    }

    Some((lexer.string_value(name).to_string(), value, token))
}

impl PartialEq for NameValueHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        if !self.name.eq_ignore_ascii_case(&other.name) {
            return false;
        }
        match (&self.value, &other.value) {
            (None, None) => true,
            (Some(a), Some(b)) if self.is_quoted() => a == b,
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

impl Eq for NameValueHeaderValue {}

impl Hash for NameValueHeaderValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.to_ascii_lowercase().hash(state);
        match &self.value {
            Some(v) if self.is_quoted() => v.hash(state),
            Some(v) => v.to_ascii_lowercase().hash(state),
            None => 0u8.hash(state),
        }
    }
}

impl fmt::Display for NameValueHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for NameValueHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}

/// A `name[=value]` pair followed by its own `;`-parameters, as in `Expect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValueWithParametersHeaderValue {
    pair: NameValueHeaderValue,
    parameters: Vec<NameValueHeaderValue>,
}

impl NameValueWithParametersHeaderValue {
    /// Creates an entry without a value.
    pub fn new(name: &str) -> Result<Self> {
        Ok(NameValueWithParametersHeaderValue {
            pair: NameValueHeaderValue::new(name)?,
            parameters: Vec::new(),
        })
    }

    /// Creates an entry with a value.
    pub fn with_value(name: &str, value: &str) -> Result<Self> {
        Ok(NameValueWithParametersHeaderValue {
            pair: NameValueHeaderValue::with_value(name, value)?,
            parameters: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.pair.name()
    }

    pub fn value(&self) -> Option<&str> {
        self.pair.value()
    }

    pub fn set_value(&mut self, value: Option<&str>) -> Result<()> {
        self.pair.set_value(value)
    }

    pub fn parameters(&self) -> &[NameValueHeaderValue] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<NameValueHeaderValue> {
        &mut self.parameters
    }

    /// Parses a single entry.
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
        let (name, value, mut token) = parse_pair(lexer)?;
        let mut parameters = Vec::new();
        if token == TokenKind::SeparatorSemicolon {
            let (list, next) = NameValueHeaderValue::parse_parameters(lexer)?;
            parameters = list;
            token = next;
        }
        let entry = NameValueWithParametersHeaderValue {
            pair: NameValueHeaderValue { name, value },
            parameters,
        };
        Some((Some(entry), token))
    }
}

impl fmt::Display for NameValueWithParametersHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pair)?;
        parameters::fmt_parameters(&self.parameters, f)
    }
}

impl FromStr for NameValueWithParametersHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
