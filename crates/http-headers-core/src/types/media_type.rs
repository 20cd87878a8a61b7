//! # Media Types
//!
//! Values of [`Content-Type`](https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.1.5)
//! and [`Accept`](https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.2).
//!
//! ```text
//! media-type = type "/" subtype *( OWS ";" OWS parameter )
//! ```
//!
//! The quality-bearing variant used by `Accept` stores its weight as the `q`
//! parameter, so it keeps its position among the other parameters.
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::types::{MediaTypeHeaderValue, MediaTypeWithQualityHeaderValue};
//!
//! let ct = MediaTypeHeaderValue::try_parse("text/plain; charset=utf-8").unwrap();
//! assert_eq!(ct.media_type(), "text/plain");
//! assert_eq!(ct.char_set(), Some("utf-8"));
//!
//! let accept = MediaTypeWithQualityHeaderValue::try_parse("text/*;q=0.3").unwrap();
//! assert_eq!(accept.quality(), Some(0.3));
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::types::name_value::NameValueHeaderValue;
use crate::types::parameters;

const CHARSET: &str = "charset";

/// A `type/subtype` media type with parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaTypeHeaderValue {
    media_type: String,
    parameters: Vec<NameValueHeaderValue>,
}

impl MediaTypeHeaderValue {
    /// Creates a media type from `type/subtype` text.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] if `media_type` is not exactly `token/token`.
    pub fn new(media_type: &str) -> Result<Self> {
        let mut value = MediaTypeHeaderValue {
            media_type: String::new(),
            parameters: Vec::new(),
        };
        value.set_media_type(media_type)?;
        Ok(value)
    }

    /// The `type/subtype` part.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Replaces the `type/subtype` part, keeping parameters.
    pub fn set_media_type(&mut self, media_type: &str) -> Result<()> {
        if media_type.is_empty() {
            return Err(Error::EmptyValue("media_type"));
        }
        let mut lexer = Lexer::new(media_type);
        match parse_media_type(&mut lexer) {
            Some((parsed, token)) if token == TokenKind::End => {
                self.media_type = parsed;
                Ok(())
            }
            _ => Err(Error::invalid_format(media_type)),
        }
    }

    /// The `charset` parameter.
    pub fn char_set(&self) -> Option<&str> {
        parameters::find_parameter(&self.parameters, CHARSET).and_then(|p| p.value())
    }

    /// Sets or (with `None`) removes the `charset` parameter.
    pub fn set_char_set(&mut self, char_set: Option<&str>) -> Result<()> {
        parameters::set_parameter(&mut self.parameters, CHARSET, char_set)
    }

    pub fn parameters(&self) -> &[NameValueHeaderValue] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<NameValueHeaderValue> {
        &mut self.parameters
    }

    /// Parses a complete media type.
    pub fn try_parse(input: &str) -> Option<Self> {
        let mut lexer = Lexer::new(input);
        match Self::parse_element(&mut lexer)? {
            (value, token) if token == TokenKind::End => value,
            _ => None,
        }
    }

    pub(crate) fn parse_element(lexer: &mut Lexer<'_>) -> ElementResult<Self> {
        let (media_type, mut token) = parse_media_type(lexer)?;
        let mut parameters = Vec::new();
        if token == TokenKind::SeparatorSemicolon {
            let (list, next) = NameValueHeaderValue::parse_parameters(lexer)?;
            parameters = list;
            token = next;
        }
        Some((
            Some(MediaTypeHeaderValue {
                media_type,
                parameters,
            }),
            token,
        ))
    }
}

/// Reads `token "/" token` and the token following it.
fn parse_media_type(lexer: &mut Lexer<'_>) -> Option<(String, Token)> {
    let main = lexer.scan();
    if main != TokenKind::Token || lexer.scan() != TokenKind::SeparatorSlash {
        return None;
    }
    let sub = lexer.scan();
    if sub != TokenKind::Token {
        return None;
    }
    let media_type = format!("{}/{}", lexer.string_value(main), lexer.string_value(sub));
    Some((media_type, lexer.scan()))
}

impl PartialEq for MediaTypeHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.media_type.eq_ignore_ascii_case(&other.media_type) && self.parameters == other.parameters
    }
}

impl Eq for MediaTypeHeaderValue {}

impl fmt::Display for MediaTypeHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.media_type)?;
        parameters::fmt_parameters(&self.parameters, f)
    }
}

impl FromStr for MediaTypeHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}

/// A media range with an optional `q` weight, as listed in `Accept`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTypeWithQualityHeaderValue {
    inner: MediaTypeHeaderValue,
}

impl MediaTypeWithQualityHeaderValue {
    pub fn new(media_type: &str) -> Result<Self> {
        Ok(MediaTypeWithQualityHeaderValue {
            inner: MediaTypeHeaderValue::new(media_type)?,
        })
    }

    /// Creates a media range with a weight in `[0, 1]`.
    pub fn with_quality(media_type: &str, quality: f64) -> Result<Self> {
        let mut value = Self::new(media_type)?;
        value.set_quality(Some(quality))?;
        Ok(value)
    }

    /// The `q` parameter, if present and numeric.
    pub fn quality(&self) -> Option<f64> {
        parameters::quality(&self.inner.parameters)
    }

    /// Sets or removes the `q` parameter.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the weight is outside `[0, 1]`.
    pub fn set_quality(&mut self, quality: Option<f64>) -> Result<()> {
        parameters::set_quality(&mut self.inner.parameters, quality)
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        MediaTypeHeaderValue::try_parse(input).map(|inner| MediaTypeWithQualityHeaderValue { inner })
    }

    pub(crate) fn try_parse_list(input: &str, minimal_count: usize) -> Option<Vec<Self>> {
        collection::try_parse(input, minimal_count, |lexer| {
            let (value, token) = MediaTypeHeaderValue::parse_element(lexer)?;
            Some((value.map(|inner| MediaTypeWithQualityHeaderValue { inner }), token))
        })
    }
}

impl Deref for MediaTypeWithQualityHeaderValue {
    type Target = MediaTypeHeaderValue;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for MediaTypeWithQualityHeaderValue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl fmt::Display for MediaTypeWithQualityHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl FromStr for MediaTypeWithQualityHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
