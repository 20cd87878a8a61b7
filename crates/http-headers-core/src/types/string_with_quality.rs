//! Weighted tokens for `Accept-Charset`, `Accept-Encoding` and `Accept-Language`.
//!
//! ```text
//! element = token [ OWS ";" OWS "q=" qvalue ]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{Lexer, TokenKind};
use crate::parser::primitives::check_token;
use crate::types::parameters::round_quality;

/// A token with an optional quality weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringWithQualityHeaderValue {
    value: String,
    quality: Option<f64>,
}

impl StringWithQualityHeaderValue {
    /// Creates an unweighted entry.
    pub fn new(value: &str) -> Result<Self> {
        check_token(value, "value")?;
        Ok(StringWithQualityHeaderValue {
            value: value.to_string(),
            quality: None,
        })
    }

    /// Creates a weighted entry.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `quality` is outside `[0, 1]`. The weight is
    /// rounded to three decimals.
    pub fn with_quality(value: &str, quality: f64) -> Result<Self> {
        let quality = round_quality(quality)?;
        let mut entry = Self::new(value)?;
        entry.quality = Some(quality);
        Ok(entry)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn quality(&self) -> Option<f64> {
        self.quality
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
        let mut token = lexer.scan();
        if token != TokenKind::Token {
            return None;
        }
        let mut entry = StringWithQualityHeaderValue {
            value: lexer.string_value(token).to_string(),
            quality: None,
        };

        token = lexer.scan();
        if token == TokenKind::SeparatorSemicolon {
            token = lexer.scan();
            if token != TokenKind::Token || !matches!(lexer.string_value(token), "q" | "Q") {
                return None;
            }
            if lexer.scan() != TokenKind::SeparatorEqual {
                return None;
            }
            token = lexer.scan();
            let quality = lexer.try_get_double_value(token)?;
            entry.quality = Some(round_quality(quality).ok()?);
            token = lexer.scan();
        }

        Some((Some(entry), token))
    }
}

/// Formats a weight using the `0.0##` pattern.
fn format_quality(quality: f64) -> String {
    let mut s = format!("{:.3}", quality);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

impl PartialEq for StringWithQualityHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.value.eq_ignore_ascii_case(&other.value) && self.quality == other.quality
    }
}

impl fmt::Display for StringWithQualityHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quality {
            Some(q) => write!(f, "{}; q={}", self.value, format_quality(q)),
            None => f.write_str(&self.value),
        }
    }
}

impl FromStr for StringWithQualityHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
