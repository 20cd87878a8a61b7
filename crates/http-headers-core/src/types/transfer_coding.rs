//! Transfer codings for `Transfer-Encoding` and `TE`.
//!
//! ```text
//! transfer-coding = token *( OWS ";" OWS transfer-parameter )
//! t-codings       = "trailers" / ( transfer-coding [ t-ranking ] )
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{Lexer, TokenKind};
use crate::parser::primitives::check_token;
use crate::types::name_value::NameValueHeaderValue;
use crate::types::parameters;

/// A transfer coding such as `chunked` or `gzip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferCodingHeaderValue {
    value: String,
    parameters: Vec<NameValueHeaderValue>,
}

impl TransferCodingHeaderValue {
    pub fn new(value: &str) -> Result<Self> {
        check_token(value, "value")?;
        Ok(TransferCodingHeaderValue {
            value: value.to_string(),
            parameters: Vec::new(),
        })
    }

    /// The coding name.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn parameters(&self) -> &[NameValueHeaderValue] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<NameValueHeaderValue> {
        &mut self.parameters
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
        let name = lexer.scan();
        if name != TokenKind::Token {
            return None;
        }
        let mut coding = TransferCodingHeaderValue {
            value: lexer.string_value(name).to_string(),
            parameters: Vec::new(),
        };

        let mut token = lexer.scan();
        if token == TokenKind::SeparatorSemicolon {
            let (list, next) = NameValueHeaderValue::parse_parameters(lexer)?;
            coding.parameters = list;
            token = next;
        }
        Some((Some(coding), token))
    }
}

impl PartialEq for TransferCodingHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.value.eq_ignore_ascii_case(&other.value) && self.parameters == other.parameters
    }
}

impl Eq for TransferCodingHeaderValue {}

impl fmt::Display for TransferCodingHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)?;
        parameters::fmt_parameters(&self.parameters, f)
    }
}

impl FromStr for TransferCodingHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}

/// A transfer coding with an optional `q` rank, as listed in `TE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferCodingWithQualityHeaderValue {
    inner: TransferCodingHeaderValue,
}

impl TransferCodingWithQualityHeaderValue {
    pub fn new(value: &str) -> Result<Self> {
        Ok(TransferCodingWithQualityHeaderValue {
            inner: TransferCodingHeaderValue::new(value)?,
        })
    }

    pub fn with_quality(value: &str, quality: f64) -> Result<Self> {
        let mut coding = Self::new(value)?;
        coding.set_quality(Some(quality))?;
        Ok(coding)
    }

    pub fn quality(&self) -> Option<f64> {
        parameters::quality(&self.inner.parameters)
    }

    /// Sets or removes the `q` parameter; weights outside `[0, 1]` are rejected.
    pub fn set_quality(&mut self, quality: Option<f64>) -> Result<()> {
        parameters::set_quality(&mut self.inner.parameters, quality)
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        TransferCodingHeaderValue::try_parse(input).map(|inner| TransferCodingWithQualityHeaderValue { inner })
    }

    pub(crate) fn try_parse_list(input: &str, minimal_count: usize) -> Option<Vec<Self>> {
        collection::try_parse(input, minimal_count, |lexer| {
            let (value, token) = TransferCodingHeaderValue::parse_element(lexer)?;
            Some((value.map(|inner| TransferCodingWithQualityHeaderValue { inner }), token))
        })
    }
}

impl Deref for TransferCodingWithQualityHeaderValue {
    type Target = TransferCodingHeaderValue;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for TransferCodingWithQualityHeaderValue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl fmt::Display for TransferCodingWithQualityHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl FromStr for TransferCodingWithQualityHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
