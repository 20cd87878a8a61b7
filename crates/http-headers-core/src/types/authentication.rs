//! Credentials and challenges for `Authorization`, `Proxy-Authorization`,
//! `WWW-Authenticate` and `Proxy-Authenticate`.
//!
//! The scheme is a token; everything after it is kept verbatim as the parameter.
//! Control characters other than tab are never part of a parameter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{Lexer, TokenKind};
use crate::parser::primitives::check_token;

/// An authentication scheme with an optional opaque parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticationHeaderValue {
    scheme: String,
    parameter: Option<String>,
}

impl AuthenticationHeaderValue {
    pub fn new(scheme: &str) -> Result<Self> {
        check_token(scheme, "scheme")?;
        Ok(AuthenticationHeaderValue {
            scheme: scheme.to_string(),
            parameter: None,
        })
    }

    /// Creates credentials with a raw parameter such as a token68 or `auth-param` list.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] if `parameter` contains control characters.
    pub fn with_parameter(scheme: &str, parameter: &str) -> Result<Self> {
        let mut value = Self::new(scheme)?;
        let parameter = parameter.trim();
        if has_control_chars(parameter) {
            return Err(Error::invalid_format(parameter));
        }
        if !parameter.is_empty() {
            value.parameter = Some(parameter.to_string());
        }
        Ok(value)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
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
        let scheme = lexer.scan();
        if scheme != TokenKind::Token {
            return None;
        }
        let mut value = AuthenticationHeaderValue {
            scheme: lexer.string_value(scheme).to_string(),
            parameter: None,
        };

        let next = lexer.scan();
        match next.kind() {
            TokenKind::End | TokenKind::SeparatorComma => Some((Some(value), next)),
            TokenKind::Error => None,
            _ => {
                // The parameter runs to the end of the input
                let rest = lexer.remaining_string_value(next.start()).trim_end();
                if has_control_chars(rest) {
                    return None;
                }
                value.parameter = Some(rest.to_string());
                lexer.set_position(lexer.input().len());
                Some((Some(value), lexer.scan()))
            }
        }
    }
}

fn has_control_chars(s: &str) -> bool {
    s.chars().any(|c| c.is_control() && c != '\t')
}

impl PartialEq for AuthenticationHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.scheme.eq_ignore_ascii_case(&other.scheme) && self.parameter == other.parameter
    }
}

impl Eq for AuthenticationHeaderValue {}

impl fmt::Display for AuthenticationHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(parameter) => write!(f, "{} {}", self.scheme, parameter),
            None => f.write_str(&self.scheme),
        }
    }
}

impl FromStr for AuthenticationHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
