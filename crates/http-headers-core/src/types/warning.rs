//! The [`Warning`](https://datatracker.ietf.org/doc/html/rfc7234#section-5.5) header.
//!
//! ```text
//! warning-value = warn-code SP warn-agent SP warn-text [ SP warn-date ]
//! warn-code     = 3DIGIT
//! warn-agent    = ( uri-host [ ":" port ] ) / pseudonym
//! warn-date     = DQUOTE HTTP-date DQUOTE
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{format_http_date, Lexer, TokenKind};
use crate::parser::primitives::check_quoted_string;
use crate::types::via::{check_host_and_port, read_host_and_port};

/// A warning code, agent and quoted text, with an optional date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningHeaderValue {
    code: u16,
    agent: String,
    text: String,
    date: Option<DateTime<Utc>>,
}

impl WarningHeaderValue {
    /// `text` must be a quoted-string, quotes included.
    pub fn new(code: u16, agent: &str, text: &str) -> Result<Self> {
        if code > 999 {
            return Err(Error::out_of_range("code", code));
        }
        check_host_and_port(agent, "agent")?;
        check_quoted_string(text, "text")?;
        Ok(WarningHeaderValue {
            code,
            agent: agent.to_string(),
            text: text.to_string(),
            date: None,
        })
    }

    pub fn with_date(code: u16, agent: &str, text: &str, date: DateTime<Utc>) -> Result<Self> {
        let mut warning = Self::new(code, agent, text)?;
        warning.date = Some(date);
        Ok(warning)
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> Option<&DateTime<Utc>> {
        self.date.as_ref()
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
        let code = lexer.scan();
        if code.len() != 3 {
            return None;
        }
        let code = u16::try_from(lexer.try_get_numeric_value(code)?).ok()?;

        let agent = lexer.scan();
        let agent = read_host_and_port(lexer, agent)?;

        let text = lexer.scan();
        if text != TokenKind::QuotedString {
            return None;
        }
        let text = lexer.string_value(text).to_string();

        let mut token = lexer.scan();
        let mut date = None;
        if token == TokenKind::QuotedString {
            date = Some(lexer.try_get_date_value(token)?);
            token = lexer.scan();
        }

        let warning = WarningHeaderValue {
            code,
            agent,
            text,
            date,
        };
        Some((Some(warning), token))
    }
}

impl PartialEq for WarningHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.agent.eq_ignore_ascii_case(&other.agent)
            && self.text == other.text
            && self.date == other.date
    }
}

impl Eq for WarningHeaderValue {}

impl fmt::Display for WarningHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03} {} {}", self.code, self.agent, self.text)?;
        if let Some(date) = &self.date {
            write!(f, " \"{}\"", format_http_date(date))?;
        }
        Ok(())
    }
}

impl FromStr for WarningHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
