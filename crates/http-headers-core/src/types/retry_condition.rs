//! The [`Retry-After`](https://datatracker.ietf.org/doc/html/rfc7231#section-7.1.3) value.
//!
//! ```text
//! Retry-After = HTTP-date / delay-seconds
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::lexer::{format_http_date, Lexer, TokenKind};

/// A retry delay or an absolute retry time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryConditionHeaderValue {
    Date(DateTime<Utc>),
    Delta(Duration),
}

impl RetryConditionHeaderValue {
    /// Creates a delay of whole seconds, at most `i32::MAX` of them.
    pub fn from_delta(delta: Duration) -> Result<Self> {
        if delta.subsec_nanos() != 0 {
            return Err(Error::out_of_range("delta", delta.as_secs_f64()));
        }
        if delta.as_secs() > i32::MAX as u64 {
            return Err(Error::out_of_range("delta", delta.as_secs()));
        }
        Ok(RetryConditionHeaderValue::Delta(delta))
    }

    pub fn date(&self) -> Option<&DateTime<Utc>> {
        match self {
            RetryConditionHeaderValue::Date(date) => Some(date),
            RetryConditionHeaderValue::Delta(_) => None,
        }
    }

    pub fn delta(&self) -> Option<Duration> {
        match self {
            RetryConditionHeaderValue::Delta(delta) => Some(*delta),
            RetryConditionHeaderValue::Date(_) => None,
        }
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        let mut lexer = Lexer::new(input);
        let token = lexer.scan();
        if token != TokenKind::Token {
            return None;
        }

        match lexer.try_get_time_span_value(token) {
            Some(delta) => {
                if lexer.scan() != TokenKind::End {
                    return None;
                }
                Some(RetryConditionHeaderValue::Delta(delta))
            }
            None => Lexer::try_parse_date(input).map(RetryConditionHeaderValue::Date),
        }
    }
}

impl From<DateTime<Utc>> for RetryConditionHeaderValue {
    fn from(date: DateTime<Utc>) -> Self {
        RetryConditionHeaderValue::Date(date)
    }
}

impl fmt::Display for RetryConditionHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryConditionHeaderValue::Date(date) => f.write_str(&format_http_date(date)),
            RetryConditionHeaderValue::Delta(delta) => write!(f, "{}", delta.as_secs()),
        }
    }
}

impl FromStr for RetryConditionHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
