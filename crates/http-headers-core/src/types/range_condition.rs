//! The [`If-Range`](https://datatracker.ietf.org/doc/html/rfc7233#section-3.2) validator.
//!
//! ```text
//! If-Range = entity-tag / HTTP-date
//! ```
//!
//! Entity tags are tried first; anything else is re-read as a date over the whole
//! input.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::lexer::{format_http_date, Lexer, TokenKind};
use crate::types::entity_tag::EntityTagHeaderValue;

/// Either an entity tag or a last-modified date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeConditionHeaderValue {
    Date(DateTime<Utc>),
    EntityTag(EntityTagHeaderValue),
}

impl RangeConditionHeaderValue {
    /// Builds a condition from quoted entity-tag text.
    pub fn from_entity_tag(tag: &str) -> Result<Self> {
        Ok(RangeConditionHeaderValue::EntityTag(EntityTagHeaderValue::new(tag)?))
    }

    pub fn date(&self) -> Option<&DateTime<Utc>> {
        match self {
            RangeConditionHeaderValue::Date(date) => Some(date),
            RangeConditionHeaderValue::EntityTag(_) => None,
        }
    }

    pub fn entity_tag(&self) -> Option<&EntityTagHeaderValue> {
        match self {
            RangeConditionHeaderValue::EntityTag(tag) => Some(tag),
            RangeConditionHeaderValue::Date(_) => None,
        }
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        let mut lexer = Lexer::new(input);
        let mut token = lexer.scan();
        let mut is_weak = false;

        if token == TokenKind::Token {
            if lexer.string_value(token) != "W" {
                return Lexer::try_parse_date(input).map(RangeConditionHeaderValue::Date);
            }
            if lexer.peek_char() != Some(b'/') {
                return None;
            }
            is_weak = true;
            lexer.eat_char();
            token = lexer.scan();
        }

        if token != TokenKind::QuotedString || lexer.scan() != TokenKind::End {
            return None;
        }
        EntityTagHeaderValue::with_weakness(lexer.string_value(token), is_weak)
            .ok()
            .map(RangeConditionHeaderValue::EntityTag)
    }
}

impl From<DateTime<Utc>> for RangeConditionHeaderValue {
    fn from(date: DateTime<Utc>) -> Self {
        RangeConditionHeaderValue::Date(date)
    }
}

impl From<EntityTagHeaderValue> for RangeConditionHeaderValue {
    fn from(tag: EntityTagHeaderValue) -> Self {
        RangeConditionHeaderValue::EntityTag(tag)
    }
}

impl fmt::Display for RangeConditionHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeConditionHeaderValue::Date(date) => f.write_str(&format_http_date(date)),
            RangeConditionHeaderValue::EntityTag(tag) => write!(f, "{}", tag),
        }
    }
}

impl FromStr for RangeConditionHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
