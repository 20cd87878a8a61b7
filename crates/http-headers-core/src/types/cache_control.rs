//! # Cache-Control
//!
//! The [`Cache-Control`](https://datatracker.ietf.org/doc/html/rfc7234#section-5.2)
//! directive list.
//!
//! ```text
//! Cache-Control   = 1#cache-directive
//! cache-directive = token [ "=" ( token / quoted-string ) ]
//! ```
//!
//! Well-known directives map onto typed fields; anything else is kept in
//! [`CacheControlHeaderValue::extensions`]. Directive names are matched exactly.
//!
//! ## Examples
//!
//! ```rust
//! use std::time::Duration;
//! use http_headers_core::types::CacheControlHeaderValue;
//!
//! let cc = CacheControlHeaderValue::try_parse("no-cache=\"Set-Cookie\", max-age=3600").unwrap();
//! assert!(cc.no_cache);
//! assert_eq!(cc.no_cache_headers, vec!["Set-Cookie".to_string()]);
//! assert_eq!(cc.max_age, Some(Duration::from_secs(3600)));
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::lexer::{Lexer, TokenKind};
use crate::types::name_value::NameValueHeaderValue;

/// Parsed `Cache-Control` directives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheControlHeaderValue {
    pub no_store: bool,
    pub no_transform: bool,
    pub only_if_cached: bool,
    pub public: bool,
    pub must_revalidate: bool,
    pub proxy_revalidate: bool,
    /// `no-cache`, with or without a field list
    pub no_cache: bool,
    pub no_cache_headers: Vec<String>,
    /// `private`, with or without a field list
    pub private: bool,
    pub private_headers: Vec<String>,
    pub max_age: Option<Duration>,
    /// `s-maxage`
    pub shared_max_age: Option<Duration>,
    /// `max-stale`, optionally bounded by [`max_stale_limit`](Self::max_stale_limit)
    pub max_stale: bool,
    pub max_stale_limit: Option<Duration>,
    pub min_fresh: Option<Duration>,
    /// Directives without a dedicated field
    pub extensions: Vec<NameValueHeaderValue>,
}

impl CacheControlHeaderValue {
    /// Creates an empty directive set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        let mut value = CacheControlHeaderValue::default();
        let mut lexer = Lexer::new(input);

        loop {
            let mut token = lexer.scan();
            if token != TokenKind::Token {
                return None;
            }
            let directive = lexer.string_value(token);
            let mut token_read = false;

            match directive {
                "no-store" => value.no_store = true,
                "no-transform" => value.no_transform = true,
                "only-if-cached" => value.only_if_cached = true,
                "public" => value.public = true,
                "must-revalidate" => value.must_revalidate = true,
                "proxy-revalidate" => value.proxy_revalidate = true,
                "max-stale" => {
                    value.max_stale = true;
                    token = lexer.scan();
                    if token != TokenKind::SeparatorEqual {
                        token_read = true;
                    } else {
                        token = lexer.scan();
                        value.max_stale_limit = Some(lexer.try_get_time_span_value(token)?);
                    }
                }
                "max-age" | "s-maxage" | "min-fresh" => {
                    if lexer.scan() != TokenKind::SeparatorEqual {
                        return None;
                    }
                    token = lexer.scan();
                    let seconds = Some(lexer.try_get_time_span_value(token)?);
                    // Directive names differ in length: 7, 8 and 9 characters
                    match directive.len() {
                        7 => value.max_age = seconds,
                        8 => value.shared_max_age = seconds,
                        _ => value.min_fresh = seconds,
                    }
                }
                "private" | "no-cache" => {
                    let is_private = directive.len() == 7;
                    if is_private {
                        value.private = true;
                    } else {
                        value.no_cache = true;
                    }

                    token = lexer.scan();
                    if token != TokenKind::SeparatorEqual {
                        token_read = true;
                    } else {
                        token = lexer.scan();
                        if token != TokenKind::QuotedString {
                            return None;
                        }
                        let fields = lexer
                            .quoted_string_value(token)
                            .split(',')
                            .map(|f| f.trim_matches(|c| c == ' ' || c == '\t').to_string());
                        if is_private {
                            value.private_headers.extend(fields);
                        } else {
                            value.no_cache_headers.extend(fields);
                        }
                    }
                }
                _ => {
                    let name = directive.to_string();
                    let mut extension_value = None;
                    token = lexer.scan();
                    if token == TokenKind::SeparatorEqual {
                        token = lexer.scan();
                        if !matches!(token.kind(), TokenKind::Token | TokenKind::QuotedString) {
                            return None;
                        }
                        extension_value = Some(lexer.string_value(token).to_string());
                    } else {
                        token_read = true;
                    }
                    value
                        .extensions
                        .push(NameValueHeaderValue::from_parts(name, extension_value));
                }
            }

            if !token_read {
                token = lexer.scan();
            }
            match token.kind() {
                TokenKind::SeparatorComma => continue,
                TokenKind::End => return Some(value),
                _ => return None,
            }
        }
    }
}

fn write_field_list(f: &mut fmt::Formatter<'_>, directive: &str, fields: &[String]) -> fmt::Result {
    f.write_str(directive)?;
    if !fields.is_empty() {
        write!(f, "=\"{}\"", fields.join(", "))?;
    }
    Ok(())
}

impl fmt::Display for CacheControlHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                f.write_str(", ")
            }
        };

        for (set, name) in [
            (self.no_store, "no-store"),
            (self.no_transform, "no-transform"),
            (self.only_if_cached, "only-if-cached"),
            (self.public, "public"),
            (self.must_revalidate, "must-revalidate"),
            (self.proxy_revalidate, "proxy-revalidate"),
        ] {
            if set {
                sep(f)?;
                f.write_str(name)?;
            }
        }

        if self.no_cache {
            sep(f)?;
            write_field_list(f, "no-cache", &self.no_cache_headers)?;
        }
        if let Some(max_age) = self.max_age {
            sep(f)?;
            write!(f, "max-age={}", max_age.as_secs())?;
        }
        if let Some(shared) = self.shared_max_age {
            sep(f)?;
            write!(f, "s-maxage={}", shared.as_secs())?;
        }
        if self.max_stale {
            sep(f)?;
            f.write_str("max-stale")?;
            if let Some(limit) = self.max_stale_limit {
                write!(f, "={}", limit.as_secs())?;
            }
        }
        if let Some(min_fresh) = self.min_fresh {
            sep(f)?;
            write!(f, "min-fresh={}", min_fresh.as_secs())?;
        }
        if self.private {
            sep(f)?;
            write_field_list(f, "private", &self.private_headers)?;
        }
        for extension in &self.extensions {
            sep(f)?;
            write!(f, "{}", extension)?;
        }
        Ok(())
    }
}

impl FromStr for CacheControlHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
