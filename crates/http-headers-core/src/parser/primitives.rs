//! Parsers for headers whose value is a single scalar.
//!
//! These back the registry entries for `Host`, `From`, `Max-Forwards`,
//! `Content-Length`, `Age`, `Content-MD5`, the date headers and the URI headers.
//! Each `try_parse_*` function is total: it returns `None` instead of failing loudly.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use url::Url;

use crate::error::{Error, Result};
use crate::parser::lexer::{parse_unsigned, Comment, Lexer, TokenKind};
use crate::types::uri::HeaderUri;

/// Accepts `input` if it is a non-empty RFC 2616 token.
pub fn try_parse_token(input: &str) -> Option<String> {
    let input = input.trim();
    Lexer::is_valid_token(input).then(|| input.to_string())
}

/// Validates that `s` is a token, distinguishing empty input from bad characters.
pub fn check_token(s: &str, name: &'static str) -> Result<()> {
    if Lexer::is_valid_token(s) {
        Ok(())
    } else if s.is_empty() {
        Err(Error::EmptyValue(name))
    } else {
        Err(Error::invalid_format(s))
    }
}

/// Validates that `s` is exactly one quoted-string, quotes included.
pub fn check_quoted_string(s: &str, name: &'static str) -> Result<()> {
    let mut lexer = Lexer::new(s);
    if lexer.scan() == TokenKind::QuotedString && lexer.scan() == TokenKind::End {
        Ok(())
    } else if s.is_empty() {
        Err(Error::EmptyValue(name))
    } else {
        Err(Error::invalid_format(s))
    }
}

/// Validates that `s` is exactly one comment, parentheses included.
pub fn check_comment(s: &str, name: &'static str) -> Result<()> {
    let mut lexer = Lexer::new(s);
    match lexer.scan_comment_optional() {
        Comment::Found(_) if lexer.scan() == TokenKind::End => Ok(()),
        _ if s.is_empty() => Err(Error::EmptyValue(name)),
        _ => Err(Error::invalid_format(s)),
    }
}

/// Parses a non-negative 32-bit decimal integer.
pub fn try_parse_int(input: &str) -> Option<i32> {
    parse_unsigned(input.trim())
}

/// Parses a non-negative 64-bit decimal integer.
pub fn try_parse_long(input: &str) -> Option<i64> {
    parse_unsigned(input.trim())
}

/// Parses delta-seconds into a [`Duration`].
pub fn try_parse_time_span_seconds(input: &str) -> Option<Duration> {
    try_parse_int(input).map(|secs| Duration::from_secs(secs as u64))
}

/// Parses any supported HTTP-date layout.
pub fn try_parse_date(input: &str) -> Option<DateTime<Utc>> {
    Lexer::try_parse_date(input)
}

/// Decodes a Base64 digest such as the value of `Content-MD5`.
pub fn try_parse_md5(input: &str) -> Option<Vec<u8>> {
    STANDARD.decode(input.trim()).ok()
}

/// Encodes a digest for `Content-MD5`.
pub fn format_md5(digest: &[u8]) -> String {
    STANDARD.encode(digest)
}

/// Parses an absolute URI or a relative reference.
pub fn try_parse_uri(input: &str) -> Option<HeaderUri> {
    HeaderUri::try_parse(input.trim())
}

/// Validates that `s` is usable as a URI (absolute or relative).
pub fn check_uri(s: &str, name: &'static str) -> Result<()> {
    if s.is_empty() {
        return Err(Error::EmptyValue(name));
    }
    HeaderUri::try_parse(s)
        .map(|_| ())
        .ok_or_else(|| Error::invalid_format(s))
}

/// Parses `host[:port]` the way it would appear in an authority component.
pub fn try_parse_host(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty()
        || input.contains(['/', '?', '#', '@', ' ', '\\'])
        || input.chars().any(char::is_control)
    {
        return None;
    }
    let url = Url::parse(&format!("http://u@{}/", input)).ok()?;
    url.host_str()?;
    Some(input.to_string())
}

/// Parses a mailbox: either `local@domain` or `Display Name <local@domain>`.
pub fn try_parse_email(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let address = match (trimmed.find('<'), trimmed.ends_with('>')) {
        (Some(open), true) => &trimmed[open + 1..trimmed.len() - 1],
        (None, false) => trimmed,
        _ => return None,
    };

    let (local, domain) = address.split_once('@')?;
    let valid_part = |part: &str| {
        !part.is_empty()
            && part
                .bytes()
                .all(|b| b.is_ascii_graphic() && !matches!(b, b'@' | b'<' | b'>' | b',' | b';'))
    };
    if !valid_part(local) || !valid_part(domain) || domain.starts_with('.') || domain.ends_with('.') {
        return None;
    }
    Some(trimmed.to_string())
}
