//! # Header Value Lexer
//!
//! A small hand-written scanner over the [RFC 2616 §2.2](https://datatracker.ietf.org/doc/html/rfc2616#section-2.2)
//! basic rules: `token`, `quoted-string`, `comment` and the separators used by
//! structured header values.
//!
//! Every typed header value parser in this crate drives a fresh [`Lexer`] over its
//! input and inspects the [`Token`]s it returns. Tokens only carry byte offsets; the
//! text is recovered through the lexer that produced them.
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::parser::lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("text/html; q=0.5");
//! let t = lexer.scan();
//! assert_eq!(t.kind(), TokenKind::Token);
//! assert_eq!(lexer.string_value(t), "text");
//! assert_eq!(lexer.scan().kind(), TokenKind::SeparatorSlash);
//! ```

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Classification of a scanned lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unexpected byte or unterminated quoted-string
    Error,
    /// Only whitespace (or nothing) remains
    End,
    /// A run of RFC 2616 token characters
    Token,
    /// A complete `"..."` string, quotes included
    QuotedString,
    /// `=`
    SeparatorEqual,
    /// `;`
    SeparatorSemicolon,
    /// `/`
    SeparatorSlash,
    /// `-`, only produced by [`Lexer::scan_with_dash`]
    SeparatorDash,
    /// `,`
    SeparatorComma,
    /// `(`, the start of a comment
    OpenParens,
}

/// A classified span of the lexer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
}

impl Token {
    pub(crate) const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Token { kind, start, end }
    }

    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset of the first character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for `End` and zero-length `Error` tokens.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl PartialEq<TokenKind> for Token {
    fn eq(&self, other: &TokenKind) -> bool {
        self.kind == *other
    }
}

/// Outcome of [`Lexer::scan_comment_optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comment<'a> {
    /// A complete comment, parentheses included
    Found(&'a str),
    /// The input did not start a comment; the token that was read instead
    NotComment(Token),
    /// An opening parenthesis without a matching close
    Unterminated,
}

/// HTTP-date layouts tried in order; the first one that matches wins.
enum DateLayout {
    Naive(&'static str),
    Rfc2822,
    Rfc3339,
}

const DATE_LAYOUTS: &[DateLayout] = &[
    // RFC 1123
    DateLayout::Naive("%a, %d %b %Y %H:%M:%S GMT"),
    // RFC 850
    DateLayout::Naive("%A, %d-%b-%y %H:%M:%S GMT"),
    // ANSI C asctime()
    DateLayout::Naive("%a %b %e %H:%M:%S %Y"),
    DateLayout::Naive("%d %b %y %H:%M:%S"),
    // RFC 2822 with and without day name, zone present
    DateLayout::Rfc2822,
    DateLayout::Naive("%a, %d %b %Y %H:%M:%S"),
    DateLayout::Naive("%d %b %Y %H:%M:%S"),
    DateLayout::Rfc3339,
];

/// Format used when writing HTTP-dates back out.
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Formats a timestamp as an RFC 1123 HTTP-date.
pub fn format_http_date(date: &DateTime<Utc>) -> String {
    date.format(HTTP_DATE_FORMAT).to_string()
}

/// Scanner over a single header value.
///
/// The input is never modified; `pos` only moves forward during scanning and can be
/// rewound explicitly with [`Lexer::set_position`] for lookahead.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    /// The complete input text.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back to a position obtained from [`Lexer::position`].
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// Returns true if `ch` may appear inside an RFC 2616 token.
    pub fn is_valid_character(ch: u8) -> bool {
        if ch <= 32 || ch >= 127 {
            return false;
        }
        !matches!(
            ch,
            b'(' | b')'
                | b'<'
                | b'>'
                | b'@'
                | b','
                | b';'
                | b':'
                | b'\\'
                | b'"'
                | b'/'
                | b'['
                | b']'
                | b'?'
                | b'='
                | b'{'
                | b'}'
        )
    }

    /// Returns true if `s` is a non-empty RFC 2616 token.
    pub fn is_valid_token(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(Self::is_valid_character)
    }

    /// Scans the next lexeme, treating `-` as a token character.
    pub fn scan(&mut self) -> Token {
        self.scan_inner(false)
    }

    /// Scans the next lexeme, reporting a leading `-` as [`TokenKind::SeparatorDash`].
    pub fn scan_with_dash(&mut self) -> Token {
        self.scan_inner(true)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Token {
        let pos = self.pos;
        let token = self.scan();
        self.pos = pos;
        token
    }

    fn scan_inner(&mut self, recognize_dash: bool) -> Token {
        let bytes = self.input.as_bytes();
        self.skip_whitespace();

        if self.pos >= bytes.len() {
            return Token::new(TokenKind::End, self.pos, self.pos);
        }

        let start = self.pos;
        let ch = bytes[start];
        let single = |kind| Token::new(kind, start, start + 1);

        let token = match ch {
            b'=' => single(TokenKind::SeparatorEqual),
            b';' => single(TokenKind::SeparatorSemicolon),
            b'/' => single(TokenKind::SeparatorSlash),
            b',' => single(TokenKind::SeparatorComma),
            b'(' => single(TokenKind::OpenParens),
            b'-' if recognize_dash => single(TokenKind::SeparatorDash),
            b'"' => return self.scan_quoted_string(),
            ch if Self::is_valid_character(ch) => {
                let mut end = start + 1;
                while end < bytes.len() && Self::is_valid_character(bytes[end]) {
                    end += 1;
                }
                Token::new(TokenKind::Token, start, end)
            }
            _ => return Token::new(TokenKind::Error, start, start),
        };

        self.pos = token.end;
        token
    }

    fn scan_quoted_string(&mut self) -> Token {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        self.pos += 1;

        while self.pos < bytes.len() {
            let ch = bytes[self.pos];
            self.pos += 1;
            if ch == b'"' {
                return Token::new(TokenKind::QuotedString, start, self.pos);
            }
            if !(32..=126).contains(&ch) {
                // Keep the cursor on a char boundary for non-ASCII input
                while self.pos < bytes.len() && !self.input.is_char_boundary(self.pos) {
                    self.pos += 1;
                }
                break;
            }
        }

        Token::new(TokenKind::Error, start, self.pos)
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && matches!(bytes[self.pos], b' ' | b'\t') {
            self.pos += 1;
        }
    }

    /// Text covered by `token`.
    pub fn string_value(&self, token: Token) -> &'a str {
        self.input.get(token.start..token.end).unwrap_or("")
    }

    /// Text from the start of `from` to the end of `to`.
    pub fn string_value_between(&self, from: Token, to: Token) -> &'a str {
        self.input.get(from.start..to.end).unwrap_or("")
    }

    /// Text of a quoted-string token without its surrounding quotes.
    pub fn quoted_string_value(&self, token: Token) -> &'a str {
        if token.len() < 2 {
            return "";
        }
        self.input.get(token.start + 1..token.end - 1).unwrap_or("")
    }

    /// Everything from `pos` to the end of the input.
    pub fn remaining_string_value(&self, pos: usize) -> &'a str {
        self.input.get(pos..).unwrap_or("")
    }

    /// True if `token` is exactly `*`.
    pub fn is_star_string_value(&self, token: Token) -> bool {
        token.kind == TokenKind::Token && self.string_value(token) == "*"
    }

    /// Reads `token` as an unsigned decimal `i32`.
    pub fn try_get_numeric_value(&self, token: Token) -> Option<i32> {
        parse_unsigned(self.string_value(token))
    }

    /// Reads `token` as an unsigned decimal `i64`.
    pub fn try_get_numeric_value_long(&self, token: Token) -> Option<i64> {
        parse_unsigned(self.string_value(token))
    }

    /// Reads a token as a byte position; positions use the full `u64` range.
    pub fn try_get_position_value(&self, token: Token) -> Option<u64> {
        if token.kind != TokenKind::Token {
            return None;
        }
        parse_unsigned(self.string_value(token))
    }

    /// Reads `token` as delta-seconds.
    pub fn try_get_time_span_value(&self, token: Token) -> Option<Duration> {
        if token.kind != TokenKind::Token {
            return None;
        }
        self.try_get_numeric_value(token)
            .map(|secs| Duration::from_secs(secs as u64))
    }

    /// Reads `token` as an HTTP-date, unquoting it first when needed.
    pub fn try_get_date_value(&self, token: Token) -> Option<DateTime<Utc>> {
        let text = if token.kind == TokenKind::QuotedString {
            self.quoted_string_value(token)
        } else {
            self.string_value(token)
        };
        Self::try_parse_date(text)
    }

    /// Parses a complete string as an HTTP-date, assuming UTC when no zone is given.
    pub fn try_parse_date(text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        DATE_LAYOUTS.iter().find_map(|layout| match layout {
            DateLayout::Naive(format) => NaiveDateTime::parse_from_str(text, format)
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive)),
            DateLayout::Rfc2822 => DateTime::parse_from_rfc2822(text)
                .ok()
                .map(|date| date.with_timezone(&Utc)),
            DateLayout::Rfc3339 => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|date| date.with_timezone(&Utc)),
        })
    }

    /// Reads `token` as a culture-invariant `digits[.digits]` number.
    pub fn try_get_double_value(&self, token: Token) -> Option<f64> {
        if token.kind != TokenKind::Token {
            return None;
        }
        parse_decimal(self.string_value(token))
    }

    /// Next raw byte, without skipping whitespace.
    pub fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consumes one raw byte.
    pub fn eat_char(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Reads a parenthesised comment if one starts at the cursor.
    ///
    /// Nested parentheses are balanced; only printable ASCII is allowed inside.
    pub fn scan_comment_optional(&mut self) -> Comment<'a> {
        let token = self.scan();
        if token.kind != TokenKind::OpenParens {
            return Comment::NotComment(token);
        }

        let bytes = self.input.as_bytes();
        let mut depth = 1;
        while self.pos < bytes.len() {
            let ch = bytes[self.pos];
            self.pos += 1;
            match ch {
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Comment::Found(&self.input[token.start..self.pos]);
                    }
                }
                32..=126 => {}
                _ => break,
            }
        }

        Comment::Unterminated
    }
}

/// Parses an unsigned decimal number made only of ASCII digits.
pub(crate) fn parse_unsigned<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses `digits[.digits]` without sign or exponent.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    let mut dots = 0;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' => dots += 1,
            _ => return None,
        }
    }
    if dots > 1 || s == "." || s.is_empty() {
        return None;
    }
    s.parse().ok()
}
