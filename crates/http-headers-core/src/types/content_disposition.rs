//! # Content-Disposition
//!
//! The [`Content-Disposition`](https://datatracker.ietf.org/doc/html/rfc6266) header.
//!
//! ```text
//! content-disposition = disposition-type *( ";" disposition-parm )
//! ```
//!
//! Parameters are stored as received. The typed accessors decode them on read and
//! encode on write:
//!
//! - `filename` and `name`: plain, quoted, or MIME encoded-word
//!   (`=?charset?B?base64?=`) for non-ASCII text
//! - `filename*`: [RFC 5987](https://datatracker.ietf.org/doc/html/rfc5987)
//!   `charset'language'percent-encoded`
//! - `creation-date`, `modification-date`, `read-date`: quoted HTTP-dates
//! - `size`: decimal octet count
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::types::ContentDispositionHeaderValue;
//!
//! let cd = ContentDispositionHeaderValue::try_parse(
//!     "attachment; filename=\"report.pdf\"; filename*=utf-8''r%C3%A9sum%C3%A9.pdf",
//! ).unwrap();
//! assert_eq!(cd.disposition_type(), "attachment");
//! assert_eq!(cd.file_name().as_deref(), Some("report.pdf"));
//! assert_eq!(cd.file_name_star().as_deref(), Some("résumé.pdf"));
//! ```

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::lexer::{format_http_date, parse_unsigned, Lexer, TokenKind};
use crate::parser::primitives::check_token;
use crate::types::name_value::NameValueHeaderValue;
use crate::types::parameters;

const FILE_NAME: &str = "filename";
const FILE_NAME_STAR: &str = "filename*";
const NAME: &str = "name";
const CREATION_DATE: &str = "creation-date";
const MODIFICATION_DATE: &str = "modification-date";
const READ_DATE: &str = "read-date";
const SIZE: &str = "size";

/// A disposition type with its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDispositionHeaderValue {
    disposition_type: String,
    parameters: Vec<NameValueHeaderValue>,
}

impl ContentDispositionHeaderValue {
    /// Creates a disposition such as `inline` or `attachment`.
    pub fn new(disposition_type: &str) -> Result<Self> {
        check_token(disposition_type, "disposition_type")?;
        Ok(ContentDispositionHeaderValue {
            disposition_type: disposition_type.to_string(),
            parameters: Vec::new(),
        })
    }

    pub fn disposition_type(&self) -> &str {
        &self.disposition_type
    }

    pub fn set_disposition_type(&mut self, disposition_type: &str) -> Result<()> {
        check_token(disposition_type, "disposition_type")?;
        self.disposition_type = disposition_type.to_string();
        Ok(())
    }

    pub fn parameters(&self) -> &[NameValueHeaderValue] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<NameValueHeaderValue> {
        &mut self.parameters
    }

    /// The decoded `filename` parameter.
    pub fn file_name(&self) -> Option<String> {
        self.find(FILE_NAME).and_then(|v| decode_value(v, false))
    }

    /// Sets `filename`, quoting or encoding the text as needed.
    pub fn set_file_name(&mut self, file_name: Option<&str>) -> Result<()> {
        let encoded = file_name.map(encode_base64_value);
        self.set(FILE_NAME, encoded.as_deref())
    }

    /// The decoded `filename*` parameter.
    pub fn file_name_star(&self) -> Option<String> {
        self.find(FILE_NAME_STAR).and_then(|v| decode_value(v, true))
    }

    /// Sets `filename*` using UTF-8 percent-encoding.
    pub fn set_file_name_star(&mut self, file_name: Option<&str>) -> Result<()> {
        let encoded = file_name.map(encode_rfc5987);
        self.set(FILE_NAME_STAR, encoded.as_deref())
    }

    /// The decoded `name` parameter.
    pub fn name(&self) -> Option<String> {
        self.find(NAME).and_then(|v| decode_value(v, false))
    }

    pub fn set_name(&mut self, name: Option<&str>) -> Result<()> {
        let encoded = name.map(encode_base64_value);
        self.set(NAME, encoded.as_deref())
    }

    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.date(CREATION_DATE)
    }

    pub fn set_creation_date(&mut self, date: Option<DateTime<Utc>>) -> Result<()> {
        self.set_date(CREATION_DATE, date)
    }

    pub fn modification_date(&self) -> Option<DateTime<Utc>> {
        self.date(MODIFICATION_DATE)
    }

    pub fn set_modification_date(&mut self, date: Option<DateTime<Utc>>) -> Result<()> {
        self.set_date(MODIFICATION_DATE, date)
    }

    pub fn read_date(&self) -> Option<DateTime<Utc>> {
        self.date(READ_DATE)
    }

    pub fn set_read_date(&mut self, date: Option<DateTime<Utc>>) -> Result<()> {
        self.set_date(READ_DATE, date)
    }

    /// The `size` parameter in octets.
    pub fn size(&self) -> Option<u64> {
        self.find(SIZE).and_then(parse_unsigned)
    }

    pub fn set_size(&mut self, size: Option<u64>) -> Result<()> {
        let text = size.map(|s| s.to_string());
        self.set(SIZE, text.as_deref())
    }

    fn find(&self, name: &str) -> Option<&str> {
        parameters::find_parameter(&self.parameters, name).and_then(|p| p.value())
    }

    fn set(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        parameters::set_parameter(&mut self.parameters, name, value)
    }

    fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        let value = self.find(name)?;
        if value.len() < 3 {
            return None;
        }
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        Lexer::try_parse_date(value)
    }

    fn set_date(&mut self, name: &str, date: Option<DateTime<Utc>>) -> Result<()> {
        let text = date.map(|d| format!("\"{}\"", format_http_date(&d)));
        self.set(name, text.as_deref())
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        let mut lexer = Lexer::new(input);
        let token = lexer.scan();
        if token != TokenKind::Token {
            return None;
        }
        let disposition_type = lexer.string_value(token).to_string();

        let mut parameters = Vec::new();
        match lexer.scan().kind() {
            TokenKind::SeparatorSemicolon => {
                let (list, next) = NameValueHeaderValue::parse_parameters(&mut lexer)?;
                if next != TokenKind::End {
                    return None;
                }
                parameters = list;
            }
            TokenKind::End => {}
            _ => return None,
        }

        Some(ContentDispositionHeaderValue {
            disposition_type,
            parameters,
        })
    }
}

/// Quotes `value` if it is not a token, or wraps it as a UTF-8 encoded-word when it
/// contains non-ASCII characters. Surrounding quotes already present are dropped first.
fn encode_base64_value(value: &str) -> String {
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    if !value.is_ascii() {
        return format!("\"=?utf-8?B?{}?=\"", STANDARD.encode(value.as_bytes()));
    }
    if Lexer::is_valid_token(value) {
        value.to_string()
    } else {
        format!("\"{}\"", value)
    }
}

fn encode_rfc5987(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 7);
    out.push_str("utf-8''");
    for b in value.bytes() {
        if Lexer::is_valid_character(b) && !matches!(b, b'*' | b'?' | b'%' | b'\'') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

fn decode_value(value: &str, extended_notation: bool) -> Option<String> {
    if value.len() < 2 {
        return Some(value.to_string());
    }

    if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return Some(decode_encoded_word(inner).unwrap_or_else(|| inner.to_string()));
    }

    if !extended_notation {
        return Some(value.to_string());
    }

    let (charset, rest) = value.split_once('\'')?;
    let (_language, encoded) = rest.split_once('\'')?;
    decode_charset(charset, &percent_decode(encoded)?)
}

/// Decodes `=?charset?B?base64?=`.
fn decode_encoded_word(value: &str) -> Option<String> {
    let body = value.strip_prefix("=?")?.strip_suffix("?=")?;
    let mut parts = body.split('?');
    let (charset, encoding, text) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || !encoding.eq_ignore_ascii_case("b") {
        return None;
    }
    let bytes = STANDARD.decode(text).ok()?;
    decode_charset(charset, &bytes)
}

fn percent_decode(value: &str) -> Option<Vec<u8>> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = value.get(i + 1..i + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Some(out)
}

fn decode_charset(charset: &str, bytes: &[u8]) -> Option<String> {
    match charset.to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => String::from_utf8(bytes.to_vec()).ok(),
        "us-ascii" | "ascii" => bytes
            .is_ascii()
            .then(|| bytes.iter().map(|&b| b as char).collect()),
        "iso-8859-1" | "latin1" => Some(bytes.iter().map(|&b| b as char).collect()),
        _ => None,
    }
}

impl PartialEq for ContentDispositionHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.disposition_type
            .eq_ignore_ascii_case(&other.disposition_type)
            && self.parameters == other.parameters
    }
}

impl Eq for ContentDispositionHeaderValue {}

impl fmt::Display for ContentDispositionHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.disposition_type)?;
        parameters::fmt_parameters(&self.parameters, f)
    }
}

impl FromStr for ContentDispositionHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
