//! # Products
//!
//! Product tokens as used by [`User-Agent`](https://datatracker.ietf.org/doc/html/rfc7231#section-5.5.3),
//! [`Server`](https://datatracker.ietf.org/doc/html/rfc7231#section-7.4.2) and `Upgrade`.
//!
//! ```text
//! product         = token [ "/" product-version ]
//! User-Agent      = product *( RWS ( product / comment ) )
//! ```
//!
//! `Upgrade` lists products separated by commas; `User-Agent` and `Server` list
//! products and comments one after another.
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::types::{ProductHeaderValue, ProductInfoHeaderValue};
//!
//! let product = ProductHeaderValue::try_parse("Mozilla/5.0").unwrap();
//! assert_eq!(product.name(), "Mozilla");
//! assert_eq!(product.version(), Some("5.0"));
//!
//! let comment = ProductInfoHeaderValue::try_parse("(X11; Linux x86_64)").unwrap();
//! assert_eq!(comment.comment(), Some("(X11; Linux x86_64)"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::collection::{self, ElementResult};
use crate::parser::lexer::{Comment, Lexer, TokenKind};
use crate::parser::primitives::{check_comment, check_token};

/// A `name[/version]` product token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductHeaderValue {
    name: String,
    version: Option<String>,
}

impl ProductHeaderValue {
    pub fn new(name: &str) -> Result<Self> {
        check_token(name, "name")?;
        Ok(ProductHeaderValue {
            name: name.to_string(),
            version: None,
        })
    }

    pub fn with_version(name: &str, version: &str) -> Result<Self> {
        let mut product = Self::new(name)?;
        check_token(version, "version")?;
        product.version = Some(version.to_string());
        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
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
        let mut product = ProductHeaderValue {
            name: lexer.string_value(name).to_string(),
            version: None,
        };

        let mut token = lexer.scan();
        if token == TokenKind::SeparatorSlash {
            let version = lexer.scan();
            if version != TokenKind::Token {
                return None;
            }
            product.version = Some(lexer.string_value(version).to_string());
            token = lexer.scan();
        }
        Some((Some(product), token))
    }
}

impl PartialEq for ProductHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
            && match (&self.version, &other.version) {
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Eq for ProductHeaderValue {}

impl fmt::Display for ProductHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}/{}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for ProductHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}

/// One entry of a `User-Agent` or `Server` value: a product or a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductInfoHeaderValue {
    Product(ProductHeaderValue),
    /// Comment text, parentheses included
    Comment(String),
}

impl ProductInfoHeaderValue {
    pub fn from_product(name: &str, version: Option<&str>) -> Result<Self> {
        let product = match version {
            Some(version) => ProductHeaderValue::with_version(name, version)?,
            None => ProductHeaderValue::new(name)?,
        };
        Ok(ProductInfoHeaderValue::Product(product))
    }

    /// Creates a comment entry from `(...)` text.
    pub fn from_comment(comment: &str) -> Result<Self> {
        check_comment(comment, "comment")?;
        Ok(ProductInfoHeaderValue::Comment(comment.to_string()))
    }

    pub fn product(&self) -> Option<&ProductHeaderValue> {
        match self {
            ProductInfoHeaderValue::Product(product) => Some(product),
            ProductInfoHeaderValue::Comment(_) => None,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            ProductInfoHeaderValue::Comment(comment) => Some(comment),
            ProductInfoHeaderValue::Product(_) => None,
        }
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        let mut lexer = Lexer::new(input);
        match Self::parse_element(&mut lexer)? {
            (value, token) if token == TokenKind::End => value,
            _ => None,
        }
    }

    pub(crate) fn try_parse_list(input: &str, minimal_count: usize) -> Option<Vec<Self>> {
        collection::try_parse_repetition(input, minimal_count, Self::parse_element)
    }

    /// Reads a product or comment and reports the following token without
    /// consuming it.
    fn parse_element(lexer: &mut Lexer<'_>) -> ElementResult<Self> {
        let value = match lexer.scan_comment_optional() {
            Comment::Found(comment) => ProductInfoHeaderValue::Comment(comment.to_string()),
            Comment::Unterminated => return None,
            Comment::NotComment(token) if token == TokenKind::End => return Some((None, token)),
            Comment::NotComment(token) if token == TokenKind::Token => {
                let mut product = ProductHeaderValue {
                    name: lexer.string_value(token).to_string(),
                    version: None,
                };
                let pos = lexer.position();
                if lexer.scan() == TokenKind::SeparatorSlash {
                    let version = lexer.scan();
                    if version != TokenKind::Token {
                        return None;
                    }
                    product.version = Some(lexer.string_value(version).to_string());
                } else {
                    lexer.set_position(pos);
                }
                ProductInfoHeaderValue::Product(product)
            }
            Comment::NotComment(_) => return None,
        };
        Some((Some(value), lexer.peek()))
    }
}

impl From<ProductHeaderValue> for ProductInfoHeaderValue {
    fn from(product: ProductHeaderValue) -> Self {
        ProductInfoHeaderValue::Product(product)
    }
}

impl fmt::Display for ProductInfoHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductInfoHeaderValue::Product(product) => write!(f, "{}", product),
            ProductInfoHeaderValue::Comment(comment) => f.write_str(comment),
        }
    }
}

impl FromStr for ProductInfoHeaderValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
