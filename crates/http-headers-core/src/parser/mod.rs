//! Tokenizer and shared parsing building blocks.
//!
//! - [`lexer`]: RFC 2616 token / quoted-string / comment scanner
//! - [`primitives`]: scalar value parsers (token, integer, date, URI, host, ...)
//! - [`collection`]: comma-list and repetition-list drivers

pub mod collection;
pub mod lexer;
pub mod primitives;

pub use lexer::{Comment, Lexer, Token, TokenKind};
