//! # List Parsing
//!
//! Drives an element parser over a whole header value.
//!
//! Element parsers share one shape: they take the lexer, and on success return the
//! element (or `None` for an empty slot such as the gap in `a,,b`) together with the
//! token that ended it. Returning `None` from the parser itself rejects the input.
//!
//! Two drivers exist:
//!
//! - [`try_parse`]: `element *("," element)`. The ending token of every element must
//!   be a comma or the end of input.
//! - [`try_parse_repetition`]: `1*element` with no separator; the element parser
//!   consumes its own whitespace and reports `End` once the input is exhausted.
//!
//! Both enforce a minimal element count after parsing; a failure anywhere discards
//! the partial list.

use crate::parser::lexer::{Lexer, Token, TokenKind};

/// Result of parsing a single list element.
pub type ElementResult<T> = Option<(Option<T>, Token)>;

/// Parses a comma-separated list.
pub fn try_parse<T, F>(input: &str, minimal_count: usize, mut parse_element: F) -> Option<Vec<T>>
where
    F: FnMut(&mut Lexer<'_>) -> ElementResult<T>,
{
    let mut lexer = Lexer::new(input);
    let mut result = Vec::new();

    loop {
        let (value, token) = parse_element(&mut lexer)?;
        if let Some(value) = value {
            result.push(value);
        }

        match token.kind() {
            TokenKind::SeparatorComma => continue,
            TokenKind::End => break,
            _ => return None,
        }
    }

    (result.len() >= minimal_count).then_some(result)
}

/// Parses a list of elements that follow each other without separators.
pub fn try_parse_repetition<T, F>(
    input: &str,
    minimal_count: usize,
    mut parse_element: F,
) -> Option<Vec<T>>
where
    F: FnMut(&mut Lexer<'_>) -> ElementResult<T>,
{
    let mut lexer = Lexer::new(input);
    let mut result = Vec::new();

    loop {
        let (value, token) = parse_element(&mut lexer)?;
        if let Some(value) = value {
            result.push(value);
        }
        if token == TokenKind::End {
            break;
        }
    }

    (result.len() >= minimal_count).then_some(result)
}

/// Parses a comma-separated list of tokens, as used by `Connection` or `Allow`.
pub fn try_parse_tokens(input: &str, minimal_count: usize) -> Option<Vec<String>> {
    try_parse(input, minimal_count, parse_token_element)
}

/// Parses a whitespace-separated list of tokens.
pub fn try_parse_token_repetition(input: &str, minimal_count: usize) -> Option<Vec<String>> {
    try_parse_repetition(input, minimal_count, |lexer| {
        let (value, token) = parse_token_element(lexer)?;
        match token.kind() {
            TokenKind::End | TokenKind::Token => {
                if token == TokenKind::Token {
                    // Hand the lookahead back to the next element
                    lexer.set_position(token.start());
                }
                Some((value, token))
            }
            _ => None,
        }
    })
}

fn parse_token_element(lexer: &mut Lexer<'_>) -> ElementResult<String> {
    let token = lexer.scan();
    if token != TokenKind::Token {
        return Some((None, token));
    }
    let value = lexer.string_value(token).to_string();
    Some((Some(value), lexer.scan()))
}
