//! Header metadata and the process-wide registry of known headers.
//!
//! Each known header has a [`HeaderInfo`] describing which message part it belongs
//! to, whether it carries one value or a list, how list entries are joined when
//! formatting, and the parser that turns raw text into [`HeaderValue`]s.

use std::collections::HashMap;
use std::fmt;

use bitflags::bitflags;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::headers::known;
use crate::headers::value::HeaderValue;

bitflags! {
    /// The message parts a header may appear in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HeaderKind: u8 {
        const REQUEST = 1;
        const RESPONSE = 1 << 1;
        const CONTENT = 1 << 2;
    }
}

impl HeaderKind {
    /// No restriction; used by a plain [`HttpHeaders`](crate::headers::HttpHeaders).
    pub const NONE: HeaderKind = HeaderKind::empty();

    /// Headers shared by requests and responses.
    pub const GENERAL: HeaderKind = HeaderKind::REQUEST.union(HeaderKind::RESPONSE);
}

/// How raw text of a header is turned into values.
#[derive(Clone, Copy)]
pub(crate) enum HeaderParser {
    Single(fn(&str) -> Option<HeaderValue>),
    Many {
        parse: fn(&str, usize) -> Option<Vec<HeaderValue>>,
        minimal_count: usize,
    },
}

impl HeaderParser {
    /// Parses `input` into zero or more values, honouring the minimal count.
    pub(crate) fn parse(&self, input: &str) -> Option<Vec<HeaderValue>> {
        match self {
            HeaderParser::Single(parse) => parse(input).map(|value| vec![value]),
            HeaderParser::Many {
                parse,
                minimal_count,
            } => parse(input, *minimal_count),
        }
    }
}

impl fmt::Debug for HeaderParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderParser::Single(_) => f.write_str("Single"),
            HeaderParser::Many { minimal_count, .. } => f
                .debug_struct("Many")
                .field("minimal_count", minimal_count)
                .finish(),
        }
    }
}

/// Static description of one known header.
#[derive(Debug)]
pub struct HeaderInfo {
    name: &'static str,
    kind: HeaderKind,
    separator: &'static str,
    parser: HeaderParser,
}

impl HeaderInfo {
    pub(crate) const fn single(
        name: &'static str,
        kind: HeaderKind,
        parse: fn(&str) -> Option<HeaderValue>,
    ) -> Self {
        HeaderInfo {
            name,
            kind,
            separator: ", ",
            parser: HeaderParser::Single(parse),
        }
    }

    pub(crate) const fn many(
        name: &'static str,
        kind: HeaderKind,
        separator: &'static str,
        minimal_count: usize,
        parse: fn(&str, usize) -> Option<Vec<HeaderValue>>,
    ) -> Self {
        HeaderInfo {
            name,
            kind,
            separator,
            parser: HeaderParser::Many {
                parse,
                minimal_count,
            },
        }
    }

    /// Canonical spelling of the header name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> HeaderKind {
        self.kind
    }

    /// True for list-valued headers.
    pub fn allows_many(&self) -> bool {
        matches!(self.parser, HeaderParser::Many { .. })
    }

    /// Text placed between list entries when formatting.
    pub fn separator(&self) -> &'static str {
        self.separator
    }

    pub(crate) fn parser(&self) -> &HeaderParser {
        &self.parser
    }

    /// Parses one raw value the way the registry would for this header.
    pub fn parse(&self, input: &str) -> Option<Vec<HeaderValue>> {
        self.parser.parse(input)
    }

    /// True if `value` formats to text this header parses back into exactly one
    /// value of the same kind.
    pub(crate) fn accepts(&self, value: &HeaderValue) -> bool {
        let text = value.to_string();
        let parsed = match self.parser {
            HeaderParser::Single(parse) => parse(&text).map(|parsed| vec![parsed]),
            HeaderParser::Many { parse, .. } => parse(&text, 0),
        };
        match parsed.as_deref() {
            Some([parsed]) => parsed.same_kind(value),
            _ => false,
        }
    }
}

static REGISTRY: Lazy<HashMap<String, &'static HeaderInfo>> = Lazy::new(|| {
    known::ALL
        .iter()
        .map(|info| (info.name.to_ascii_lowercase(), *info))
        .collect()
});

/// Looks up a known header by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static HeaderInfo> {
    REGISTRY.get(&name.to_ascii_lowercase()).copied()
}
