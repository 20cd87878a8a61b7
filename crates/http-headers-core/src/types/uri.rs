//! URI values carried by `Location`, `Referer` and `Content-Location`.
//!
//! HTTP allows both absolute URIs and relative references in these headers, so
//! the value keeps whichever form it was given.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

use crate::error::{Error, Result};

/// Absolute URI or relative reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderUri {
    /// Scheme-qualified URI
    Absolute(Url),
    /// Reference resolved against the request URI by the consumer
    Relative(String),
}

impl HeaderUri {
    /// Parses `input` as an absolute URI, falling back to a relative reference.
    pub fn try_parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }
        match Url::parse(input) {
            Ok(url) => Some(HeaderUri::Absolute(url)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
                    return None;
                }
                let base = Url::parse("http://localhost/").ok()?;
                base.join(input).ok()?;
                Some(HeaderUri::Relative(input.to_string()))
            }
            Err(_) => None,
        }
    }

    /// True for scheme-qualified URIs.
    pub fn is_absolute(&self) -> bool {
        matches!(self, HeaderUri::Absolute(_))
    }

    /// The URI text.
    pub fn as_str(&self) -> &str {
        match self {
            HeaderUri::Absolute(url) => url.as_str(),
            HeaderUri::Relative(s) => s,
        }
    }
}

impl From<Url> for HeaderUri {
    fn from(url: Url) -> Self {
        HeaderUri::Absolute(url)
    }
}

impl fmt::Display for HeaderUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s).ok_or_else(|| Error::invalid_format(s))
    }
}
