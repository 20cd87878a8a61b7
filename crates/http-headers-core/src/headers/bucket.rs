//! Per-header storage.
//!
//! A header starts out holding the raw strings it was added with. The first typed
//! access runs the registered parser once and the bucket switches to the parsed
//! representation for good; values that fail to parse are kept verbatim on the
//! side so nothing the caller stored is lost.

use tracing::{debug, trace};

use crate::headers::header_info::{HeaderInfo, HeaderParser};
use crate::headers::value::HeaderValue;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HeaderBucket {
    Raw(Vec<String>),
    Single {
        value: Option<HeaderValue>,
        invalid: Vec<String>,
    },
    Many {
        values: Vec<HeaderValue>,
        invalid: Vec<String>,
    },
}

impl Default for HeaderBucket {
    fn default() -> Self {
        HeaderBucket::Raw(Vec::new())
    }
}

impl HeaderBucket {
    /// An empty parsed bucket of the right shape for `info`.
    pub(crate) fn empty(info: &HeaderInfo) -> Self {
        if info.allows_many() {
            HeaderBucket::Many {
                values: Vec::new(),
                invalid: Vec::new(),
            }
        } else {
            HeaderBucket::Single {
                value: None,
                invalid: Vec::new(),
            }
        }
    }

    /// Runs the header's parser over raw values. Parsed buckets are returned as is.
    pub(crate) fn materialize(self, info: &HeaderInfo) -> Self {
        let raw = match self {
            HeaderBucket::Raw(raw) => raw,
            parsed => return parsed,
        };
        trace!("Materializing {} raw value(s) of header {}", raw.len(), info.name());

        let mut bucket = HeaderBucket::empty(info);
        for value in raw {
            bucket.push_raw(info, value);
        }
        bucket
    }

    /// Parses one raw value into an already parsed bucket, demoting it to the
    /// invalid list if it does not parse or the single slot is taken.
    pub(crate) fn push_raw(&mut self, info: &HeaderInfo, raw: String) {
        match (self, info.parser()) {
            (HeaderBucket::Raw(values), _) => values.push(raw),
            (HeaderBucket::Single { value, invalid }, HeaderParser::Single(parse)) => {
                if value.is_some() {
                    debug!("Extra value '{}' for single-valued header {}", raw, info.name());
                    invalid.push(raw);
                } else if let Some(parsed) = parse(&raw) {
                    *value = Some(parsed);
                } else {
                    debug!("Value '{}' for header {} failed to parse", raw, info.name());
                    invalid.push(raw);
                }
            }
            (HeaderBucket::Many { values, invalid }, parser) => match parser.parse(&raw) {
                Some(parsed) => values.extend(parsed),
                None => {
                    debug!("Value '{}' for header {} failed to parse", raw, info.name());
                    invalid.push(raw);
                }
            },
            (HeaderBucket::Single { invalid, .. }, HeaderParser::Many { .. }) => invalid.push(raw),
        }
    }

    /// True if there is nothing to report for this header.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            HeaderBucket::Raw(values) => values.is_empty(),
            HeaderBucket::Single { value, invalid } => value.is_none() && invalid.is_empty(),
            HeaderBucket::Many { values, invalid } => values.is_empty() && invalid.is_empty(),
        }
    }

    /// Formatted values, parsed ones first and invalid raw text after them.
    pub(crate) fn to_strings(&self) -> Vec<String> {
        match self {
            HeaderBucket::Raw(values) => values.clone(),
            HeaderBucket::Single { value, invalid } => value
                .iter()
                .map(ToString::to_string)
                .chain(invalid.iter().cloned())
                .collect(),
            HeaderBucket::Many { values, invalid } => values
                .iter()
                .map(ToString::to_string)
                .chain(invalid.iter().cloned())
                .collect(),
        }
    }

    /// Reshapes a single-value bucket into a list bucket.
    pub(crate) fn into_many(self) -> Self {
        match self {
            HeaderBucket::Single { value, invalid } => HeaderBucket::Many {
                values: value.into_iter().collect(),
                invalid,
            },
            other => other,
        }
    }
}
