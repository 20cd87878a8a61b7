//! # Header Collections
//!
//! [`HttpHeaders`] is an ordered, case-insensitive map from header names to values.
//!
//! Values can be added with validation ([`HttpHeaders::add`]) or stored raw
//! ([`HttpHeaders::try_add_without_validation`]). Raw values of known headers are
//! parsed lazily by the first typed read; values that turn out to be invalid are
//! kept and still reported by [`HttpHeaders::get_values`] and when formatting.
//!
//! A collection has a [`HeaderKind`]. Known headers that belong to a different
//! kind are rejected if either side is a content header, and stored opaquely
//! otherwise.
//!
//! ## Examples
//!
//! ```rust
//! use http_headers_core::headers::HttpHeaders;
//! use http_headers_core::types::CacheControlHeaderValue;
//!
//! let mut headers = HttpHeaders::new();
//! headers.add("Cache-Control", "no-store").unwrap();
//! headers.add("X-Trace", "abc").unwrap();
//!
//! let cache = headers.get_value::<CacheControlHeaderValue>("cache-control").unwrap();
//! assert!(cache.no_store);
//! assert_eq!(headers.to_string(), "Cache-Control: no-store\r\nX-Trace: abc\r\n");
//! ```

use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::error::{Error, Result};
use crate::headers::bucket::HeaderBucket;
use crate::headers::collection::HttpHeaderValueCollection;
use crate::headers::header_info::{lookup, HeaderInfo, HeaderKind};
use crate::headers::value::{HeaderValue, TypedHeaderValue};
use crate::parser::lexer::Lexer;

/// One stored header.
#[derive(Debug, Clone)]
struct HeaderEntry {
    /// Name as first added
    name: String,
    /// Registry entry, absent for unknown or opaquely stored headers
    info: Option<&'static HeaderInfo>,
    bucket: HeaderBucket,
}

impl HeaderEntry {
    fn materialize(&mut self) {
        if let Some(info) = self.info {
            let bucket = std::mem::take(&mut self.bucket);
            self.bucket = bucket.materialize(info);
        }
    }
}

/// An ordered collection of HTTP headers.
#[derive(Debug, Clone)]
pub struct HttpHeaders {
    kind: HeaderKind,
    entries: IndexMap<String, HeaderEntry>,
}

impl Default for HttpHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpHeaders {
    /// Creates a collection that accepts every header.
    pub fn new() -> Self {
        Self::with_kind(HeaderKind::NONE)
    }

    /// Creates a collection for one message part.
    pub fn with_kind(kind: HeaderKind) -> Self {
        HttpHeaders {
            kind,
            entries: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> HeaderKind {
        self.kind
    }

    /// Adds a value, parsing it immediately for known headers.
    ///
    /// Fails if the name is not a token, if the header belongs to another
    /// message part, if the value does not parse, or if a single-valued header
    /// already has a value.
    pub fn add(&mut self, name: &str, value: &str) -> Result<()> {
        let info = self.check_name(name)?;
        let value = value.trim();
        check_line_breaks(name, value)?;

        let Some(info) = info else {
            let entry = self.entry(name, None);
            if let HeaderBucket::Raw(values) = &mut entry.bucket {
                values.push(value.to_string());
            }
            return Ok(());
        };

        let parsed = info.parse(value).ok_or_else(|| Error::InvalidHeaderValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;

        let entry = self.entry(name, Some(info));
        entry.materialize();
        match &mut entry.bucket {
            HeaderBucket::Single { value: slot, .. } => {
                if slot.is_some() {
                    return Err(Error::SingleValueHeader(info.name().to_string()));
                }
                *slot = parsed.into_iter().next();
            }
            HeaderBucket::Many { values, .. } => values.extend(parsed),
            HeaderBucket::Raw(_) => {}
        }
        Ok(())
    }

    /// Adds several values with [`add`](Self::add), stopping at the first error.
    pub fn add_values<I, S>(&mut self, name: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.add(name, value.as_ref())?;
        }
        Ok(())
    }

    /// Stores a value without validating it.
    ///
    /// Only the name and line breaks are checked; returns `false` if either is rejected.
    pub fn try_add_without_validation(&mut self, name: &str, value: &str) -> bool {
        let Ok(info) = self.check_name(name) else {
            return false;
        };
        if check_line_breaks(name, value).is_err() {
            return false;
        }
        let entry = self.entry(name, info);
        match entry.info {
            Some(info) => entry.bucket.push_raw(info, value.to_string()),
            None => {
                if let HeaderBucket::Raw(values) = &mut entry.bucket {
                    values.push(value.to_string());
                }
            }
        }
        true
    }

    /// Stores several values without validating them.
    pub fn try_add_values_without_validation<I, S>(&mut self, name: &str, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.check_name(name).is_err() {
            return false;
        }
        for value in values {
            self.try_add_without_validation(name, value.as_ref());
        }
        true
    }

    /// Removes a header; returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries
            .shift_remove(&name.to_ascii_lowercase())
            .map_or(false, |entry| !entry.bucket.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map_or(false, |entry| !entry.bucket.is_empty())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of headers with at least one value.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| !entry.bucket.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All values of a header, formatted.
    pub fn get_values(&self, name: &str) -> Result<Vec<String>> {
        self.try_get_values(name)
            .ok_or_else(|| Error::HeaderNotFound(name.to_string()))
    }

    pub fn try_get_values(&self, name: &str) -> Option<Vec<String>> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .filter(|entry| !entry.bucket.is_empty())
            .map(|entry| entry.bucket.to_strings())
    }

    /// Iterates over present headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec<String>)> + '_ {
        self.entries
            .values()
            .filter(|entry| !entry.bucket.is_empty())
            .map(|entry| (entry.name.as_str(), entry.bucket.to_strings()))
    }

    /// The parsed value of a known single-valued header.
    ///
    /// Returns `None` if the header is absent, unknown, invalid, list-valued or
    /// holds a different type than `T`.
    pub fn get_value<T: TypedHeaderValue>(&mut self, name: &str) -> Option<&T> {
        let info = self.check_name(name).ok()??;
        self.typed_value(info)
    }

    /// Replaces a header with one typed value, or removes it for `None`.
    ///
    /// The value must be of the type the header parses to.
    pub fn set_value<T: TypedHeaderValue>(&mut self, name: &str, value: Option<T>) -> Result<()> {
        let info = self.check_name(name)?;
        let Some(value) = value else {
            self.remove(name);
            return Ok(());
        };
        let value = value.into_value();
        check_line_breaks(name, &value.to_string())?;

        match info {
            Some(info) => {
                if !info.accepts(&value) {
                    return Err(Error::InvalidHeaderValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    });
                }
                self.store_value(info, Some(value));
            }
            None => {
                let entry = self.entry(name, None);
                entry.bucket = HeaderBucket::Raw(vec![value.to_string()]);
            }
        }
        Ok(())
    }

    /// A typed, mutable view over the values of a known list-valued header.
    pub fn get_values_typed<T: TypedHeaderValue>(
        &mut self,
        name: &str,
    ) -> Result<HttpHeaderValueCollection<'_, T>> {
        match self.check_name(name)? {
            Some(info) if info.allows_many() => Ok(self.collection(info)),
            Some(info) => Err(Error::SingleValueHeader(info.name().to_string())),
            None => Err(Error::MisusedHeader(name.to_string())),
        }
    }

    pub(crate) fn typed_value<T: TypedHeaderValue>(&mut self, info: &'static HeaderInfo) -> Option<&T> {
        let entry = self.entries.get_mut(&info.name().to_ascii_lowercase())?;
        entry.materialize();
        match &entry.bucket {
            HeaderBucket::Single { value: Some(value), .. } => T::from_value(value),
            _ => None,
        }
    }

    /// Replaces a known header with an already validated value.
    pub(crate) fn store_value(&mut self, info: &'static HeaderInfo, value: Option<HeaderValue>) {
        let Some(value) = value else {
            self.remove(info.name());
            return;
        };
        let entry = self.entry(info.name(), Some(info));
        entry.bucket = if info.allows_many() {
            HeaderBucket::Many {
                values: vec![value],
                invalid: Vec::new(),
            }
        } else {
            HeaderBucket::Single {
                value: Some(value),
                invalid: Vec::new(),
            }
        };
    }

    pub(crate) fn collection<T: TypedHeaderValue>(
        &mut self,
        info: &'static HeaderInfo,
    ) -> HttpHeaderValueCollection<'_, T> {
        let entry = self.entry(info.name(), Some(info));
        let bucket = std::mem::take(&mut entry.bucket);
        entry.bucket = bucket.materialize(info).into_many();
        HttpHeaderValueCollection::new(info, &mut entry.bucket)
    }

    pub(crate) fn has_list_value<T: TypedHeaderValue>(
        &mut self,
        info: &'static HeaderInfo,
        matches: impl Fn(&T) -> bool,
    ) -> bool {
        if !self.contains(info.name()) {
            return false;
        }
        let values = self.collection::<T>(info);
        let found = values.iter().any(|value| matches(value));
        found
    }

    /// Adds `text` to a list header unless a matching value exists, or removes
    /// every matching value.
    pub(crate) fn set_list_flag<T: TypedHeaderValue + PartialEq + Clone>(
        &mut self,
        info: &'static HeaderInfo,
        text: &str,
        present: bool,
        matches: impl Fn(&T) -> bool,
    ) {
        let mut values = self.collection::<T>(info);
        let existing: Vec<T> = values.iter().filter(|value| matches(value)).cloned().collect();
        if present {
            if existing.is_empty() {
                values.try_parse_add(text);
            }
        } else {
            for value in &existing {
                values.remove(value);
            }
        }
    }

    /// Validates a header name against the registry and this collection's kind.
    ///
    /// `Ok(None)` means the header is stored opaquely.
    fn check_name(&self, name: &str) -> Result<Option<&'static HeaderInfo>> {
        if name.is_empty() {
            return Err(Error::EmptyValue("name"));
        }
        if !Lexer::is_valid_token(name) {
            return Err(Error::invalid_format(name));
        }

        let Some(info) = lookup(name) else {
            return Ok(None);
        };
        if self.kind == HeaderKind::NONE || self.kind.intersects(info.kind()) {
            return Ok(Some(info));
        }
        if self.kind.contains(HeaderKind::CONTENT) || info.kind().contains(HeaderKind::CONTENT) {
            return Err(Error::MisusedHeader(name.to_string()));
        }
        trace!("Storing header {} opaquely in a {:?} collection", name, self.kind);
        Ok(None)
    }

    fn entry(&mut self, name: &str, info: Option<&'static HeaderInfo>) -> &mut HeaderEntry {
        self.entries
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| HeaderEntry {
                name: info.map_or_else(|| name.to_string(), |info| info.name().to_string()),
                info,
                bucket: HeaderBucket::default(),
            })
    }
}

/// Values written to the wire may not start a new header line.
fn check_line_breaks(name: &str, value: &str) -> Result<()> {
    if value.contains(['\r', '\n']) {
        return Err(Error::InvalidHeaderValue {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for HttpHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries.values() {
            if entry.bucket.is_empty() {
                continue;
            }
            let separator = entry.info.map_or(", ", |info| info.separator());
            write!(f, "{}: {}\r\n", entry.name, entry.bucket.to_strings().join(separator))?;
        }
        Ok(())
    }
}
