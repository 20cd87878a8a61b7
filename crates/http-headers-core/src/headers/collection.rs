//! Typed views over list-valued headers.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::headers::bucket::HeaderBucket;
use crate::headers::header_info::HeaderInfo;
use crate::headers::value::{HeaderValue, TypedHeaderValue};

/// A mutable, typed view over the values of one list-valued header.
///
/// Obtained from [`HttpHeaders::get_values_typed`](crate::headers::HttpHeaders::get_values_typed)
/// or the typed accessors of the request, response and content collections.
/// Values that failed to parse are not visible through [`iter`](Self::iter) but
/// are kept in [`invalid_values`](Self::invalid_values).
pub struct HttpHeaderValueCollection<'a, T> {
    info: &'static HeaderInfo,
    bucket: &'a mut HeaderBucket,
    _marker: PhantomData<T>,
}

impl<'a, T: TypedHeaderValue> HttpHeaderValueCollection<'a, T> {
    pub(crate) fn new(info: &'static HeaderInfo, bucket: &'a mut HeaderBucket) -> Self {
        HttpHeaderValueCollection {
            info,
            bucket,
            _marker: PhantomData,
        }
    }

    fn values(&self) -> &[HeaderValue] {
        match &*self.bucket {
            HeaderBucket::Many { values, .. } => values,
            _ => &[],
        }
    }

    /// Name of the header this collection belongs to.
    pub fn header_name(&self) -> &'static str {
        self.info.name()
    }

    /// Appends a value; fails if it does not format to text this header accepts.
    pub fn add(&mut self, item: T) -> Result<()> {
        let value = item.into_value();
        if !self.info.accepts(&value) {
            return Err(Error::InvalidHeaderValue {
                name: self.info.name().to_string(),
                value: value.to_string(),
            });
        }
        if let HeaderBucket::Many { values, .. } = &mut *self.bucket {
            values.push(value);
        }
        Ok(())
    }

    /// Parses `input` with the header's grammar and appends every value in it.
    pub fn parse_add(&mut self, input: &str) -> Result<()> {
        let parsed = self
            .info
            .parse(input)
            .filter(|parsed| parsed.iter().all(|value| T::from_value(value).is_some()))
            .ok_or_else(|| Error::InvalidHeaderValue {
                name: self.info.name().to_string(),
                value: input.to_string(),
            })?;
        if let HeaderBucket::Many { values, .. } = &mut *self.bucket {
            values.extend(parsed);
        }
        Ok(())
    }

    /// Like [`parse_add`](Self::parse_add) but reports failure as `false`.
    pub fn try_parse_add(&mut self, input: &str) -> bool {
        self.parse_add(input).is_ok()
    }

    /// Removes the first value equal to `item`.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let HeaderBucket::Many { values, .. } = &mut *self.bucket else {
            return false;
        };
        match values.iter().position(|value| T::from_value(value) == Some(item)) {
            Some(index) => {
                values.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|value| value == item)
    }

    /// Drops all values, valid and invalid.
    pub fn clear(&mut self) {
        if let HeaderBucket::Many { values, invalid } = &mut *self.bucket {
            values.clear();
            invalid.clear();
        }
    }

    /// Number of parsed values of type `T`; agrees with [`iter`](Self::iter).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.values().iter().filter_map(T::from_value)
    }

    /// Raw values that failed to parse.
    pub fn invalid_values(&self) -> &[String] {
        match &*self.bucket {
            HeaderBucket::Many { invalid, .. } => invalid,
            _ => &[],
        }
    }
}

impl<T: TypedHeaderValue> fmt::Display for HttpHeaderValueCollection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bucket.to_strings().join(self.info.separator()))
    }
}

impl<T: TypedHeaderValue + fmt::Debug> fmt::Debug for HttpHeaderValueCollection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpHeaderValueCollection")
            .field("header", &self.info.name())
            .field("values", &self.iter().collect::<Vec<_>>())
            .field("invalid", &self.invalid_values())
            .finish()
    }
}
