//! Helpers over ordered `;`-parameter lists.
//!
//! Parameter lists keep their insertion order so values format back the way they
//! were received. Lookups are case-insensitive on the parameter name.

use std::fmt;

use crate::error::{Error, Result};
use crate::parser::lexer::parse_decimal;
use crate::types::name_value::NameValueHeaderValue;

/// Name of the synthetic quality parameter
pub(crate) const QUALITY: &str = "q";

pub(crate) fn find_parameter<'a>(
    parameters: &'a [NameValueHeaderValue],
    name: &str,
) -> Option<&'a NameValueHeaderValue> {
    parameters
        .iter()
        .find(|p| p.name().eq_ignore_ascii_case(name))
}

/// Replaces, appends or (for `None`) removes the parameter called `name`.
pub(crate) fn set_parameter(
    parameters: &mut Vec<NameValueHeaderValue>,
    name: &str,
    value: Option<&str>,
) -> Result<()> {
    let position = parameters
        .iter()
        .position(|p| p.name().eq_ignore_ascii_case(name));

    match (position, value) {
        (Some(index), None) => {
            parameters.remove(index);
        }
        (None, None) => {}
        (Some(index), Some(value)) => parameters[index].set_value(Some(value))?,
        (None, Some(value)) => parameters.push(NameValueHeaderValue::with_value(name, value)?),
    }
    Ok(())
}

/// Writes each parameter as `; name[=value]`.
pub(crate) fn fmt_parameters(
    parameters: &[NameValueHeaderValue],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for parameter in parameters {
        write!(f, "; {}", parameter)?;
    }
    Ok(())
}

/// Reads the `q` parameter; unparsable values read as absent.
pub(crate) fn quality(parameters: &[NameValueHeaderValue]) -> Option<f64> {
    find_parameter(parameters, QUALITY)
        .and_then(|p| p.value())
        .and_then(parse_decimal)
}

/// Rounds a weight to the three decimals a qvalue carries.
///
/// Values outside `[0, 1]`, NaN included, are rejected.
pub(crate) fn round_quality(q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::out_of_range("quality", q));
    }
    Ok((q * 1000.0).round() / 1000.0)
}

/// Writes the `q` parameter, rounded to three decimals.
pub(crate) fn set_quality(parameters: &mut Vec<NameValueHeaderValue>, value: Option<f64>) -> Result<()> {
    match value {
        Some(q) => set_parameter(parameters, QUALITY, Some(&round_quality(q)?.to_string())),
        None => set_parameter(parameters, QUALITY, None),
    }
}
