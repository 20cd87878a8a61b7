use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, building or storing HTTP header values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input does not match the grammar of the value being parsed
    #[error("The format of value '{0}' is invalid")]
    InvalidFormat(String),

    /// A registered header rejected one of its values
    #[error("Invalid value '{value}' for header '{name}'")]
    InvalidHeaderValue {
        /// Header name as supplied by the caller
        name: String,
        /// Offending raw value
        value: String,
    },

    /// A required text argument was empty
    #[error("Value for '{0}' cannot be empty")]
    EmptyValue(&'static str),

    /// A required argument was absent
    #[error("Value for '{0}' is required")]
    MissingValue(&'static str),

    /// A numeric argument fell outside its allowed range
    #[error("Value '{value}' for '{name}' is out of range")]
    OutOfRange {
        /// Name of the rejected argument
        name: &'static str,
        /// Rejected value, formatted
        value: String,
    },

    /// A header was used with a container it does not belong to
    #[error("Misused header name '{0}'. Make sure request headers are used with requests, response headers with responses, and content headers with content objects")]
    MisusedHeader(String),

    /// A single-valued header already holds a value
    #[error("Header '{0}' does not support multiple values")]
    SingleValueHeader(String),

    /// A header was requested that is not present in the collection
    #[error("The given header '{0}' was not found")]
    HeaderNotFound(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidFormat`].
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Error::InvalidFormat(input.into())
    }

    /// Shorthand for [`Error::OutOfRange`].
    pub fn out_of_range(name: &'static str, value: impl ToString) -> Self {
        Error::OutOfRange {
            name,
            value: value.to_string(),
        }
    }

    /// Returns true for errors raised by a grammar violation.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::InvalidFormat(_) | Error::InvalidHeaderValue { .. })
    }
}
