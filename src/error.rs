//! Failures reported by the assertion helpers

use thiserror::Error;

/// A single assertion failure
///
/// Every helper in this crate reports discrepancies as a [`Failure`] through a
/// [`Report`] context instead of returning it.
///
/// [`Report`]: crate::report::Report
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Failure {
    /// An error was returned but no error check was supplied
    #[error("unexpected error returned.\nError: {kind}({message})")]
    UnexpectedError {
        /// Debug rendering of the error
        kind: String,
        /// Display rendering of the error
        message: String,
    },

    /// An error check was supplied but no error was returned
    #[error("expected error but none received")]
    MissingError,

    /// An expected error value is not part of the error chain
    #[error("error unexpected.\nExpected error: {expected}\nGot           : {actual}")]
    NotInChain {
        /// The expected error
        expected: String,
        /// The top-level error that was checked
        actual: String,
    },

    /// No error of the expected type (or variant) is part of the error chain
    #[error("Error type check failed.\nExpected error type: {expected}\nGot                : {actual}")]
    TypeMismatch {
        /// The expected type or variant
        expected: String,
        /// The top-level error that was checked
        actual: String,
    },

    /// The rendered error message does not contain the expected substring
    #[error("error string check failed.\nExpected to contain: {expected}\nGot                : {actual}")]
    MissingSubstring {
        /// The expected substring
        expected: String,
        /// The rendered error message
        actual: String,
    },

    /// Closing a stream failed
    #[error("error while closing body: {0}")]
    Close(String),

    /// Reading a stream failed
    #[error("error while reading body: {0}")]
    Read(String),

    /// A key of the expected mapping is absent from the subject
    #[error("missing field {path}")]
    MissingField {
        /// Dotted path of the key from the root mapping
        path: String,
    },

    /// Values at the same path are not equal
    #[error("not equal at `{path}`:\nexpected: {expected}\nactual  : {actual}")]
    NotEqual {
        /// Dotted path of the value, empty for the root
        path: String,
        /// The expected value
        expected: String,
        /// The subject value
        actual: String,
    },

    /// A value could not be converted for comparison
    #[error("failed to serialize {side} value: {message}")]
    Serialize {
        /// Which side failed (`subject` or `expected`)
        side: &'static str,
        /// Serializer error message
        message: String,
    },
}

impl Failure {
    /// Returns `true` for failures that abort the current test
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Read(_) | Self::Serialize { .. })
    }
}
