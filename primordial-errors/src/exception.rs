//! Exception wrappers: the carriers that propagate error values

use crate::{Error, ErrorKind, ErrorPosition};
use serde::Serialize;
use std::fmt;

/// The base exception wrapper.
///
/// Holds an owned copy of the raised error, so the value stays valid after
/// the error that produced it has been dropped. A handler that does not care
/// about the concrete variant can read [`message`](Exception::message)
/// directly; one that does can try [`catch`](Exception::catch).
#[derive(Debug)]
pub struct Exception {
    error: Box<dyn Error>,
}

impl Exception {
    /// Wrap a polymorphic clone of `error`
    pub fn new(error: &dyn Error) -> Self {
        Self {
            error: error.clone_box(),
        }
    }

    /// Get the wrapped error
    pub fn error(&self) -> &dyn Error {
        self.error.as_ref()
    }

    /// Get the message of the wrapped error
    pub fn message(&self) -> &str {
        self.error.message()
    }

    /// Get the position of the wrapped error
    pub fn position(&self) -> &ErrorPosition {
        self.error.position()
    }

    /// Get the kind of the wrapped error
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Check whether the wrapped error is an `E`
    pub fn is<E: Error>(&self) -> bool {
        self.error.is::<E>()
    }

    /// Catch the exception as the typed wrapper `X`.
    ///
    /// If the wrapped error is not `X::Error`, the exception is handed back
    /// unchanged so the next handler can try its own type.
    ///
    /// ```rust
    /// use primordial_errors::{error_position, FileNotFoundError,
    ///     InvalidArgumentErrorException, Raise};
    ///
    /// let exception = FileNotFoundError::new(error_position!(), "README.md")
    ///     .raise::<()>()
    ///     .unwrap_err();
    ///
    /// let exception = exception
    ///     .catch::<InvalidArgumentErrorException>()
    ///     .unwrap_err();
    /// assert!(exception.message().contains("README.md"));
    /// ```
    pub fn catch<X: TypedException>(self) -> Result<X, Exception> {
        match self.error.downcast::<X::Error>() {
            Ok(error) => Ok(X::from_error(*error)),
            Err(error) => Err(Self { error }),
        }
    }

    /// Give up the wrapper and keep the error value
    pub fn into_error(self) -> Box<dyn Error> {
        self.error
    }

    /// Snapshot the exception in a serializable form
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.message().to_string(),
            position: self.position().clone(),
        }
    }
}

impl From<Box<dyn Error>> for Exception {
    fn from(error: Box<dyn Error>) -> Self {
        Self { error }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Exception {}

/// A per-variant exception wrapper.
///
/// Typed wrappers carry no state beyond their error value. They exist so a
/// handler can tell "this specific failure" apart from "some error", and they
/// convert into [`Exception`] without losing anything.
pub trait TypedException: Sized + Into<Exception> {
    /// The concrete error variant this wrapper carries
    type Error: Error;

    /// Wrap an owned error value
    fn from_error(error: Self::Error) -> Self;

    /// Get the wrapped error value
    fn error(&self) -> &Self::Error;
}

/// Serializable view of a caught exception
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    pub position: ErrorPosition,
}
