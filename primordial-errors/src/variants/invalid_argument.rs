//! The "invalid argument" error

use crate::{Error, ErrorCore, ErrorKind, ErrorPosition, Exception, TypedException};
use std::any::Any;
use std::fmt;

/// An argument was rejected by the function it was passed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    core: ErrorCore,
    name: String,
    reason: String,
}

impl InvalidArgumentError {
    /// Create the error for argument `name`, rejected because of `reason`
    pub fn new(position: ErrorPosition, name: impl Into<String>, reason: impl Into<String>) -> Self {
        let name = name.into();
        let reason = reason.into();
        let message = format!("{}: invalid argument `{}`: {}", position, name, reason);
        Self {
            core: ErrorCore::new(message, position),
            name,
            reason,
        }
    }

    /// Get the name of the rejected argument
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get why the argument was rejected
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for InvalidArgumentError {}

impl Error for InvalidArgumentError {
    fn core(&self) -> &ErrorCore {
        &self.core
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    fn clone_box(&self) -> Box<dyn Error> {
        Box::new(self.clone())
    }

    fn raise_implementation(&self) -> Exception {
        InvalidArgumentErrorException::from_error(self.clone()).into()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Exception raised by [`InvalidArgumentError`]
#[derive(Debug)]
pub struct InvalidArgumentErrorException {
    error: InvalidArgumentError,
}

impl InvalidArgumentErrorException {
    /// Wrap a copy of `error`
    pub fn new(error: &InvalidArgumentError) -> Self {
        Self {
            error: error.clone(),
        }
    }

    /// Get the wrapped error
    pub fn error(&self) -> &InvalidArgumentError {
        &self.error
    }
}

impl TypedException for InvalidArgumentErrorException {
    type Error = InvalidArgumentError;

    fn from_error(error: InvalidArgumentError) -> Self {
        Self { error }
    }

    fn error(&self) -> &InvalidArgumentError {
        &self.error
    }
}

impl From<InvalidArgumentErrorException> for Exception {
    fn from(exception: InvalidArgumentErrorException) -> Self {
        let error: Box<dyn Error> = Box::new(exception.error);
        error.into()
    }
}

impl fmt::Display for InvalidArgumentErrorException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error.message())
    }
}

impl std::error::Error for InvalidArgumentErrorException {}
