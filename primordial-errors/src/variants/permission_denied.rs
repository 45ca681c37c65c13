//! The "permission denied" error

use crate::{Error, ErrorCore, ErrorKind, ErrorPosition, Exception, TypedException};
use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};

/// Access to a file was refused.
///
/// The message reads ``file: <file>,line:<line>: permission to access `<path>` denied``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionDeniedError {
    core: ErrorCore,
    path: PathBuf,
}

impl PermissionDeniedError {
    /// Create the error for `path`, raised from `position`
    pub fn new(position: ErrorPosition, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let message = format!(
            "{}: permission to access `{}` denied",
            position,
            path.display()
        );
        Self {
            core: ErrorCore::new(message, position),
            path,
        }
    }

    /// Get the path access was refused to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for PermissionDeniedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PermissionDeniedError {}

impl Error for PermissionDeniedError {
    fn core(&self) -> &ErrorCore {
        &self.core
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::PermissionDenied
    }

    fn clone_box(&self) -> Box<dyn Error> {
        Box::new(self.clone())
    }

    fn raise_implementation(&self) -> Exception {
        PermissionDeniedErrorException::from_error(self.clone()).into()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Exception raised by [`PermissionDeniedError`]
#[derive(Debug)]
pub struct PermissionDeniedErrorException {
    error: PermissionDeniedError,
}

impl PermissionDeniedErrorException {
    /// Wrap a copy of `error`
    pub fn new(error: &PermissionDeniedError) -> Self {
        Self {
            error: error.clone(),
        }
    }

    /// Get the wrapped error
    pub fn error(&self) -> &PermissionDeniedError {
        &self.error
    }
}

impl TypedException for PermissionDeniedErrorException {
    type Error = PermissionDeniedError;

    fn from_error(error: PermissionDeniedError) -> Self {
        Self { error }
    }

    fn error(&self) -> &PermissionDeniedError {
        &self.error
    }
}

impl From<PermissionDeniedErrorException> for Exception {
    fn from(exception: PermissionDeniedErrorException) -> Self {
        let error: Box<dyn Error> = Box::new(exception.error);
        error.into()
    }
}

impl fmt::Display for PermissionDeniedErrorException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error.message())
    }
}

impl std::error::Error for PermissionDeniedErrorException {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileNotFoundErrorException, Raise};

    #[test]
    fn test_message_format() {
        let err = PermissionDeniedError::new(ErrorPosition::new("loader.rs", 12), "/etc/shadow");
        assert_eq!(
            err.message(),
            "file: loader.rs,line:12: permission to access `/etc/shadow` denied"
        );
    }

    #[test]
    fn test_sibling_handlers_see_only_their_kind() {
        let err = PermissionDeniedError::new(ErrorPosition::new("loader.rs", 12), "secret.key");
        let exception = err.raise::<()>().unwrap_err();

        let exception = exception
            .catch::<FileNotFoundErrorException>()
            .unwrap_err();
        assert_eq!(exception.kind(), ErrorKind::PermissionDenied);

        let caught = exception
            .catch::<PermissionDeniedErrorException>()
            .unwrap();
        assert_eq!(caught.error().path(), Path::new("secret.key"));
    }
}
