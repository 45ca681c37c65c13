//! The "file not found" error

use crate::{Error, ErrorCore, ErrorKind, ErrorPosition, Exception, TypedException};
use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};

/// A file that was expected to exist does not.
///
/// Carries the path of the missing file. The message reads
/// ``file: <file>,line:<line>: file `<path>` not found``.
///
/// ```rust
/// use primordial_errors::{Error, ErrorPosition, FileNotFoundError};
///
/// let err = FileNotFoundError::new(ErrorPosition::new("example.cpp", 108), "README.md");
/// assert_eq!(err.message(), "file: example.cpp,line:108: file `README.md` not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNotFoundError {
    core: ErrorCore,
    path: PathBuf,
}

impl FileNotFoundError {
    /// Create the error for `path`, raised from `position`
    pub fn new(position: ErrorPosition, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let message = Self::build_message(&position, &path);
        Self {
            core: ErrorCore::new(message, position),
            path,
        }
    }

    /// Get the path of the file which was not found
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn build_message(position: &ErrorPosition, path: &Path) -> String {
        format!("{}: file `{}` not found", position, path.display())
    }
}

impl fmt::Display for FileNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FileNotFoundError {}

impl Error for FileNotFoundError {
    fn core(&self) -> &ErrorCore {
        &self.core
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::FileNotFound
    }

    fn clone_box(&self) -> Box<dyn Error> {
        Box::new(self.clone())
    }

    fn raise_implementation(&self) -> Exception {
        FileNotFoundErrorException::from_error(self.clone()).into()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Exception raised by [`FileNotFoundError`]
#[derive(Debug)]
pub struct FileNotFoundErrorException {
    error: FileNotFoundError,
}

impl FileNotFoundErrorException {
    /// Wrap a copy of `error`
    pub fn new(error: &FileNotFoundError) -> Self {
        Self {
            error: error.clone(),
        }
    }

    /// Get the wrapped error
    pub fn error(&self) -> &FileNotFoundError {
        &self.error
    }
}

impl TypedException for FileNotFoundErrorException {
    type Error = FileNotFoundError;

    fn from_error(error: FileNotFoundError) -> Self {
        Self { error }
    }

    fn error(&self) -> &FileNotFoundError {
        &self.error
    }
}

impl From<FileNotFoundErrorException> for Exception {
    fn from(exception: FileNotFoundErrorException) -> Self {
        let error: Box<dyn Error> = Box::new(exception.error);
        error.into()
    }
}

impl fmt::Display for FileNotFoundErrorException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error.message())
    }
}

impl std::error::Error for FileNotFoundErrorException {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Raise;

    fn position() -> ErrorPosition {
        ErrorPosition::new("example.cpp", 108)
    }

    #[test]
    fn test_message_format() {
        let err = FileNotFoundError::new(position(), "README.md");
        assert_eq!(
            err.message(),
            "file: example.cpp,line:108: file `README.md` not found"
        );
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn test_message_is_deterministic() {
        let a = FileNotFoundError::new(position(), "docs/guide.md");
        let b = FileNotFoundError::new(position(), "docs/guide.md");
        assert_eq!(a.message(), b.message());
        assert_eq!(a, b);
    }

    #[test]
    fn test_accessors() {
        let err = FileNotFoundError::new(position(), PathBuf::from("data/input.csv"));
        assert_eq!(err.path(), Path::new("data/input.csv"));
        assert_eq!(err.position(), &position());
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = FileNotFoundError::new(position(), "README.md");
        let copy = original.clone_box();
        drop(original);

        let copy = copy.downcast_ref::<FileNotFoundError>().unwrap();
        assert_eq!(copy.path(), Path::new("README.md"));
    }

    #[test]
    fn test_raise_wraps_matching_exception() {
        let err = FileNotFoundError::new(position(), "README.md");
        let exception = err.raise::<()>().unwrap_err();

        assert!(exception.is::<FileNotFoundError>());
        let caught = exception.catch::<FileNotFoundErrorException>().unwrap();
        assert_eq!(caught.error(), &err);
    }

    #[test]
    fn test_wrapper_upcast_keeps_message() {
        let err = FileNotFoundError::new(position(), "README.md");
        let exception: Exception = FileNotFoundErrorException::new(&err).into();
        assert_eq!(exception.message(), err.message());
        assert_eq!(exception.kind(), ErrorKind::FileNotFound);
    }
}
