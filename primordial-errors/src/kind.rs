//! Error kinds for the concrete error variants

use serde::Serialize;
use std::fmt;

/// The kind of error that occurred.
///
/// Every concrete error variant reports exactly one kind, so generic handlers
/// can branch on it without downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A file that was expected to exist does not
    FileNotFound,

    /// Access to a file was refused
    PermissionDenied,

    /// Invalid argument passed to a function
    InvalidArgument,

    /// A variant defined outside this crate
    Other,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::Other => "Other",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
