//! Source positions attached to error values

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Where an error originated: a source file and a line in it.
///
/// Positions are captured once, when the error value is built, and never
/// change afterwards. Use [`error_position!`](crate::error_position) or
/// [`ErrorPosition::caller`] rather than spelling out the file and line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorPosition {
    file: Cow<'static, str>,
    line: u32,
}

impl ErrorPosition {
    /// Create a position from an explicit file and line
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Capture the position of the caller.
    ///
    /// Functions that build errors on behalf of their caller can mark
    /// themselves `#[track_caller]` so the reported position is the
    /// caller's, not their own.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// Get the source file
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Get the line number
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for ErrorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file: {},line:{}", self.file, self.line)
    }
}

/// Expands to the [`ErrorPosition`] of the macro invocation.
///
/// ```rust
/// use primordial_errors::error_position;
///
/// let position = error_position!();
/// assert_eq!(position.file(), file!());
/// ```
#[macro_export]
macro_rules! error_position {
    () => {
        $crate::ErrorPosition::new(::core::file!(), ::core::line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        let position = ErrorPosition::new("example.cpp", 108);
        assert_eq!(position.to_string(), "file: example.cpp,line:108");
    }

    #[test]
    fn test_macro_captures_call_site() {
        let line = line!() + 1;
        let position = error_position!();
        assert_eq!(position.file(), file!());
        assert_eq!(position.line(), line);
    }

    #[test]
    fn test_caller_tracks_through_wrapper() {
        #[track_caller]
        fn here() -> ErrorPosition {
            ErrorPosition::caller()
        }

        let line = line!() + 1;
        let position = here();
        assert_eq!(position.file(), file!());
        assert_eq!(position.line(), line);
    }

    #[test]
    fn test_owned_file_name() {
        let position = ErrorPosition::new(String::from("generated.rs"), 7);
        let copy = position.clone();
        drop(position);
        assert_eq!(copy.file(), "generated.rs");
        assert_eq!(copy.line(), 7);
    }
}
