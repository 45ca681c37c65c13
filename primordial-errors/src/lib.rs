//! # primordial-errors
//!
//! Polymorphic error values, decoupled from the way they are propagated.
//!
//! ## Design Philosophy
//!
//! - **Error**: an immutable value describing a failure (message + position).
//!   Concrete variants add their own fields and clone themselves polymorphically.
//! - **Exception**: the carrier that travels up the call chain as the `Err` side
//!   of a [`Result`]. It owns a copy of the error, so the value survives after
//!   the scope that created it ends.
//! - **Typed exceptions**: one thin wrapper per variant, so a handler can catch
//!   "this specific failure" and hand everything else back untouched.
//!
//! ## Usage
//!
//! ```rust
//! use primordial_errors::{error_position, Exception, FileNotFoundError,
//!     FileNotFoundErrorException, Raise};
//!
//! fn open_readme() -> primordial_errors::Result<()> {
//!     FileNotFoundError::new(error_position!(), "README.md").raise()
//! }
//!
//! let exception: Exception = open_readme().unwrap_err();
//! match exception.catch::<FileNotFoundErrorException>() {
//!     Ok(ex) => assert_eq!(ex.error().path().to_str(), Some("README.md")),
//!     Err(other) => panic!("unexpected exception: {}", other),
//! }
//! ```
//!
//! ## Principles
//!
//! - Every error is raised exactly once, as a wrapped clone
//! - Exactly one handler observes a raised error: `catch` either consumes it or
//!   returns the same exception for the next handler up the chain
//! - Messages are built eagerly, at construction

mod error;
mod exception;
mod kind;
mod position;
mod variants;

pub use error::{Error, ErrorCore, Raise};
pub use exception::{ErrorReport, Exception, TypedException};
pub use kind::ErrorKind;
pub use position::ErrorPosition;
pub use variants::{
    FileNotFoundError, FileNotFoundErrorException, InvalidArgumentError,
    InvalidArgumentErrorException, PermissionDeniedError, PermissionDeniedErrorException,
};

/// Result type alias using the base exception wrapper
pub type Result<T> = std::result::Result<T, Exception>;
