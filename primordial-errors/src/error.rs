//! The polymorphic error value

use crate::{ErrorKind, ErrorPosition, Exception};
use std::any::Any;

/// State every error value carries, whatever its concrete variant.
///
/// The message is built by the variant at construction time and the
/// position is captured at the raise site; neither changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCore {
    message: String,
    position: ErrorPosition,
}

impl ErrorCore {
    /// Create the shared state from a finished message and its position
    pub fn new(message: impl Into<String>, position: ErrorPosition) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "error message must not be empty");
        Self { message, position }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error position
    pub fn position(&self) -> &ErrorPosition {
        &self.position
    }
}

/// An error value: a message plus the position it was raised from.
///
/// Concrete variants implement this trait and are usually handled through a
/// `&dyn Error` or `Box<dyn Error>`. Cloning through such a handle yields a
/// value of the concrete variant, not a sliced base.
///
/// # Implementing a variant
///
/// A variant holds an [`ErrorCore`] next to its own fields, builds its
/// message in its constructor, and overrides [`clone_box`](Error::clone_box)
/// and [`raise_implementation`](Error::raise_implementation) so both return
/// its own type.
pub trait Error: std::error::Error + Send + Sync + 'static {
    /// Get the state shared by all variants
    fn core(&self) -> &ErrorCore;

    /// Get the kind of this error.
    ///
    /// Variants defined outside this crate report [`ErrorKind::Other`].
    fn kind(&self) -> ErrorKind;

    /// Clone into a new owned value of the same concrete type
    fn clone_box(&self) -> Box<dyn Error>;

    /// Wrap a clone of `self` in the exception matching its concrete type
    fn raise_implementation(&self) -> Exception;

    /// Access the concrete value for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Convert into an owned value for downcasting
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Get the error message
    fn message(&self) -> &str {
        self.core().message()
    }

    /// Get the position the error was raised from
    fn position(&self) -> &ErrorPosition {
        self.core().position()
    }
}

impl dyn Error {
    /// Check whether the concrete type is `E`
    pub fn is<E: Error>(&self) -> bool {
        self.as_any().is::<E>()
    }

    /// Borrow the concrete value if it is an `E`
    pub fn downcast_ref<E: Error>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }

    /// Take the concrete value out if it is an `E`, or get the box back
    pub fn downcast<E: Error>(self: Box<Self>) -> Result<Box<E>, Box<dyn Error>> {
        if !self.is::<E>() {
            return Err(self);
        }
        match self.into_any().downcast::<E>() {
            Ok(error) => Ok(error),
            Err(_) => unreachable!("concrete type checked by is::<E>()"),
        }
    }
}

impl Clone for Box<dyn Error> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Propagate an error value.
///
/// `raise` never produces an `Ok`: it always returns the wrapped clone, ready
/// for `?` to carry it to the first handler up the call chain.
///
/// ```rust
/// use primordial_errors::{error_position, Error, FileNotFoundError, Raise};
///
/// fn load() -> primordial_errors::Result<String> {
///     let error: Box<dyn Error> =
///         Box::new(FileNotFoundError::new(error_position!(), "config.toml"));
///     error.raise()
/// }
///
/// assert!(load().unwrap_err().message().ends_with("file `config.toml` not found"));
/// ```
pub trait Raise {
    /// Wrap a clone of `self` and return it as the error side
    fn raise<T>(&self) -> Result<T, Exception>;
}

impl<E: Error + ?Sized> Raise for E {
    fn raise<T>(&self) -> Result<T, Exception> {
        Err(self.raise_implementation())
    }
}
