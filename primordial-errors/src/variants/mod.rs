//! Concrete error variants and their typed exception wrappers.
//!
//! Each variant follows the same shape: its own fields next to an
//! [`ErrorCore`](crate::ErrorCore), a message built once in the constructor,
//! and `clone_box`/`raise_implementation` overrides that return its own type.

mod file_not_found;
mod invalid_argument;
mod permission_denied;

pub use file_not_found::{FileNotFoundError, FileNotFoundErrorException};
pub use invalid_argument::{InvalidArgumentError, InvalidArgumentErrorException};
pub use permission_denied::{PermissionDeniedError, PermissionDeniedErrorException};
