//! Error chain types.
//!
//! - [`ChainError`]: an immutable node with a message and an optional owned cause
//! - [`ForeignError`]: a terminal error produced outside this crate
//! - [`ErrorHandle`] / [`ErrorRef`]: owned and borrowed "either of the two"
//! - [`Chain`]: iterator from a node down to its root cause
//! - [`StackFormat`]: message stack rendering options
//!
//! # Examples
//!
//! ```
//! use goph_error::{ChainError, ErrorHandle, ForeignError};
//!
//! let root = ForeignError::msg("permission denied");
//! let err = ChainError::new("opening journal", Some(root.into()));
//!
//! match err.unwrap() {
//!     Some(ErrorHandle::Foreign(foreign)) => assert_eq!(foreign.message(), "permission denied"),
//!     _ => unreachable!(),
//! }
//! ```

pub mod chain_error;
pub mod chain_iter;
pub mod error_handle;
pub mod foreign_error;
pub mod stack_format;

pub use chain_error::ChainError;
pub use chain_iter::Chain;
pub use error_handle::{ErrorHandle, ErrorRef};
pub use foreign_error::{BoxedStdError, ForeignError};
pub use stack_format::{StackFormat, StackOrder};

/// Result produced by wrapping and by the boundary adapters: the error side
/// is always a [`ChainError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type ChainResult<T> = Result<T, ChainError>;

/// Result whose error may be either a chain node or a foreign error.
///
/// `?` converts any `core::error::Error + Send + Sync + 'static` into
/// [`ErrorHandle::Foreign`], and a [`ChainError`] into [`ErrorHandle::Chain`].
pub type HandleResult<T> = Result<T, ErrorHandle>;
