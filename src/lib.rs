//! Go-style error chains.
//!
//! Fallible code returns a [`ChainResult`]: `Ok(value)` or `Err(ChainError)`.
//! A [`ChainError`] is an immutable node with a message and an optional cause
//! it owns; wrapping an error adds a new node on top, so the causes read like
//! a stack that can be walked to its root and printed.
//!
//! The boundary adapters ([`from`], [`catch_unwind`], [`from_async`],
//! [`catch_unwind_async`]) are where failures from other code enter a chain.
//! Past them, everything is plain values: no logging, no printing, no
//! retrying.
//!
//! # Examples
//!
//! ## Wrap and walk a chain
//!
//! ```
//! use goph_error::{from, wrap, ChainResult};
//!
//! fn read_settings() -> ChainResult<String> {
//!     from(|| std::fs::read_to_string("/nonexistent/settings.toml"), "")
//! }
//!
//! fn boot() -> ChainResult<String> {
//!     match read_settings() {
//!         Ok(raw) => Ok(raw),
//!         Err(err) => wrap(err, "booting service"),
//!     }
//! }
//!
//! let err = boot().unwrap_err();
//! assert_eq!(err.message(), "booting service");
//! assert_eq!(err.depth(), 3);
//!
//! let root = err.unwrap_all();
//! assert!(root.is_foreign());
//! assert!(root.as_foreign().and_then(|f| f.downcast_ref::<std::io::Error>()).is_some());
//! ```
//!
//! ## Print the message stack
//!
//! ```
//! use goph_error::{ChainError, WrapExt};
//!
//! let err = Err::<(), _>(ChainError::msg("Something catastrophic happened"))
//!     .wrap_err("Something else happened")
//!     .unwrap_err();
//!
//! assert_eq!(
//!     err.message_stack(),
//!     "Something catastrophic happened\nSomething else happened"
//! );
//! assert_eq!(format!("{err:#}"), err.message_stack());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Boundary adapters and the free `wrap` function
pub mod convert;
/// Formatted wrapping and early-return macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits on `Result`
pub mod traits;
/// ChainError, ForeignError, ErrorHandle and friends
pub mod types;

/// Async boundary adapters (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Span-aware wrapping (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::{from, wrap};
pub use traits::WrapExt;
pub use types::{
    BoxedStdError, Chain, ChainError, ChainResult, ErrorHandle, ErrorRef, ForeignError,
    HandleResult, StackFormat, StackOrder,
};

#[cfg(feature = "std")]
pub use convert::catch_unwind;

#[cfg(feature = "async")]
pub use async_ext::{from_async, FromAsync, FutureWrapExt};

#[cfg(all(feature = "async", feature = "std"))]
pub use async_ext::{catch_unwind_async, CatchUnwindAsync};
