//! Async prelude - sync prelude plus the async adapters in one import.
//!
//! # Usage
//!
//! ```no_run
//! use goph_error::prelude_async::*;
//!
//! async fn fetch_from_db(_id: u64) -> Result<String, std::io::Error> {
//!     Err(std::io::Error::other("pool exhausted"))
//! }
//!
//! async fn fetch_user(id: u64) -> ChainResult<String> {
//!     fetch_from_db(id).wrap_err("fetching user from database").await
//! }
//! ```
//!
//! # What's Included
//!
//! Everything in [`prelude`](crate::prelude), plus:
//!
//! - **Traits**: [`FutureWrapExt`](crate::async_ext::FutureWrapExt) - `.wrap_err()` for futures
//! - **Functions**: [`from_async`](crate::async_ext::from_async), and
//!   [`catch_unwind_async`](crate::async_ext::catch_unwind_async) with `std`

// Re-export everything from sync prelude
pub use crate::prelude::*;

pub use crate::async_ext::{from_async, FromAsync, FutureWrapExt};

#[cfg(feature = "std")]
pub use crate::async_ext::catch_unwind_async;
