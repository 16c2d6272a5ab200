//! Async boundary adapters.
//!
//! The futures here have exactly one suspension point: awaiting the future
//! they wrap. They add no scheduling of their own.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (on by default):
//!
//! ```toml
//! [dependencies]
//! goph-error = { version = "0.3", features = ["async"] }
//! ```
//!
//! [`catch_unwind_async`] additionally needs `std`.

mod from_async;
mod future_ext;

#[cfg(feature = "std")]
mod catch_unwind;

pub use from_async::{from_async, FromAsync};
pub use future_ext::FutureWrapExt;

#[cfg(feature = "std")]
pub use catch_unwind::{catch_unwind_async, CatchUnwindAsync};
