//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use goph_error::prelude::*;
//!
//! fn load(path: &str) -> ChainResult<String> {
//!     std::fs::read_to_string(path).wrap_err("loading file")
//! }
//!
//! assert!(load("/no/such/file").is_err());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`try_wrap!`]
//! - **Functions**: [`wrap`], [`from`]
//! - **Types**: [`ChainError`], [`ErrorHandle`], [`ForeignError`], [`ChainResult`], [`HandleResult`]
//! - **Traits**: [`WrapExt`]

// Macros
pub use crate::try_wrap;

// Functions
pub use crate::convert::{from, wrap};

#[cfg(feature = "std")]
pub use crate::convert::catch_unwind;

// Core types
pub use crate::types::{ChainError, ChainResult, ErrorHandle, ForeignError, HandleResult};

// Traits
pub use crate::traits::WrapExt;
