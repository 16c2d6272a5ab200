//! Extension traits.
//!
//! - [`WrapExt`]: `.wrap_err(..)` / `.wrap_err_with(..)` on `Result`
//!
//! The async counterpart, `FutureWrapExt`, lives in `async_ext` behind the
//! `async` feature.

pub mod result_ext;

pub use result_ext::WrapExt;
