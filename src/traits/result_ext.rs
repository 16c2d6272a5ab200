//! Extension trait for wrapping the error side of a `Result`.
//!
//! This module provides [`WrapExt`], the method form of [`wrap`](crate::wrap):
//! instead of matching on a `Result` and calling `wrap` in the `Err` arm, call
//! `.wrap_err(..)` and propagate with `?`.
//!
//! # Examples
//!
//! ```
//! use goph_error::{ChainResult, WrapExt};
//!
//! fn read_config(path: &str) -> ChainResult<String> {
//!     let raw = std::fs::read_to_string(path).wrap_err("reading config")?;
//!     Ok(raw.trim().to_owned())
//! }
//!
//! let err = read_config("/definitely/not/here.toml").unwrap_err();
//! assert_eq!(err.message(), "reading config");
//! assert!(err.unwrap_all().is_foreign());
//! ```

use alloc::borrow::Cow;

use crate::types::{ChainError, ChainResult, ErrorHandle};

/// Adds chain wrapping to any `Result` whose error converts into an
/// [`ErrorHandle`].
///
/// Both methods leave `Ok` untouched.
pub trait WrapExt<T> {
    /// Wraps the error with a fixed message.
    fn wrap_err<M>(self, message: M) -> ChainResult<T>
    where
        M: Into<Cow<'static, str>>;

    /// Wraps the error with a message computed only on failure.
    ///
    /// ```
    /// use goph_error::WrapExt;
    ///
    /// let user_id = 42;
    /// let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
    /// let err = result.wrap_err_with(|| format!("rendering profile {user_id}")).unwrap_err();
    /// assert_eq!(err.message(), "rendering profile 42");
    /// ```
    fn wrap_err_with<F, M>(self, f: F) -> ChainResult<T>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>;
}

impl<T, E> WrapExt<T> for Result<T, E>
where
    E: Into<ErrorHandle>,
{
    #[inline]
    fn wrap_err<M>(self, message: M) -> ChainResult<T>
    where
        M: Into<Cow<'static, str>>,
    {
        self.or_else(|error| ChainError::wrap(error, message))
    }

    #[inline]
    fn wrap_err_with<F, M>(self, f: F) -> ChainResult<T>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.or_else(|error| ChainError::wrap(error, f()))
    }
}
