//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.wrap_err()`, mirroring the sync [`WrapExt`](crate::WrapExt).

use alloc::borrow::Cow;
use core::future::Future;

use crate::types::ErrorHandle;

use super::from_async::FromAsync;

/// Extension trait for wrapping the error of a `Result`-returning future.
///
/// # Examples
///
/// ```rust,no_run
/// use goph_error::prelude_async::*;
///
/// async fn query(_sql: &str) -> Result<u64, std::io::Error> {
///     Err(std::io::Error::other("connection reset"))
/// }
///
/// async fn count_users() -> ChainResult<u64> {
///     query("SELECT count(*) FROM users")
///         .wrap_err("counting users")
///         .await
/// }
/// ```
pub trait FutureWrapExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future's error with `message` once it resolves.
    ///
    /// ```rust
    /// use goph_error::prelude_async::*;
    ///
    /// async fn example() {
    ///     let result = async { Err::<(), _>(std::fmt::Error) }
    ///         .wrap_err("formatting report")
    ///         .await;
    ///     assert_eq!(result.unwrap_err().message(), "formatting report");
    /// }
    /// ```
    #[inline]
    fn wrap_err(self, message: impl Into<Cow<'static, str>>) -> FromAsync<Self> {
        FromAsync::new(self, message)
    }
}

impl<Fut, T, E> FutureWrapExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<ErrorHandle>,
{
}
