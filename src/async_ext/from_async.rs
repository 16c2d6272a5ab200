//! Future adapter that wraps an async failure into a chain node.
//!
//! [`FromAsync`] polls an inner `Future<Output = Result<T, E>>` and, once it
//! settles, returns `Ok(v)` untouched or wraps `Err(e)` exactly like
//! [`wrap`](crate::wrap). Awaiting the inner future is the only suspension
//! point.

use alloc::borrow::Cow;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use crate::types::{ChainError, ChainResult, ErrorHandle};

pin_project! {
    /// A future that wraps the error of its inner future in a [`ChainError`].
    ///
    /// Created by [`from_async`] or [`FutureWrapExt::wrap_err`](super::FutureWrapExt::wrap_err).
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `FromAsync` drops the inner future; whatever that means for
    /// the inner operation is up to it.
    #[must_use = "futures do nothing unless polled"]
    pub struct FromAsync<Fut> {
        #[pin]
        future: Fut,
        message: Option<Cow<'static, str>>,
    }
}

impl<Fut> FromAsync<Fut> {
    /// Wraps `future`, attaching `message` if it fails.
    #[inline]
    pub fn new(future: Fut, message: impl Into<Cow<'static, str>>) -> Self {
        Self { future, message: Some(message.into()) }
    }
}

impl<Fut, T, E> Future for FromAsync<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<ErrorHandle>,
{
    type Output = ChainResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let outcome = ready!(this.future.poll(cx));
        Poll::Ready(outcome.or_else(|error| {
            ChainError::wrap(error, this.message.take().unwrap_or_default())
        }))
    }
}

impl<Fut, T, E> FusedFuture for FromAsync<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<ErrorHandle>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

/// Calls `f` and awaits the future it returns, wrapping a failure.
///
/// Async counterpart of [`from`](crate::from).
///
/// ```
/// use goph_error::from_async;
///
/// async fn fetch(id: u32) -> Result<String, std::io::Error> {
///     if id == 0 {
///         return Err(std::io::Error::other("no such row"));
///     }
///     Ok(format!("row {id}"))
/// }
///
/// # tokio_test();
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn tokio_test() {
/// let row = from_async(|| fetch(7), "fetching row").await;
/// assert_eq!(row.ok().as_deref(), Some("row 7"));
///
/// let err = from_async(|| fetch(0), "fetching row").await.unwrap_err();
/// assert_eq!(err.message_stack(), "no such row\nfetching row");
/// # }
/// ```
#[inline]
pub fn from_async<F, Fut, T, E>(f: F, message: impl Into<Cow<'static, str>>) -> FromAsync<Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<ErrorHandle>,
{
    FromAsync::new(f(), message)
}
