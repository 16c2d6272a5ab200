//! Panic boundary for futures.

use alloc::borrow::Cow;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::AssertUnwindSafe;

use pin_project_lite::pin_project;

use crate::convert::panic_to_foreign;
use crate::types::{ChainError, ChainResult};

pin_project! {
    /// A future that turns a panic raised while polling its inner future into
    /// a wrapped [`ForeignError`](crate::ForeignError).
    ///
    /// The inner future is not required to be `UnwindSafe`. After a panic it
    /// is never polled again, but any state it shares with other code may be
    /// left half-updated.
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchUnwindAsync<Fut> {
        #[pin]
        future: Fut,
        message: Option<Cow<'static, str>>,
    }
}

impl<Fut> CatchUnwindAsync<Fut> {
    #[inline]
    pub fn new(future: Fut, message: impl Into<Cow<'static, str>>) -> Self {
        Self { future, message: Some(message.into()) }
    }
}

impl<Fut> Future for CatchUnwindAsync<Fut>
where
    Fut: Future,
{
    type Output = ChainResult<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let future = this.future;

        match std::panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(value)) => Poll::Ready(Ok(value)),
            Err(payload) => Poll::Ready(ChainError::wrap(
                panic_to_foreign(payload),
                this.message.take().unwrap_or_default(),
            )),
        }
    }
}

/// Calls `f` and awaits its future, turning a panic during polling into a
/// wrapped error.
///
/// `f` itself runs before the returned future is first polled and is not
/// guarded; an `async` block or `async fn` does no work until polled, so this
/// only matters for hand-written futures with eager constructors.
///
/// ```
/// use goph_error::catch_unwind_async;
///
/// # tokio_test();
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn tokio_test() {
/// let err = catch_unwind_async(
///     || async {
///         let rows: Vec<u32> = Vec::new();
///         rows[3]
///     },
///     "reading fourth row",
/// )
/// .await
/// .unwrap_err();
///
/// assert_eq!(err.message(), "reading fourth row");
/// assert!(err.unwrap_all().message().contains("index out of bounds"));
/// # }
/// ```
#[inline]
pub fn catch_unwind_async<F, Fut>(
    f: F,
    message: impl Into<Cow<'static, str>>,
) -> CatchUnwindAsync<Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    CatchUnwindAsync::new(f(), message)
}
