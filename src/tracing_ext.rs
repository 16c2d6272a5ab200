//! Tracing integration.
//!
//! Wraps errors with the name of a `tracing` span, so the message stack shows
//! which span the failure happened in. Nothing here emits events; the crate
//! still never logs on its own.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! goph-error = { version = "0.3", features = ["tracing"] }
//! ```

use alloc::format;
use alloc::string::String;

use tracing::Span;

use crate::types::{ChainError, ChainResult, ErrorHandle};

/// Extension trait for `Result` types to wrap errors with span context.
pub trait ResultSpanExt<T> {
    /// Wraps the error with the current span's name.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use goph_error::tracing_ext::ResultSpanExt;
    ///
    /// fn flush() -> ChainResult<()> {
    ///     write_segment().wrap_in_current_span()
    /// }
    /// ```
    fn wrap_in_current_span(self) -> ChainResult<T>;

    /// Wraps the error with the given span's name.
    fn wrap_in_span(self, span: &Span) -> ChainResult<T>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<ErrorHandle>,
{
    fn wrap_in_current_span(self) -> ChainResult<T> {
        self.wrap_in_span(&Span::current())
    }

    fn wrap_in_span(self, span: &Span) -> ChainResult<T> {
        self.or_else(|error| ChainError::wrap(error, span_message(span)))
    }
}

/// Renders a span as a chain message: `in span '<name>'`.
///
/// A disabled span has no metadata and renders as `in span 'unknown'`.
fn span_message(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{}'", name)
}

#[cfg(feature = "async")]
pub use span_future::{FutureSpanExt, SpanWrapFuture};

#[cfg(feature = "async")]
mod span_future {
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use futures_core::ready;
    use pin_project_lite::pin_project;
    use tracing::Span;

    use super::span_message;
    use crate::types::{ChainError, ChainResult, ErrorHandle};

    /// Extension trait for futures that wraps errors with span context.
    pub trait FutureSpanExt<T, E>: Future<Output = Result<T, E>> + Sized {
        /// Captures the current span now; wraps with its name on failure.
        fn wrap_in_span_context(self) -> SpanWrapFuture<Self> {
            SpanWrapFuture { inner: self, span: Span::current() }
        }

        /// Wraps with `span`'s name on failure.
        fn wrap_in_span(self, span: Span) -> SpanWrapFuture<Self> {
            SpanWrapFuture { inner: self, span }
        }
    }

    impl<F, T, E> FutureSpanExt<T, E> for F
    where
        F: Future<Output = Result<T, E>>,
        E: Into<ErrorHandle>,
    {
    }

    pin_project! {
        /// Future wrapper that wraps errors with a span's name.
        ///
        /// Created by [`FutureSpanExt::wrap_in_span_context`] or [`FutureSpanExt::wrap_in_span`].
        #[must_use = "futures do nothing unless polled"]
        pub struct SpanWrapFuture<F> {
            #[pin]
            inner: F,
            span: Span,
        }
    }

    impl<F, T, E> Future for SpanWrapFuture<F>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<ErrorHandle>,
    {
        type Output = ChainResult<T>;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let this = self.project();

            let outcome = ready!(this.inner.poll(cx));
            Poll::Ready(outcome.or_else(|error| ChainError::wrap(error, span_message(this.span))))
        }
    }
}
