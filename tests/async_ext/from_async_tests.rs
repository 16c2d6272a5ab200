//! Tests for `from_async` and `FromAsync`.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::time::Duration;

use goph_error::{from_async, wrap, ChainResult, FromAsync, ForeignError};

async fn tester_ok() -> Result<&'static str, std::io::Error> {
    Ok("test")
}

async fn tester_err() -> Result<&'static str, std::io::Error> {
    Err(std::io::Error::other("test"))
}

#[test]
fn from_async_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<FromAsync<std::future::Ready<Result<(), ForeignError>>>>();
    assert_sync::<FromAsync<std::future::Ready<Result<(), ForeignError>>>>();
}

#[tokio::test]
async fn from_async_success() {
    let result = from_async(tester_ok, "").await;
    assert_eq!(result.ok(), Some("test"));
}

#[tokio::test]
async fn from_async_failure_wraps_cause() {
    let err = from_async(tester_err, "awaiting tester").await.unwrap_err();

    assert_eq!(err.message(), "awaiting tester");
    let cause = err.unwrap().unwrap();
    assert!(cause.is_foreign());
    assert_eq!(cause.message(), "test");
}

#[tokio::test]
async fn from_async_triple_wrap_unwraps_all() {
    async fn double() -> ChainResult<&'static str> {
        match from_async(tester_err, "").await {
            Ok(v) => Ok(v),
            Err(err) => wrap(err, ""),
        }
    }

    async fn triple() -> ChainResult<&'static str> {
        match double().await {
            Ok(v) => Ok(v),
            Err(err) => wrap(err, ""),
        }
    }

    let err = triple().await.unwrap_err();
    let root = err.unwrap_all();
    assert!(root.is_foreign());
    assert_eq!(root.message(), "test");
}

#[tokio::test]
async fn from_async_waits_for_slow_future() {
    let err = from_async(
        || async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Err::<(), _>(ForeignError::msg("late failure"))
        },
        "waiting",
    )
    .await
    .unwrap_err();

    assert_eq!(err.message_stack(), "late failure\nwaiting");
}

#[tokio::test]
async fn callable_runs_once() {
    let calls = AtomicU32::new(0);
    let _ = from_async(
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ForeignError>(()) }
        },
        "",
    )
    .await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

struct PendingOnce {
    polled: bool,
}

impl Future for PendingOnce {
    type Output = Result<u8, ForeignError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.polled {
            return Poll::Ready(Err(ForeignError::msg("second poll")));
        }
        self.polled = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

fn noop_waker() -> Waker {
    fn noop(_: *const ()) {}
    fn clone(p: *const ()) -> RawWaker {
        RawWaker::new(p, &VTABLE)
    }
    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
    unsafe { Waker::from_raw(RawWaker::new(core::ptr::null(), &VTABLE)) }
}

#[test]
fn pending_is_forwarded_until_inner_settles() {
    let mut fut = FromAsync::new(PendingOnce { polled: false }, "polling");
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    let mut fut = Pin::new(&mut fut);

    assert!(fut.as_mut().poll(&mut cx).is_pending());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(Err(err)) => assert_eq!(err.message_stack(), "second poll\npolling"),
        other => panic!("unexpected poll result: {other:?}"),
    }
}
