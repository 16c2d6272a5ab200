//! Boundary adapters between failing code and [`ChainResult`].
//!
//! These are the only places where a failure is observed and turned into a
//! chain node: [`from`] for `Result`-returning closures and, with the `std`
//! feature, [`catch_unwind`] for closures that may panic. Everything past
//! this boundary works with values.
//!
//! # Examples
//!
//! ```
//! use goph_error::from;
//!
//! let port = from(|| "8080".parse::<u16>(), "parsing port");
//! assert_eq!(port.ok(), Some(8080));
//!
//! let err = from(|| "80a".parse::<u16>(), "parsing port").unwrap_err();
//! assert_eq!(err.message(), "parsing port");
//! assert_eq!(err.unwrap_all().message(), "invalid digit found in string");
//! ```

use alloc::borrow::Cow;

use crate::types::{ChainError, ChainResult, ErrorHandle};

#[cfg(feature = "std")]
use crate::types::ForeignError;

/// Wraps `error` in a new [`ChainError`] carrying `message` and returns it
/// as `Err`.
///
/// Free-function form of [`ChainError::wrap`]. Pass `""` for no message.
///
/// ```
/// use goph_error::{wrap, ChainResult, ForeignError};
///
/// fn read_header() -> ChainResult<[u8; 4]> {
///     wrap(ForeignError::msg("unexpected eof"), "reading header")
/// }
///
/// let err = read_header().unwrap_err();
/// assert_eq!(err.message_stack(), "unexpected eof\nreading header");
/// ```
#[inline]
pub fn wrap<T, C>(error: C, message: impl Into<Cow<'static, str>>) -> ChainResult<T>
where
    C: Into<ErrorHandle>,
{
    ChainError::wrap(error, message)
}

/// Runs `f` and converts its outcome to a [`ChainResult`].
///
/// `Ok(v)` passes through unchanged. `Err(e)` becomes `wrap(e, message)`,
/// so the returned node's cause is `e` itself.
#[inline]
pub fn from<F, T, E>(f: F, message: impl Into<Cow<'static, str>>) -> ChainResult<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<ErrorHandle>,
{
    match f() {
        Ok(value) => Ok(value),
        Err(error) => wrap(error, message),
    }
}

/// Runs `f`, turning a panic into a wrapped [`ForeignError`].
///
/// The foreign error's message is the panic message when the payload is a
/// string, and `"panic with non-string payload"` otherwise. The panic hook
/// still runs, so the default hook prints the panic to stderr as usual.
///
/// ```
/// use goph_error::catch_unwind;
///
/// let ok = catch_unwind(|| 2 + 2, "adding");
/// assert_eq!(ok.ok(), Some(4));
///
/// let err = catch_unwind(|| -> u32 { panic!("overflow") }, "adding").unwrap_err();
/// assert_eq!(err.message_stack(), "overflow\nadding");
/// ```
#[cfg(feature = "std")]
pub fn catch_unwind<F, T>(f: F, message: impl Into<Cow<'static, str>>) -> ChainResult<T>
where
    F: FnOnce() -> T + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => wrap(panic_to_foreign(payload), message),
    }
}

#[cfg(feature = "std")]
pub(crate) fn panic_to_foreign(payload: std::boxed::Box<dyn core::any::Any + Send>) -> ForeignError {
    let payload = match payload.downcast::<&'static str>() {
        Ok(message) => return ForeignError::msg(*message),
        Err(payload) => payload,
    };

    match payload.downcast::<std::string::String>() {
        Ok(message) => ForeignError::msg(*message),
        Err(_) => ForeignError::msg("panic with non-string payload"),
    }
}
