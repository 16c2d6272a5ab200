//! Macros for formatted wrapping and early return.
//!
//! - [`macro@crate::wrap`] - [`wrap`](fn@crate::wrap) with a `format!`-style message.
//! - [`macro@crate::try_wrap`] - unwraps an `Ok` value or returns the wrapped
//!   error from the enclosing function.
//!
//! # Examples
//!
//! ```
//! use goph_error::{try_wrap, ChainResult};
//!
//! fn parse_pair(raw: &str) -> ChainResult<(u8, u8)> {
//!     let (left, right) = raw.split_once(',').unwrap_or((raw, ""));
//!     let left = try_wrap!(left.parse::<u8>(), "parsing left half of {raw:?}");
//!     let right = try_wrap!(right.parse::<u8>(), "parsing right half of {raw:?}");
//!     Ok((left, right))
//! }
//!
//! assert_eq!(parse_pair("3,4").ok(), Some((3, 4)));
//! let err = parse_pair("3,x").unwrap_err();
//! assert_eq!(err.message(), "parsing right half of \"3,x\"");
//! ```

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

/// Wraps an error with a `format!`-style message and returns it as `Err`.
///
/// Without a message the new node's message is empty.
///
/// # Examples
///
/// ```
/// use goph_error::{wrap, ChainResult, ForeignError};
///
/// fn open_shard(id: u32) -> ChainResult<()> {
///     wrap!(ForeignError::msg("lock held"), "opening shard {}", id)
/// }
///
/// assert_eq!(open_shard(9).unwrap_err().message_stack(), "lock held\nopening shard 9");
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr $(,)?) => {
        $crate::wrap($err, "")
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::wrap($err, $crate::macros::__private::format!($($arg)+))
    };
}

/// Evaluates a `Result`, yielding the `Ok` value or returning the wrapped
/// error from the enclosing function.
///
/// The enclosing function may return either [`ChainResult`](crate::ChainResult)
/// or [`HandleResult`](crate::HandleResult).
///
/// # Examples
///
/// ```
/// use goph_error::{try_wrap, HandleResult};
///
/// fn read_len(raw: &str) -> HandleResult<usize> {
///     let len: usize = try_wrap!(raw.parse(), "parsing length");
///     Ok(len)
/// }
///
/// let err = read_len("-1").unwrap_err();
/// assert!(err.is_chain());
/// assert_eq!(err.message(), "parsing length");
/// ```
#[macro_export]
macro_rules! try_wrap {
    ($expr:expr $(,)?) => {
        match $expr {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return ::core::result::Result::Err(::core::convert::From::from(
                    $crate::ChainError::from_cause(error),
                ));
            },
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return ::core::result::Result::Err(::core::convert::From::from(
                    $crate::ChainError::new(
                        $crate::macros::__private::format!($($arg)+),
                        ::core::option::Option::Some(::core::convert::Into::into(error)),
                    ),
                ));
            },
        }
    };
}
