//! Terminal errors that were not built by this crate.
//!
//! A [`ForeignError`] is what a library error (an `io::Error`, a parse error,
//! a panic payload, ...) becomes once it enters a chain. It carries a message
//! and, when available, the original error value, but it never has a cause:
//! traversal always stops at a foreign error.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::error::Error;
use core::fmt;

/// Boxed std error accepted at the foreign boundary.
pub type BoxedStdError = Box<dyn Error + Send + Sync + 'static>;

/// Opaque, message-only terminal error.
///
/// # Examples
///
/// ```
/// use goph_error::ForeignError;
///
/// let err = ForeignError::new(std::io::Error::other("disk full"));
/// assert_eq!(err.message(), "disk full");
/// assert!(err.downcast_ref::<std::io::Error>().is_some());
///
/// let bare = ForeignError::msg("timed out");
/// assert!(bare.get_ref().is_none());
/// ```
pub struct ForeignError {
    message: String,
    inner: Option<BoxedStdError>,
}

impl ForeignError {
    /// Captures a std error, rendering its `Display` output as the message.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Captures an already boxed std error.
    pub fn from_boxed(error: BoxedStdError) -> Self {
        Self { message: error.to_string(), inner: Some(error) }
    }

    /// Creates a foreign error from text alone.
    #[inline]
    pub fn msg<M: Into<String>>(message: M) -> Self {
        Self { message: message.into(), inner: None }
    }

    /// Returns the message captured at construction.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the original error, if this was built from one.
    #[inline]
    pub fn get_ref(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.inner.as_deref()
    }

    /// Attempts to view the original error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.as_deref()?.downcast_ref::<E>()
    }

    /// Consumes the foreign error, returning the original error if any.
    #[inline]
    pub fn into_inner(self) -> Option<BoxedStdError> {
        self.inner
    }
}

impl fmt::Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => f.debug_tuple("ForeignError").field(inner).finish(),
            None => f.debug_tuple("ForeignError").field(&self.message).finish(),
        }
    }
}

impl<E> From<E> for ForeignError
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

// Only the message survives a round trip; the original error type is lost.
#[cfg(feature = "serde")]
impl serde::Serialize for ForeignError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.message)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ForeignError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::msg)
    }
}
