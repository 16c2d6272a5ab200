//! The two-variant error handle and its borrowed counterpart.
//!
//! Every cause stored in a chain is an [`ErrorHandle`]: either another
//! [`ChainError`] node, which can be traversed further, or a [`ForeignError`],
//! which is terminal. Matching on the variant is how callers tell the two
//! apart.
//!
//! # Examples
//!
//! ```
//! use goph_error::ErrorHandle;
//!
//! let handle: ErrorHandle = std::io::Error::other("socket closed").into();
//! assert!(handle.is_foreign());
//!
//! match handle.wrap::<()>("reading frame") {
//!     Err(node) => assert_eq!(node.message_stack(), "socket closed\nreading frame"),
//!     Ok(()) => unreachable!(),
//! }
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use core::error::Error;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::chain_iter::Chain;
use crate::types::{ChainError, ChainResult, ForeignError};

/// An owned error that is either a chain node or a foreign terminal error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug)]
pub enum ErrorHandle {
    /// A node built by this crate; supports further traversal.
    Chain(ChainError),
    /// A terminal error produced elsewhere.
    Foreign(ForeignError),
}

impl ErrorHandle {
    /// Returns `true` for a chain node.
    #[inline]
    pub fn is_chain(&self) -> bool {
        matches!(self, Self::Chain(_))
    }

    /// Returns `true` for a foreign terminal error.
    #[inline]
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign(_))
    }

    /// Borrows the chain node, if this is one.
    #[inline]
    pub fn as_chain(&self) -> Option<&ChainError> {
        match self {
            Self::Chain(node) => Some(node),
            Self::Foreign(_) => None,
        }
    }

    /// Borrows the foreign error, if this is one.
    #[inline]
    pub fn as_foreign(&self) -> Option<&ForeignError> {
        match self {
            Self::Chain(_) => None,
            Self::Foreign(foreign) => Some(foreign),
        }
    }

    /// Extracts the chain node, handing the handle back if it is foreign.
    #[allow(clippy::result_large_err)]
    pub fn into_chain(self) -> Result<ChainError, Self> {
        match self {
            Self::Chain(node) => Ok(node),
            other => Err(other),
        }
    }

    /// Extracts the foreign error, handing the handle back if it is a chain node.
    #[allow(clippy::result_large_err)]
    pub fn into_foreign(self) -> Result<ForeignError, Self> {
        match self {
            Self::Foreign(foreign) => Ok(foreign),
            other => Err(other),
        }
    }

    /// Borrows the handle as an [`ErrorRef`].
    #[inline]
    pub fn as_error_ref(&self) -> ErrorRef<'_> {
        match self {
            Self::Chain(node) => ErrorRef::Chain(node),
            Self::Foreign(foreign) => ErrorRef::Foreign(foreign),
        }
    }

    /// Message of this error alone, without its causes.
    #[inline]
    pub fn message(&self) -> &str {
        self.as_error_ref().message()
    }

    /// Direct cause of a chain node; a foreign error never has one.
    #[inline]
    pub fn unwrap(&self) -> Option<&ErrorHandle> {
        self.as_chain().and_then(ChainError::unwrap)
    }

    /// Follows causes to the root. A foreign error is its own root.
    #[inline]
    pub fn unwrap_all(&self) -> ErrorRef<'_> {
        self.as_error_ref().unwrap_all()
    }

    /// Owning counterpart of [`unwrap_all`](Self::unwrap_all).
    pub fn into_root(self) -> ErrorHandle {
        match self {
            Self::Chain(node) => node.into_root(),
            foreign => foreign,
        }
    }

    /// Root-first message trace, one message per line.
    pub fn message_stack(&self) -> String {
        self.as_error_ref().message_stack()
    }

    /// Iterates from this error down to the root, outermost first.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self.as_error_ref())
    }

    /// Wraps this error in a new chain node and returns it as `Err`.
    ///
    /// Same as the free [`wrap`](crate::wrap) with `self` as the error to wrap.
    #[inline]
    pub fn wrap<T>(self, message: impl Into<Cow<'static, str>>) -> ChainResult<T> {
        ChainError::wrap(self, message)
    }
}

impl fmt::Display for ErrorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(node) => fmt::Display::fmt(node, f),
            Self::Foreign(foreign) => fmt::Display::fmt(foreign, f),
        }
    }
}

impl From<ChainError> for ErrorHandle {
    #[inline]
    fn from(node: ChainError) -> Self {
        Self::Chain(node)
    }
}

impl From<ForeignError> for ErrorHandle {
    #[inline]
    fn from(foreign: ForeignError) -> Self {
        Self::Foreign(foreign)
    }
}

impl<E> From<E> for ErrorHandle
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::Foreign(ForeignError::new(error))
    }
}

/// A borrowed [`ErrorHandle`], also able to point at a node that is not
/// itself stored inside a handle (such as the head of a chain).
#[derive(Debug, Clone, Copy)]
pub enum ErrorRef<'a> {
    /// A chain node; supports further traversal.
    Chain(&'a ChainError),
    /// A terminal foreign error.
    Foreign(&'a ForeignError),
}

impl<'a> ErrorRef<'a> {
    /// Returns `true` for a chain node.
    #[inline]
    pub fn is_chain(self) -> bool {
        matches!(self, Self::Chain(_))
    }

    /// Returns `true` for a foreign terminal error.
    #[inline]
    pub fn is_foreign(self) -> bool {
        matches!(self, Self::Foreign(_))
    }

    /// The referenced chain node, if this is one.
    #[inline]
    pub fn as_chain(self) -> Option<&'a ChainError> {
        match self {
            Self::Chain(node) => Some(node),
            Self::Foreign(_) => None,
        }
    }

    /// The referenced foreign error, if this is one.
    #[inline]
    pub fn as_foreign(self) -> Option<&'a ForeignError> {
        match self {
            Self::Chain(_) => None,
            Self::Foreign(foreign) => Some(foreign),
        }
    }

    /// Message of this error alone, without its causes.
    #[inline]
    pub fn message(self) -> &'a str {
        match self {
            Self::Chain(node) => node.message(),
            Self::Foreign(foreign) => foreign.message(),
        }
    }

    /// Direct cause, if this is a chain node that has one.
    #[inline]
    pub fn unwrap(self) -> Option<&'a ErrorHandle> {
        self.as_chain().and_then(ChainError::unwrap)
    }

    /// Follows causes to the root; returns `self` when already terminal.
    pub fn unwrap_all(self) -> ErrorRef<'a> {
        self.chain().fold(self, |_, node| node)
    }

    /// Root-first message trace, one message per line.
    pub fn message_stack(self) -> String {
        crate::types::stack_format::StackFormat::default().render(self.chain())
    }

    /// Iterates from here down to the root, outermost first.
    #[inline]
    pub fn chain(self) -> Chain<'a> {
        Chain::new(self)
    }
}

impl<'a> From<&'a ErrorHandle> for ErrorRef<'a> {
    #[inline]
    fn from(handle: &'a ErrorHandle) -> Self {
        handle.as_error_ref()
    }
}

impl<'a> From<&'a ChainError> for ErrorRef<'a> {
    #[inline]
    fn from(node: &'a ChainError) -> Self {
        Self::Chain(node)
    }
}

impl fmt::Display for ErrorRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(node) => fmt::Display::fmt(node, f),
            Self::Foreign(foreign) => fmt::Display::fmt(foreign, f),
        }
    }
}
