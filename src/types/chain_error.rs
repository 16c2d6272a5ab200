//! The immutable chain node.
//!
//! A [`ChainError`] pairs a message with an optional cause it owns outright.
//! Causes are only ever accepted by value, after they have been built, so a
//! chain is always a finite singly-linked list ending in either a node
//! without a cause or a [`ForeignError`].
//!
//! # Examples
//!
//! ```
//! use goph_error::{wrap, ChainResult};
//!
//! fn parse_port(raw: &str) -> ChainResult<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Ok(port),
//!         Err(err) => wrap(err, "parsing port"),
//!     }
//! }
//!
//! fn load(raw: &str) -> ChainResult<u16> {
//!     match parse_port(raw) {
//!         Ok(port) => Ok(port),
//!         Err(err) => wrap(err, "loading listener config"),
//!     }
//! }
//!
//! let err = load("http").unwrap_err();
//! assert_eq!(err.depth(), 3);
//! assert!(err.unwrap_all().is_foreign());
//! assert_eq!(
//!     err.message_stack(),
//!     "invalid digit found in string\nparsing port\nloading listener config"
//! );
//! ```

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;
use core::fmt;

use crate::types::chain_iter::Chain;
use crate::types::{ChainResult, ErrorHandle, ErrorRef, StackFormat};

/// An error node holding a message and, optionally, the error that caused it.
///
/// Nodes are never mutated after construction. See the [module docs](self)
/// for a full example.
#[must_use]
pub struct ChainError {
    message: Cow<'static, str>,
    cause: Option<Box<ErrorHandle>>,
}

impl ChainError {
    /// Builds a node from a message and an optional, already existing cause.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>, cause: Option<ErrorHandle>) -> Self {
        Self { message: message.into(), cause: cause.map(Box::new) }
    }

    /// Builds a base node with no cause.
    #[inline]
    pub fn msg(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(message, None)
    }

    /// Builds a node with an empty message around `cause`.
    #[inline]
    pub fn from_cause(cause: impl Into<ErrorHandle>) -> Self {
        Self::new(Cow::Borrowed(""), Some(cause.into()))
    }

    /// Wraps `error` in a new node and returns it as `Err`.
    ///
    /// `error` is moved into the new node, never copied. This never produces
    /// `Ok`; it exists so a failure can be propagated with added context in a
    /// single expression.
    ///
    /// ```
    /// use goph_error::{ChainError, ChainResult};
    ///
    /// fn connect() -> ChainResult<()> {
    ///     let refused = ChainError::msg("connection refused");
    ///     ChainError::wrap(refused, "connecting to replica")
    /// }
    ///
    /// let err = connect().unwrap_err();
    /// assert_eq!(err.message(), "connecting to replica");
    /// assert_eq!(err.unwrap().map(|cause| cause.message()), Some("connection refused"));
    /// ```
    #[inline]
    pub fn wrap<T, C>(error: C, message: impl Into<Cow<'static, str>>) -> ChainResult<T>
    where
        C: Into<ErrorHandle>,
    {
        Err(Self::new(message, Some(error.into())))
    }

    /// This node's own message. Empty when none was given.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the direct cause, or `None` for a terminal node.
    #[inline]
    pub fn unwrap(&self) -> Option<&ErrorHandle> {
        self.cause.as_deref()
    }

    /// Follows causes until a node without one, or a foreign error, is reached.
    ///
    /// Returns `self` when this node has no cause.
    #[inline]
    pub fn unwrap_all(&self) -> ErrorRef<'_> {
        ErrorRef::Chain(self).unwrap_all()
    }

    /// Consumes the chain and returns its root.
    pub fn into_root(mut self) -> ErrorHandle {
        let mut current = match self.cause.take() {
            Some(cause) => *cause,
            None => return ErrorHandle::Chain(self),
        };

        loop {
            current = match current {
                ErrorHandle::Chain(mut node) => match node.cause.take() {
                    Some(cause) => *cause,
                    None => return ErrorHandle::Chain(node),
                },
                foreign => return foreign,
            };
        }
    }

    /// Iterates from this node down to the root, outermost first.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        ErrorRef::Chain(self).chain()
    }

    /// Number of errors on the path from this node to the root, inclusive.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Every message on the path to the root, root cause first and this
    /// node's message last, separated by `\n`.
    ///
    /// Empty messages are kept, so wraps without context still show up as
    /// blank lines.
    pub fn message_stack(&self) -> String {
        self.message_stack_with(&StackFormat::default())
    }

    /// Renders the message stack with a custom [`StackFormat`].
    pub fn message_stack_with(&self, format: &StackFormat) -> String {
        format.render(self.chain())
    }

    /// The std error at the root of the chain, if the root is a foreign
    /// error built from one.
    pub fn root_source(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.unwrap_all().as_foreign()?.get_ref()
    }
}

impl fmt::Display for ChainError {
    /// `{}` prints this node's message; `{:#}` prints the whole message stack.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.message_stack());
        }
        f.write_str(&self.message)
    }
}

impl fmt::Debug for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainError")
            .field("message", &self.message)
            .field("causes", &Causes(self))
            .finish()
    }
}

// Lists every cause on one level so formatting a deep chain never recurses.
struct Causes<'a>(&'a ChainError);

impl fmt::Debug for Causes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.chain().skip(1).map(Cause)).finish()
    }
}

struct Cause<'a>(ErrorRef<'a>);

impl fmt::Debug for Cause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorRef::Chain(node) => f.debug_tuple("Chain").field(&node.message).finish(),
            ErrorRef::Foreign(foreign) => f.debug_tuple("Foreign").field(foreign).finish(),
        }
    }
}

// Unlinks iteratively so that dropping a very deep chain does not recurse
// once per node.
impl Drop for ChainError {
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(cause) = next {
            next = match *cause {
                ErrorHandle::Chain(mut node) => node.cause.take(),
                ErrorHandle::Foreign(_) => None,
            };
        }
    }
}

// A chain is encoded flat: the chain messages outermost first, then the
// foreign root if there is one. Both directions walk the chain in a loop.
#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ChainError;
    use crate::types::{ErrorHandle, ErrorRef, ForeignError};

    struct Messages<'a>(&'a ChainError);

    impl Serialize for Messages<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let messages = self.0.chain().filter_map(ErrorRef::as_chain).map(ChainError::message);
            serializer.collect_seq(messages)
        }
    }

    impl Serialize for ChainError {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("ChainError", 2)?;
            state.serialize_field("messages", &Messages(self))?;
            state.serialize_field("foreign", &self.unwrap_all().as_foreign())?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    #[serde(rename = "ChainError")]
    struct FlatChain {
        messages: Vec<String>,
        #[serde(default)]
        foreign: Option<ForeignError>,
    }

    impl<'de> Deserialize<'de> for ChainError {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let FlatChain { messages, foreign } = FlatChain::deserialize(deserializer)?;
            let mut messages = messages.into_iter().rev();
            let innermost = messages
                .next()
                .ok_or_else(|| D::Error::invalid_length(0, &"at least one message"))?;

            let mut node = ChainError::new(innermost, foreign.map(ErrorHandle::Foreign));
            for message in messages {
                node = ChainError::new(message, Some(ErrorHandle::Chain(node)));
            }
            Ok(node)
        }
    }
}
