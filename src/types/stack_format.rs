//! Message stack rendering options.

use alloc::borrow::Cow;
use alloc::string::String;
use smallvec::SmallVec;

use crate::types::ErrorRef;

/// Order in which chain messages are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackOrder {
    /// Lowest-level cause first, outermost wrap last.
    #[default]
    RootFirst,
    /// Outermost wrap first, root cause last.
    OutermostFirst,
}

/// Configuration for [`ChainError::message_stack_with`](crate::ChainError::message_stack_with).
///
/// The default renders exactly what [`message_stack`](crate::ChainError::message_stack)
/// returns: every message, root first, one per line.
///
/// # Examples
///
/// ```
/// use goph_error::{ChainError, StackFormat, StackOrder};
///
/// let root = ChainError::msg("refused");
/// let bare = ChainError::from_cause(root);
/// let outer = ChainError::new("connecting", Some(bare.into()));
///
/// assert_eq!(outer.message_stack(), "refused\n\nconnecting");
/// assert_eq!(outer.message_stack_with(&StackFormat::compact()), "connecting -> refused");
///
/// let custom = StackFormat::default().separator(" | ").order(StackOrder::RootFirst);
/// assert_eq!(outer.message_stack_with(&custom), "refused |  | connecting");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFormat {
    pub separator: Cow<'static, str>,
    pub order: StackOrder,
    /// Drop nodes whose message is empty.
    pub skip_empty: bool,
}

impl Default for StackFormat {
    fn default() -> Self {
        Self { separator: Cow::Borrowed("\n"), order: StackOrder::RootFirst, skip_empty: false }
    }
}

impl StackFormat {
    /// Single line, outermost context first, empty messages skipped.
    #[inline]
    pub fn compact() -> Self {
        Self {
            separator: Cow::Borrowed(" -> "),
            order: StackOrder::OutermostFirst,
            skip_empty: true,
        }
    }

    /// Outermost context on the first line, each cause indented below it.
    #[inline]
    pub fn indented() -> Self {
        Self {
            separator: Cow::Borrowed("\n  caused by: "),
            order: StackOrder::OutermostFirst,
            skip_empty: true,
        }
    }

    #[inline]
    pub fn separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    #[inline]
    pub fn order(mut self, order: StackOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    /// Renders the messages of `chain`, which must be in outermost-first order.
    pub(crate) fn render<'a, I>(&self, chain: I) -> String
    where
        I: IntoIterator<Item = ErrorRef<'a>>,
    {
        let mut messages: SmallVec<[&str; 8]> = chain
            .into_iter()
            .map(ErrorRef::message)
            .filter(|message| !(self.skip_empty && message.is_empty()))
            .collect();

        if self.order == StackOrder::RootFirst {
            messages.reverse();
        }

        messages.join(&*self.separator)
    }
}
