use core::iter::FusedIterator;

use crate::types::ErrorRef;

/// Iterator over a cause chain, from the starting node down to the root.
///
/// Yields the starting node first. Stops after a node without a cause or
/// after a foreign error, whichever comes first.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<ErrorRef<'a>>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(start: ErrorRef<'a>) -> Self {
        Self { next: Some(start) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = ErrorRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.unwrap().map(|cause| cause.as_error_ref());
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
