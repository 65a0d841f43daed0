//! A trait that can provide the [Span] of a token within the scanned source

use std::ops::Range;

/// A trait that can provide the [Span] of the source text it was created from
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A byte range into the scanned source
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// The byte offset this span starts at
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets a span directly after this span
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
        }
    }

    /// Gets the byte range covered by this span, suitable for slicing the source
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Joins two spans, creating the smallest span that covers both
    pub fn join(self, other: Self) -> Self {
        let start = self.offset.min(other.offset);
        let end = (self.offset + self.len).max(other.offset + other.len);
        Self::new(start, end - start)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl From<Range<usize>> for Span {
    fn from(value: Range<usize>) -> Self {
        Self::new(value.start, value.end.saturating_sub(value.start))
    }
}
