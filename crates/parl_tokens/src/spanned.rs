//! A trait that can provide the [Span] of a token or syntax tree node

/// A trait that can provide the [Span] of the complete context of a node
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A contiguous byte range within a source buffer
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

    /// Gets a span directly after this span
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
        }
    }

    /// Creates a span that encompasses both
    pub fn join(&self, other: Self) -> Self {
        let min = self.offset.min(other.offset);
        let max = (self.offset + self.len).max(other.offset + other.len);
        Self {
            offset: min,
            len: max - min,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the 1-based line and 0-based column of the start of this span within `source`.
    ///
    /// Offsets past the end of `source` resolve to the position just after the last character.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut line = 1usize;
        let mut col = 0usize;
        for (offset, char) in source.char_indices() {
            if offset >= self.offset {
                break;
            }
            if char == '\n' {
                col = 0;
                line += 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}
