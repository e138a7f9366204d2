//! Read cursor over an immutable byte buffer.
//!
//! The cursor is the only mutable state of a scan. It tracks the byte
//! offset together with the 1-based line/column of that offset:
//! consuming `\n` moves to column 1 of the next line, any other byte
//! moves one column right.
//!
//! `peek` and `consume` return `None` at end of input instead of
//! faulting, so every skip loop built on them stops safely there.

use memchr::{memchr_iter, memrchr};

use crate::span::Position;

/// Bytes skipped between tokens.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Strip leading and trailing ASCII whitespace.
///
/// Wider than [`is_whitespace`]: vertical tab and form feed are trimmed
/// from captured text even though they never stop a scan.
pub(crate) fn trim(bytes: &[u8]) -> &[u8] {
    let is_space = |b: &u8| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C);
    let start = bytes.iter().position(|b| !is_space(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Unconsumed input.
    #[inline]
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    /// Input bytes `start..end`, clamped to the buffer.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.input.len());
        &self.input[start.min(end)..end]
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Take the byte under the cursor and step past it.
    #[inline]
    pub(crate) fn consume(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.offset += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if !is_whitespace(b) {
                break;
            }
            self.consume();
        }
    }

    /// Move forward to `target` (clamped to end of input) in one step.
    ///
    /// Line and column end up exactly where repeated `consume` calls
    /// would have left them. Targets behind the cursor are ignored.
    pub(crate) fn advance_to(&mut self, target: usize) {
        let target = target.min(self.input.len());
        if target <= self.offset {
            return;
        }
        let skipped = &self.input[self.offset..target];
        match memrchr(b'\n', skipped) {
            Some(last) => {
                self.line += memchr_iter(b'\n', skipped).count();
                self.column = skipped.len() - last;
            }
            None => self.column += skipped.len(),
        }
        self.offset = target;
    }
}
