//! Declaration scanner.
//!
//! A single forward pass over the input. The driver skips whitespace and
//! asks the reader for one `property: value[;]` unit; when the reader
//! finds no colon after a property name, the driver drops one more byte
//! and tries again. Nothing is ever reported for the dropped text.
//!
//! ```text
//! ┌─────────────── driver ───────────────┐
//! │ skip ws ─▶ eof? ─▶ read_declaration  │
//! │   ▲                  │ Some   │ None │
//! │   │                  ▼        ▼      │
//! │   └────────────── yield   drop 1 byte│
//! └──────────────────────────────────────┘
//! ```
//!
//! Inside the reader, three balanced spans are swallowed whole so their
//! contents cannot end the property or value early. None of them nest.
//!
//! | Span        | Where        | Ends at                       |
//! |-------------|--------------|-------------------------------|
//! | `[...]`     | property     | first `]`                     |
//! | `"..."`/`'...'` | value    | matching quote, `\` escapes one byte |
//! | `(...)`     | value        | first `)`                     |
//!
//! An unclosed span runs to end of input.

use std::iter::FusedIterator;

use memchr::{memchr, memchr2};
use tracing::{debug, trace};

use crate::cursor::{is_whitespace, trim, Cursor};
use crate::declaration::Declaration;
use crate::span::{Position, PositionRange, Span};

/// Scan `input` and return every declaration found, in source order.
///
/// Never fails: malformed text simply yields fewer declarations.
///
/// ```
/// let decls = cssdecl_core::scan(b"color: red; ???; font-size: 12px");
/// assert_eq!(decls.len(), 2);
/// assert_eq!(decls[1].property(), b"font-size");
/// assert_eq!(decls[1].value(), b"12px");
/// ```
#[tracing::instrument(skip_all, fields(input_len = input.len()))]
pub fn scan(input: &[u8]) -> Vec<Declaration<'_>> {
    Scanner::new(input).collect()
}

/// Lazy declaration scanner over a borrowed buffer.
///
/// Each scanner owns its cursor; independent scanners share nothing.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    emitted: usize,
    skipped: usize,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            emitted: 0,
            skipped: 0,
            done: false,
        }
    }

    /// Current line/column of the cursor.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Current byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Bytes dropped so far by failed read attempts.
    pub fn skipped_bytes(&self) -> usize {
        self.skipped
    }

    /// Try to read one declaration at the cursor.
    ///
    /// On `None` the cursor stays wherever property scanning stopped.
    fn read_declaration(&mut self) -> Option<Declaration<'a>> {
        let start = self.cursor.position();
        let start_offset = self.cursor.offset();
        self.cursor.skip_whitespace();

        if self.cursor.peek() == Some(b'*') {
            self.cursor.consume();
        }
        let property = self.scan_property();
        if self.cursor.peek() != Some(b':') {
            return None;
        }
        self.cursor.consume();
        self.cursor.skip_whitespace();

        let value = self.scan_value();
        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b';') {
            self.cursor.consume();
        }

        Some(Declaration::new(
            property,
            value,
            PositionRange::new(start, self.cursor.position()),
            Span::new(start_offset, self.cursor.offset()),
        ))
    }

    /// Property name: up to whitespace or `:`, with `[...]` taken whole.
    fn scan_property(&mut self) -> &'a [u8] {
        let begin = self.cursor.offset();
        while let Some(b) = self.cursor.peek() {
            match b {
                b':' => break,
                b if is_whitespace(b) => break,
                b'[' => self.skip_through(b']'),
                _ => {
                    self.cursor.consume();
                }
            }
        }
        trim(self.cursor.slice(begin, self.cursor.offset()))
    }

    /// Value: up to `;` or `}`, with quoted strings and `(...)` taken whole.
    fn scan_value(&mut self) -> &'a [u8] {
        let begin = self.cursor.offset();
        while let Some(b) = self.cursor.peek() {
            match b {
                b';' | b'}' => break,
                b'"' | b'\'' => self.skip_quoted(b),
                b'(' => self.skip_through(b')'),
                _ => {
                    self.cursor.consume();
                }
            }
        }
        trim(self.cursor.slice(begin, self.cursor.offset()))
    }

    /// Consume the opener under the cursor and everything through the
    /// first `close`.
    fn skip_through(&mut self, close: u8) {
        self.cursor.consume();
        let rest = self.cursor.rest();
        let len = memchr(close, rest).map_or(rest.len(), |i| i + 1);
        self.cursor.advance_to(self.cursor.offset() + len);
    }

    /// Consume a string opened by `quote`, including its closing quote.
    fn skip_quoted(&mut self, quote: u8) {
        self.cursor.consume();
        loop {
            let rest = self.cursor.rest();
            let Some(i) = memchr2(quote, b'\\', rest) else {
                self.cursor.advance_to(self.cursor.offset() + rest.len());
                return;
            };
            self.cursor.advance_to(self.cursor.offset() + i);
            if rest[i] == quote {
                self.cursor.consume();
                return;
            }
            // Backslash plus whatever follows it.
            self.cursor.consume();
            self.cursor.consume();
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Declaration<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                self.done = true;
                debug!(
                    declarations = self.emitted,
                    skipped_bytes = self.skipped,
                    "scan complete"
                );
                return None;
            }

            let at = self.cursor.position();
            let before = self.cursor.offset();
            if let Some(decl) = self.read_declaration() {
                self.emitted += 1;
                return Some(decl);
            }

            // Guarantees progress even when the reader consumed nothing.
            self.cursor.consume();
            let dropped = self.cursor.offset() - before;
            self.skipped += dropped;
            trace!(line = at.line, column = at.column, dropped, "no declaration, resynchronizing");
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // Every declaration consumes at least its colon.
            (0, Some(self.cursor.rest().len()))
        }
    }
}

impl FusedIterator for Scanner<'_> {}
