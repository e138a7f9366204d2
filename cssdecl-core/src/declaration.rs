//! The declaration node - the only output of a scan.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Field, ScanError};
use crate::span::{PositionRange, Span};

/// A `property: value` pair with its source location.
///
/// The lifetime `'a` refers to the source buffer. Declarations produced
/// by the scanner are zero-copy views into it; use [`into_owned`] to
/// detach one from the buffer.
///
/// Both byte fields are trimmed of surrounding ASCII whitespace and are
/// otherwise the raw input: no unescaping, no case folding.
///
/// [`into_owned`]: Declaration::into_owned
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration<'a> {
    property: Cow<'a, [u8]>,
    value: Cow<'a, [u8]>,
    position: PositionRange,
    span: Span,
}

impl<'a> Declaration<'a> {
    pub(crate) fn new(property: &'a [u8], value: &'a [u8], position: PositionRange, span: Span) -> Self {
        Self {
            property: Cow::Borrowed(property),
            value: Cow::Borrowed(value),
            position,
            span,
        }
    }

    /// Property name, e.g. `color` or `input[type=text]`.
    ///
    /// A leading `*` marker is not part of the name.
    #[inline]
    pub fn property(&self) -> &[u8] {
        &self.property
    }

    /// Raw value text between the colon and the terminator.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Line/column range from the first byte of the declaration to just
    /// past its `;` (or the end of what was consumed if there is none).
    #[inline]
    pub fn position(&self) -> PositionRange {
        self.position
    }

    /// Byte range covering the same text as [`position`](Self::position).
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn property_str(&self) -> Result<&str, ScanError> {
        self.text(Field::Property)
    }

    pub fn value_str(&self) -> Result<&str, ScanError> {
        self.text(Field::Value)
    }

    fn text(&self, field: Field) -> Result<&str, ScanError> {
        let bytes = match field {
            Field::Property => self.property(),
            Field::Value => self.value(),
        };
        std::str::from_utf8(bytes).map_err(|source| ScanError::InvalidUtf8 {
            field,
            position: self.position.start,
            source,
        })
    }

    /// Copy the byte fields so the declaration no longer borrows the input.
    pub fn into_owned(self) -> Declaration<'static> {
        Declaration {
            property: Cow::Owned(self.property.into_owned()),
            value: Cow::Owned(self.value.into_owned()),
            position: self.position,
            span: self.span,
        }
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {};",
            String::from_utf8_lossy(&self.property),
            String::from_utf8_lossy(&self.value)
        )
    }
}
