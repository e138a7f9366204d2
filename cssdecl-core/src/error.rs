//! Error types.
//!
//! Scanning itself never fails: unparseable text is dropped, not
//! reported. Errors only arise when a caller asks for a text view of
//! bytes that are not valid UTF-8.

use std::fmt;
use std::str::Utf8Error;

use thiserror::Error;

use crate::span::Position;

/// Which part of a declaration an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Property,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Property => "property",
            Field::Value => "value",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Declaration bytes requested as `&str` are not UTF-8.
    #[error("{field} of declaration at {position} is not valid UTF-8")]
    InvalidUtf8 {
        field: Field,
        position: Position,
        #[source]
        source: Utf8Error,
    },
}
