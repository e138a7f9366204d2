//! Declaration Scanner Core
//!
//! Single-pass scanner that pulls `property: value;` declarations out of a
//! fragment of stylesheet-like text, with line/column positions for each.
//! Text that does not form a declaration is skipped silently.
//!
//! ```
//! let css = b"\n      color: blue;\n      font-size: 12px;\n";
//! for decl in cssdecl_core::Scanner::new(css) {
//!     println!("{} @ {}", decl, decl.position());
//! }
//! ```
//!
//! # Architecture
//!
//! - **cursor.rs** - Byte cursor with line/column tracking
//! - **scanner.rs** - Driver loop, declaration reader, balanced-span skips
//! - **declaration.rs** - Declaration node (zero-copy, optionally owned)
//! - **span.rs** - Position/PositionRange/Span types
//! - **error.rs** - Error type for text views

mod cursor;
pub mod declaration;
pub mod error;
pub mod scanner;
pub mod span;

pub use declaration::Declaration;
pub use error::{Field, ScanError};
pub use scanner::{scan, Scanner};
pub use span::{Position, PositionRange, Span};
