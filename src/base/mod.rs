//! Foundation types for member resolution.
//!
//! This module provides the primitives facts report against:
//! - [`FileId`] - Opaque file identifiers
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Location`] - A source location record
//!
//! This module has NO dependencies on other crate modules.

mod file_id;
mod location;
mod span;

pub use file_id::FileId;
pub use location::Location;
pub use span::{LineCol, LineIndex, TextRange, TextSize};
