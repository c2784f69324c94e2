//! IDE views - what completion and hover handlers consume.
//!
//! Each function takes resolved [`MemberDescriptor`](crate::hir::MemberDescriptor)s
//! and returns plain data. Conversion to a protocol happens at the editor
//! boundary, outside this crate.

mod completion;
mod hover;

pub use completion::{CompletionConfig, CompletionItem, CompletionKind, completions};
pub use hover::{HoverResult, hover};
