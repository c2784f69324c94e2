//! # member-base
//!
//! Resolution of multi-valued symbols into stable completion/hover members.
//!
//! An inference engine may conclude that a name binds to several values at
//! once. This crate merges those facts into one member: a kind, a
//! documentation string and the locations the facts came from. The result is
//! deterministic for any ordering of the input facts.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide     → Completion items, hover results
//!   ↓
//! hir     → Facts, classification, documentation, member descriptors
//!   ↓
//! base    → Primitives (FileId, LineCol, Location)
//! ```

/// Foundation types: FileId, LineCol, Location
pub mod base;

/// Member model: facts, classification and documentation synthesis
pub mod hir;

/// IDE views: completion and hover
pub mod ide;

pub use base::{FileId, LineCol, LineIndex, Location};
pub use hir::{
    FactSet, MemberDescriptor, MemberError, MemberKind, MemberResult, SemanticFact, ValueFact,
    resolve_classification, synthesize_docs,
};
