//! Member model - from inferred facts to resolved members.
//!
//! This module turns the facts an inference engine produced for one symbol
//! into a [`MemberDescriptor`]: a name, a kind and documentation.
//!
//! ## Pipeline
//!
//! ```text
//! FactSet ──► resolve_classification ──► MemberKind
//!    │
//!    └──────► synthesize_docs ─────────► String
//!    └──────► locations ───────────────► Location*
//! ```
//!
//! All three are pure functions of the fact set. The descriptor only stores
//! references and calls them when asked.

mod classify;
mod descriptor;
mod docs;
mod error;
mod fact;
mod kind;

pub use classify::resolve_classification;
pub use descriptor::{KindSource, MemberDescriptor};
pub use docs::{Locations, clean_documentation, enumerate_types, locations, synthesize_docs};
pub use error::{MemberError, MemberResult};
pub use fact::{BuiltinConstant, FactSet, SemanticFact, ValueFact};
pub use kind::MemberKind;
