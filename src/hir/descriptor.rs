//! Member descriptors - the resolved view of one symbol in scope.
//!
//! A descriptor borrows the fact set of the current analysis snapshot and
//! derives everything else on demand. Nothing is cached: each call to
//! [`MemberDescriptor::kind`], [`MemberDescriptor::documentation`] or
//! [`MemberDescriptor::locations`] reads the facts again.
//!
//! Identity is the name alone. Two descriptors for `os` are the same member
//! for set and map purposes even if one was built from a richer fact set,
//! which is what lets completion lists deduplicate candidates by name.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;

use super::classify::classify;
use super::docs::{Locations, synthesize};
use super::fact::{FactSet, SemanticFact, present};
use super::kind::MemberKind;

/// Where a descriptor's kind comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindSource {
    /// Derived from the facts on each access
    Derived,
    /// Supplied by the caller; the facts are not consulted
    Fixed(MemberKind),
}

/// A resolved member: name, insertion text, kind and documentation source.
pub struct MemberDescriptor<'a, F> {
    name: SmolStr,
    completion: SmolStr,
    facts: &'a [Option<F>],
    source: KindSource,
}

impl<'a, F: SemanticFact> MemberDescriptor<'a, F> {
    /// A member whose kind is derived from `facts`.
    pub fn new(name: impl Into<SmolStr>, facts: &'a FactSet<F>) -> Self {
        Self::with_parts(name, None::<SmolStr>, facts, None)
    }

    /// A member with a known kind and no facts.
    pub fn with_kind(name: impl Into<SmolStr>, kind: MemberKind) -> Self {
        let name = name.into();
        Self {
            completion: name.clone(),
            name,
            facts: &[],
            source: KindSource::Fixed(kind),
        }
    }

    /// General constructor.
    ///
    /// `completion` defaults to the name. When `kind` is given it wins over
    /// anything the facts would say; the facts still back the documentation
    /// and locations.
    pub fn with_parts(
        name: impl Into<SmolStr>,
        completion: Option<impl Into<SmolStr>>,
        facts: &'a FactSet<F>,
        kind: Option<MemberKind>,
    ) -> Self {
        let name = name.into();
        let completion = completion.map_or_else(|| name.clone(), Into::into);
        Self {
            name,
            completion,
            facts: facts.entries(),
            source: kind.map_or(KindSource::Derived, KindSource::Fixed),
        }
    }

    /// A copy that inserts `text` instead of the current completion text.
    pub fn with_completion_text(&self, text: impl Into<SmolStr>) -> Self {
        Self {
            name: self.name.clone(),
            completion: text.into(),
            facts: self.facts,
            source: self.source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity key used for equality and hashing.
    pub fn key(&self) -> &str {
        &self.name
    }

    pub fn completion_text(&self) -> &str {
        &self.completion
    }

    pub fn kind_source(&self) -> KindSource {
        self.source
    }

    /// The member kind, classified from the facts unless fixed.
    pub fn kind(&self) -> MemberKind {
        match self.source {
            KindSource::Fixed(kind) => kind,
            KindSource::Derived => classify(self.facts()),
        }
    }

    /// Present facts backing this member, in the order supplied.
    pub fn facts(&self) -> impl Iterator<Item = &'a F> + use<'a, F> {
        present(self.facts)
    }

    /// Synthesized documentation; empty when there is nothing to say.
    pub fn documentation(&self) -> String {
        synthesize(self.facts(), self.kind())
    }

    /// Source locations of all facts. Each call starts a fresh walk.
    pub fn locations(&self) -> Locations<'a, F> {
        Locations::new(self.facts)
    }
}

impl<F> Clone for MemberDescriptor<'_, F> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            completion: self.completion.clone(),
            facts: self.facts,
            source: self.source,
        }
    }
}

impl<F> fmt::Debug for MemberDescriptor<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("completion", &self.completion)
            .field("source", &self.source)
            .field("facts", &self.facts.len())
            .finish()
    }
}

impl<F> PartialEq for MemberDescriptor<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<F> Eq for MemberDescriptor<'_, F> {}

impl<F> Hash for MemberDescriptor<'_, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.as_str().hash(state);
    }
}

impl<F> Borrow<str> for MemberDescriptor<'_, F> {
    fn borrow(&self) -> &str {
        &self.name
    }
}
