//! Semantic facts - the inferred bindings a member is resolved from.
//!
//! The inference engine is an external collaborator. It hands this crate a
//! [`FactSet`] per symbol, whose entries implement the narrow
//! [`SemanticFact`] capability trait. [`ValueFact`] is a ready-made record
//! for engines (and tests) that do not carry their own value type.

use std::sync::Arc;

use indexmap::IndexSet;
use smol_str::SmolStr;

use super::error::{MemberError, MemberResult};
use super::kind::MemberKind;
use crate::base::Location;

/// Built-in classes whose constants denote callables or types themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinConstant {
    /// The interpreter's built-in `function` class
    Function,
    /// The interpreter's built-in `type` class
    Type,
}

impl BuiltinConstant {
    /// The kind a constant of this class is reclassified as.
    pub fn promoted_kind(self) -> MemberKind {
        match self {
            BuiltinConstant::Function => MemberKind::Function,
            BuiltinConstant::Type => MemberKind::Class,
        }
    }
}

/// One inferred value/type binding for a symbol.
pub trait SemanticFact {
    /// Base classification tag.
    fn kind(&self) -> MemberKind;

    /// Short human-readable type name, e.g. `int`.
    fn short_description(&self) -> Option<&str>;

    /// Longer human-readable description.
    fn description(&self) -> Option<&str>;

    /// Source locations, in the order the engine reports them.
    fn locations(&self) -> &[Location];

    /// Sub-facts when this fact is a fused group.
    fn group(&self) -> Option<&[Self]>
    where
        Self: Sized,
    {
        None
    }

    /// Set when this is a constant whose class is exactly a built-in
    /// `function` or `type` class.
    fn builtin_constant(&self) -> Option<BuiltinConstant> {
        None
    }

    /// True when the fact's type identity is the None singleton type.
    fn is_none_type(&self) -> bool {
        false
    }
}

/// A plain fact record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueFact {
    kind: MemberKind,
    short_description: Option<SmolStr>,
    description: Option<Arc<str>>,
    locations: Vec<Location>,
    builtin: Option<BuiltinConstant>,
    none_type: bool,
    /// Children of a fused group, possibly none
    members: Option<Vec<ValueFact>>,
}

impl ValueFact {
    pub fn new(kind: MemberKind) -> Self {
        Self {
            kind,
            short_description: None,
            description: None,
            locations: Vec::new(),
            builtin: None,
            none_type: false,
            members: None,
        }
    }

    /// The None singleton.
    pub fn none() -> Self {
        let mut fact = Self::new(MemberKind::Constant).with_short_description("None");
        fact.none_type = true;
        fact
    }

    /// Fuse several facts into one group.
    ///
    /// The group reports `Multiple` as its own kind. Its descriptions join the
    /// unique child descriptions and its locations concatenate the children's.
    /// An empty group is still a group and flattens to nothing.
    pub fn fused(members: impl IntoIterator<Item = ValueFact>) -> Self {
        let members: Vec<ValueFact> = members.into_iter().collect();

        let shorts: IndexSet<&str> = members
            .iter()
            .filter_map(|m| m.short_description.as_deref())
            .collect();
        let descriptions: IndexSet<&str> = members
            .iter()
            .filter_map(|m| m.description.as_deref())
            .collect();

        let mut group = Self::new(MemberKind::Multiple);
        if !shorts.is_empty() {
            let joined = shorts.into_iter().collect::<Vec<_>>().join(" | ");
            group.short_description = Some(SmolStr::new(joined));
        }
        if !descriptions.is_empty() {
            let joined = descriptions.into_iter().collect::<Vec<_>>().join("\n\n");
            group.description = Some(Arc::from(joined));
        }
        group.locations = members
            .iter()
            .flat_map(|m| m.locations.iter().copied())
            .collect();
        group.members = Some(members);
        group
    }

    pub fn with_short_description(mut self, short: impl Into<SmolStr>) -> Self {
        self.short_description = Some(short.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<Arc<str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Mark this constant as an instance of a built-in `function`/`type` class.
    pub fn as_builtin(mut self, builtin: BuiltinConstant) -> Self {
        self.builtin = Some(builtin);
        self
    }

    pub fn is_group(&self) -> bool {
        self.members.is_some()
    }
}

impl SemanticFact for ValueFact {
    fn kind(&self) -> MemberKind {
        self.kind
    }

    fn short_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn locations(&self) -> &[Location] {
        &self.locations
    }

    fn group(&self) -> Option<&[Self]> {
        self.members.as_deref()
    }

    fn builtin_constant(&self) -> Option<BuiltinConstant> {
        self.builtin
    }

    fn is_none_type(&self) -> bool {
        self.none_type
    }
}

/// The facts backing one symbol.
///
/// Entries are `Option`s because an upstream engine may hand over holes.
/// An absent entry is a contract violation: it trips a debug assertion and
/// otherwise contributes nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactSet<F> {
    entries: Vec<Option<F>>,
}

impl<F> Default for FactSet<F> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<F> FactSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw engine output that may contain absent entries.
    pub fn from_entries(entries: Vec<Option<F>>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, fact: F) {
        self.entries.push(Some(fact));
    }

    /// Raw entries, including absent ones.
    pub fn entries(&self) -> &[Option<F>] {
        &self.entries
    }

    /// Present facts in order. Absent entries are reported and skipped.
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        present(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail on the first absent entry.
    pub fn check(&self) -> MemberResult<()> {
        match self.entries.iter().position(Option::is_none) {
            Some(index) => Err(MemberError::MissingFact { index }),
            None => Ok(()),
        }
    }
}

impl<F> From<Vec<F>> for FactSet<F> {
    fn from(facts: Vec<F>) -> Self {
        facts.into_iter().collect()
    }
}

impl<F> FromIterator<F> for FactSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Some).collect(),
        }
    }
}

/// Iterate the present entries of a raw fact slice.
pub(crate) fn present<F>(entries: &[Option<F>]) -> impl Iterator<Item = &F> {
    entries.iter().enumerate().filter_map(|(index, entry)| {
        if entry.is_none() {
            tracing::warn!(index, "missing fact entry, treating as no signal");
        }
        debug_assert!(entry.is_some(), "missing fact at index {index}");
        entry.as_ref()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FileId;

    #[test]
    fn test_group_aggregates_children() {
        let a = ValueFact::new(MemberKind::Instance)
            .with_short_description("int")
            .with_description("an integer")
            .with_location(Location::new(FileId::new(0), 1, 0));
        let b = ValueFact::new(MemberKind::Instance)
            .with_short_description("str")
            .with_location(Location::new(FileId::new(0), 4, 2));
        let c = ValueFact::new(MemberKind::Instance).with_short_description("int");

        let group = ValueFact::fused([a.clone(), b.clone(), c]);

        assert!(group.is_group());
        assert_eq!(group.kind(), MemberKind::Multiple);
        assert_eq!(group.short_description(), Some("int | str"));
        assert_eq!(group.description(), Some("an integer"));
        assert_eq!(group.locations().len(), 2);
        assert_eq!(group.group().map(|m| m.len()), Some(3));
    }

    #[test]
    fn test_empty_group_is_still_group() {
        let no_members: [ValueFact; 0] = [];
        let group = ValueFact::fused(no_members);

        assert!(group.is_group());
        assert_eq!(group.group().map(|m| m.len()), Some(0));
        assert_eq!(group.short_description(), None);
        assert!(group.locations().is_empty());
    }

    #[test]
    fn test_plain_fact_is_not_group() {
        let fact = ValueFact::new(MemberKind::Function);
        assert!(fact.group().is_none());
        assert_eq!(fact.builtin_constant(), None);
        assert!(!fact.is_none_type());
    }

    #[test]
    fn test_none_fact() {
        let none = ValueFact::none();
        assert!(none.is_none_type());
        assert_eq!(none.short_description(), Some("None"));
    }

    #[test]
    fn test_builtin_promotion_targets() {
        assert_eq!(BuiltinConstant::Function.promoted_kind(), MemberKind::Function);
        assert_eq!(BuiltinConstant::Type.promoted_kind(), MemberKind::Class);
    }

    #[test]
    fn test_fact_set_check() {
        let complete: FactSet<ValueFact> = vec![ValueFact::new(MemberKind::Class)].into();
        assert_eq!(complete.check(), Ok(()));
        assert_eq!(complete.len(), 1);

        let holed = FactSet::from_entries(vec![Some(ValueFact::new(MemberKind::Class)), None]);
        assert_eq!(holed.check(), Err(MemberError::MissingFact { index: 1 }));
    }

    #[test]
    fn test_empty_fact_set() {
        let facts: FactSet<ValueFact> = FactSet::new();
        assert!(facts.is_empty());
        assert_eq!(facts.iter().count(), 0);
    }
}
