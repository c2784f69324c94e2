//! Classification - merging a symbol's facts into one member kind.
//!
//! The merge is order independent. Each fact contributes an *effective kind*
//! and the running result only moves along a tiny lattice:
//!
//! ```text
//! Unknown → any kind
//! Constant → Instance        (one way: Instance never demotes)
//! any other disagreement → Multiple (terminal)
//! ```
//!
//! Facts typed as the None singleton carry no kind of their own. They only
//! matter when nothing else does, in which case the member is a `Constant`.

use std::slice;

use tracing::trace;

use super::fact::{FactSet, SemanticFact};
use super::kind::MemberKind;

/// Resolve the member kind for a fact set.
///
/// Never returns [`MemberKind::Unknown`]: a set with no usable signal is an
/// `Instance`, or a `Constant` if it only held None-typed facts.
pub fn resolve_classification<F: SemanticFact>(facts: &FactSet<F>) -> MemberKind {
    classify(facts.iter())
}

pub(crate) fn classify<'f, F>(facts: impl IntoIterator<Item = &'f F>) -> MemberKind
where
    F: SemanticFact + 'f,
{
    let mut result = MemberKind::Unknown;
    let mut includes_none = false;
    let mut seen = 0usize;

    for fact in flatten(facts) {
        seen += 1;
        if fact.is_none_type() {
            includes_none = true;
            continue;
        }

        let kind = effective_kind(fact);
        match merge(result, kind) {
            Some(merged) => result = merged,
            None => {
                trace!(current = %result, conflicting = %kind, "conflicting facts");
                return MemberKind::Multiple;
            }
        }
    }

    let kind = match result {
        MemberKind::Unknown if includes_none => MemberKind::Constant,
        MemberKind::Unknown => MemberKind::Instance,
        kind => kind,
    };
    trace!(facts = seen, includes_none, %kind, "classified member");
    kind
}

/// Expand fused groups one level deep.
///
/// A group nested inside a group is not expanded again; it is classified by
/// its own kind.
fn flatten<'f, F>(facts: impl IntoIterator<Item = &'f F>) -> impl Iterator<Item = &'f F>
where
    F: SemanticFact + 'f,
{
    facts
        .into_iter()
        .flat_map(|fact| fact.group().unwrap_or(slice::from_ref(fact)))
}

/// The kind a single fact contributes to the merge.
fn effective_kind<F: SemanticFact>(fact: &F) -> MemberKind {
    match fact.builtin_constant() {
        Some(builtin) => builtin.promoted_kind(),
        None => fact.kind(),
    }
}

/// Merge one effective kind into the running result.
///
/// Returns `None` when the two kinds cannot be unified.
fn merge(current: MemberKind, next: MemberKind) -> Option<MemberKind> {
    match (current, next) {
        // No signal from this fact
        (current, MemberKind::Unknown) => Some(current),
        (MemberKind::Unknown, next) => Some(next),
        (current, next) if current == next => Some(current),
        (MemberKind::Constant, MemberKind::Instance)
        | (MemberKind::Instance, MemberKind::Constant) => Some(MemberKind::Instance),
        _ => None,
    }
}
