//! Hover - documentation and definition sites for a member.

use smol_str::SmolStr;

use crate::base::Location;
use crate::hir::{MemberDescriptor, MemberKind, SemanticFact};

/// Hover information for a member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoverResult {
    pub name: SmolStr,
    pub kind: MemberKind,
    /// The synthesized documentation
    pub contents: String,
    /// Every site the member's facts were observed at
    pub locations: Vec<Location>,
}

/// Get hover information for a member.
///
/// Returns `None` when there is neither documentation nor a location to show.
pub fn hover<F: SemanticFact>(member: &MemberDescriptor<'_, F>) -> Option<HoverResult> {
    let contents = member.documentation();
    let locations: Vec<Location> = member.locations().collect();

    if contents.is_empty() && locations.is_empty() {
        return None;
    }

    Some(HoverResult {
        name: SmolStr::new(member.name()),
        kind: member.kind(),
        contents,
        locations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FileId;
    use crate::hir::{FactSet, ValueFact};

    #[test]
    fn test_hover_on_value() {
        let loc = Location::new(FileId::new(3), 10, 4);
        let facts: FactSet<ValueFact> = [ValueFact::new(MemberKind::Instance)
            .with_short_description("dict")
            .with_location(loc)]
        .into_iter()
        .collect();

        let result = hover(&MemberDescriptor::new("environ", &facts)).unwrap();

        assert_eq!(result.name, "environ");
        assert_eq!(result.kind, MemberKind::Instance);
        assert_eq!(result.contents, "Instance of dict");
        assert_eq!(result.locations, vec![loc]);
    }

    #[test]
    fn test_hover_on_bare_keyword() {
        let member = MemberDescriptor::<ValueFact>::with_kind("lambda", MemberKind::Keyword);
        assert_eq!(hover(&member), None);
    }
}
