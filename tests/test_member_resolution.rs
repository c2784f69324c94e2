//! Member resolution through the public API.
//!
//! Covers classification of mixed fact sets, documentation synthesis and the
//! descriptor identity contract the completion layer relies on.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use member::base::{FileId, Location};
use member::hir::{BuiltinConstant, FactSet, MemberDescriptor, MemberKind, ValueFact, locations};
use member::ide::{CompletionConfig, CompletionKind, completions, hover};
use member::{resolve_classification, synthesize_docs};
use rstest::rstest;

fn kinds(kinds: &[MemberKind]) -> FactSet<ValueFact> {
    kinds.iter().copied().map(ValueFact::new).collect()
}

fn typed(short: &str) -> ValueFact {
    ValueFact::new(MemberKind::Instance).with_short_description(short)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

#[rstest]
#[case::empty(&[], MemberKind::Instance)]
#[case::function(&[MemberKind::Function], MemberKind::Function)]
#[case::function_function(&[MemberKind::Function, MemberKind::Function], MemberKind::Function)]
#[case::function_class(&[MemberKind::Function, MemberKind::Class], MemberKind::Multiple)]
#[case::constant_instance(&[MemberKind::Constant, MemberKind::Instance], MemberKind::Instance)]
#[case::instance_constant(&[MemberKind::Instance, MemberKind::Constant], MemberKind::Instance)]
#[case::constant_only(&[MemberKind::Constant], MemberKind::Constant)]
#[case::module_instance(&[MemberKind::Module, MemberKind::Instance], MemberKind::Multiple)]
#[case::unknown_only(&[MemberKind::Unknown], MemberKind::Instance)]
fn test_classification(#[case] input: &[MemberKind], #[case] expected: MemberKind) {
    assert_eq!(resolve_classification(&kinds(input)), expected);
}

#[test]
fn test_single_none_is_constant() {
    let facts: FactSet<ValueFact> = [ValueFact::none()].into_iter().collect();
    assert_eq!(resolve_classification(&facts), MemberKind::Constant);
}

#[test]
fn test_none_with_instance_is_instance() {
    let facts: FactSet<ValueFact> = [ValueFact::none(), typed("int")].into_iter().collect();
    assert_eq!(resolve_classification(&facts), MemberKind::Instance);
}

#[test]
fn test_fused_group_matches_direct_facts() {
    let direct = kinds(&[MemberKind::Class, MemberKind::Class]);
    let fused: FactSet<ValueFact> = [ValueFact::fused([
        ValueFact::new(MemberKind::Class),
        ValueFact::new(MemberKind::Class),
    ])]
    .into_iter()
    .collect();

    assert_eq!(resolve_classification(&fused), MemberKind::Class);
    assert_eq!(resolve_classification(&fused), resolve_classification(&direct));
}

#[test]
fn test_builtin_type_constant_is_class() {
    let facts: FactSet<ValueFact> = [
        ValueFact::new(MemberKind::Constant).as_builtin(BuiltinConstant::Type),
        ValueFact::new(MemberKind::Class),
    ]
    .into_iter()
    .collect();

    assert_eq!(resolve_classification(&facts), MemberKind::Class);
}

// ============================================================================
// DOCUMENTATION
// ============================================================================

#[rstest]
#[case::none(&[], "Instance of unknown type")]
#[case::one(&["int"], "Instance of int")]
#[case::two(&["str", "int"], "Instance of int or str")]
#[case::three(&["int", "str", "float"], "Instance of float, int, or str")]
#[case::duplicates(&["int", "int"], "Instance of int")]
fn test_instance_summary(#[case] types: &[&str], #[case] expected: &str) {
    let facts: FactSet<ValueFact> = types.iter().map(|t| typed(t)).collect();
    assert_eq!(synthesize_docs(&facts, MemberKind::Instance), expected);
}

#[test]
fn test_docs_independent_of_fact_order() {
    let a = typed("int").with_description("Integer counter.");
    let b = typed("str").with_description("Display name.");
    let c = typed("bytes").with_description("Raw payload.");

    let orders = [
        vec![a.clone(), b.clone(), c.clone()],
        vec![c.clone(), a.clone(), b.clone()],
        vec![b.clone(), c.clone(), a.clone()],
    ];
    let docs: Vec<String> = orders
        .into_iter()
        .map(|order| synthesize_docs(&FactSet::from(order), MemberKind::Instance))
        .collect();

    assert_eq!(docs[0], docs[1]);
    assert_eq!(docs[1], docs[2]);
    assert_eq!(
        docs[0],
        "Instance of bytes, int, or str\n\nDisplay name.\n\nInteger counter.\n\nRaw payload."
    );
}

#[test]
fn test_group_documentation_uses_group_descriptions() {
    let fused = ValueFact::fused([
        typed("int").with_description("An int."),
        typed("str").with_description("A str."),
    ]);
    let facts: FactSet<ValueFact> = [fused].into_iter().collect();

    // The group is documented as one top-level fact
    assert_eq!(
        synthesize_docs(&facts, MemberKind::Instance),
        "Instance of int | str\n\nAn int.\n\nA str."
    );
}

// ============================================================================
// LOCATIONS
// ============================================================================

#[test]
fn test_locations_in_fact_order() {
    let file = FileId::new(1);
    let l1 = Location::new(file, 10, 0);
    let l2 = Location::new(file, 2, 4);
    let l3 = Location::new(FileId::new(0), 7, 1);

    let facts: FactSet<ValueFact> = [
        typed("A").with_location(l1).with_location(l2),
        typed("B").with_location(l3),
    ]
    .into_iter()
    .collect();

    let member = MemberDescriptor::new("x", &facts);
    assert_eq!(member.locations().collect::<Vec<_>>(), vec![l1, l2, l3]);
    assert_eq!(member.locations().collect::<Vec<_>>(), vec![l1, l2, l3]);
    assert_eq!(locations(&facts).count(), 3);
}

// ============================================================================
// DESCRIPTOR IDENTITY
// ============================================================================

#[test]
fn test_same_name_disjoint_facts_are_equal() {
    let ints: FactSet<ValueFact> = [typed("int")].into_iter().collect();
    let classes = kinds(&[MemberKind::Class]);

    let a = MemberDescriptor::new("Thing", &ints);
    let b = MemberDescriptor::new("Thing", &classes);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a.kind(), b.kind());
}

#[test]
fn test_completion_override_keeps_everything_else() {
    let facts: FactSet<ValueFact> = [typed("int").with_description("A count.")].into_iter().collect();
    let member = MemberDescriptor::new("count", &facts);
    let filtered = member.with_completion_text("self.count");

    assert_eq!(filtered.name(), "count");
    assert_eq!(filtered.completion_text(), "self.count");
    assert_eq!(filtered.kind(), member.kind());
    assert_eq!(filtered.documentation(), member.documentation());
    assert_eq!(filtered, member);
    assert_eq!(hash_of(&filtered), hash_of(&member));
}

// ============================================================================
// IDE VIEWS
// ============================================================================

#[test]
fn test_completions_deduplicate_by_name() {
    let ints: FactSet<ValueFact> = [typed("int")].into_iter().collect();
    let funcs = kinds(&[MemberKind::Function]);

    let members = vec![
        MemberDescriptor::new("path", &ints),
        MemberDescriptor::new("Popen", &funcs),
        MemberDescriptor::new("path", &funcs),
        MemberDescriptor::with_kind("pass", MemberKind::Keyword),
        MemberDescriptor::new("sep", &ints),
    ];

    let items = completions(members, "p", &CompletionConfig::default());
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();

    assert_eq!(labels, vec!["Popen", "pass", "path"]);
    // First descriptor for `path` wins
    assert_eq!(items[2].kind, CompletionKind::Variable);
    assert_eq!(items[2].detail.as_deref(), Some("Instance of int"));
    assert_eq!(items[1].kind, CompletionKind::Keyword);
}

#[test]
fn test_completions_case_sensitive() {
    let funcs = kinds(&[MemberKind::Function]);
    let members = [
        MemberDescriptor::new("Popen", &funcs),
        MemberDescriptor::new("pipe", &funcs),
    ];
    let config = CompletionConfig {
        case_sensitive: true,
        call_parens: true,
    };

    let items = completions(members, "p", &config);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "pipe");
    assert_eq!(items[0].insert_text, "pipe(");
}

#[test]
fn test_hover_for_multiple_member() {
    let file = FileId::new(5);
    let facts: FactSet<ValueFact> = [
        ValueFact::new(MemberKind::Function)
            .with_description("def open(path)")
            .with_location(Location::new(file, 1, 0)),
        ValueFact::new(MemberKind::Class)
            .with_description("class open")
            .with_location(Location::new(file, 9, 0)),
    ]
    .into_iter()
    .collect();

    let result = hover(&MemberDescriptor::new("open", &facts)).unwrap();

    assert_eq!(result.kind, MemberKind::Multiple);
    assert_eq!(result.contents, "class open\n\ndef open(path)");
    assert_eq!(result.locations.len(), 2);
}
