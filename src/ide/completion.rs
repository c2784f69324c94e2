//! Completion - turning resolved members into completion items.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use tracing::debug;

use crate::hir::{MemberDescriptor, MemberKind, SemanticFact};

/// Editor-level category of a completion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CompletionKind {
    Function,
    Method,
    Class,
    Module,
    Variable,
    Constant,
    Field,
    Property,
    Keyword,
    /// Members whose facts disagree
    Value,
}

impl CompletionKind {
    /// Convert to the LSP `CompletionItemKind` number.
    pub fn to_lsp(self) -> u32 {
        match self {
            CompletionKind::Method => 2,
            CompletionKind::Function => 3,
            CompletionKind::Field => 5,
            CompletionKind::Variable => 6,
            CompletionKind::Class => 7,
            CompletionKind::Module => 9,
            CompletionKind::Property => 10,
            CompletionKind::Value => 12,
            CompletionKind::Keyword => 14,
            CompletionKind::Constant => 21,
        }
    }
}

impl From<MemberKind> for CompletionKind {
    fn from(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Function => CompletionKind::Function,
            MemberKind::Method => CompletionKind::Method,
            MemberKind::Class => CompletionKind::Class,
            MemberKind::Module | MemberKind::Namespace => CompletionKind::Module,
            MemberKind::Instance | MemberKind::NamedArgument => CompletionKind::Variable,
            MemberKind::Constant => CompletionKind::Constant,
            MemberKind::Field => CompletionKind::Field,
            MemberKind::Property => CompletionKind::Property,
            MemberKind::Keyword => CompletionKind::Keyword,
            MemberKind::Multiple | MemberKind::Unknown => CompletionKind::Value,
        }
    }
}

/// A completion item ready for the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionItem {
    /// Text shown in the list (the member name)
    pub label: SmolStr,
    /// Text inserted on accept
    pub insert_text: SmolStr,
    pub kind: CompletionKind,
    /// First line of the member documentation
    pub detail: Option<String>,
}

/// Options for building completion lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionConfig {
    /// Match the prefix case-sensitively
    pub case_sensitive: bool,
    /// Append `(` to the insertion text of functions and methods
    pub call_parens: bool,
}

/// Build the completion list for `members` matching `prefix`.
///
/// Members are deduplicated by name (the first descriptor for a name wins)
/// and the result is sorted by label.
pub fn completions<'a, F: SemanticFact + 'a>(
    members: impl IntoIterator<Item = MemberDescriptor<'a, F>>,
    prefix: &str,
    config: &CompletionConfig,
) -> Vec<CompletionItem> {
    let mut total = 0usize;
    let unique: IndexSet<MemberDescriptor<'a, F>, FxBuildHasher> = members
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|member| matches_prefix(member.name(), prefix, config.case_sensitive))
        .collect();

    let mut items: Vec<CompletionItem> = unique
        .into_iter()
        .map(|member| completion_item(member, config))
        .collect();
    items.sort_by(|a, b| a.label.cmp(&b.label));

    debug!(prefix, total, kept = items.len(), "built completion list");
    items
}

fn completion_item<F: SemanticFact>(
    member: MemberDescriptor<'_, F>,
    config: &CompletionConfig,
) -> CompletionItem {
    let kind = member.kind();
    let member = if config.call_parens && kind.is_callable() {
        let text = format!("{}(", member.completion_text());
        member.with_completion_text(text)
    } else {
        member
    };

    let documentation = member.documentation();
    let detail = documentation
        .lines()
        .next()
        .filter(|line| !line.is_empty())
        .map(str::to_string);

    CompletionItem {
        label: SmolStr::new(member.name()),
        insert_text: SmolStr::new(member.completion_text()),
        kind: kind.into(),
        detail,
    }
}

fn matches_prefix(name: &str, prefix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        name.starts_with(prefix)
    } else {
        name.to_lowercase().starts_with(&prefix.to_lowercase())
    }
}
