//! Member kinds - the classification a descriptor reports.

use std::fmt;
use std::str::FromStr;

use super::error::MemberError;

/// The user-facing kind of a member.
///
/// `Unknown` is accepted as an input tag or a fixed override, but
/// [`resolve_classification`](super::resolve_classification) never
/// produces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MemberKind {
    #[default]
    Unknown,
    Class,
    Instance,
    Function,
    Method,
    Module,
    Namespace,
    Constant,
    Field,
    Property,
    Keyword,
    NamedArgument,
    /// Conflicting facts that cannot be unified
    Multiple,
}

impl MemberKind {
    /// Every kind, in declaration order.
    pub const ALL: [MemberKind; 13] = [
        MemberKind::Unknown,
        MemberKind::Class,
        MemberKind::Instance,
        MemberKind::Function,
        MemberKind::Method,
        MemberKind::Module,
        MemberKind::Namespace,
        MemberKind::Constant,
        MemberKind::Field,
        MemberKind::Property,
        MemberKind::Keyword,
        MemberKind::NamedArgument,
        MemberKind::Multiple,
    ];

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Unknown => "unknown",
            MemberKind::Class => "class",
            MemberKind::Instance => "instance",
            MemberKind::Function => "function",
            MemberKind::Method => "method",
            MemberKind::Module => "module",
            MemberKind::Namespace => "namespace",
            MemberKind::Constant => "constant",
            MemberKind::Field => "field",
            MemberKind::Property => "property",
            MemberKind::Keyword => "keyword",
            MemberKind::NamedArgument => "namedArgument",
            MemberKind::Multiple => "multiple",
        }
    }

    /// Returns true for kinds that are invoked rather than read.
    pub fn is_callable(&self) -> bool {
        matches!(self, MemberKind::Function | MemberKind::Method)
    }

    /// Returns true if the documentation for this kind opens with a
    /// "value of type" summary sentence.
    pub fn is_value(&self) -> bool {
        matches!(self, MemberKind::Instance | MemberKind::Constant)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberKind {
    type Err = MemberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MemberError::UnknownKind(s.to_string()))
    }
}
