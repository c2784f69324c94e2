//! Documentation synthesis for multi-valued members.
//!
//! A member backed by several facts gets one documentation string:
//!
//! ```text
//! Instance of int or str        ← summary, only for values
//!
//! <long description A>          ← unique descriptions, sorted
//!
//! <long description B>
//! ```
//!
//! Every list that ends up in the output is sorted, so the text does not
//! depend on the order the inference engine produced its facts in.

use std::iter::FusedIterator;
use std::slice;

use indexmap::IndexSet;

use super::fact::{FactSet, SemanticFact};
use super::kind::MemberKind;
use crate::base::Location;

/// Build the documentation for a member of the given kind.
pub fn synthesize_docs<F: SemanticFact>(facts: &FactSet<F>, kind: MemberKind) -> String {
    synthesize(facts.iter(), kind)
}

pub(crate) fn synthesize<'f, F>(facts: impl IntoIterator<Item = &'f F>, kind: MemberKind) -> String
where
    F: SemanticFact + 'f,
{
    let mut descriptions: IndexSet<&str> = IndexSet::new();
    let mut types: IndexSet<&str> = IndexSet::new();

    for fact in facts {
        descriptions.insert(fact.description().unwrap_or(""));
        types.insert(fact.short_description().unwrap_or(""));
    }

    let mut doc = String::new();

    if kind.is_value() {
        let mut types: Vec<&str> = types.into_iter().collect();
        types.sort_unstable();

        doc.push_str(summary_label(kind));
        doc.push_str(&enumerate_types(&types));
        doc.push_str("\n\n");
    }

    let mut descriptions: Vec<&str> = descriptions.into_iter().collect();
    descriptions.sort_unstable();
    for description in descriptions {
        doc.push_str(description);
        doc.push_str("\n\n");
    }

    clean_documentation(&doc)
}

/// Opening words of the summary sentence.
fn summary_label(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Instance => "Instance of ",
        MemberKind::Constant => "Constant ",
        // Not produced by the classifier today
        _ => "Value of ",
    }
}

/// Natural-language enumeration of type names, in the order given.
///
/// `[]` → `unknown type`, `[a]` → `a`, `[a, b]` → `a or b`,
/// `[a, b, c]` → `a, b, or c`.
pub fn enumerate_types(types: &[&str]) -> String {
    match types {
        [] => "unknown type".to_string(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Normalize documentation text.
///
/// Line endings become `\n`, trailing whitespace is stripped from every line,
/// runs of blank lines collapse into one and the result is trimmed. Applying
/// it twice gives the same text as applying it once.
pub fn clean_documentation(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(normalized.len());
    let mut pending_blank = false;

    for line in normalized.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }

        if out.is_empty() {
            out.push_str(line.trim_start());
            continue;
        }

        out.push('\n');
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
    }

    out
}

/// Locations of every fact, concatenated in fact order.
///
/// The iterator borrows the live fact set. Cloning it, or asking the fact set
/// again, restarts the walk from the first fact.
pub fn locations<F: SemanticFact>(facts: &FactSet<F>) -> Locations<'_, F> {
    Locations::new(facts.entries())
}

/// Iterator returned by [`locations`].
pub struct Locations<'a, F> {
    facts: slice::Iter<'a, Option<F>>,
    current: slice::Iter<'a, Location>,
    index: usize,
}

impl<'a, F> Locations<'a, F> {
    pub(crate) fn new(entries: &'a [Option<F>]) -> Self {
        Self {
            facts: entries.iter(),
            current: slice::Iter::default(),
            index: 0,
        }
    }
}

impl<F> Clone for Locations<'_, F> {
    fn clone(&self) -> Self {
        Self {
            facts: self.facts.clone(),
            current: self.current.clone(),
            index: self.index,
        }
    }
}

impl<F: SemanticFact> Iterator for Locations<'_, F> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        loop {
            if let Some(location) = self.current.next() {
                return Some(*location);
            }

            let entry = self.facts.next()?;
            let index = self.index;
            self.index += 1;
            match entry {
                Some(fact) => self.current = fact.locations().iter(),
                None => {
                    tracing::warn!(index, "missing fact entry, skipping its locations");
                    debug_assert!(entry.is_some(), "missing fact at index {index}");
                }
            }
        }
    }
}

impl<F: SemanticFact> FusedIterator for Locations<'_, F> {}
