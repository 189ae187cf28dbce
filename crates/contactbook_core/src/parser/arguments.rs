//! Tokenized arguments and the extraction predicates run over them.
//!
//! The predicates never fail on their own; command builders decide which
//! error a `false` result maps to.

use crate::parser::syntax::Marker;
use std::collections::BTreeMap;

/// Per-invocation tokenizer output: preamble plus marker values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    preamble: String,
    values: BTreeMap<Marker, Vec<String>>,
}

impl ParsedArguments {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
            values: BTreeMap::new(),
        }
    }

    /// Records one more occurrence of `marker`.
    pub fn push(&mut self, marker: Marker, value: impl Into<String>) {
        self.values.entry(marker).or_default().push(value.into());
    }

    /// Trimmed text before the first recognized marker.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `marker`, if any.
    pub fn value_of(&self, marker: Marker) -> Option<&str> {
        self.values
            .get(&marker)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `marker`, in input order.
    pub fn all_values(&self, marker: Marker) -> &[String] {
        self.values
            .get(&marker)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn occurrences(&self, marker: Marker) -> usize {
        self.all_values(marker).len()
    }
}

/// Returns `true` when every marker occurs at least once.
pub fn require_present(args: &ParsedArguments, markers: &[Marker]) -> bool {
    markers.iter().all(|marker| args.occurrences(*marker) > 0)
}

/// Returns `true` when none of the singular markers occurs more than once.
pub fn reject_duplicates(args: &ParsedArguments, markers: &[Marker]) -> bool {
    markers.iter().all(|marker| args.occurrences(*marker) <= 1)
}

/// Returns `true` when no free text precedes the first marker.
pub fn has_empty_preamble(args: &ParsedArguments) -> bool {
    args.preamble().is_empty()
}

/// Last value given for `marker`, if any.
pub fn value_of(args: &ParsedArguments, marker: Marker) -> Option<&str> {
    args.value_of(marker)
}
