//! Marker-based argument tokenizer.
//!
//! # Responsibility
//! - Split argument text into a preamble and per-marker value segments.
//!
//! # Invariants
//! - A marker is recognized only at the start of the input or directly after
//!   a whitespace character; a marker literal inside a word is plain text.
//! - When several markers match at one position, the longest literal wins.
//! - Every occurrence is kept in input order; tokenizing never fails.

use crate::parser::arguments::ParsedArguments;
use crate::parser::syntax::Marker;

/// Tokenizes `input` against the declared `markers`.
pub fn tokenize(input: &str, markers: &[Marker]) -> ParsedArguments {
    let positions = find_marker_positions(input, markers);

    let preamble_end = positions.first().map_or(input.len(), |(start, _)| *start);
    let mut parsed = ParsedArguments::new(input[..preamble_end].trim());

    for (slot, (start, marker)) in positions.iter().enumerate() {
        let value_start = start + marker.literal().len();
        let value_end = positions
            .get(slot + 1)
            .map_or(input.len(), |(next_start, _)| *next_start);
        parsed.push(*marker, input[value_start..value_end].trim());
    }

    parsed
}

fn find_marker_positions(input: &str, markers: &[Marker]) -> Vec<(usize, Marker)> {
    let mut positions = Vec::new();
    let mut at_boundary = true;
    let mut skip_until = 0;

    for (index, c) in input.char_indices() {
        if index >= skip_until && at_boundary {
            if let Some(marker) = longest_marker_at(&input[index..], markers) {
                positions.push((index, marker));
                skip_until = index + marker.literal().len();
            }
        }
        at_boundary = c.is_whitespace();
    }

    positions
}

fn longest_marker_at(rest: &str, markers: &[Marker]) -> Option<Marker> {
    markers
        .iter()
        .copied()
        .filter(|marker| !marker.literal().is_empty() && rest.starts_with(marker.literal()))
        .max_by_key(|marker| marker.literal().len())
}
