//! Command-line marker literals.

use std::fmt::{Display, Formatter};

/// Literal token that introduces a field value in command text, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Marker(&'static str);

impl Marker {
    pub const fn new(literal: &'static str) -> Self {
        Self(literal)
    }

    pub fn literal(self) -> &'static str {
        self.0
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const MARKER_NAME: Marker = Marker::new("n/");
pub const MARKER_PHONE: Marker = Marker::new("p/");
pub const MARKER_EMAIL: Marker = Marker::new("e/");
pub const MARKER_ADDRESS: Marker = Marker::new("a/");
pub const MARKER_TELEGRAM: Marker = Marker::new("tele/");
pub const MARKER_GITHUB: Marker = Marker::new("g/");
pub const MARKER_TAG: Marker = Marker::new("t/");
pub const MARKER_ASSIGNMENT: Marker = Marker::new("as/");
pub const MARKER_SCORE: Marker = Marker::new("s/");
pub const MARKER_PATH: Marker = Marker::new("f/");
