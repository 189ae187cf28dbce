//! Contact domain entity.
//!
//! # Responsibility
//! - Aggregate validated fields into one contact record.
//! - Enforce the assignment/score co-presence rule.
//!
//! # Invariants
//! - Every field is a validated value type; a `Contact` cannot hold raw text.
//! - `assessment` carries both an assignment and a score, or is absent.
//! - Two contacts denote the same person when their names match exactly.

use crate::model::fields::{
    Address, Assignment, Email, FieldError, FieldKind, FieldValue, Github, Name, Phone, Score,
    Telegram,
};
use crate::model::tag::Tag;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Reported when only one half of an assignment/score pair is given.
pub const MESSAGE_ASSESSMENT_PAIR: &str =
    "An assignment and its score must be given together";

/// Graded assignment attached to a contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub assignment: Assignment,
    pub score: Score,
}

impl Assessment {
    pub fn new(assignment: Assignment, score: Score) -> Self {
        Self { assignment, score }
    }

    /// Validates an optional assignment/score pair.
    ///
    /// Both absent yields `Ok(None)`. Exactly one present fails the
    /// co-presence rule, naming the absent half.
    pub fn validate_pair(
        raw_assignment: Option<&str>,
        raw_score: Option<&str>,
    ) -> Result<Option<Self>, FieldError> {
        let assignment = Assignment::validate_optional(raw_assignment)?;
        let score = Score::validate_optional(raw_score)?;
        match (assignment, score) {
            (Some(assignment), Some(score)) => Ok(Some(Self::new(assignment, score))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(FieldError::invalid(
                FieldKind::Score,
                MESSAGE_ASSESSMENT_PAIR,
            )),
            (None, Some(_)) => Err(FieldError::invalid(
                FieldKind::Assignment,
                MESSAGE_ASSESSMENT_PAIR,
            )),
        }
    }
}

/// Canonical contact record held by the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    /// Messaging handle.
    pub telegram: Telegram,
    /// Code-hosting handle.
    pub github: Github,
    pub tags: BTreeSet<Tag>,
    pub assessment: Option<Assessment>,
}

impl Contact {
    /// Creates a contact without an assessment.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        telegram: Telegram,
        github: Github,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            telegram,
            github,
            tags: tags.into_iter().collect(),
            assessment: None,
        }
    }

    /// Returns a copy of this contact carrying the given assessment.
    pub fn with_assessment(mut self, assessment: Option<Assessment>) -> Self {
        self.assessment = assessment;
        self
    }

    /// Identity comparison used for roster uniqueness.
    pub fn is_same_contact(&self, other: &Contact) -> bool {
        self.name == other.name
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Telegram: {}; Github: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.telegram, self.github
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        if let Some(assessment) = &self.assessment {
            write!(
                f,
                "; Assignment: {} ({})",
                assessment.assignment, assessment.score
            )?;
        }
        Ok(())
    }
}
