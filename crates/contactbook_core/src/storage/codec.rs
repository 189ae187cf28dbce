//! Whole-roster JSON codec.
//!
//! # Responsibility
//! - Decode storage bytes into a validated `Roster`.
//! - Encode a `Roster` into storage bytes.
//!
//! # Invariants
//! - Structural decoding finishes before any field validation runs.
//! - Loading is all-or-nothing: the first invalid record aborts the load.
//! - Saving never fails for a roster built from validated contacts.

use crate::model::fields::FieldError;
use crate::model::roster::{Roster, RosterError};
use crate::storage::record::RawContactRecord;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_DUPLICATE_CONTACT: &str = "Contacts list contains duplicate contact(s).";

/// Top-level persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterDocument {
    pub contacts: Vec<RawContactRecord>,
}

/// Failure to restore a roster from stored data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Data is not shaped like a record list at all.
    Structural(String),
    /// A record failed field validation. `position` is zero-based.
    Record { position: usize, source: FieldError },
    /// Two records share a contact identity.
    DuplicateContact(String),
}

impl LoadError {
    /// Field error behind a record failure, if any.
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            Self::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structural(details) => {
                write!(f, "data is not a valid contact list: {details}")
            }
            Self::Record { source, .. } => write!(f, "{source}"),
            Self::DuplicateContact(_) => f.write_str(MESSAGE_DUPLICATE_CONTACT),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// JSON encoder/decoder for the whole roster.
pub struct RosterCodec;

impl RosterCodec {
    /// Decodes and validates a full roster.
    pub fn load(bytes: &[u8]) -> Result<Roster, LoadError> {
        let document: RosterDocument = serde_json::from_slice(bytes).map_err(|err| {
            warn!(
                "event=roster_load module=storage status=error kind=structural line={} column={}",
                err.line(),
                err.column()
            );
            LoadError::Structural(err.to_string())
        })?;

        let roster = assemble_roster(&document.contacts)?;
        info!(
            "event=roster_load module=storage status=ok count={}",
            roster.len()
        );
        Ok(roster)
    }

    /// Encodes the roster as pretty-printed JSON.
    pub fn save(roster: &Roster) -> Vec<u8> {
        let document = RosterDocument {
            contacts: roster.iter().map(RawContactRecord::from_contact).collect(),
        };
        let bytes = serde_json::to_vec_pretty(&document)
            .expect("roster document contains only strings, lists and finite numbers");
        info!(
            "event=roster_save module=storage status=ok count={} bytes={}",
            roster.len(),
            bytes.len()
        );
        bytes
    }
}

/// Validates raw records in order and builds a roster from them.
///
/// Shared by the JSON codec and CSV import so both loaders apply identical
/// rules.
pub fn assemble_roster(records: &[RawContactRecord]) -> Result<Roster, LoadError> {
    let contacts = records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            record.to_contact().map_err(|source| {
                warn!(
                    "event=record_validate module=storage status=error position={} field={}",
                    position,
                    source.field()
                );
                LoadError::Record { position, source }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Roster::from_contacts(contacts).map_err(|err| match err {
        RosterError::DuplicateContact(name) => LoadError::DuplicateContact(name),
        other => LoadError::Structural(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::{LoadError, RosterCodec};

    #[test]
    fn empty_document_loads_empty_roster() {
        let roster = RosterCodec::load(br#"{"contacts": []}"#).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn non_record_shapes_are_structural_errors() {
        for bytes in [
            &b"not json"[..],
            &b"[]"[..],
            &br#"{"contacts": 5}"#[..],
            &br#"{"people": []}"#[..],
            &br#"{"contacts": [{"name": 7}]}"#[..],
        ] {
            let err = RosterCodec::load(bytes).unwrap_err();
            assert!(
                matches!(err, LoadError::Structural(_)),
                "input {:?} gave {err:?}",
                String::from_utf8_lossy(bytes)
            );
        }
    }
}
