//! Ordered contact collection.
//!
//! # Invariants
//! - No two contacts share an identity (`Contact::is_same_contact`).
//! - Mutations either apply completely or leave the roster untouched.

use crate::model::contact::Contact;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Roster mutation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Another contact already has this name.
    DuplicateContact(String),
    /// Zero-based position is past the end of the roster.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateContact(name) => {
                write!(f, "This contact already exists in the contact book: {name}")
            }
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "contact index {} is out of range for {} contact(s)",
                index + 1,
                len
            ),
        }
    }
}

impl Error for RosterError {}

/// In-memory contact roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    contacts: Vec<Contact>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster, rejecting the whole list on the first identity clash.
    pub fn from_contacts(contacts: Vec<Contact>) -> RosterResult<Self> {
        let mut roster = Self::new();
        for contact in contacts {
            roster.add(contact)?;
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Returns whether a contact with the same identity exists.
    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts
            .iter()
            .any(|existing| existing.is_same_contact(contact))
    }

    /// Appends a contact with a new identity.
    pub fn add(&mut self, contact: Contact) -> RosterResult<()> {
        if self.contains(&contact) {
            return Err(RosterError::DuplicateContact(contact.name.to_string()));
        }
        self.contacts.push(contact);
        Ok(())
    }

    /// Replaces the contact at `index`, returning the previous value.
    ///
    /// The replacement may keep the same identity, but must not take over the
    /// identity of any other contact.
    pub fn set(&mut self, index: usize, contact: Contact) -> RosterResult<Contact> {
        self.check_index(index)?;
        let clash = self
            .contacts
            .iter()
            .enumerate()
            .any(|(position, existing)| position != index && existing.is_same_contact(&contact));
        if clash {
            return Err(RosterError::DuplicateContact(contact.name.to_string()));
        }
        Ok(std::mem::replace(&mut self.contacts[index], contact))
    }

    /// Removes and returns the contact at `index`.
    pub fn remove(&mut self, index: usize) -> RosterResult<Contact> {
        self.check_index(index)?;
        Ok(self.contacts.remove(index))
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    fn check_index(&self, index: usize) -> RosterResult<()> {
        if index >= self.contacts.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(())
    }
}
