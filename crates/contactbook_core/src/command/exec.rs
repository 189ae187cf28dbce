//! Command execution against catalog state.
//!
//! # Invariants
//! - A failing command leaves the catalog state untouched.
//! - Import replaces the roster only after the whole file validated.

use crate::command::state::CatalogState;
use crate::command::{Command, CommandKind};
use crate::model::contact::Contact;
use crate::model::roster::RosterError;
use crate::storage::csv::{export_roster_file, import_roster_file, TransferError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

pub const MESSAGE_INVALID_CONTACT_DISPLAYED_INDEX: &str =
    "The contact index provided is invalid";

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback: String,
    /// Help information should be shown to the user.
    pub show_help: bool,
    /// The displayed list changed and should be shown.
    pub show_list: bool,
    /// The application should exit.
    pub exit: bool,
    /// Contact selected for a detail view.
    pub viewed: Option<Contact>,
}

impl CommandResult {
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            show_list: false,
            exit: false,
            viewed: None,
        }
    }
}

/// Failure while executing an already-validated command.
#[derive(Debug)]
pub enum CommandError {
    /// Displayed index points past the displayed list.
    InvalidDisplayedIndex(NonZeroUsize),
    /// Roster identity rule rejected the mutation.
    Roster(RosterError),
    /// Import or export failed.
    Transfer(TransferError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDisplayedIndex(_) => f.write_str(MESSAGE_INVALID_CONTACT_DISPLAYED_INDEX),
            Self::Roster(err) => write!(f, "{err}"),
            Self::Transfer(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDisplayedIndex(_) => None,
            Self::Roster(err) => Some(err),
            Self::Transfer(err) => Some(err),
        }
    }
}

impl From<RosterError> for CommandError {
    fn from(value: RosterError) -> Self {
        Self::Roster(value)
    }
}

impl From<TransferError> for CommandError {
    fn from(value: TransferError) -> Self {
        Self::Transfer(value)
    }
}

impl Command {
    /// Runs this command against `state`.
    pub fn execute(self, state: &mut CatalogState) -> Result<CommandResult, CommandError> {
        let kind = self.kind();
        let result = match self {
            Self::Add(contact) => {
                let summary = contact.to_string();
                state.roster_mut().add(contact)?;
                CommandResult::message(format!("New contact added: {summary}"))
            }
            Self::Edit { index, edit } => {
                let position = resolve(state, index)?;
                let edited = edit.apply_to(&current(state, position, index)?);
                let summary = edited.to_string();
                state.roster_mut().set(position, edited)?;
                state.clear_filter();
                CommandResult::message(format!("Edited contact: {summary}"))
            }
            Self::Delete { index } => {
                let position = resolve(state, index)?;
                let removed = state.roster_mut().remove(position)?;
                CommandResult::message(format!("Deleted contact: {removed}"))
            }
            Self::Find { keywords } => {
                state.set_filter(keywords);
                let count = state.visible_positions().len();
                CommandResult {
                    show_list: true,
                    ..CommandResult::message(format!("{count} contacts listed!"))
                }
            }
            Self::List => {
                state.clear_filter();
                CommandResult {
                    show_list: true,
                    ..CommandResult::message("Listed all contacts")
                }
            }
            Self::Clear => {
                state.roster_mut().clear();
                state.clear_filter();
                CommandResult::message("Contact book has been cleared!")
            }
            Self::Grade { index, assessment } => {
                let position = resolve(state, index)?;
                let updated = current(state, position, index)?.with_assessment(Some(assessment));
                let summary = updated.to_string();
                state.roster_mut().set(position, updated)?;
                CommandResult::message(format!("Graded contact: {summary}"))
            }
            Self::Ungrade { index } => {
                let position = resolve(state, index)?;
                let updated = current(state, position, index)?.with_assessment(None);
                let summary = updated.to_string();
                state.roster_mut().set(position, updated)?;
                CommandResult::message(format!("Removed grade from contact: {summary}"))
            }
            Self::View { index } => {
                let position = resolve(state, index)?;
                let contact = current(state, position, index)?;
                let mut result = CommandResult::message(format!("Viewing contact: {contact}"));
                result.viewed = Some(contact);
                result
            }
            Self::Import { path } => {
                let roster = import_roster_file(&path)?;
                let count = roster.len();
                state.replace_roster(roster);
                CommandResult::message(format!(
                    "Imported {count} contacts from {}",
                    path.display()
                ))
            }
            Self::Export { path } => {
                export_roster_file(state.roster(), &path)?;
                CommandResult::message(format!(
                    "Exported {} contacts to {}",
                    state.roster().len(),
                    path.display()
                ))
            }
            Self::Help => CommandResult {
                show_help: true,
                ..CommandResult::message(help_text())
            },
            Self::Exit => CommandResult {
                exit: true,
                ..CommandResult::message("Exiting contact book as requested ...")
            },
        };

        info!(
            "event=command_execute module=command status=ok command={} contacts={}",
            kind.word(),
            state.roster().len()
        );
        Ok(result)
    }
}

fn resolve(state: &CatalogState, index: NonZeroUsize) -> Result<usize, CommandError> {
    state
        .resolve(index)
        .ok_or(CommandError::InvalidDisplayedIndex(index))
}

fn current(
    state: &CatalogState,
    position: usize,
    index: NonZeroUsize,
) -> Result<Contact, CommandError> {
    state
        .roster()
        .get(position)
        .cloned()
        .ok_or(CommandError::InvalidDisplayedIndex(index))
}

fn help_text() -> String {
    CommandKind::ALL
        .iter()
        .map(|kind| kind.usage())
        .collect::<Vec<_>>()
        .join("\n\n")
}
