//! Validated commands and their execution against catalog state.
//!
//! # Responsibility
//! - Define the closed set of command kinds and their usage strings.
//! - Carry fully validated parameters from the parser to execution.
//!
//! # Invariants
//! - A `Command` value only exists after every field passed validation.
//! - Indexes are one-based positions in the currently displayed list.

mod exec;
mod state;

pub use exec::{CommandError, CommandResult};
pub use state::CatalogState;

use crate::model::contact::{Assessment, Contact};
use crate::model::fields::{Address, Email, Github, Name, Phone, Telegram};
use crate::model::tag::Tag;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Closed set of command kinds, each with its command word and usage text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    Edit,
    Delete,
    Find,
    List,
    Clear,
    Grade,
    Ungrade,
    View,
    Import,
    Export,
    Help,
    Exit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 13] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::Find,
        Self::List,
        Self::Clear,
        Self::Grade,
        Self::Ungrade,
        Self::View,
        Self::Import,
        Self::Export,
        Self::Help,
        Self::Exit,
    ];

    /// Word typed by the user to select this command.
    pub fn word(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Find => "find",
            Self::List => "list",
            Self::Clear => "clear",
            Self::Grade => "grade",
            Self::Ungrade => "ungrade",
            Self::View => "view",
            Self::Import => "import",
            Self::Export => "export",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Usage text shown verbatim in malformed-command messages.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Add => {
                "add: Adds a contact to the contact book. Parameters: n/NAME p/PHONE e/EMAIL \
                 a/ADDRESS tele/TELEGRAM g/GITHUB [t/TAG]...\n\
                 Example: add n/John Doe p/98765432 e/johnd@example.com \
                 a/311, Clementi Ave 2, #02-25 tele/johndoe g/johndoe t/friends"
            }
            Self::Edit => {
                "edit: Edits the contact identified by the index number used in the displayed \
                 list. Existing values will be overwritten by the input values.\n\
                 Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] \
                 [a/ADDRESS] [tele/TELEGRAM] [g/GITHUB] [t/TAG]...\n\
                 Example: edit 1 p/91234567 e/johndoe@example.com"
            }
            Self::Delete => {
                "delete: Deletes the contact identified by the index number used in the \
                 displayed list.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: delete 1"
            }
            Self::Find => {
                "find: Finds all contacts whose names contain any of the specified keywords \
                 (case-insensitive) and displays them as a list with index numbers.\n\
                 Parameters: KEYWORD [MORE_KEYWORDS]...\n\
                 Example: find alice bob charlie"
            }
            Self::List => "list: Lists all contacts in the contact book.",
            Self::Clear => "clear: Removes every contact from the contact book.",
            Self::Grade => {
                "grade: Records an assignment score for the contact identified by the index \
                 number used in the displayed list.\n\
                 Parameters: INDEX (must be a positive integer) as/ASSIGNMENT s/SCORE\n\
                 Example: grade 1 as/Lab 1 s/85.5"
            }
            Self::Ungrade => {
                "ungrade: Removes the assignment score of the contact identified by the index \
                 number used in the displayed list.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: ungrade 1"
            }
            Self::View => {
                "view: Shows the full details of the contact identified by the index number \
                 used in the displayed list.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: view 1"
            }
            Self::Import => {
                "import: Replaces the contact book with the contacts in a CSV file.\n\
                 Parameters: f/FILE_PATH\n\
                 Example: import f/data/contacts.csv"
            }
            Self::Export => {
                "export: Writes every contact in the contact book to a CSV file.\n\
                 Parameters: f/FILE_PATH\n\
                 Example: export f/data/contacts.csv"
            }
            Self::Help => "help: Shows program usage instructions.\nExample: help",
            Self::Exit => "exit: Exits the program.\nExample: exit",
        }
    }

    /// Whether a successful run of this command changes persisted data.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Edit
                | Self::Delete
                | Self::Clear
                | Self::Grade
                | Self::Ungrade
                | Self::Import
        )
    }
}

/// Field replacements requested by an `edit` command.
///
/// `None` keeps the current value. `tags: Some(empty)` clears every tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactEdit {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub telegram: Option<Telegram>,
    pub github: Option<Github>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl ContactEdit {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.telegram.is_some()
            || self.github.is_some()
            || self.tags.is_some()
    }

    /// Applies the requested replacements to a copy of `original`.
    pub fn apply_to(&self, original: &Contact) -> Contact {
        Contact {
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| original.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| original.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| original.address.clone()),
            telegram: self
                .telegram
                .clone()
                .unwrap_or_else(|| original.telegram.clone()),
            github: self
                .github
                .clone()
                .unwrap_or_else(|| original.github.clone()),
            tags: self.tags.clone().unwrap_or_else(|| original.tags.clone()),
            assessment: original.assessment.clone(),
        }
    }
}

/// Fully validated command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Contact),
    Edit {
        index: NonZeroUsize,
        edit: ContactEdit,
    },
    Delete {
        index: NonZeroUsize,
    },
    Find {
        keywords: Vec<String>,
    },
    List,
    Clear,
    Grade {
        index: NonZeroUsize,
        assessment: Assessment,
    },
    Ungrade {
        index: NonZeroUsize,
    },
    View {
        index: NonZeroUsize,
    },
    Import {
        path: PathBuf,
    },
    Export {
        path: PathBuf,
    },
    Help,
    Exit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Add(_) => CommandKind::Add,
            Self::Edit { .. } => CommandKind::Edit,
            Self::Delete { .. } => CommandKind::Delete,
            Self::Find { .. } => CommandKind::Find,
            Self::List => CommandKind::List,
            Self::Clear => CommandKind::Clear,
            Self::Grade { .. } => CommandKind::Grade,
            Self::Ungrade { .. } => CommandKind::Ungrade,
            Self::View { .. } => CommandKind::View,
            Self::Import { .. } => CommandKind::Import,
            Self::Export { .. } => CommandKind::Export,
            Self::Help => CommandKind::Help,
            Self::Exit => CommandKind::Exit,
        }
    }
}
