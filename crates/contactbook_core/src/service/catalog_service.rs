//! Catalog use-case service.
//!
//! # Responsibility
//! - Restore the roster from a store at open time.
//! - Parse and execute command text, persisting after mutating commands.
//! - Turn every failure into a user-facing message at this boundary.
//!
//! # Invariants
//! - A failed open never installs a roster.
//! - Parse and execution failures leave catalog state untouched.
//! - Service layer remains storage-agnostic (`RosterStore`).

use crate::command::{CatalogState, CommandError, CommandResult};
use crate::model::roster::Roster;
use crate::parser::{parse_command, ParseError};
use crate::storage::codec::{LoadError, RosterCodec};
use crate::storage::store::RosterStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Stored roster failed to decode or validate.
    Load(LoadError),
    /// Store could not be read or written.
    Store { location: String, source: io::Error },
    /// Command text was rejected.
    Parse(ParseError),
    /// Validated command failed to execute.
    Command(CommandError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "{err}"),
            Self::Store { location, source } => {
                write!(f, "Could not access data file {location}: {source}")
            }
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Store { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
        }
    }
}

impl From<LoadError> for ServiceError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

impl From<ParseError> for ServiceError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for ServiceError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

/// Response envelope handed back to the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the command succeeded.
    pub ok: bool,
    /// Human-readable feedback or error message.
    pub message: String,
    pub show_help: bool,
    pub show_list: bool,
    pub exit: bool,
}

impl CommandOutcome {
    fn success(result: &CommandResult) -> Self {
        Self {
            ok: true,
            message: result.feedback.clone(),
            show_help: result.show_help,
            show_list: result.show_list,
            exit: result.exit,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            show_help: false,
            show_list: false,
            exit: false,
        }
    }
}

/// Catalog service facade over a roster store.
pub struct CatalogService<S: RosterStore> {
    store: S,
    state: CatalogState,
}

impl<S: RosterStore> CatalogService<S> {
    /// Opens the catalog, loading the stored roster.
    ///
    /// An empty store yields an empty roster.
    pub fn open(store: S) -> Result<Self, ServiceError> {
        let bytes = store.read().map_err(|source| ServiceError::Store {
            location: store.location(),
            source,
        })?;
        let roster = match bytes {
            Some(bytes) => RosterCodec::load(&bytes)?,
            None => Roster::new(),
        };
        info!(
            "event=catalog_open module=service status=ok count={}",
            roster.len()
        );
        Ok(Self {
            store,
            state: CatalogState::new(roster),
        })
    }

    /// Opens the catalog with an explicit roster, e.g. after a failed load.
    pub fn with_roster(store: S, roster: Roster) -> Self {
        Self {
            store,
            state: CatalogState::new(roster),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn roster(&self) -> &Roster {
        self.state.roster()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses and executes one command, saving after mutations.
    pub fn execute(&mut self, raw: &str) -> Result<CommandResult, ServiceError> {
        let command = parse_command(raw).inspect_err(|err| {
            warn!(
                "event=command_parse module=service status=error kind={}",
                parse_error_kind(err)
            );
        })?;
        let kind = command.kind();
        let result = command.execute(&mut self.state)?;
        if kind.is_mutating() {
            self.save()?;
        }
        Ok(result)
    }

    /// Runs one command and renders the outcome for display.
    pub fn run(&mut self, raw: &str) -> CommandOutcome {
        match self.execute(raw) {
            Ok(result) => CommandOutcome::success(&result),
            Err(err) => CommandOutcome::failure(err.to_string()),
        }
    }

    /// Writes the current roster to the store.
    pub fn save(&mut self) -> Result<(), ServiceError> {
        let bytes = RosterCodec::save(self.state.roster());
        self.store
            .write(&bytes)
            .map_err(|source| ServiceError::Store {
                location: self.store.location(),
                source,
            })
    }
}

fn parse_error_kind(err: &ParseError) -> &'static str {
    match err {
        ParseError::MalformedCommand { .. } => "malformed",
        ParseError::EmptyValue { .. } => "empty_value",
        ParseError::InvalidIndex => "invalid_index",
        ParseError::UnknownCommand(_) => "unknown_command",
        ParseError::NothingToEdit => "nothing_to_edit",
        ParseError::Field(_) => "field",
    }
}
