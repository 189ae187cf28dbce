//! Core domain logic for the contact book.
//! This crate is the single source of truth for field constraints: command
//! parsing and persisted-record loading share the same validators.

pub mod command;
pub mod logging;
pub mod model;
pub mod parser;
pub mod service;
pub mod storage;

pub use command::{CatalogState, Command, CommandError, CommandKind, CommandResult, ContactEdit};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::contact::{Assessment, Contact, MESSAGE_ASSESSMENT_PAIR};
pub use model::fields::{
    Address, Assignment, Email, FieldError, FieldKind, FieldValue, Github, Name, Phone, Score,
    Telegram, MISSING_FIELD_MESSAGE_FORMAT,
};
pub use model::roster::{Roster, RosterError};
pub use model::tag::Tag;
pub use parser::{parse_command, ParseError};
pub use service::catalog_service::{CatalogService, CommandOutcome, ServiceError};
pub use storage::{
    export_roster_file, import_roster_file, JsonFileRosterStore, LoadError, MemoryRosterStore,
    RawContactRecord, RawScore, RosterCodec, RosterStore, TransferError,
};

/// Decodes and validates a stored roster.
pub fn load_roster(bytes: &[u8]) -> Result<Roster, LoadError> {
    RosterCodec::load(bytes)
}

/// Encodes a roster for storage.
pub fn save_roster(roster: &Roster) -> Vec<u8> {
    RosterCodec::save(roster)
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
