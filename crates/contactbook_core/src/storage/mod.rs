//! Persistence boundary for the contact roster.
//!
//! # Responsibility
//! - Map contacts to and from their serialized record shape.
//! - Encode/decode the whole roster as JSON; import/export it as CSV.
//! - Abstract the byte store behind `RosterStore`.
//!
//! # Invariants
//! - Every load path validates records with the model validators.
//! - No load path ever exposes a partially loaded roster.

pub mod codec;
pub mod csv;
pub mod record;
pub mod store;

pub use codec::{assemble_roster, LoadError, RosterCodec, RosterDocument};
pub use csv::{export_roster_file, import_roster_file, TransferError};
pub use record::{RawContactRecord, RawScore};
pub use store::{JsonFileRosterStore, MemoryRosterStore, RosterStore};
