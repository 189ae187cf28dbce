//! Contact domain model.
//!
//! # Responsibility
//! - Define validated field types and the single source of truth for their
//!   constraints.
//! - Define the `Contact` entity and the `Roster` that owns contacts.
//!
//! # Invariants
//! - Domain values are only constructed through their validators.
//! - Roster identity is the contact name.

pub mod contact;
pub mod fields;
pub mod roster;
pub mod tag;
