//! Use-case service layer.
//!
//! # Responsibility
//! - Orchestrate parsing, execution and persistence for callers.
//! - Keep callers independent from storage backends.

pub mod catalog_service;
