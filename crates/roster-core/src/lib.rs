//! Core types and trait definitions for the Roster contact book.
//!
//! This crate is deliberately free of file-format and terminal
//! dependencies. All other crates depend on it; it depends on nothing but
//! `serde`.

pub mod book;
pub mod contact;
pub mod store;

pub use book::{AddOutcome, ContactBook, DeleteOutcome, DomainCount};
pub use contact::Contact;
pub use store::{ContactStore, MemoryStore};
