//! CSV file backend for the Roster contact book.
//!
//! One comma-separated file with a `Name,Phone,Email` header row is the
//! whole persistence story: loads read it in full, saves rewrite it in
//! full.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::CsvStore;
