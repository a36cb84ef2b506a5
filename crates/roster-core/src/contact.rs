//! Contact — one row of the book.
//!
//! A contact holds only the three free-form fields of the fixed
//! `Name,Phone,Email` schema. The name doubles as the record's key; there
//! is no other identifier.

use serde::{Deserialize, Serialize};

/// A single contact record.
///
/// The serde renames map the struct onto the backing file's column headers,
/// so a `Contact` serializes straight into (and out of) one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  #[serde(rename = "Name")]
  pub name:  String,
  #[serde(rename = "Phone")]
  pub phone: String,
  #[serde(rename = "Email")]
  pub email: String,
}

impl Contact {
  pub fn new(
    name: impl Into<String>,
    phone: impl Into<String>,
    email: impl Into<String>,
  ) -> Self {
    Self {
      name:  name.into(),
      phone: phone.into(),
      email: email.into(),
    }
  }

  /// Whether `other` names this contact, compared case-insensitively.
  ///
  /// Uses Unicode-aware lowercasing, not just ASCII folding.
  pub fn name_matches(&self, other: &str) -> bool {
    self.name.to_lowercase() == other.to_lowercase()
  }

  /// The email's domain: everything after the *last* `@`.
  ///
  /// Returns `None` when the email contains no `@` at all; such contacts
  /// are excluded from the analytics tally.
  pub fn email_domain(&self) -> Option<&str> {
    self.email.rfind('@').map(|at| &self.email[at + 1..])
  }
}
