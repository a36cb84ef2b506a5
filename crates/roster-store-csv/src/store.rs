//! [`CsvStore`] — the delimited-text-file implementation of
//! [`ContactStore`].

use std::path::PathBuf;

use roster_core::{Contact, ContactStore};

use crate::Result;

/// Column order of the backing file. Matches the serde renames on
/// [`Contact`], so serialized rows line up under this header.
const HEADER: [&str; 3] = ["Name", "Phone", "Email"];

/// A contact store backed by a single CSV file.
///
/// The file is read in full on [`load`](ContactStore::load) and rewritten
/// in full on [`save`](ContactStore::save). There is no atomic-rename or
/// backup step; a crash mid-write may leave a truncated file (accepted
/// limitation of this tool).
#[derive(Debug, Clone)]
pub struct CsvStore {
  path: PathBuf,
}

impl CsvStore {
  /// A store over the file at `path`. The file need not exist yet; it is
  /// created on first save.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &std::path::Path {
    &self.path
  }
}

impl ContactStore for CsvStore {
  type Error = crate::Error;

  /// Read every row of the backing file, strictly.
  ///
  /// A missing file is the empty set (normal first-run state). A file that
  /// exists but does not decode is an error: no row is ever skipped, since
  /// the next save would persist the partial read and lose records.
  fn load(&self) -> Result<Vec<Contact>> {
    if !self.path.exists() {
      return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(&self.path)?;
    let mut contacts = Vec::new();
    for row in reader.deserialize() {
      contacts.push(row?);
    }
    Ok(contacts)
  }

  /// Rewrite the backing file with `contacts`, in order.
  ///
  /// The header row is always written, even for an empty set, so the file
  /// keeps its fixed schema from the moment it first exists. Fields
  /// containing the delimiter, quotes, or newlines are quoted per standard
  /// CSV escaping.
  fn save(&self, contacts: &[Contact]) -> Result<()> {
    // Writing the header ourselves keeps it present when there are zero
    // records; `serialize` alone would only emit it with the first row.
    let mut writer =
      csv::WriterBuilder::new().has_headers(false).from_path(&self.path)?;

    writer.write_record(HEADER)?;
    for contact in contacts {
      writer.serialize(contact)?;
    }
    writer.flush()?;
    Ok(())
  }
}
