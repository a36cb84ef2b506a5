//! The interactive menu loop.
//!
//! Pure I/O glue: every action is a direct call into the book's public
//! operations, and every outcome (including the domain conditions the book
//! returns as values) is rendered here as a message. Store I/O errors are
//! caught per-action and printed without ending the loop.

use std::io::{self, BufRead, Write};

use roster_core::{AddOutcome, Contact, ContactBook, ContactStore, DeleteOutcome};

use crate::ui;

const MENU: &str = "\nContact Book\n\
                    1. Add Contact\n\
                    2. List Contacts\n\
                    3. Search Contact\n\
                    4. Delete Contact\n\
                    5. Analytics\n\
                    6. Exit\n\
                    Choice: ";

// ─── Choice ───────────────────────────────────────────────────────────────────

/// One numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
  Add,
  List,
  Search,
  Delete,
  Analytics,
  Exit,
}

impl Choice {
  /// Parse a menu selection. Surrounding whitespace is ignored; anything
  /// but the six digits is `None`.
  pub fn parse(input: &str) -> Option<Self> {
    match input.trim() {
      "1" => Some(Self::Add),
      "2" => Some(Self::List),
      "3" => Some(Self::Search),
      "4" => Some(Self::Delete),
      "5" => Some(Self::Analytics),
      "6" => Some(Self::Exit),
      _ => None,
    }
  }
}

// ─── Loop ─────────────────────────────────────────────────────────────────────

/// Run the menu loop until Exit or end of input.
///
/// Generic over the input and output streams so tests can drive the whole
/// loop with scripted lines; `main` passes locked stdin/stdout.
pub fn run<S: ContactStore>(
  book: &mut ContactBook<S>,
  input: impl BufRead,
  mut out: impl Write,
) -> io::Result<()> {
  let mut lines = input.lines();

  loop {
    write!(out, "{MENU}")?;
    out.flush()?;

    // EOF behaves like Exit: the menu cannot make progress without input.
    let Some(line) = next_line(&mut lines)? else {
      break;
    };

    match Choice::parse(&line) {
      None => writeln!(out, "Invalid choice.")?,
      Some(Choice::Add) => add(book, &mut lines, &mut out)?,
      Some(Choice::List) => list(book, &mut out)?,
      Some(Choice::Search) => search(book, &mut lines, &mut out)?,
      Some(Choice::Delete) => delete(book, &mut lines, &mut out)?,
      Some(Choice::Analytics) => analytics(book, &mut out)?,
      Some(Choice::Exit) => break,
    }
  }

  writeln!(out, "Goodbye!")?;
  Ok(())
}

// ─── Actions ──────────────────────────────────────────────────────────────────

fn add<S: ContactStore>(
  book: &mut ContactBook<S>,
  lines: &mut Lines<impl BufRead>,
  out: &mut impl Write,
) -> io::Result<()> {
  let Some(name) = prompt(lines, out, "Name: ")? else {
    return Ok(());
  };
  let Some(phone) = prompt(lines, out, "Phone: ")? else {
    return Ok(());
  };
  let Some(email) = prompt(lines, out, "Email: ")? else {
    return Ok(());
  };

  match book.add(Contact::new(name, phone, email)) {
    Ok(AddOutcome::Added) => writeln!(out, "Contact added successfully."),
    Ok(AddOutcome::DuplicateName) => writeln!(out, "Contact already exists."),
    Err(e) => report(out, e),
  }
}

fn list<S: ContactStore>(
  book: &ContactBook<S>,
  out: &mut impl Write,
) -> io::Result<()> {
  if book.is_empty() {
    return writeln!(out, "No contacts found.");
  }
  let rows: Vec<&Contact> = book.iter().collect();
  write!(out, "{}", ui::render_table(&rows))
}

fn search<S: ContactStore>(
  book: &ContactBook<S>,
  lines: &mut Lines<impl BufRead>,
  out: &mut impl Write,
) -> io::Result<()> {
  let Some(keyword) = prompt(lines, out, "Enter name to search: ")? else {
    return Ok(());
  };

  let results = book.search(&keyword);
  if results.is_empty() {
    return writeln!(out, "No contacts found.");
  }
  write!(out, "{}", ui::render_table(&results))
}

fn delete<S: ContactStore>(
  book: &mut ContactBook<S>,
  lines: &mut Lines<impl BufRead>,
  out: &mut impl Write,
) -> io::Result<()> {
  let Some(name) = prompt(lines, out, "Enter name to delete: ")? else {
    return Ok(());
  };

  match book.delete(&name) {
    Ok(DeleteOutcome::Deleted(_)) => writeln!(out, "Contact deleted."),
    Ok(DeleteOutcome::NotFound) => writeln!(out, "Contact not found."),
    Err(e) => report(out, e),
  }
}

fn analytics<S: ContactStore>(
  book: &ContactBook<S>,
  out: &mut impl Write,
) -> io::Result<()> {
  if book.is_empty() {
    return writeln!(out, "No contacts to analyze.");
  }
  // A non-empty book whose emails are all malformed still renders: the
  // header with an empty tally.
  write!(out, "{}", ui::render_analytics(&book.analytics()))
}

// ─── Input helpers ────────────────────────────────────────────────────────────

type Lines<R> = io::Lines<R>;

/// Next input line, trimmed. `Ok(None)` is end of input.
fn next_line<R: BufRead>(lines: &mut Lines<R>) -> io::Result<Option<String>> {
  match lines.next() {
    Some(line) => Ok(Some(line?.trim().to_string())),
    None => Ok(None),
  }
}

/// Print `label`, then read one trimmed line. `Ok(None)` is end of input,
/// which aborts the current action.
fn prompt<R: BufRead>(
  lines: &mut Lines<R>,
  out: &mut impl Write,
  label: &str,
) -> io::Result<Option<String>> {
  write!(out, "{label}")?;
  out.flush()?;
  next_line(lines)
}

/// Render a store failure and keep the loop alive.
fn report(out: &mut impl Write, err: impl std::error::Error) -> io::Result<()> {
  tracing::error!(error = %err, "store operation failed");
  writeln!(out, "Error: {err}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use roster_core::MemoryStore;

  use super::*;

  /// Run the menu loop over scripted input and capture its output.
  fn drive(book: &mut ContactBook<MemoryStore>, script: &str) -> String {
    let mut out = Vec::new();
    run(book, Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  fn empty_book() -> ContactBook<MemoryStore> {
    ContactBook::open(MemoryStore::new()).unwrap()
  }

  #[test]
  fn parse_accepts_the_six_choices_and_trims() {
    assert_eq!(Choice::parse("1"), Some(Choice::Add));
    assert_eq!(Choice::parse(" 6 "), Some(Choice::Exit));
    assert_eq!(Choice::parse("7"), None);
    assert_eq!(Choice::parse("add"), None);
    assert_eq!(Choice::parse(""), None);
  }

  #[test]
  fn invalid_choice_reprompts() {
    let out = drive(&mut empty_book(), "9\n6\n");
    assert!(out.contains("Invalid choice."));
    // Menu shown again after the invalid entry.
    assert_eq!(out.matches("Choice: ").count(), 2);
    assert!(out.ends_with("Goodbye!\n"));
  }

  #[test]
  fn add_then_list_shows_the_contact() {
    let mut book = empty_book();
    let out =
      drive(&mut book, "1\nAlice\n555-1111\nalice@a.com\n2\n6\n");

    assert!(out.contains("Contact added successfully."));
    assert!(out.contains("Alice"));
    assert!(out.contains("alice@a.com"));
    assert_eq!(book.len(), 1);
  }

  #[test]
  fn duplicate_add_reports_already_exists() {
    let mut book = empty_book();
    let out = drive(
      &mut book,
      "1\nAl\n1\na@a.com\n1\nAL\n2\nb@b.com\n6\n",
    );

    assert!(out.contains("Contact already exists."));
    assert_eq!(book.len(), 1);
  }

  #[test]
  fn list_on_empty_book_reports_no_contacts() {
    let out = drive(&mut empty_book(), "2\n6\n");
    assert!(out.contains("No contacts found."));
  }

  #[test]
  fn search_misses_report_no_contacts() {
    let mut book = empty_book();
    book.add(Contact::new("Alice", "1", "a@a.com")).unwrap();

    let out = drive(&mut book, "3\nzz\n6\n");
    assert!(out.contains("Enter name to search: "));
    assert!(out.contains("No contacts found."));
  }

  #[test]
  fn delete_flow_reports_and_removes() {
    let mut book = empty_book();
    book.add(Contact::new("Alice", "1", "a@a.com")).unwrap();

    let out = drive(&mut book, "4\nalice\n6\n");
    assert!(out.contains("Contact deleted."));
    assert!(book.is_empty());

    let out = drive(&mut book, "4\nalice\n6\n");
    assert!(out.contains("Contact not found."));
  }

  #[test]
  fn analytics_on_empty_book_reports_nothing_to_analyze() {
    let out = drive(&mut empty_book(), "5\n6\n");
    assert!(out.contains("No contacts to analyze."));
  }

  #[test]
  fn analytics_lists_domain_counts() {
    let mut book = empty_book();
    book.add(Contact::new("A", "1", "a@x.com")).unwrap();
    book.add(Contact::new("B", "2", "b@x.com")).unwrap();
    book.add(Contact::new("C", "3", "c@y.com")).unwrap();

    let out = drive(&mut book, "5\n6\n");
    assert!(out.contains("Contacts by Email Domain:"));
    let x = out.find("x.com").unwrap();
    let y = out.find("y.com").unwrap();
    assert!(x < y, "higher count listed first");
  }

  #[test]
  fn eof_ends_the_loop_like_exit() {
    let out = drive(&mut empty_book(), "");
    assert!(out.ends_with("Goodbye!\n"));
  }

  #[test]
  fn eof_mid_prompt_aborts_the_action() {
    let mut book = empty_book();
    let out = drive(&mut book, "1\nAlice\n");
    assert!(out.contains("Phone: "));
    assert!(book.is_empty());
    assert!(out.ends_with("Goodbye!\n"));
  }
}
