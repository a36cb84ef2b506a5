//! Plain-text rendering for the menu loop.

use std::fmt::Write as _;

use roster_core::{Contact, DomainCount};

/// Render contacts as an aligned three-column table with the fixed
/// `Name Phone Email` header.
pub fn render_table(rows: &[&Contact]) -> String {
  // fmt's padding counts chars, so widths do too.
  let name_w = column_width("Name", rows.iter().map(|c| c.name.as_str()));
  let phone_w = column_width("Phone", rows.iter().map(|c| c.phone.as_str()));

  let mut out = String::new();
  let _ = writeln!(out, "{:<name_w$}  {:<phone_w$}  Email", "Name", "Phone");
  for c in rows {
    let _ = writeln!(out, "{:<name_w$}  {:<phone_w$}  {}", c.name, c.phone, c.email);
  }
  out
}

/// Render the analytics tally under its header. An empty tally (every email
/// malformed) renders as the header alone.
pub fn render_analytics(tally: &[DomainCount]) -> String {
  let domain_w =
    column_width("", tally.iter().map(|dc| dc.domain.as_str()));

  let mut out = String::from("Contacts by Email Domain:\n");
  for dc in tally {
    let _ = writeln!(out, "{:<domain_w$}  {}", dc.domain, dc.count);
  }
  out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
  values
    .map(|v| v.chars().count())
    .chain([header.chars().count()])
    .max()
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_aligns_columns_under_the_header() {
    let a = Contact::new("Alice Liddell", "555-1111", "alice@a.com");
    let b = Contact::new("Bob", "5", "bob@b.com");
    let out = render_table(&[&a, &b]);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name"));
    // Email starts at the same column in every line.
    let col = lines[0].find("Email").unwrap();
    assert_eq!(lines[1].find("alice@a.com"), Some(col));
    assert_eq!(lines[2].find("bob@b.com"), Some(col));
  }

  #[test]
  fn analytics_renders_domain_per_line() {
    let tally = vec![
      DomainCount { domain: "x.com".into(), count: 2 },
      DomainCount { domain: "y.com".into(), count: 1 },
    ];
    let out = render_analytics(&tally);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Contacts by Email Domain:");
    assert!(lines[1].starts_with("x.com"));
    assert!(lines[1].trim_end().ends_with('2'));
    assert!(lines[2].starts_with("y.com"));
  }

  #[test]
  fn empty_tally_is_just_the_header() {
    assert_eq!(render_analytics(&[]), "Contacts by Email Domain:\n");
  }
}
