//! Error type for `roster-store-csv`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("contact file error: {0}")]
  Csv(#[from] csv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
