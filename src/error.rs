//! Error types for the fallible edges of the crate: dictionary loading and
//! the settings/score store. The practice flow itself never surfaces these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
  #[error("failed to read dictionary: {0}")]
  Io(#[from] std::io::Error),

  #[error("dictionary is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("store I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("store payload is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("store unavailable: {0}")]
  Unavailable(String),
}

/// A number outside the 1..=14 case slot range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("case slot {0} is outside 1..=14")]
pub struct InvalidCaseSlot(pub u8);
