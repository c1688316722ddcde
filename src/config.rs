//! Loading application configuration (dictionary location, store directory,
//! sampling budget, issue-report templates) from TOML.
//!
//! See `AppConfig` and `IssueTemplates` for the expected schema. Every field
//! is optional; an absent or broken file means defaults.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::sampler::DEFAULT_MAX_ATTEMPTS;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// JSON word database. Seed words are used when unset.
  pub dictionary_path: Option<PathBuf>,
  /// Directory backing the settings/score store.
  pub data_dir: PathBuf,
  pub max_attempts: usize,
  /// Offer nominative singular as a selectable (and default) slot.
  pub include_nominative_singular: bool,
  pub issues: IssueTemplates,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      dictionary_path: None,
      data_dir: PathBuf::from(".czech-practice"),
      max_attempts: DEFAULT_MAX_ATTEMPTS,
      include_nominative_singular: false,
      issues: IssueTemplates::default(),
    }
  }
}

/// Issue tracker link and the texts pre-filled into new issues.
/// Word templates understand `{word}`, `{url}`, `{gender}`, `{case}` and `{solutions}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct IssueTemplates {
  pub new_issue_url: String,
  pub word_label: String,
  pub word_title: String,
  pub word_body: String,
  pub feedback_title: String,
  pub feedback_body: String,
}

impl Default for IssueTemplates {
  fn default() -> Self {
    Self {
      new_issue_url: "https://github.com/mdanka/czech/issues/new".into(),
      word_label: "word".into(),
      word_title: "Wrong solution for \"{word}\"".into(),
      word_body: "The word [{word}]({url}) `({gender})` in the case `{case}` is specified as `{solutions}`, but I think it is incorrect because... <fill in why>".into(),
      feedback_title: "Feedback about <fill in here>".into(),
      feedback_body: "<fill in here>".into(),
    }
  }
}

pub fn parse_config(s: &str) -> Result<AppConfig, toml::de::Error> {
  toml::from_str(s)
}

/// Attempt to load `AppConfig` from CZECH_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("CZECH_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "czech_declension", %path, "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "czech_declension", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "czech_declension", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
