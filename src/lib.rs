//! Czech noun declension practice · core engine
//!
//! - Word database loading (JSON asset or built-in seed words)
//! - Puzzle sampling over selected case slots and genders
//! - Answer checking and ending highlights for the reveal
//! - Settings/score persistence behind a key-value store
//!
//! Important env variables:
//!   CZECH_CONFIG_PATH : path to TOML config (dictionary path, store dir, issue templates)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

pub mod config;
pub mod dictionary;
pub mod diff;
pub mod domain;
pub mod error;
pub mod evaluate;
pub mod feedback;
pub mod protocol;
pub mod sampler;
pub mod seeds;
pub mod state;
pub mod store;
pub mod taxonomy;
pub mod telemetry;
pub mod util;

pub use config::{load_config_from_env, AppConfig, IssueTemplates};
pub use dictionary::{DictionaryStats, WordDatabase};
pub use domain::{Gender, Puzzle, Scores, Settings, WordEntry};
pub use error::{DictionaryError, StoreError};
pub use state::PracticeSession;
pub use store::{FileStore, KeyValueStore, LocalData, MemoryStore};
pub use taxonomy::{CaseSlot, GenderFilter};
