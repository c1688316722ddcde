//! Settings and score persistence.
//!
//! `LocalData` keeps a versioned snapshot `{version, scores, settings}` under
//! a single key of a `KeyValueStore`. Reads fall back to defaults on a
//! missing, corrupt or version-mismatched payload. Writes are fire-and-forget:
//! they are queued to a background task that applies them in order, and a
//! failure is logged, never returned to the caller.

use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::domain::{Scores, Settings};
use crate::error::StoreError;
use crate::taxonomy::{CaseSlot, GenderFilter};
use crate::util::trunc_for_log;

pub const LOCAL_DATA_KEY: &str = "CZECH_APP_LOCAL_DATA";
pub const CURRENT_VERSION: u32 = 2;

/// String key-value storage, the moral equivalent of browser local storage.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// One JSON file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the configured `data_dir`.
    pub fn from_config(config: &AppConfig) -> Self {
        debug!(target: "store", dir = %config.data_dir.display(), "Using file store");
        Self::new(&config.data_dir)
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path(key)).await {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    map: Arc<RwLock<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, e.g. storage disabled by the host.
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.map.read().await.get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("writes disabled".into()));
        }
        self.map.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    selected_cases: Vec<u8>,
    // Payloads written before gender filters existed mean "every gender".
    #[serde(default = "all_genders")]
    selected_genders: Vec<GenderFilter>,
}

fn all_genders() -> Vec<GenderFilter> {
    GenderFilter::ALL.to_vec()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredData {
    version: u32,
    scores: Scores,
    settings: StoredSettings,
}

impl StoredData {
    fn new(settings: &Settings, scores: Scores) -> Self {
        Self {
            version: CURRENT_VERSION,
            scores,
            settings: StoredSettings {
                selected_cases: settings.selected_cases.iter().map(|s| s.get()).collect(),
                selected_genders: settings.selected_genders.iter().copied().collect(),
            },
        }
    }
}

/// What the practice flow needs at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedState {
    pub settings: Settings,
    pub scores: Scores,
}

enum WriteCommand {
    Save(String),
    Flush(oneshot::Sender<()>),
}

/// Versioned mirror of settings and scores over a `KeyValueStore`.
pub struct LocalData<S: KeyValueStore> {
    store: Arc<S>,
    defaults: Settings,
    selectable: Vec<CaseSlot>,
    snapshot: StoredData,
    writer: mpsc::UnboundedSender<WriteCommand>,
}

impl<S: KeyValueStore> LocalData<S> {
    /// Must be called inside a Tokio runtime: spawns the background writer.
    /// `selectable` bounds which case slots a stored selection may contain.
    pub fn new(store: S, selectable: Vec<CaseSlot>) -> Self {
        let store = Arc::new(store);
        let defaults = Settings {
            selected_cases: selectable.iter().copied().collect(),
            selected_genders: GenderFilter::ALL.into_iter().collect(),
        };
        let (writer, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(Arc::clone(&store), rx));
        Self {
            snapshot: StoredData::new(&defaults, Scores::default()),
            store,
            defaults,
            selectable,
            writer,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored snapshot, or defaults when it is missing, unreadable,
    /// corrupt or from another schema version.
    #[instrument(level = "info", skip(self))]
    pub async fn read_settings_and_scores(&mut self) -> LoadedState {
        let loaded = match self.store.get(LOCAL_DATA_KEY).await {
            Ok(Some(raw)) => self.decode(&raw),
            Ok(None) => {
                info!(target: "store", "No stored data; using defaults");
                None
            }
            Err(e) => {
                warn!(target: "store", error = %e, "Failed to read stored data; using defaults");
                None
            }
        };
        let state = loaded.unwrap_or_else(|| LoadedState {
            settings: self.defaults.clone(),
            scores: Scores::default(),
        });
        self.snapshot = StoredData::new(&state.settings, state.scores);
        state
    }

    fn decode(&self, raw: &str) -> Option<LoadedState> {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!(target: "store", error = %e, payload = %trunc_for_log(raw, 120), "Stored data is not JSON; using defaults");
                return None;
            }
        };
        let version = value.get("version").and_then(serde_json::Value::as_u64);
        if version != Some(u64::from(CURRENT_VERSION)) {
            warn!(target: "store", ?version, expected = CURRENT_VERSION, "Stored data version mismatch; using defaults");
            return None;
        }
        let data: StoredData = match serde_json::from_value(value) {
            Ok(d) => d,
            Err(e) => {
                warn!(target: "store", error = %e, "Stored data is malformed; using defaults");
                return None;
            }
        };
        let selected_cases = data
            .settings
            .selected_cases
            .iter()
            .filter_map(|n| CaseSlot::new(*n))
            .filter(|s| self.selectable.contains(s))
            .collect();
        Some(LoadedState {
            settings: Settings {
                selected_cases,
                selected_genders: data.settings.selected_genders.into_iter().collect(),
            },
            scores: data.scores,
        })
    }

    pub fn write_selected_cases(&mut self, cases: &BTreeSet<CaseSlot>) {
        self.snapshot.settings.selected_cases = cases.iter().map(|s| s.get()).collect();
        self.save();
    }

    pub fn write_selected_genders(&mut self, genders: &BTreeSet<GenderFilter>) {
        self.snapshot.settings.selected_genders = genders.iter().copied().collect();
        self.save();
    }

    pub fn write_scores(&mut self, scores: Scores) {
        self.snapshot.scores = scores;
        self.save();
    }

    fn save(&self) {
        let payload = match serde_json::to_string(&self.snapshot) {
            Ok(p) => p,
            Err(e) => {
                warn!(target: "store", error = %e, "Failed to serialize local data");
                return;
            }
        };
        if self.writer.send(WriteCommand::Save(payload)).is_err() {
            warn!(target: "store", "Writer task is gone; change not persisted");
        }
    }

    /// Wait until every write queued so far has been attempted.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.writer.send(WriteCommand::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

async fn run_writer<S: KeyValueStore>(store: Arc<S>, mut rx: mpsc::UnboundedReceiver<WriteCommand>) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            WriteCommand::Save(payload) => match store.set(LOCAL_DATA_KEY, payload).await {
                Ok(()) => debug!(target: "store", "Local data saved"),
                Err(e) => warn!(target: "store", error = %e, "Failed to persist local data"),
            },
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}
