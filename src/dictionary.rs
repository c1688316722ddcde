//! Word database: the headword → entry lookup the sampler draws from.
//!
//! The asset is a JSON object keyed by headword. `null` values are kept as
//! headwords (so they take part in random draws) but have no entry; the
//! sampler skips them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::domain::WordEntry;
use crate::error::DictionaryError;
use crate::seeds::seed_dictionary;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    /// Headwords with a usable entry.
    pub words: usize,
    /// Non-empty (word, case slot) combinations.
    pub declensions: usize,
}

#[derive(Clone, Debug, Default)]
pub struct WordDatabase {
    entries: BTreeMap<String, Option<WordEntry>>,
    // Sorted key list for O(1) uniform draws.
    headwords: Vec<String>,
}

impl WordDatabase {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Option<WordEntry>)>) -> Self {
        let mut map = BTreeMap::new();
        for (word, entry) in entries {
            if word.trim().is_empty() {
                warn!(target: "czech_declension", "Skipping dictionary record with empty headword");
                continue;
            }
            map.insert(word, entry);
        }
        let headwords = map.keys().cloned().collect();
        Self { entries: map, headwords }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let raw: BTreeMap<String, Option<WordEntry>> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, DictionaryError> {
        let json = tokio::fs::read_to_string(path).await?;
        let db = Self::from_json_str(&json)?;
        let stats = db.stats();
        info!(
            target: "czech_declension",
            headwords = db.len(),
            words = stats.words,
            null_entries = db.len() - stats.words,
            declensions = stats.declensions,
            "Loaded word database"
        );
        Ok(db)
    }

    /// Load the configured asset, falling back to the built-in seed words when
    /// no path is given or loading fails.
    pub async fn load_or_seed(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            info!(target: "czech_declension", "No dictionary configured; using seed words");
            return seed_dictionary();
        };
        match Self::load(path).await {
            Ok(db) => db,
            Err(e) => {
                error!(target: "czech_declension", path = %path.display(), error = %e, "Failed to load dictionary; using seed words");
                seed_dictionary()
            }
        }
    }

    /// Number of headwords, including those with a null entry.
    pub fn len(&self) -> usize {
        self.headwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headwords.is_empty()
    }

    pub fn headwords(&self) -> &[String] {
        &self.headwords
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word).and_then(Option::as_ref)
    }

    pub fn stats(&self) -> DictionaryStats {
        self.entries
            .values()
            .flatten()
            .fold(DictionaryStats::default(), |acc, e| DictionaryStats {
                words: acc.words + 1,
                declensions: acc.declensions + e.declension_count(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::CaseSlot;

    const SAMPLE: &str = r#"{
        "pes": {"gender": "m", "isAnimated": true,
                "genitive": {"singular": ["psa"], "plural": ["psů"]}},
        "aha": {"gender": "n", "isAnimated": false,
                "nominative": {"singular": ["aha"], "plural": []},
                "genitive": {"singular": [], "plural": []}},
        "naplat": null,
        "": {"gender": "f"}
    }"#;

    #[test]
    fn parses_entries_and_keeps_null_headwords() {
        let db = WordDatabase::from_json_str(SAMPLE).expect("valid json");
        assert_eq!(db.len(), 3);
        assert_eq!(db.headwords(), ["aha", "naplat", "pes"]);
        assert!(db.get("naplat").is_none());
        assert!(db.get("Pes").is_none(), "headwords are case-sensitive");
        let pes = db.get("pes").expect("pes");
        assert_eq!(pes.forms(CaseSlot::new(2).unwrap()), ["psa"]);
    }

    #[test]
    fn stats_count_words_and_declensions() {
        let db = WordDatabase::from_json_str(SAMPLE).expect("valid json");
        assert_eq!(db.stats(), DictionaryStats { words: 2, declensions: 3 });
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(WordDatabase::from_json_str("[1, 2]"), Err(DictionaryError::Json(_))));
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_seeds() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        assert!(matches!(WordDatabase::load(&path).await, Err(DictionaryError::Io(_))));
        let db = WordDatabase::load_or_seed(Some(&path)).await;
        assert!(db.get("pes").is_some());
        assert!(WordDatabase::load_or_seed(None).await.get("město").is_some());
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("words-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, SAMPLE).await.expect("write");
        let db = WordDatabase::load(&path).await.expect("load");
        assert_eq!(db.stats().words, 2);
        let _ = tokio::fs::remove_file(&path).await;
    }
}
