//! Quest catalog
//!
//! Maps the current-quest signal value onto a named splits definition, so a
//! single engine instance can serve every configured quest. Entries can be
//! registered programmatically or loaded from a TOML file.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Splits definition for one quest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestSplits {
    /// Value of the quest signal var that selects this entry
    pub id: i32,
    /// Display name used in run-started messages
    pub name: String,
    /// Splits records in the `label,kind,key[,threshold]` line format
    pub splits: String,
}

/// Registry of known quests.
#[derive(Debug, Clone, Default)]
pub struct CheckpointCatalog {
    entries: HashMap<i32, QuestSplits>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    quest: Vec<QuestSplits>,
}

impl CheckpointCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a quest entry. A later entry for the same id wins.
    pub fn register(&mut self, entry: QuestSplits) {
        if self.entries.insert(entry.id, entry).is_some() {
            log::debug!("quest entry replaced an earlier one with the same id");
        }
    }

    /// Look up the entry for a quest signal value.
    pub fn resolve(&self, quest_id: i32) -> Option<&QuestSplits> {
        self.entries.get(&quest_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a catalog from TOML, one `[[quest]]` table per entry.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        let mut catalog = Self::new();
        for entry in file.quest {
            catalog.register(entry);
        }
        log::info!("loaded quest catalog with {} entries", catalog.len());
        Ok(catalog)
    }
}
