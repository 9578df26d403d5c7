//! Dictionary word cache
//!
//! Loads each dictionary's word list at most once per process and serves it
//! to every caller afterwards. The word lists are static reference data, so
//! entries live for the process lifetime with no eviction. A load failure
//! degrades to an empty list and is not cached, so the next call retries.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, error, info};

use crate::dictionary::{DictionaryName, WordSource};

/// Shared store of loaded dictionary word lists
pub struct DictionaryCache {
    source: Box<dyn WordSource>,
    words: RwLock<HashMap<DictionaryName, Arc<Vec<String>>>>,
}

impl DictionaryCache {
    /// Create a cache that loads from the given word source
    pub fn new(source: impl WordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            words: RwLock::new(HashMap::new()),
        }
    }

    /// Get the word list for a dictionary, loading it on first request.
    ///
    /// Words are trimmed, lowercased, and kept in source order; blank lines
    /// are discarded. If the source cannot be read the failure is logged and
    /// an empty list is returned without being cached.
    pub fn get_words(&self, name: DictionaryName) -> Arc<Vec<String>> {
        if let Ok(map) = self.words.read() {
            if let Some(words) = map.get(&name) {
                debug!("Using pre-loaded dictionary {}", name);
                return Arc::clone(words);
            }
        }

        let text = match self.source.load(name) {
            Ok(text) => text,
            Err(err) => {
                error!("{}", err);
                return Arc::new(Vec::new());
            }
        };

        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|word| word.to_lowercase())
            .collect();
        info!("Loaded {} words for dictionary {}", words.len(), name);

        let entry = Arc::new(words);
        if let Ok(mut map) = self.words.write() {
            // A racing first load may have inserted already; keep the
            // existing entry so every caller sees the same list.
            return Arc::clone(map.entry(name).or_insert(entry));
        }
        entry
    }
}
