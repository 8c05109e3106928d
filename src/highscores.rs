//! Persisted best-score tracking
//!
//! A single integer: the highest score any side has reached in any match.
//! Loaded once at startup (defaulting to 0 when absent or unreadable) and
//! written back whenever a match beats it.

use serde::{Deserialize, Serialize};

use crate::persistence::Store;

/// Storage key for the persisted best score
pub const STORAGE_KEY: &str = "pingpong-hs";

/// The session's view of the persisted best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a score would beat the stored best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a score, persisting it when it beats the stored best.
    /// Returns true when a new best was set.
    pub fn record(&mut self, score: u32, store: &dyn Store) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        store.write(STORAGE_KEY, &self.best.to_string());
        log::info!("new high score: {}", self.best);
        true
    }

    /// Load the stored best, defaulting to 0 when absent or unparsable
    pub fn load(store: &dyn Store) -> Self {
        let best = match store.read(STORAGE_KEY) {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                log::warn!("ignoring invalid stored high score {raw:?}");
                0
            }),
            None => 0,
        };
        Self { best }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn missing_store_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store), HighScore { best: 0 });
    }

    #[test]
    fn invalid_store_defaults_to_zero() {
        let store = MemoryStore::new();
        store.write(STORAGE_KEY, "not-a-number");
        assert_eq!(HighScore::load(&store), HighScore { best: 0 });
    }

    #[test]
    fn record_persists_only_improvements() {
        let store = MemoryStore::new();
        store.write(STORAGE_KEY, "5");
        let mut high = HighScore::load(&store);
        assert_eq!(high.best, 5);

        assert!(!high.record(5, &store));
        assert!(high.record(8, &store));
        assert_eq!(high.best, 8);
        assert_eq!(store.read(STORAGE_KEY), Some("8".to_string()));

        // Survives a reload through the same store
        assert_eq!(HighScore::load(&store).best, 8);
    }
}
