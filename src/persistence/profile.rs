//! Typed profile accessors over a key-value store
//!
//! Reads never fail the caller: a missing, unreadable or malformed value logs
//! and falls back to the default. Writes report their errors.

use super::store::{KeyValueStore, Result, StorageError};
use crate::settings::{Settings, SettingsPatch};

const HIGH_SCORE_KEY: &str = "blitztap_high_score";
const TOTAL_COINS_KEY: &str = "blitztap_total_coins";
const SETTINGS_KEY: &str = "blitztap_settings";

/// The player's persisted profile
#[derive(Debug, Clone, Default)]
pub struct Profile<S> {
    store: S,
}

impl<S: KeyValueStore> Profile<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn high_score(&self) -> u32 {
        self.read_number(HIGH_SCORE_KEY)
    }

    pub fn set_high_score(&mut self, score: u32) -> Result<()> {
        self.store.set(HIGH_SCORE_KEY, &score.to_string())?;
        log::info!("High score saved ({})", score);
        Ok(())
    }

    pub fn total_coins(&self) -> u32 {
        self.read_number(TOTAL_COINS_KEY)
    }

    /// Add to the coin balance, returning the new total
    pub fn add_coins(&mut self, amount: u32) -> Result<u32> {
        let total = self.total_coins().saturating_add(amount);
        self.store.set(TOTAL_COINS_KEY, &total.to_string())?;
        log::info!("Coins +{} (total {})", amount, total);
        Ok(total)
    }

    pub fn settings(&self) -> Settings {
        let json = match self.store.get(SETTINGS_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return Settings::default(),
            Err(e) => {
                log::error!("Error reading settings: {}", e);
                return Settings::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Error reading settings: {}", StorageError::from(e));
                Settings::default()
            }
        }
    }

    /// Merge a partial update over the stored settings and save it
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<Settings> {
        let updated = self.settings().merged(patch);
        self.store.set(SETTINGS_KEY, &serde_json::to_string(&updated)?)?;
        log::info!("Settings saved");
        Ok(updated)
    }

    fn read_number(&self, key: &str) -> u32 {
        let parsed = self.store.get(key).and_then(|value| match value {
            None => Ok(0),
            Some(value) => value.trim().parse::<u32>().map_err(|_| StorageError::Malformed {
                key: key.to_string(),
                value,
            }),
        });
        parsed.unwrap_or_else(|e| {
            log::error!("Error reading {}: {}", key, e);
            0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_fresh_profile_defaults() {
        let profile = Profile::new(MemoryStore::new());
        assert_eq!(profile.high_score(), 0);
        assert_eq!(profile.total_coins(), 0);
        assert_eq!(profile.settings(), Settings::default());
    }

    #[test]
    fn test_high_score_and_coins() {
        let mut profile = Profile::new(MemoryStore::new());
        profile.set_high_score(42).unwrap();
        assert_eq!(profile.high_score(), 42);

        assert_eq!(profile.add_coins(65).unwrap(), 65);
        assert_eq!(profile.add_coins(10).unwrap(), 75);
        assert_eq!(profile.total_coins(), 75);
    }

    #[test]
    fn test_malformed_number_reads_as_zero() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "lots").unwrap();
        store.set(TOTAL_COINS_KEY, " 12 ").unwrap();
        let profile = Profile::new(store);
        assert_eq!(profile.high_score(), 0);
        assert_eq!(profile.total_coins(), 12);
    }

    #[test]
    fn test_update_settings_merges() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, r#"{"hapticsEnabled":false}"#).unwrap();
        let mut profile = Profile::new(store);

        let updated = profile
            .update_settings(SettingsPatch {
                sound_enabled: Some(false),
                ..Default::default()
            })
            .unwrap();
        assert!(!updated.sound_enabled);
        assert!(!updated.haptics_enabled);
        assert_eq!(profile.settings(), updated);
    }

    #[test]
    fn test_corrupt_settings_fall_back() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "{oops").unwrap();
        let profile = Profile::new(store);
        assert_eq!(profile.settings(), Settings::default());
    }

    #[test]
    fn test_borrowed_store() {
        let mut store = MemoryStore::new();
        Profile::new(&mut store).set_high_score(7).unwrap();
        assert_eq!(Profile::new(store).high_score(), 7);
    }
}
