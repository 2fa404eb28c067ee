//! Persisted reveal flag
//!
//! One boolean in LocalStorage recording that the scratch card was already
//! revealed in a previous session. Stored as a bare JSON bool under the
//! `bonusRevealed` key, so the stored value is exactly `true`.

use serde::{Deserialize, Serialize};

/// Whether the bonus was already revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevealFlag {
    revealed: bool,
}

impl RevealFlag {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bonusRevealed";

    pub fn new() -> Self {
        Self { revealed: false }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Record the reveal. The caller persists it with `save` exactly once.
    pub fn mark_revealed(&mut self) {
        self.revealed = true;
    }

    /// Load the flag from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(flag) = serde_json::from_str(&json) {
                    log::info!("Loaded reveal flag from LocalStorage");
                    return flag;
                }
            }
        }

        log::info!("No reveal flag found, starting fresh");
        Self::new()
    }

    /// Save the flag to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Reveal flag saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_is_bare_bool() {
        let mut flag = RevealFlag::new();
        flag.mark_revealed();
        assert_eq!(serde_json::to_string(&flag).unwrap(), "true");
    }

    #[test]
    fn test_reads_legacy_value() {
        let flag: RevealFlag = serde_json::from_str("true").unwrap();
        assert!(flag.is_revealed());
        let flag: RevealFlag = serde_json::from_str("false").unwrap();
        assert!(!flag.is_revealed());
    }

    #[test]
    fn test_corrupt_value_is_rejected() {
        assert!(serde_json::from_str::<RevealFlag>("\"yes\"").is_err());
        assert!(serde_json::from_str::<RevealFlag>("").is_err());
    }

    #[test]
    fn test_defaults_to_unrevealed() {
        assert!(!RevealFlag::default().is_revealed());
    }
}
