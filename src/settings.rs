//! Widget settings and preferences
//!
//! Persisted separately from the reveal flag in LocalStorage.

use serde::{Deserialize, Serialize};

/// Widget settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Accessibility ===
    /// Reduced motion (skip floating decorations and fireworks)
    pub reduced_motion: bool,

    // === Visual Effects ===
    /// Particle fireworks on reveal
    pub particles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            particles: true,
        }
    }
}

impl Settings {
    /// Effective fireworks toggle (respects reduced_motion)
    pub fn effective_fireworks(&self) -> bool {
        self.particles && !self.reduced_motion
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "scratch_promo_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
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
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.reduced_motion);
        assert!(settings.particles);
        assert!(settings.effective_fireworks());
    }

    #[test]
    fn test_reduced_motion_suppresses_fireworks() {
        let settings = Settings {
            reduced_motion: true,
            particles: true,
        };
        assert!(!settings.effective_fireworks());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            reduced_motion: true,
            particles: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert!(back.reduced_motion);
        assert!(!back.particles);
    }

    #[test]
    fn test_corrupt_json_is_rejected() {
        assert!(serde_json::from_str::<Settings>("not json").is_err());
        assert!(serde_json::from_str::<Settings>("{}").is_err());
    }
}
