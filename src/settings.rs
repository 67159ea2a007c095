//! Game settings and preferences
//!
//! Persisted in LocalStorage, loaded once at startup.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DEBOUNCE_MS, TIMER_INTERVAL_MS};
use crate::sim::{GameSession, ShakeMode};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Container shake policy
    pub shake_mode: ShakeMode,
    /// Minimum gap between accepted inputs (ms)
    pub debounce_ms: f64,
    /// Ignore key auto-repeat until the key is released
    pub key_repeat_guard: bool,
    /// Stopwatch display refresh period (ms)
    pub timer_interval_ms: i32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no container shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shake_mode: ShakeMode::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            key_repeat_guard: true,
            timer_interval_ms: TIMER_INTERVAL_MS,

            master_volume: 0.8,
            muted: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "shake_sort_settings";

    /// Clamp anything a hand-edited save could have broken
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        if !self.debounce_ms.is_finite() || self.debounce_ms < 0.0 {
            self.debounce_ms = 0.0;
        }
        self.timer_interval_ms = self.timer_interval_ms.clamp(1, 100);
        self
    }

    /// Effective shake (respects reduced_motion)
    pub fn effective_shake(&self) -> bool {
        !self.reduced_motion
    }

    /// Effective volume (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Push gameplay tuning into a session
    pub fn apply_to(&self, session: &mut GameSession) {
        session.configure(self.shake_mode, self.debounce_ms, self.key_repeat_guard);
    }

    /// Parse from JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
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
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{"shake_mode":"Jitter","muted":true}"#);
        assert_eq!(s.shake_mode, ShakeMode::Jitter);
        assert!(s.muted);
        assert_eq!(s.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn test_garbage_json_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_sanitize_clamps() {
        let s = Settings::from_json(
            r#"{"master_volume":3.0,"debounce_ms":-4.0,"timer_interval_ms":0}"#,
        );
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.debounce_ms, 0.0);
        assert_eq!(s.timer_interval_ms, 1);
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let s = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!s.effective_shake());
    }

    #[test]
    fn test_apply_to_session() {
        let s = Settings {
            shake_mode: ShakeMode::Jitter,
            debounce_ms: 250.0,
            ..Default::default()
        };
        let mut session = GameSession::new(1);
        s.apply_to(&mut session);
        assert_eq!(session.shake().mode(), ShakeMode::Jitter);
        assert_eq!(session.debounce_ms(), 250.0);
    }
}
