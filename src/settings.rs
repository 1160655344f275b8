//! Game settings
//!
//! Scoring constants and goal ring bounds. Persisted in LocalStorage on the
//! web build; native builds use defaults or JSON supplied by the caller.

use anyhow::ensure;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable rules for new attempts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where every attempt starts
    pub start: DVec2,
    /// Distance-to-goal below which an attempt is solved (strict)
    pub threshold: f64,
    /// Free allowance added to traveled distance in the efficiency score
    pub efficiency_slack: f64,
    /// Inner radius of the goal ring (must be > 0)
    pub min_goal_radius: f64,
    /// Outer radius of the goal ring
    pub max_goal_radius: f64,

    // === UI ===
    /// Show the how-to-play hint on the intro screen
    pub show_hint: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start: DVec2::new(START_X, START_Y),
            threshold: COMPLETION_THRESHOLD,
            efficiency_slack: EFFICIENCY_SLACK,
            min_goal_radius: MIN_GOAL_RADIUS,
            max_goal_radius: MAX_GOAL_RADIUS,
            show_hint: true,
        }
    }
}

impl Settings {
    /// Check that the rules describe a playable puzzle
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.start.is_finite(), "start point must be finite");
        ensure!(
            self.threshold.is_finite() && self.threshold > 0.0,
            "threshold must be positive (got {})",
            self.threshold
        );
        ensure!(
            self.efficiency_slack.is_finite() && self.efficiency_slack >= 0.0,
            "efficiency slack must be non-negative (got {})",
            self.efficiency_slack
        );
        ensure!(
            self.min_goal_radius.is_finite() && self.min_goal_radius > 0.0,
            "minimum goal radius must be positive (got {})",
            self.min_goal_radius
        );
        ensure!(
            self.max_goal_radius.is_finite() && self.min_goal_radius < self.max_goal_radius,
            "goal ring [{}, {}] is empty",
            self.min_goal_radius,
            self.max_goal_radius
        );
        Ok(())
    }

    /// Parse and validate settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Like `from_json`, but falls back to defaults on any problem
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hot_cold_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
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
            if let Ok(json) = self.to_json() {
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
