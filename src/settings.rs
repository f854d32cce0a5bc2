//! Pet settings and tuning
//!
//! The simulation never reads these on its own; the embedding shell loads
//! them (from wherever it keeps preferences) and hands the resulting policy
//! to the world at construction time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sim::HungerPolicy;

/// How quickly the pet works up an appetite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppetitePreset {
    Relaxed,
    #[default]
    Standard,
    Demanding,
}

impl AppetitePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppetitePreset::Relaxed => "Relaxed",
            AppetitePreset::Standard => "Standard",
            AppetitePreset::Demanding => "Demanding",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" => Some(AppetitePreset::Relaxed),
            "standard" | "std" => Some(AppetitePreset::Standard),
            "demanding" => Some(AppetitePreset::Demanding),
            _ => None,
        }
    }

    /// Time the pet takes to climb one hunger level
    pub fn time_per_level(&self) -> Duration {
        match self {
            AppetitePreset::Relaxed => Duration::from_secs(60 * 60),
            AppetitePreset::Standard => Duration::from_secs(30 * 60),
            AppetitePreset::Demanding => Duration::from_secs(10 * 60),
        }
    }
}

/// Pet settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Appetite preset
    pub appetite: AppetitePreset,
    /// Explicit seconds per hunger level; beats the preset when set
    pub time_per_level_secs: Option<f32>,
    /// Fixed wander seed for reproducible runs (None = let the shell pick)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            appetite: AppetitePreset::Standard,
            time_per_level_secs: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from an appetite preset
    pub fn from_preset(preset: AppetitePreset) -> Self {
        Self {
            appetite: preset,
            ..Self::default()
        }
    }

    /// Build the hunger policy this configuration describes
    pub fn hunger_policy(&self) -> HungerPolicy {
        match self.time_per_level_secs {
            Some(secs) if secs > 0.0 && secs.is_finite() => {
                HungerPolicy::new(Duration::from_secs_f32(secs))
            }
            Some(secs) => {
                log::warn!(
                    "Ignoring invalid time_per_level_secs {secs}; using {} preset",
                    self.appetite.as_str()
                );
                HungerPolicy::new(self.appetite.time_per_level())
            }
            None => HungerPolicy::new(self.appetite.time_per_level()),
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::info!("Using default settings ({err})");
                Self::default()
            }
        }
    }
}
