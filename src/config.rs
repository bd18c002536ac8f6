//! Deck configuration
//!
//! Stored in `~/.config/folio/config.yaml`. Every field has a default, so a
//! partial file (or no file at all) yields the stock three-row deck.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::sections::SectionEntry;
use crate::panel::Layer;

/// Where a panel sits in the tilted deck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// Top offset, percent of the deck stage
    pub top: f32,
    /// Left offset, percent of the deck stage
    pub left: f32,
    pub rotate_deg: f32,
    pub z_index: i32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            rotate_deg: 0.0,
            z_index: 10,
        }
    }
}

/// One configured panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub id: String,
    #[serde(default)]
    pub placement: Placement,
    /// Horizontal nudge of the overlay label, positive = right
    #[serde(default)]
    pub overlay_offset_x: f32,
}

impl PanelConfig {
    pub fn new(id: impl Into<String>, placement: Placement) -> Self {
        Self {
            id: id.into(),
            placement,
            overlay_offset_x: 0.0,
        }
    }
}

/// Per-layer animation durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub pill_ms: u64,
    pub chevron_ms: u64,
    pub dropdown_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            pill_ms: 300,
            chevron_ms: 250,
            dropdown_ms: 300,
        }
    }
}

impl TimingConfig {
    pub fn duration(&self, layer: Layer) -> Duration {
        Duration::from_millis(match layer {
            Layer::Pill => self.pill_ms,
            Layer::Chevron => self.chevron_ms,
            Layer::Dropdown => self.dropdown_ms,
        })
    }

    /// Time for one full open (or close) sequence
    pub fn sequence(&self) -> Duration {
        Layer::ALL.into_iter().map(|layer| self.duration(layer)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Early-trigger margin, fraction of viewport height taken off the bottom
    pub bottom_margin: f32,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self { bottom_margin: 0.4 }
    }
}

/// Debug visualisation switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugOptions {
    /// Outline panel and deck-stage bounds in rendered views
    pub show_bounds: bool,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub panels: Vec<PanelConfig>,
    pub timing: TimingConfig,
    pub sentinel: SentinelConfig,
    pub sections: Vec<SectionEntry>,
    pub debug: DebugOptions,
}

fn default_panels() -> Vec<PanelConfig> {
    vec![
        PanelConfig::new(
            "row1",
            Placement {
                top: 12.0,
                left: 12.0,
                rotate_deg: -4.0,
                z_index: 30,
            },
        ),
        PanelConfig {
            overlay_offset_x: 55.0,
            ..PanelConfig::new(
                "row2",
                Placement {
                    top: 28.0,
                    left: 18.0,
                    rotate_deg: 0.0,
                    z_index: 20,
                },
            )
        },
        PanelConfig::new(
            "row3",
            Placement {
                top: 44.0,
                left: 8.0,
                rotate_deg: 4.0,
                z_index: 10,
            },
        ),
    ]
}

fn default_sections() -> Vec<SectionEntry> {
    vec![
        SectionEntry::new("hero", 0, "Hero"),
        SectionEntry::new("toc", 1, "Toc"),
        SectionEntry::new("meet-the-creative", 2, "MeetTheCreative"),
        SectionEntry::new("projects", 3, "Projects"),
        SectionEntry::new("lets-connect", 4, "LetsConnect"),
    ]
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            panels: default_panels(),
            timing: TimingConfig::default(),
            sentinel: SentinelConfig::default(),
            sections: default_sections(),
            debug: DebugOptions::default(),
        }
    }
}

impl FolioConfig {
    /// Load config from the default location, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("in config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parsing config YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the deck cannot run with
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for panel in &self.panels {
            if panel.id.trim().is_empty() {
                bail!("panel id must not be empty");
            }
            if !seen.insert(panel.id.as_str()) {
                bail!("duplicate panel id '{}'", panel.id);
            }
        }

        let margin = self.sentinel.bottom_margin;
        if !(0.0..1.0).contains(&margin) {
            bail!("sentinel.bottom_margin must be in [0, 1), got {}", margin);
        }

        Ok(())
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
