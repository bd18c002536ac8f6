//! Derived presentation state
//!
//! Everything here is a pure function of the model. Nothing is stored.

use serde::Serialize;

use crate::config::Placement;
use crate::model::AppModel;
use crate::panel::{AnimationPhase, Layer, LayerState, PanelState};

/// Z-index a glowing panel is lifted to
pub const ACTIVE_PANEL_Z_INDEX: i32 = 100;
/// Opacity of panels de-emphasized behind the active one
pub const DIMMED_OPACITY: f32 = 0.7;
/// Deck section z-index while a panel is open (dropdowns overflow the section)
pub const OPEN_SECTION_Z_INDEX: i32 = 20;
pub const CLOSED_SECTION_Z_INDEX: i32 = 1;

/// How one panel should be drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub id: String,
    pub phase: AnimationPhase,
    pub expanded: bool,
    pub glow: bool,
    pub dimmed: bool,
    pub opacity: f32,
    pub z_index: i32,
    pub placement: Placement,
    pub overlay_offset_x: f32,
    pub pill: LayerState,
    pub chevron: LayerState,
    pub dropdown: LayerState,
    pub aria_label: String,
    pub show_bounds: bool,
}

impl PanelView {
    pub fn new(panel: &PanelState, model: &AppModel) -> Self {
        let targets = panel.targets();
        let glow = panel.is_glowing();
        let dimmed = panel.is_dimmed(model.deck.active());

        Self {
            id: panel.id.to_string(),
            phase: panel.phase,
            expanded: panel.expanded,
            glow,
            dimmed,
            opacity: if dimmed { DIMMED_OPACITY } else { 1.0 },
            z_index: if glow {
                ACTIVE_PANEL_Z_INDEX
            } else {
                panel.placement.z_index
            },
            placement: panel.placement,
            overlay_offset_x: panel.overlay_offset_x,
            pill: targets.get(Layer::Pill),
            chevron: targets.get(Layer::Chevron),
            dropdown: targets.get(Layer::Dropdown),
            aria_label: if panel.expanded {
                format!("Collapse {}", panel.id)
            } else {
                format!("Expand {}", panel.id)
            },
            show_bounds: model.config.debug.show_bounds,
        }
    }
}

/// How the whole deck section should be drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckView {
    pub active: Option<String>,
    pub pending: Option<String>,
    /// Content stays hidden until the artboard scaler is ready
    pub content_visible: bool,
    pub scale: f32,
    pub section_z_index: i32,
    pub panels: Vec<PanelView>,
}

impl DeckView {
    pub fn new(model: &AppModel) -> Self {
        let any_open = model.deck.active().is_some();
        Self {
            active: model.deck.active().map(|id| id.to_string()),
            pending: model.deck.pending().map(|id| id.to_string()),
            content_visible: model.artboard.is_ready(),
            scale: model.artboard.effective_scale(),
            section_z_index: if any_open {
                OPEN_SECTION_Z_INDEX
            } else {
                CLOSED_SECTION_Z_INDEX
            },
            panels: model
                .panels
                .iter()
                .map(|panel| PanelView::new(panel, model))
                .collect(),
        }
    }

    pub fn panel(&self, id: &str) -> Option<&PanelView> {
        self.panels.iter().find(|p| p.id == id)
    }
}
