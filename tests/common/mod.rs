//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use folio::config::{FolioConfig, PanelConfig, Placement};
use folio::messages::Msg;
use folio::model::AppModel;
use folio::panel::{AnimationPhase, Layer, PanelId, PanelState};
use folio::runtime::{App, TraceEvent};
use folio::update::update;

/// Config with one panel per id, default timing and sections
pub fn deck_config(ids: &[&str]) -> FolioConfig {
    FolioConfig {
        panels: ids
            .iter()
            .map(|id| PanelConfig::new(*id, Placement::default()))
            .collect(),
        ..FolioConfig::default()
    }
}

/// Model with panels `x`, `y`, `z`, nothing open
pub fn test_model() -> AppModel {
    AppModel::new(deck_config(&["x", "y", "z"]))
}

/// Driver with panels `x`, `y`, `z`, nothing open
pub fn test_app() -> App {
    App::new(deck_config(&["x", "y", "z"]))
}

pub fn panel<'a>(model: &'a AppModel, id: &str) -> &'a PanelState {
    model
        .panel(&PanelId::new(id))
        .unwrap_or_else(|| panic!("no panel {}", id))
}

pub fn phase_of(model: &AppModel, id: &str) -> (AnimationPhase, bool) {
    let p = panel(model, id);
    (p.phase, p.expanded)
}

/// Feed the completion the panel is currently waiting on, if any
pub fn settle_current_layer(model: &mut AppModel, id: &str) -> bool {
    let p = panel(model, id);
    let Some(layer) = p.phase.layer() else {
        return false;
    };
    let state = p.targets().get(layer);
    update(model, Msg::layer_settled(id, layer, state));
    true
}

/// Drive a panel's sequence to rest by answering each layer callback directly
pub fn run_to_rest(model: &mut AppModel, id: &str) {
    for _ in 0..8 {
        if !settle_current_layer(model, id) {
            return;
        }
    }
    panic!("panel {} did not come to rest", id);
}

/// The `(phase, expanded)` pairs a panel passed through, in order
pub fn phase_trace(trace: &[TraceEvent], id: &str) -> Vec<(AnimationPhase, bool)> {
    trace
        .iter()
        .filter_map(|event| match event {
            TraceEvent::Phase {
                panel,
                phase,
                expanded,
                ..
            } if panel.as_str() == id => Some((*phase, *expanded)),
            _ => None,
        })
        .collect()
}

pub fn close_completes(trace: &[TraceEvent], id: &str) -> usize {
    trace
        .iter()
        .filter(|event| {
            matches!(event, TraceEvent::CloseComplete { panel, .. } if panel.as_str() == id)
        })
        .count()
}

/// Layers a panel was asked to animate, in order
pub fn animated_layers(trace: &[TraceEvent], id: &str) -> Vec<Layer> {
    trace
        .iter()
        .filter_map(|event| match event {
            TraceEvent::Animate { panel, layer, .. } if panel.as_str() == id => Some(*layer),
            _ => None,
        })
        .collect()
}

/// Expanded panel ids right now
pub fn expanded_ids(model: &AppModel) -> Vec<String> {
    model.expanded_panels().map(|p| p.id.to_string()).collect()
}
