//! Animation phases and the panel transition table
//!
//! A panel's open/close sequence is an ordered walk through three animated
//! layers. The phase names which layer is currently moving; the orthogonal
//! `expanded` flag names the direction of travel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current stage of a panel's open/close sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    /// Settled (either fully open or fully closed)
    #[default]
    Idle,
    /// Base pill is stretching or shrinking
    Pill,
    /// Chevron is rotating
    Chevron,
    /// Dropdown is revealing or hiding
    Dropdown,
}

impl AnimationPhase {
    /// The layer whose animation completes this phase
    pub fn layer(self) -> Option<Layer> {
        match self {
            AnimationPhase::Idle => None,
            AnimationPhase::Pill => Some(Layer::Pill),
            AnimationPhase::Chevron => Some(Layer::Chevron),
            AnimationPhase::Dropdown => Some(Layer::Dropdown),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationPhase::Idle => "idle",
            AnimationPhase::Pill => "pill",
            AnimationPhase::Chevron => "chevron",
            AnimationPhase::Dropdown => "dropdown",
        }
    }
}

impl fmt::Display for AnimationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One independently animated layer of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Pill,
    Chevron,
    Dropdown,
}

impl Layer {
    /// All layers, bottom of the visual stack first
    pub const ALL: [Layer; 3] = [Layer::Pill, Layer::Chevron, Layer::Dropdown];

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Pill => "pill",
            Layer::Chevron => "chevron",
            Layer::Dropdown => "dropdown",
        }
    }

    fn index(self) -> usize {
        match self {
            Layer::Pill => 0,
            Layer::Chevron => 1,
            Layer::Dropdown => 2,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual target of a single layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerState {
    #[default]
    Collapsed,
    Expanded,
}

impl fmt::Display for LayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerState::Collapsed => f.write_str("collapsed"),
            LayerState::Expanded => f.write_str("expanded"),
        }
    }
}

/// Targets for all three layers, indexable by [`Layer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerTargets([LayerState; 3]);

impl LayerTargets {
    /// Targets for a given `(phase, expanded)` configuration
    pub fn of(phase: AnimationPhase, expanded: bool) -> Self {
        Self(Layer::ALL.map(|layer| layer_target(layer, phase, expanded)))
    }

    pub fn get(&self, layer: Layer) -> LayerState {
        self.0[layer.index()]
    }

    /// Layers whose target differs between `self` and `next`, with the new target
    pub fn changes_to(&self, next: &LayerTargets) -> Vec<(Layer, LayerState)> {
        Layer::ALL
            .into_iter()
            .filter(|&layer| self.get(layer) != next.get(layer))
            .map(|layer| (layer, next.get(layer)))
            .collect()
    }
}

/// Visual target of `layer` while the panel sits at `(phase, expanded)`
///
/// Opening grows the pill, then rotates the chevron, then reveals the
/// dropdown. Closing undoes them in reverse, so the outer layers hold their
/// expanded pose until the layer above them has collapsed.
pub fn layer_target(layer: Layer, phase: AnimationPhase, expanded: bool) -> LayerState {
    use AnimationPhase::*;

    let is_expanded = match (layer, expanded) {
        (Layer::Pill, true) => true,
        (Layer::Pill, false) => matches!(phase, Dropdown | Chevron),
        (Layer::Chevron, true) => phase != Pill,
        (Layer::Chevron, false) => phase == Dropdown,
        (Layer::Dropdown, true) => matches!(phase, Dropdown | Idle),
        (Layer::Dropdown, false) => false,
    };

    if is_expanded {
        LayerState::Expanded
    } else {
        LayerState::Collapsed
    }
}

/// Direction of an in-flight sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Opening,
    Closing,
}

impl Direction {
    /// Direction implied by a `(phase, expanded)` pair, `None` when settled
    pub fn of(phase: AnimationPhase, expanded: bool) -> Option<Direction> {
        match (phase, expanded) {
            (AnimationPhase::Idle, _) => None,
            (_, true) => Some(Direction::Opening),
            (_, false) => Some(Direction::Closing),
        }
    }
}

/// Side effect attached to a phase step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The closing sequence has fully unwound
    CloseComplete,
}

/// Events fed into a single panel's state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The deck made this panel the active one
    Activate,
    /// Something asked this panel to close (toggle, pending sibling, force-close)
    Close,
    /// A layer finished animating toward `state`
    LayerSettled { layer: Layer, state: LayerState },
}

/// Result of applying a [`PanelEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub phase: AnimationPhase,
    pub expanded: bool,
    pub effect: Effect,
}

/// The phase-advance table: `(phase, direction) → (next phase, effect)`
///
/// Consulted only when the current phase's layer has settled.
pub fn advance(phase: AnimationPhase, direction: Direction) -> (AnimationPhase, Effect) {
    use AnimationPhase::*;

    match (phase, direction) {
        (Pill, Direction::Opening) => (Chevron, Effect::None),
        (Chevron, Direction::Opening) => (Dropdown, Effect::None),
        (Dropdown, Direction::Opening) => (Idle, Effect::None),
        (Dropdown, Direction::Closing) => (Chevron, Effect::None),
        (Chevron, Direction::Closing) => (Pill, Effect::None),
        (Pill, Direction::Closing) => (Idle, Effect::CloseComplete),
        (Idle, _) => (Idle, Effect::None),
    }
}

/// Where a closing sequence starts from the given phase
///
/// A settled-open panel starts by hiding the dropdown; a panel interrupted
/// mid-open reverses the layer that is currently moving.
pub fn closing_entry(phase: AnimationPhase) -> AnimationPhase {
    match phase {
        AnimationPhase::Idle => AnimationPhase::Dropdown,
        other => other,
    }
}

/// Apply `event` to `(phase, expanded)`
///
/// Returns `None` when the event does not apply: an activation while not
/// settled-closed, a close while already closing or closed, or a layer
/// callback that does not match the layer and target the current phase is
/// waiting on.
pub fn transition(phase: AnimationPhase, expanded: bool, event: PanelEvent) -> Option<Transition> {
    match event {
        PanelEvent::Activate => (phase == AnimationPhase::Idle && !expanded).then_some(Transition {
            phase: AnimationPhase::Pill,
            expanded: true,
            effect: Effect::None,
        }),

        PanelEvent::Close => expanded.then(|| Transition {
            phase: closing_entry(phase),
            expanded: false,
            effect: Effect::None,
        }),

        PanelEvent::LayerSettled { layer, state } => {
            let direction = Direction::of(phase, expanded)?;
            if phase.layer() != Some(layer) || layer_target(layer, phase, expanded) != state {
                return None;
            }
            let (next, effect) = advance(phase, direction);
            Some(Transition {
                phase: next,
                expanded,
                effect,
            })
        }
    }
}
