//! Per-panel state: identity, phase, and the expanded flag
//!
//! A panel only ever mutates its own fields. Everything it knows about the
//! rest of the deck arrives through [`LiveInputs`], and everything it wants
//! the deck to know leaves through [`PanelOutput`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::phase::{
    transition, AnimationPhase, Direction, Effect, Layer, LayerState, LayerTargets, PanelEvent,
};
use crate::config::{PanelConfig, Placement};

/// Opaque, stable identifier of a panel within a deck
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Deck state as seen by one panel, recomputed after every update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LiveInputs {
    /// The deck lists this panel as the active one
    pub is_active: bool,
    /// Some other panel is waiting to open
    pub has_pending_sibling: bool,
    /// Current force-close counter value
    pub force_close_signal: u64,
}

/// Why a panel entered its closing sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The user toggled the open panel
    Toggle,
    /// Another panel is queued to open
    PendingSibling,
    /// The deck was scrolled out of view
    ForceClose,
    /// The deck no longer lists this panel as active
    Deactivated,
}

/// What a panel reports after handling an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelOutput {
    /// Layers whose visual target changed
    pub animations: Vec<(Layer, LayerState)>,
    /// The closing sequence just finished
    pub close_complete: bool,
    /// The panel began closing on its own and wants the deck informed
    pub request_close: bool,
}

impl PanelOutput {
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty() && !self.close_complete && !self.request_close
    }
}

/// One expandable deck item
#[derive(Debug, Clone)]
pub struct PanelState {
    pub id: PanelId,
    pub placement: Placement,
    pub overlay_offset_x: f32,
    pub phase: AnimationPhase,
    pub expanded: bool,
    /// Last force-close counter value this panel has reacted to
    pub seen_force_close: u64,
}

impl PanelState {
    pub fn new(id: impl Into<PanelId>) -> Self {
        Self {
            id: id.into(),
            placement: Placement::default(),
            overlay_offset_x: 0.0,
            phase: AnimationPhase::Idle,
            expanded: false,
            seen_force_close: 0,
        }
    }

    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            placement: config.placement,
            overlay_offset_x: config.overlay_offset_x,
            ..Self::new(config.id.clone())
        }
    }

    /// Direction of the sequence currently in flight, if any
    pub fn direction(&self) -> Option<Direction> {
        Direction::of(self.phase, self.expanded)
    }

    pub fn is_settled_closed(&self) -> bool {
        self.phase == AnimationPhase::Idle && !self.expanded
    }

    pub fn is_settled_open(&self) -> bool {
        self.phase == AnimationPhase::Idle && self.expanded
    }

    /// Visual targets of all layers for the current configuration
    pub fn targets(&self) -> LayerTargets {
        LayerTargets::of(self.phase, self.expanded)
    }

    /// Active glow: anything but settled-closed
    pub fn is_glowing(&self) -> bool {
        self.expanded || self.phase != AnimationPhase::Idle
    }

    /// De-emphasized while some other panel is the active one
    pub fn is_dimmed(&self, active: Option<&PanelId>) -> bool {
        active.is_some_and(|id| *id != self.id)
    }

    /// Apply one event, returning what changed
    ///
    /// Events that do not apply in the current configuration leave the
    /// panel untouched and return `None`.
    pub fn apply(&mut self, event: PanelEvent) -> Option<PanelOutput> {
        let next = transition(self.phase, self.expanded, event)?;
        let before = self.targets();

        tracing::trace!(
            target: "panel",
            id = %self.id,
            from = %self.phase,
            to = %next.phase,
            expanded = next.expanded,
            ?event,
            "phase transition"
        );

        self.phase = next.phase;
        self.expanded = next.expanded;

        Some(PanelOutput {
            animations: before.changes_to(&self.targets()),
            close_complete: next.effect == Effect::CloseComplete,
            request_close: false,
        })
    }

    /// Begin closing for `reason`; ignored unless currently expanded
    pub fn close(&mut self, reason: CloseReason) -> Option<PanelOutput> {
        let mut output = self.apply(PanelEvent::Close)?;
        tracing::debug!(target: "panel", id = %self.id, ?reason, "closing");
        output.request_close = matches!(reason, CloseReason::ForceClose);
        Some(output)
    }

    /// React to the deck state handed down after an update
    ///
    /// Checked in order: a queued sibling closes an expanded panel (even
    /// mid-open), activation opens a settled-closed panel, and a changed
    /// force-close counter closes a settled-open panel. The counter is
    /// consumed whether or not it triggers anything.
    pub fn reconcile(&mut self, live: &LiveInputs) -> Option<PanelOutput> {
        let force_changed = live.force_close_signal != self.seen_force_close;
        self.seen_force_close = live.force_close_signal;

        if self.expanded && live.has_pending_sibling {
            return self.close(CloseReason::PendingSibling);
        }

        if live.is_active && self.is_settled_closed() {
            tracing::debug!(target: "panel", id = %self.id, "opening");
            return self.apply(PanelEvent::Activate);
        }

        if force_changed && self.is_settled_open() {
            return self.close(CloseReason::ForceClose);
        }

        if !live.is_active && self.expanded {
            return self.close(CloseReason::Deactivated);
        }

        None
    }
}
