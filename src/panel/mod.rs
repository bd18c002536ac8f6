//! Panel system - one expandable deck item and its animation sequence
//!
//! ## Architecture
//!
//! - `AnimationPhase`: `idle | pill | chevron | dropdown` sequencing token
//! - `Layer` / `LayerState`: the three animated layers and their visual targets
//! - `transition()`: the explicit `(phase, expanded, event)` transition table
//! - `PanelState`: identity, placement, phase, and the expanded flag
//!
//! ## Integration
//!
//! Panels never look at their siblings. The deck coordinator hands each
//! panel a [`LiveInputs`] after every update (`update::reconcile_panels`),
//! and the panel reports back through [`PanelOutput`]: layer animations to
//! start, and a close-complete notification when its closing sequence ends.

mod phase;
mod state;

pub use phase::{
    advance, closing_entry, layer_target, transition, AnimationPhase, Direction, Effect, Layer,
    LayerState, LayerTargets, PanelEvent, Transition,
};
pub use state::{CloseReason, LiveInputs, PanelId, PanelOutput, PanelState};
