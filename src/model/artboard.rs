//! Artboard scaler boundary
//!
//! The scaler itself lives outside this crate. All the deck sees is a
//! uniform scale factor, which may arrive late, and a readiness flag that
//! gates whether content is shown at all.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ArtboardState {
    scale_factor: Option<f32>,
    ready: bool,
}

impl ArtboardState {
    /// Scale factor reported by the scaler, if one has arrived yet
    pub fn scale_factor(&self) -> Option<f32> {
        self.scale_factor
    }

    /// Scale to render with; identity until a measurement arrives
    pub fn effective_scale(&self) -> f32 {
        self.scale_factor.unwrap_or(1.0)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Record a new scale factor, clamped to `(0, 1]`
    ///
    /// Returns `false` (and keeps the previous value) for non-finite or
    /// non-positive input.
    pub fn set_scale(&mut self, scale_factor: f32) -> bool {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            tracing::debug!(scale_factor, "ignoring invalid artboard scale");
            return false;
        }
        self.scale_factor = Some(scale_factor.min(1.0));
        true
    }

    /// Mark content as measurable; stays set once set
    pub fn mark_ready(&mut self) -> bool {
        let changed = !self.ready;
        self.ready = true;
        changed
    }
}
