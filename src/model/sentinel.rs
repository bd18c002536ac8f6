//! Scroll sentinel - viewport exit detection for the deck's trailing marker
//!
//! Translates raw intersection observations into edges. Only the
//! intersecting → not-intersecting edge matters to the deck; the very first
//! observation seeds state and never counts as an exit.

use serde::{Deserialize, Serialize};

/// Shrinks the observation root from the bottom, as a fraction of viewport height
///
/// A margin of `0.4` treats the marker as gone once it is 40% of the
/// viewport above the bottom edge, so the deck closes before the next
/// section fully covers it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootMargin {
    pub bottom: f32,
}

impl Default for RootMargin {
    fn default() -> Self {
        Self { bottom: 0.4 }
    }
}

impl RootMargin {
    pub fn new(bottom: f32) -> Self {
        Self { bottom }
    }

    /// Whether the marker intersects the margin-adjusted root
    pub fn intersects(&self, marker: &MarkerGeometry) -> bool {
        let root_bottom = marker.viewport_height * (1.0 - self.bottom.clamp(0.0, 1.0));
        marker.bottom > 0.0 && marker.top < root_bottom
    }
}

/// Marker position relative to the viewport top, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerGeometry {
    pub top: f32,
    pub bottom: f32,
    pub viewport_height: f32,
}

/// What a single observation meant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelEdge {
    /// First observation; nothing to compare against
    Seeded,
    Entered,
    Exited,
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSentinel {
    pub margin: RootMargin,
    last: Option<bool>,
}

impl ScrollSentinel {
    pub fn new(margin: RootMargin) -> Self {
        Self { margin, last: None }
    }

    /// Last known intersection state, `None` before the first observation
    pub fn is_intersecting(&self) -> Option<bool> {
        self.last
    }

    pub fn observe(&mut self, intersecting: bool) -> SentinelEdge {
        let edge = match (self.last, intersecting) {
            (None, _) => SentinelEdge::Seeded,
            (Some(false), true) => SentinelEdge::Entered,
            (Some(true), false) => SentinelEdge::Exited,
            _ => SentinelEdge::Unchanged,
        };
        self.last = Some(intersecting);
        tracing::trace!(target: "sentinel", intersecting, ?edge, "observation");
        edge
    }

    pub fn observe_geometry(&mut self, marker: &MarkerGeometry) -> SentinelEdge {
        let intersecting = self.margin.intersects(marker);
        self.observe(intersecting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(top: f32) -> MarkerGeometry {
        MarkerGeometry {
            top,
            bottom: top + 1.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_first_observation_only_seeds() {
        let mut sentinel = ScrollSentinel::default();
        assert_eq!(sentinel.observe(false), SentinelEdge::Seeded);
        assert_eq!(sentinel.is_intersecting(), Some(false));
    }

    #[test]
    fn test_exit_edge_fires_once() {
        let mut sentinel = ScrollSentinel::default();
        sentinel.observe(true);
        assert_eq!(sentinel.observe(false), SentinelEdge::Exited);
        assert_eq!(sentinel.observe(false), SentinelEdge::Unchanged);
        assert_eq!(sentinel.observe(true), SentinelEdge::Entered);
        assert_eq!(sentinel.observe(false), SentinelEdge::Exited);
    }

    #[test]
    fn test_margin_shrinks_root_from_bottom() {
        let margin = RootMargin::new(0.4);
        assert!(margin.intersects(&marker(100.0)));
        assert!(margin.intersects(&marker(599.0)));
        assert!(!margin.intersects(&marker(600.0)));
        assert!(!margin.intersects(&marker(900.0)));
        // Scrolled above the viewport
        assert!(!margin.intersects(&marker(-50.0)));
    }

    #[test]
    fn test_zero_margin_uses_full_viewport() {
        let margin = RootMargin::new(0.0);
        assert!(margin.intersects(&marker(900.0)));
        assert!(!margin.intersects(&marker(1000.0)));
    }

    #[test]
    fn test_geometry_exit() {
        let mut sentinel = ScrollSentinel::new(RootMargin::new(0.4));
        assert_eq!(sentinel.observe_geometry(&marker(300.0)), SentinelEdge::Seeded);
        assert_eq!(sentinel.observe_geometry(&marker(-20.0)), SentinelEdge::Exited);
    }
}
