//! Application model - the complete state of the deck
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod artboard;
pub mod deck;
pub mod sections;
pub mod sentinel;

pub use artboard::ArtboardState;
pub use deck::{DeckState, OpenOutcome, Settlement};
pub use sections::{SectionEntry, SectionRegistry};
pub use sentinel::{MarkerGeometry, RootMargin, ScrollSentinel, SentinelEdge};

use crate::config::FolioConfig;
use crate::panel::{PanelId, PanelState};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Coordinator state shared by all panels
    pub deck: DeckState,
    /// Panels in configuration order
    pub panels: Vec<PanelState>,
    pub sentinel: ScrollSentinel,
    pub artboard: ArtboardState,
    pub sections: SectionRegistry,
    pub config: FolioConfig,
}

impl AppModel {
    pub fn new(config: FolioConfig) -> Self {
        let panels: Vec<PanelState> = config.panels.iter().map(PanelState::from_config).collect();
        let deck = DeckState::new(panels.iter().map(|p| p.id.clone()));
        let sentinel = ScrollSentinel::new(RootMargin::new(config.sentinel.bottom_margin));
        let sections = config.sections.iter().cloned().collect();

        Self {
            deck,
            panels,
            sentinel,
            artboard: ArtboardState::default(),
            sections,
            config,
        }
    }

    pub fn panel(&self, id: &PanelId) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.id == *id)
    }

    pub fn panel_mut(&mut self, id: &PanelId) -> Option<&mut PanelState> {
        self.panels.iter_mut().find(|p| p.id == *id)
    }

    /// Panels currently logically open
    pub fn expanded_panels(&self) -> impl Iterator<Item = &PanelState> {
        self.panels.iter().filter(|p| p.expanded)
    }

    /// True when no panel is open or animating and nothing is queued
    pub fn is_quiescent(&self) -> bool {
        self.deck.pending().is_none()
            && self
                .panels
                .iter()
                .all(|p| p.direction().is_none() && p.expanded == self.deck.is_active(&p.id))
    }

    /// Check model-wide invariants, describing the first violation
    ///
    /// - deck invariants hold (pending ≠ active, active is configured)
    /// - at most one panel is expanded
    /// - an expanded panel is the active panel
    /// - the deck's panel list matches the panels in the model
    pub fn check_invariants(&self) -> Result<(), String> {
        self.deck.check_invariants()?;

        let expanded: Vec<&str> = self.expanded_panels().map(|p| p.id.as_str()).collect();
        if expanded.len() > 1 {
            return Err(format!("multiple panels expanded: {:?}", expanded));
        }

        for panel in self.expanded_panels() {
            if !self.deck.is_active(&panel.id) {
                return Err(format!("panel {} is expanded but not active", panel.id));
            }
        }

        let ids: Vec<&PanelId> = self.panels.iter().map(|p| &p.id).collect();
        if ids.len() != self.deck.panel_ids().len()
            || !self.deck.panel_ids().iter().all(|id| ids.contains(&id))
        {
            return Err("deck panel ids out of sync with model panels".to_string());
        }

        Ok(())
    }

    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        if let Err(violation) = self.check_invariants() {
            panic!("invariant violated after {}: {}", context, violation);
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self, _context: &str) {}
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(FolioConfig::default())
    }
}
