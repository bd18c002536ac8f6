//! Deck coordinator state
//!
//! Owns the single authoritative answer to "which panel is open": the active
//! id, at most one pending id, and the force-close counter. Panels never
//! mutate any of it; they send requests and notifications that land here.

use serde::Serialize;

use crate::panel::{LiveInputs, PanelId};

/// Outcome of [`DeckState::request_open`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Nothing was active; the panel is now active
    Activated,
    /// Another panel is active; this one waits, replacing any earlier request
    Queued { replaced: Option<PanelId> },
    AlreadyActive,
    AlreadyPending,
    /// No configured panel has this id
    Unknown,
}

/// Outcome of [`DeckState::notify_close_complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The pending panel became active
    Promoted(PanelId),
    /// Nothing was pending; the deck is now empty
    Cleared,
    /// The pending id no longer resolves to a panel and was dropped
    DroppedOrphan(PanelId),
    /// The notifying panel is not the active one; nothing changed
    Stale,
}

/// Shared deck state, mutated only by the coordinator operations below
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeckState {
    panel_ids: Vec<PanelId>,
    active: Option<PanelId>,
    pending: Option<PanelId>,
    force_close: u64,
}

impl DeckState {
    pub fn new(panel_ids: impl IntoIterator<Item = PanelId>) -> Self {
        Self {
            panel_ids: panel_ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn active(&self) -> Option<&PanelId> {
        self.active.as_ref()
    }

    pub fn pending(&self) -> Option<&PanelId> {
        self.pending.as_ref()
    }

    pub fn force_close_signal(&self) -> u64 {
        self.force_close
    }

    pub fn panel_ids(&self) -> &[PanelId] {
        &self.panel_ids
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.panel_ids.contains(id)
    }

    pub fn is_active(&self, id: &PanelId) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// Some panel other than `id` is waiting to open
    pub fn has_pending_sibling(&self, id: &PanelId) -> bool {
        self.pending.as_ref().is_some_and(|p| p != id)
    }

    /// The deck state as seen by panel `id`
    pub fn live_inputs(&self, id: &PanelId) -> LiveInputs {
        LiveInputs {
            is_active: self.is_active(id),
            has_pending_sibling: self.has_pending_sibling(id),
            force_close_signal: self.force_close,
        }
    }

    /// Ask for `id` to become the open panel
    ///
    /// Activates immediately when the deck is empty. Otherwise marks `id`
    /// pending (last request wins) and leaves it to the active panel to
    /// notice and close itself.
    pub fn request_open(&mut self, id: &PanelId) -> OpenOutcome {
        if !self.contains(id) {
            tracing::debug!(target: "deck", %id, "open request for unknown panel ignored");
            return OpenOutcome::Unknown;
        }

        match &self.active {
            None => {
                self.active = Some(id.clone());
                self.pending = None;
                tracing::debug!(target: "deck", %id, "activated");
                OpenOutcome::Activated
            }
            Some(active) if active == id => OpenOutcome::AlreadyActive,
            Some(_) if self.pending.as_ref() == Some(id) => OpenOutcome::AlreadyPending,
            Some(active) => {
                let replaced = self.pending.replace(id.clone());
                tracing::debug!(
                    target: "deck",
                    %id,
                    %active,
                    replaced = ?replaced.as_ref().map(PanelId::as_str),
                    "queued behind active panel"
                );
                OpenOutcome::Queued { replaced }
            }
        }
    }

    /// Informational hook: a panel has started closing on its own
    pub fn request_close(&self, id: &PanelId) {
        tracing::trace!(target: "deck", %id, active = ?self.active.as_ref().map(PanelId::as_str), "close requested");
    }

    /// A panel finished its closing sequence
    ///
    /// Only the active panel's notification counts, so a repeated or late
    /// notification can never promote a stale pending id.
    pub fn notify_close_complete(&mut self, from: &PanelId) -> Settlement {
        if self.active.as_ref() != Some(from) {
            tracing::debug!(target: "deck", %from, "stale close-complete ignored");
            return Settlement::Stale;
        }

        match self.pending.take() {
            Some(next) if self.contains(&next) => {
                tracing::debug!(target: "deck", %from, %next, "promoted pending panel");
                self.active = Some(next.clone());
                Settlement::Promoted(next)
            }
            Some(orphan) => {
                tracing::warn!(target: "deck", %orphan, "pending panel no longer exists, dropped");
                self.active = None;
                Settlement::DroppedOrphan(orphan)
            }
            None => {
                tracing::debug!(target: "deck", %from, "deck cleared");
                self.active = None;
                Settlement::Cleared
            }
        }
    }

    /// Bump the force-close counter; every change asks open panels to close
    pub fn raise_force_close(&mut self) -> u64 {
        self.force_close = self.force_close.wrapping_add(1);
        tracing::debug!(target: "deck", signal = self.force_close, "force-close raised");
        self.force_close
    }

    /// Forget a panel
    ///
    /// A pending request for it stays in the slot and is dropped at promotion
    /// time. If it was active, its close is treated as complete.
    pub fn remove_panel(&mut self, id: &PanelId) -> Option<Settlement> {
        let before = self.panel_ids.len();
        self.panel_ids.retain(|p| p != id);
        if self.panel_ids.len() == before {
            return None;
        }
        tracing::debug!(target: "deck", %id, "panel removed");
        self.is_active(id).then(|| self.notify_close_complete(id))
    }

    /// Check the coordinator invariants, describing the first violation
    pub fn check_invariants(&self) -> Result<(), String> {
        if let (Some(active), Some(pending)) = (&self.active, &self.pending) {
            if active == pending {
                return Err(format!("pending id {} equals active id", pending));
            }
        }
        if self.active.is_none() && self.pending.is_some() {
            return Err(format!(
                "pending id {:?} with no active panel",
                self.pending.as_ref().map(PanelId::as_str)
            ));
        }
        if let Some(active) = &self.active {
            if !self.contains(active) {
                return Err(format!("active id {} is not a configured panel", active));
            }
        }
        Ok(())
    }
}
