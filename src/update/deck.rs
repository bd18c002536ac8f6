//! Deck coordinator message handlers

use crate::commands::Cmd;
use crate::messages::DeckMsg;
use crate::model::{AppModel, OpenOutcome};
use crate::panel::PanelId;

/// Update function for deck messages
pub fn update_deck(model: &mut AppModel, msg: DeckMsg) -> Option<Cmd> {
    match msg {
        DeckMsg::RequestOpen(id) => request_open(model, &id),

        DeckMsg::Unmount(id) => {
            let before = model.panels.len();
            model.panels.retain(|p| p.id != id);
            if model.panels.len() == before {
                return None;
            }
            let settlement = model.deck.remove_panel(&id);
            tracing::debug!(target: "deck", %id, ?settlement, "panel unmounted");
            Some(Cmd::Redraw)
        }
    }
}

/// Ask the deck to open `id`; the reconcile pass starts any resulting sequence
pub(super) fn request_open(model: &mut AppModel, id: &PanelId) -> Option<Cmd> {
    match model.deck.request_open(id) {
        OpenOutcome::Activated | OpenOutcome::Queued { .. } => Some(Cmd::Redraw),
        OpenOutcome::AlreadyActive | OpenOutcome::AlreadyPending | OpenOutcome::Unknown => None,
    }
}
