//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each message is
//! handled to completion, then every panel is reconciled against the new
//! deck state before `update` returns.

mod artboard;
mod deck;
mod nav;
mod panel;
mod scroll;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::DeckSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use artboard::update_artboard;
pub use deck::update_deck;
pub use nav::update_nav;
pub use panel::update_panel;
pub use scroll::update_scroll;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Deck(m) => deck::update_deck(model, m),
        Msg::Scroll(m) => scroll::update_scroll(model, m),
        Msg::Artboard(m) => artboard::update_artboard(model, m),
        Msg::Nav(m) => nav::update_nav(model, m),
    };

    let mut cmds: Vec<Cmd> = result.into_iter().collect();
    cmds.extend(reconcile_panels(model));

    match Cmd::batch(cmds) {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}

/// Hand the current deck state down to every panel
///
/// Each panel sees whether it is active, whether a sibling is queued, and
/// the force-close counter, and may start an opening or closing sequence in
/// response. Panels never touch the deck here beyond the informational
/// close request.
pub fn reconcile_panels(model: &mut AppModel) -> Vec<Cmd> {
    let mut cmds = Vec::new();

    for index in 0..model.panels.len() {
        let live = model.deck.live_inputs(&model.panels[index].id);
        if let Some(output) = model.panels[index].reconcile(&live) {
            let id = model.panels[index].id.clone();
            cmds.push(panel::apply_output(model, &id, output));
        }
    }

    cmds
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after deck state, logs diffs, and checks invariants.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = DeckSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = DeckSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "deck", %diff, "state changed");
    }

    model.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::Toggle(PanelId("row1"))`
/// - `Scroll::Intersection(false)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Deck(m) => format!("Deck::{:?}", m),
        Msg::Scroll(m) => format!("Scroll::{:?}", m),
        Msg::Artboard(m) => format!("Artboard::{:?}", m),
        Msg::Nav(m) => format!("Nav::{:?}", m),
    }
}
