//! Scroll sentinel handlers
//!
//! Glue between viewport observations and the deck's force-close counter.

use crate::commands::Cmd;
use crate::messages::ScrollMsg;
use crate::model::{AppModel, SentinelEdge};

/// Raise force-close when the marker leaves the viewport while a panel is active
pub fn update_scroll(model: &mut AppModel, msg: ScrollMsg) -> Option<Cmd> {
    let edge = match msg {
        ScrollMsg::Intersection(intersecting) => model.sentinel.observe(intersecting),
        ScrollMsg::Observe(marker) => model.sentinel.observe_geometry(&marker),
    };

    if edge != SentinelEdge::Exited {
        return None;
    }

    match model.deck.active() {
        Some(active) => {
            tracing::debug!(target: "sentinel", %active, "deck scrolled out of view");
            model.deck.raise_force_close();
            Some(Cmd::Redraw)
        }
        None => None,
    }
}
