//! Panel message handlers (pill clicks, layer animation callbacks)

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;
use crate::panel::{CloseReason, PanelEvent, PanelId, PanelOutput};

/// Handle panel messages
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Toggle(id) => {
            let Some(panel) = model.panel_mut(&id) else {
                tracing::debug!(target: "panel", %id, "toggle for unknown panel ignored");
                return None;
            };

            if panel.expanded {
                let output = panel.close(CloseReason::Toggle)?;
                model.deck.request_close(&id);
                Some(apply_output(model, &id, output))
            } else {
                super::deck::request_open(model, &id)
            }
        }

        PanelMsg::LayerSettled { id, layer, state } => {
            let Some(panel) = model.panel_mut(&id) else {
                tracing::debug!(target: "panel", %id, %layer, "callback for unknown panel ignored");
                return None;
            };

            match panel.apply(PanelEvent::LayerSettled { layer, state }) {
                Some(output) => Some(apply_output(model, &id, output)),
                None => {
                    tracing::trace!(target: "panel", %id, %layer, %state, "stale layer callback ignored");
                    None
                }
            }
        }
    }
}

/// Forward a panel's notifications to the deck and turn its animations into commands
pub(super) fn apply_output(model: &mut AppModel, id: &PanelId, output: PanelOutput) -> Cmd {
    if output.request_close {
        model.deck.request_close(id);
    }
    if output.close_complete {
        model.deck.notify_close_complete(id);
    }

    let mut cmds: Vec<Cmd> = output
        .animations
        .into_iter()
        .map(|(layer, target)| Cmd::Animate {
            panel: id.clone(),
            layer,
            target,
        })
        .collect();
    cmds.push(Cmd::Redraw);
    Cmd::batch(cmds)
}
