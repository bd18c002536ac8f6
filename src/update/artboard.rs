//! Artboard boundary handlers

use crate::commands::Cmd;
use crate::messages::ArtboardMsg;
use crate::model::AppModel;

pub fn update_artboard(model: &mut AppModel, msg: ArtboardMsg) -> Option<Cmd> {
    let changed = match msg {
        ArtboardMsg::Scaled { scale_factor } => model.artboard.set_scale(scale_factor),
        ArtboardMsg::Ready => model.artboard.mark_ready(),
    };
    changed.then_some(Cmd::Redraw)
}
