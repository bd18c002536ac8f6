//! Navigation handlers (scroll-to-section requests from the page shell)

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::AppModel;

pub fn update_nav(model: &mut AppModel, msg: NavMsg) -> Option<Cmd> {
    match msg {
        NavMsg::ScrollToSection(id) => match model.sections.position(&id) {
            Some(index) => {
                tracing::debug!(target: "nav", %id, index, "scroll to section");
                Some(Cmd::ScrollToSection { id, index })
            }
            None => {
                tracing::warn!(target: "nav", %id, "scroll to unknown section ignored");
                None
            }
        },
    }
}
