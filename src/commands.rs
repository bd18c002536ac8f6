//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use serde::Serialize;

use crate::panel::{Layer, LayerState, PanelId};

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the deck
    Redraw,
    /// Start animating a panel layer toward `target`
    ///
    /// The runtime answers with `PanelMsg::LayerSettled` once it finishes.
    Animate {
        panel: PanelId,
        layer: Layer,
        target: LayerState,
    },
    /// Scroll the page to a section
    ///
    /// `index` is the section's position in the ordered listing, used when
    /// no element carries the id.
    ScrollToSection { id: String, index: usize },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial batches
    pub fn batch(mut cmds: Vec<Cmd>) -> Self {
        cmds.retain(|cmd| !matches!(cmd, Cmd::None));
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::ScrollToSection { .. } => false,
            Cmd::Redraw | Cmd::Animate { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten into a list of leaf commands, in execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
