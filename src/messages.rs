//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::{Deserialize, Serialize};

use crate::model::MarkerGeometry;
use crate::panel::{Layer, LayerState, PanelId};

/// Messages originating from a single panel (user input, animation callbacks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelMsg {
    /// The pill was clicked: close if open, otherwise ask the deck to open it
    Toggle(PanelId),
    /// A layer animation finished at `state`
    LayerSettled {
        id: PanelId,
        layer: Layer,
        state: LayerState,
    },
}

/// Coordinator-level messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeckMsg {
    /// Ask for a panel to become the open one
    RequestOpen(PanelId),
    /// Remove a panel from the deck
    Unmount(PanelId),
}

/// Viewport observations of the marker at the end of the deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScrollMsg {
    /// Raw observer result
    Intersection(bool),
    /// Marker geometry; intersection is computed with the configured margin
    Observe(MarkerGeometry),
}

/// Artboard scaler boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArtboardMsg {
    /// A new uniform scale factor is available
    Scaled { scale_factor: f32 },
    /// A valid measurement was taken; content may be shown
    Ready,
}

/// Page navigation requests from outside the deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavMsg {
    ScrollToSection(String),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    Panel(PanelMsg),
    Deck(DeckMsg),
    Scroll(ScrollMsg),
    Artboard(ArtboardMsg),
    Nav(NavMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a pill click message
    pub fn toggle(id: impl Into<PanelId>) -> Self {
        Msg::Panel(PanelMsg::Toggle(id.into()))
    }

    /// Create an open request message
    pub fn request_open(id: impl Into<PanelId>) -> Self {
        Msg::Deck(DeckMsg::RequestOpen(id.into()))
    }

    /// Create a layer-settled callback message
    pub fn layer_settled(id: impl Into<PanelId>, layer: Layer, state: LayerState) -> Self {
        Msg::Panel(PanelMsg::LayerSettled {
            id: id.into(),
            layer,
            state,
        })
    }

    /// Create a raw intersection observation message
    pub fn intersection(intersecting: bool) -> Self {
        Msg::Scroll(ScrollMsg::Intersection(intersecting))
    }

    /// Create a navigation message
    pub fn scroll_to(section: impl Into<String>) -> Self {
        Msg::Nav(NavMsg::ScrollToSection(section.into()))
    }
}
