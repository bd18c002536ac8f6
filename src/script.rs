//! YAML scenario scripts
//!
//! A script is a list of steps replayed against an [`App`]:
//!
//! ```yaml
//! steps:
//!   - action: click
//!     panel: row1
//!   - action: advance
//!     ms: 300
//!   - action: request_open
//!     panel: row2
//!   - action: settle
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::messages::{ArtboardMsg, DeckMsg, Msg, ScrollMsg};
use crate::model::MarkerGeometry;
use crate::runtime::{App, Navigator};

/// One scripted interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Pill click on a panel
    Click { panel: String },
    /// Open request that bypasses the toggle logic
    RequestOpen { panel: String },
    /// Let simulated time pass
    Advance { ms: u64 },
    /// Deliver the next animation completion
    Next,
    /// Deliver completions until nothing is in flight
    Settle,
    /// Raw scroll-marker observation
    Intersect { value: bool },
    /// Scroll-marker geometry, evaluated with the configured margin
    Observe {
        top: f32,
        bottom: f32,
        viewport_height: f32,
    },
    Navigate { section: String },
    Scaled { factor: f32 },
    Ready,
    Unmount { panel: String },
    Pause,
    Resume,
}

impl Step {
    /// Apply this step to `app`
    pub fn apply<N: Navigator>(&self, app: &mut App<N>) {
        match self {
            Step::Click { panel } => app.dispatch(Msg::toggle(panel.as_str())),
            Step::RequestOpen { panel } => app.dispatch(Msg::request_open(panel.as_str())),
            Step::Advance { ms } => app.advance(Duration::from_millis(*ms)),
            Step::Next => {
                app.step();
            }
            Step::Settle => {
                app.settle();
            }
            Step::Intersect { value } => app.dispatch(Msg::intersection(*value)),
            Step::Observe {
                top,
                bottom,
                viewport_height,
            } => app.dispatch(Msg::Scroll(ScrollMsg::Observe(MarkerGeometry {
                top: *top,
                bottom: *bottom,
                viewport_height: *viewport_height,
            }))),
            Step::Navigate { section } => app.dispatch(Msg::scroll_to(section.as_str())),
            Step::Scaled { factor } => app.dispatch(Msg::Artboard(ArtboardMsg::Scaled {
                scale_factor: *factor,
            })),
            Step::Ready => app.dispatch(Msg::Artboard(ArtboardMsg::Ready)),
            Step::Unmount { panel } => {
                app.dispatch(Msg::Deck(DeckMsg::Unmount(panel.as_str().into())))
            }
            Step::Pause => app.pause_animations(),
            Step::Resume => app.resume_animations(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid script {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Built-in walkthrough on the default deck
    ///
    /// Opens `row1`, asks for `row2` while `row1` is still opening, lets the
    /// hand-over finish, then scrolls past the deck to force `row2` closed.
    pub fn demo() -> Self {
        Self {
            steps: vec![
                Step::Scaled { factor: 0.8 },
                Step::Ready,
                Step::Click {
                    panel: "row1".into(),
                },
                Step::Advance { ms: 300 },
                Step::Click {
                    panel: "row2".into(),
                },
                Step::Settle,
                Step::Intersect { value: true },
                Step::Intersect { value: false },
                Step::Settle,
                Step::Navigate {
                    section: "projects".into(),
                },
            ],
        }
    }

    pub fn run<N: Navigator>(&self, app: &mut App<N>) {
        for step in &self.steps {
            tracing::debug!(target: "message", ?step, "script step");
            step.apply(app);
        }
    }
}
