//! Headless deck driver
//!
//! Owns the model and the simulated animator, feeds messages through
//! `update`, executes the resulting commands and records an event trace.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use serde::Serialize;

use crate::commands::Cmd;
use crate::config::FolioConfig;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::panel::{AnimationPhase, Layer, LayerState, PanelId};
use crate::update::update;

use super::animator::Animator;

/// Upper bound on completions delivered by a single [`App::settle`]
pub const MAX_SETTLE_STEPS: usize = 10_000;

/// Receives scroll-to-section requests produced by navigation messages
pub trait Navigator {
    fn scroll_to(&mut self, id: &str, index: usize);
}

/// Navigator that remembers every request
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub requests: Vec<(String, usize)>,
}

impl Navigator for RecordingNavigator {
    fn scroll_to(&mut self, id: &str, index: usize) {
        self.requests.push((id.to_string(), index));
    }
}

/// Observable event, stamped with simulated time in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A panel's `(phase, expanded)` pair changed
    Phase {
        at_ms: u64,
        panel: PanelId,
        phase: AnimationPhase,
        expanded: bool,
    },
    /// A panel finished closing and reported back to the deck
    CloseComplete { at_ms: u64, panel: PanelId },
    /// The deck's active or pending slot changed
    Deck {
        at_ms: u64,
        active: Option<PanelId>,
        pending: Option<PanelId>,
    },
    ForceClose { at_ms: u64, signal: u64 },
    Animate {
        at_ms: u64,
        panel: PanelId,
        layer: Layer,
        target: LayerState,
    },
    ScrollTo {
        at_ms: u64,
        section: String,
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Observed {
    active: Option<PanelId>,
    pending: Option<PanelId>,
    force_close: u64,
    panels: HashMap<PanelId, (AnimationPhase, bool)>,
}

impl Observed {
    fn of(model: &AppModel) -> Self {
        Self {
            active: model.deck.active().cloned(),
            pending: model.deck.pending().cloned(),
            force_close: model.deck.force_close_signal(),
            panels: model
                .panels
                .iter()
                .map(|p| (p.id.clone(), (p.phase, p.expanded)))
                .collect(),
        }
    }
}

pub struct App<N: Navigator = RecordingNavigator> {
    model: AppModel,
    animator: Animator,
    navigator: N,
    trace: Vec<TraceEvent>,
    redraws: u64,
    paused: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App<RecordingNavigator> {
    pub fn new(config: FolioConfig) -> Self {
        Self::with_navigator(config, RecordingNavigator::default())
    }
}

impl<N: Navigator> App<N> {
    pub fn with_navigator(config: FolioConfig, navigator: N) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let animator = Animator::new(config.timing);

        Self {
            model: AppModel::new(config),
            animator,
            navigator,
            trace: Vec::new(),
            redraws: 0,
            paused: false,
            msg_tx,
            msg_rx,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    pub fn take_trace(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.trace)
    }

    /// Number of commands that asked for a redraw
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn now(&self) -> Duration {
        self.animator.now()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// A sender that can inject messages from outside the driver
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Run a message (and everything it causes synchronously) to completion
    pub fn dispatch(&mut self, msg: Msg) {
        // The receiver lives as long as `self`, so this cannot fail
        let _ = self.msg_tx.send(msg);
        self.process_messages();
    }

    /// Freeze animation progress; completions are held back until resumed
    pub fn pause_animations(&mut self) {
        self.paused = true;
    }

    pub fn resume_animations(&mut self) {
        self.paused = false;
    }

    /// Deliver the next pending completion, jumping the clock to its deadline
    ///
    /// Returns `false` when paused or nothing is in flight.
    pub fn step(&mut self) -> bool {
        if self.paused {
            return false;
        }
        match self.animator.pop_next() {
            Some(done) => {
                self.dispatch(Msg::layer_settled(done.panel, done.layer, done.state));
                true
            }
            None => false,
        }
    }

    /// Let `dt` of simulated time pass, delivering every completion due
    pub fn advance(&mut self, dt: Duration) {
        if self.paused {
            return;
        }
        let until = self.animator.now() + dt;
        while let Some(done) = self.animator.pop_due(until) {
            self.dispatch(Msg::layer_settled(done.panel, done.layer, done.state));
        }
        self.animator.set_now(until);
    }

    /// Deliver completions until nothing is in flight
    ///
    /// Returns the number of completions delivered.
    pub fn settle(&mut self) -> usize {
        let mut steps = 0;
        while steps < MAX_SETTLE_STEPS && self.step() {
            steps += 1;
        }
        if steps == MAX_SETTLE_STEPS {
            tracing::warn!(target: "deck", steps, "settle stopped at step limit");
        }
        steps
    }

    fn process_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            let before = Observed::of(&self.model);
            let cmd = update(&mut self.model, msg);
            let after = Observed::of(&self.model);
            self.record(&before, &after);

            if let Some(cmd) = cmd {
                if cmd.needs_redraw() {
                    self.redraws += 1;
                }
                self.process_cmd(cmd);
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        let at_ms = self.at_ms();
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}
                Cmd::Animate {
                    panel,
                    layer,
                    target,
                } => {
                    self.animator.start(&panel, layer, target);
                    self.trace.push(TraceEvent::Animate {
                        at_ms,
                        panel,
                        layer,
                        target,
                    });
                }
                Cmd::ScrollToSection { id, index } => {
                    self.navigator.scroll_to(&id, index);
                    self.trace.push(TraceEvent::ScrollTo {
                        at_ms,
                        section: id,
                        index,
                    });
                }
            }
        }
    }

    fn record(&mut self, before: &Observed, after: &Observed) {
        let at_ms = self.at_ms();

        for panel in &self.model.panels {
            let now = (panel.phase, panel.expanded);
            let Some(&was) = before.panels.get(&panel.id) else {
                continue;
            };
            if was == now {
                continue;
            }
            self.trace.push(TraceEvent::Phase {
                at_ms,
                panel: panel.id.clone(),
                phase: panel.phase,
                expanded: panel.expanded,
            });
            if was == (AnimationPhase::Pill, false) && now == (AnimationPhase::Idle, false) {
                self.trace.push(TraceEvent::CloseComplete {
                    at_ms,
                    panel: panel.id.clone(),
                });
            }
        }

        if before.force_close != after.force_close {
            self.trace.push(TraceEvent::ForceClose {
                at_ms,
                signal: after.force_close,
            });
        }
        if before.active != after.active || before.pending != after.pending {
            self.trace.push(TraceEvent::Deck {
                at_ms,
                active: after.active.clone(),
                pending: after.pending.clone(),
            });
        }
    }

    fn at_ms(&self) -> u64 {
        self.animator.now().as_millis() as u64
    }
}
