//! Simulated layer animator
//!
//! Stands in for the rendering layer's transition engine. Each `(panel,
//! layer)` pair has at most one transition in flight; a retarget while one
//! is running is queued and started once the running transition completes.
//! Nothing is ever aborted.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::TimingConfig;
use crate::panel::{Layer, LayerState, PanelId};

/// A finished layer transition, to be fed back as `PanelMsg::LayerSettled`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub panel: PanelId,
    pub layer: Layer,
    pub state: LayerState,
    pub at: Duration,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    target: LayerState,
    deadline: Duration,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
struct Track {
    settled: LayerState,
    in_flight: Option<InFlight>,
    queued: Option<LayerState>,
}

#[derive(Debug, Clone)]
pub struct Animator {
    timing: TimingConfig,
    now: Duration,
    next_seq: u64,
    tracks: HashMap<(PanelId, Layer), Track>,
}

impl Animator {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            now: Duration::ZERO,
            next_seq: 0,
            tracks: HashMap::new(),
        }
    }

    /// Current simulated time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of transitions currently running
    pub fn in_flight(&self) -> usize {
        self.tracks.values().filter(|t| t.in_flight.is_some()).count()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight() == 0
    }

    /// Last state `layer` of `panel` came to rest at
    pub fn settled(&self, panel: &PanelId, layer: Layer) -> LayerState {
        self.tracks
            .get(&(panel.clone(), layer))
            .map(|t| t.settled)
            .unwrap_or_default()
    }

    /// Start (or queue) a transition of `layer` toward `target`
    pub fn start(&mut self, panel: &PanelId, layer: Layer, target: LayerState) {
        let duration = self.timing.duration(layer);
        let now = self.now;
        let seq = self.next_seq;
        let track = self.tracks.entry((panel.clone(), layer)).or_default();

        match track.in_flight {
            Some(running) if running.target == target => {
                track.queued = None;
            }
            Some(_) => {
                tracing::trace!(target: "panel", %panel, %layer, %target, "retarget queued");
                track.queued = Some(target);
            }
            None => {
                // Already resting at the target: report completion right away
                let deadline = if track.settled == target {
                    now
                } else {
                    now + duration
                };
                track.in_flight = Some(InFlight {
                    target,
                    deadline,
                    seq,
                });
                self.next_seq += 1;
            }
        }
    }

    /// Deadline of the next transition to finish
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tracks
            .values()
            .filter_map(|t| t.in_flight.map(|f| f.deadline))
            .min()
    }

    /// Complete the earliest transition whose deadline is at or before `until`
    pub fn pop_due(&mut self, until: Duration) -> Option<Completion> {
        let key = self
            .tracks
            .iter()
            .filter_map(|(key, t)| t.in_flight.map(|f| (f.deadline, f.seq, key)))
            .filter(|(deadline, _, _)| *deadline <= until)
            .min_by_key(|(deadline, seq, _)| (*deadline, *seq))
            .map(|(_, _, key)| key.clone())?;

        Some(self.complete(key))
    }

    /// Complete the earliest transition regardless of its deadline
    pub fn pop_next(&mut self) -> Option<Completion> {
        let deadline = self.next_deadline()?;
        self.pop_due(deadline)
    }

    /// Move the clock forward without completing anything
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn complete(&mut self, key: (PanelId, Layer)) -> Completion {
        let duration = self.timing.duration(key.1);
        let seq = self.next_seq;
        let track = self.tracks.entry(key.clone()).or_default();

        let mut finished = track.in_flight.take().unwrap_or(InFlight {
            target: track.settled,
            deadline: self.now,
            seq,
        });
        finished.deadline = finished.deadline.max(self.now);
        track.settled = finished.target;

        if let Some(next) = track.queued.take() {
            track.in_flight = Some(InFlight {
                target: next,
                deadline: finished.deadline + duration,
                seq,
            });
            self.next_seq += 1;
        }

        self.now = finished.deadline;
        Completion {
            panel: key.0,
            layer: key.1,
            state: finished.target,
            at: finished.deadline,
        }
    }
}
