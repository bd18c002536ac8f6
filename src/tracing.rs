//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging deck
//! coordination and panel phase transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=deck=debug,panel=trace` - scoped filtering
//! - `RUST_LOG=folio::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/folio/logs/folio.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;
use crate::panel::AnimationPhase;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/folio/logs/folio.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "folio.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of deck and panel state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSnapshot {
    pub active: Option<String>,
    pub pending: Option<String>,
    pub force_close: u64,
    pub panels: Vec<PanelInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    pub id: String,
    pub phase: AnimationPhase,
    pub expanded: bool,
}

impl DeckSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            active: model.deck.active().map(|id| id.to_string()),
            pending: model.deck.pending().map(|id| id.to_string()),
            force_close: model.deck.force_close_signal(),
            panels: model
                .panels
                .iter()
                .map(|p| PanelInfo {
                    id: p.id.to_string(),
                    phase: p.phase,
                    expanded: p.expanded,
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DeckSnapshot) -> Option<String> {
        fn slot(id: &Option<String>) -> &str {
            id.as_deref().unwrap_or("-")
        }

        let mut changes = Vec::new();

        if self.active != other.active {
            changes.push(format!("active: {} → {}", slot(&self.active), slot(&other.active)));
        }
        if self.pending != other.pending {
            changes.push(format!(
                "pending: {} → {}",
                slot(&self.pending),
                slot(&other.pending)
            ));
        }
        if self.force_close != other.force_close {
            changes.push(format!(
                "force-close: {} → {}",
                self.force_close, other.force_close
            ));
        }

        for after in &other.panels {
            match self.panels.iter().find(|p| p.id == after.id) {
                Some(before) if before == after => {}
                Some(before) => changes.push(format!(
                    "{}: ({},{}) → ({},{})",
                    after.id, before.phase, before.expanded, after.phase, after.expanded
                )),
                None => changes.push(format!("{}: added", after.id)),
            }
        }
        for before in &self.panels {
            if !other.panels.iter().any(|p| p.id == before.id) {
                changes.push(format!("{}: removed", before.id));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Msg;
    use crate::update::update;

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let model = AppModel::default();
        let a = DeckSnapshot::from_model(&model);
        let b = DeckSnapshot::from_model(&model);
        assert_eq!(a.diff(&b), None);
    }

    #[test]
    fn test_diff_reports_activation() {
        let mut model = AppModel::default();
        let before = DeckSnapshot::from_model(&model);
        update(&mut model, Msg::toggle("row1"));
        let after = DeckSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("active: - → row1"), "{}", diff);
        assert!(diff.contains("row1: (idle,false) → (pill,true)"), "{}", diff);
    }
}
