use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use folio::cli::{CliArgs, OutputFormat, ScriptSource};
use folio::config::FolioConfig;
use folio::runtime::{App, TraceEvent};
use folio::script::Script;
use folio::view::DeckView;

fn main() -> Result<()> {
    folio::tracing::init();

    let run = CliArgs::parse().into_config();

    let config = match &run.config_path {
        Some(path) => FolioConfig::load_from(path)?,
        None => FolioConfig::load(),
    };
    let script = match &run.script {
        ScriptSource::Demo => Script::demo(),
        ScriptSource::File(path) => Script::load(path)?,
    };

    let mut app = App::new(config);
    script.run(&mut app);
    if run.settle {
        app.settle();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let view = DeckView::new(app.model());

    match run.output {
        OutputFormat::Json => {
            for event in app.trace() {
                writeln!(out, "{}", serde_json::to_string(event)?)?;
            }
            writeln!(out, "{}", serde_json::to_string(&view)?)?;
        }
        OutputFormat::Text => {
            for event in app.trace() {
                writeln!(out, "{}", describe(event))?;
            }
            print_view(&mut out, &view)?;
        }
    }

    out.flush().context("failed to write output")?;
    Ok(())
}

fn slot(id: Option<&folio::panel::PanelId>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

fn describe(event: &TraceEvent) -> String {
    match event {
        TraceEvent::Phase {
            at_ms,
            panel,
            phase,
            expanded,
        } => format!(
            "{:>6}ms  {:<8} phase {} (expanded={})",
            at_ms,
            panel.as_str(),
            phase,
            expanded
        ),
        TraceEvent::CloseComplete { at_ms, panel } => {
            format!("{:>6}ms  {:<8} close complete", at_ms, panel.as_str())
        }
        TraceEvent::Deck {
            at_ms,
            active,
            pending,
        } => format!(
            "{:>6}ms  deck     active={} pending={}",
            at_ms,
            slot(active.as_ref()),
            slot(pending.as_ref())
        ),
        TraceEvent::ForceClose { at_ms, signal } => {
            format!("{:>6}ms  deck     force-close #{}", at_ms, signal)
        }
        TraceEvent::Animate {
            at_ms,
            panel,
            layer,
            target,
        } => format!(
            "{:>6}ms  {:<8} animate {} → {}",
            at_ms,
            panel.as_str(),
            layer,
            target
        ),
        TraceEvent::ScrollTo {
            at_ms,
            section,
            index,
        } => format!("{:>6}ms  nav      scroll to {} (#{})", at_ms, section, index),
    }
}

fn print_view(out: &mut impl Write, view: &DeckView) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "deck: active={} pending={} visible={} scale={:.2} z={}",
        view.active.as_deref().unwrap_or("-"),
        view.pending.as_deref().unwrap_or("-"),
        view.content_visible,
        view.scale,
        view.section_z_index
    )?;
    for panel in &view.panels {
        writeln!(
            out,
            "  {:<8} {:<8} expanded={:<5} glow={:<5} dimmed={:<5} z={:<3} [{} {} {}]",
            panel.id,
            panel.phase.to_string(),
            panel.expanded,
            panel.glow,
            panel.dimmed,
            panel.z_index,
            panel.pill,
            panel.chevron,
            panel.dropdown
        )?;
    }
    Ok(())
}
