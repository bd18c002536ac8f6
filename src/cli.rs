//! Command-line argument parsing for the scenario runner
//!
//! Supports:
//! - Replaying a YAML script (or the built-in demo)
//! - An explicit config file
//! - JSON-lines output
//! - Draining animations after the script ends

use clap::Parser;
use std::path::PathBuf;

/// Replay accordion deck scenarios
#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Replay accordion deck scenarios")]
pub struct CliArgs {
    /// Scenario script to replay (runs the built-in demo when omitted)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print trace events as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Drain in-flight animations after the script ends
    #[arg(short = 's', long)]
    pub settle: bool,
}

/// Where the steps come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Demo,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub script: ScriptSource,
    /// Explicit config path; `None` means the default location
    pub config_path: Option<PathBuf>,
    pub output: OutputFormat,
    pub settle: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> RunConfig {
        let script = match self.script {
            Some(path) => ScriptSource::File(path),
            None => ScriptSource::Demo,
        };
        let output = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        RunConfig {
            script,
            config_path: self.config,
            output,
            settle: self.settle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_runs_demo() {
        let args = CliArgs {
            script: None,
            config: None,
            json: false,
            settle: false,
        };
        let config = args.into_config();
        assert_eq!(config.script, ScriptSource::Demo);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.settle);
    }

    #[test]
    fn test_script_path() {
        let args = CliArgs {
            script: Some(PathBuf::from("handover.yaml")),
            config: None,
            json: false,
            settle: true,
        };
        let config = args.into_config();
        assert_eq!(
            config.script,
            ScriptSource::File(PathBuf::from("handover.yaml"))
        );
        assert!(config.settle);
    }

    #[test]
    fn test_json_and_config_flags() {
        let args = CliArgs::parse_from(["folio", "--json", "--config", "deck.yaml"]);
        let config = args.into_config();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.config_path, Some(PathBuf::from("deck.yaml")));
        assert_eq!(config.script, ScriptSource::Demo);
    }
}
