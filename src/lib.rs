//! Folio - exclusive accordion deck
//!
//! This crate provides the coordination logic for a deck of expandable
//! panels of which at most one is open, implementing the Elm Architecture
//! pattern. Rendering is left to the host; the `runtime` module drives the
//! model headlessly on a simulated clock.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::FolioConfig;
pub use messages::Msg;
pub use model::AppModel;
