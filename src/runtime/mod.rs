//! Runtime module - drives the model without a renderer
//!
//! - `animator` - simulated layer transitions on a virtual clock
//! - `app` - message loop, command execution and event trace

pub mod animator;
pub mod app;

pub use animator::{Animator, Completion};
pub use app::{App, Navigator, RecordingNavigator, TraceEvent, MAX_SETTLE_STEPS};
