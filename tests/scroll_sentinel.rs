//! Scroll sentinel tests
//!
//! Force-close raised by the deck's trailing marker leaving the viewport.

mod common;

use common::{close_completes, phase_of, phase_trace, test_app};
use folio::messages::{Msg, ScrollMsg};
use folio::model::MarkerGeometry;
use folio::panel::AnimationPhase;

use AnimationPhase::*;

fn marker_at(top: f32) -> Msg {
    Msg::Scroll(ScrollMsg::Observe(MarkerGeometry {
        top,
        bottom: top + 1.0,
        viewport_height: 1000.0,
    }))
}

fn scroll_past(app: &mut folio::runtime::App) {
    app.dispatch(Msg::intersection(true));
    app.dispatch(Msg::intersection(false));
}

#[test]
fn test_initial_observation_never_fires() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));
    app.settle();

    app.dispatch(Msg::intersection(false));

    assert_eq!(app.model().deck.force_close_signal(), 0);
    assert_eq!(phase_of(app.model(), "x"), (Idle, true));
}

#[test]
fn test_exit_closes_open_panel() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));
    app.settle();
    app.take_trace();

    scroll_past(&mut app);
    assert_eq!(app.model().deck.force_close_signal(), 1);
    assert_eq!(phase_of(app.model(), "x"), (Dropdown, false));

    app.settle();
    assert_eq!(phase_of(app.model(), "x"), (Idle, false));
    assert_eq!(app.model().deck.active(), None);
    assert_eq!(close_completes(app.trace(), "x"), 1);
}

#[test]
fn test_exit_with_nothing_open_does_not_raise() {
    let mut app = test_app();
    scroll_past(&mut app);
    assert_eq!(app.model().deck.force_close_signal(), 0);
}

#[test]
fn test_repeated_force_close_does_not_restart_closing() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));
    app.settle();
    app.take_trace();

    scroll_past(&mut app);
    scroll_past(&mut app);
    assert_eq!(app.model().deck.force_close_signal(), 2);
    assert_eq!(phase_of(app.model(), "x"), (Dropdown, false));

    app.settle();
    let trace = app.take_trace();
    assert_eq!(
        phase_trace(&trace, "x"),
        vec![
            (Dropdown, false),
            (Chevron, false),
            (Pill, false),
            (Idle, false)
        ]
    );
    assert_eq!(close_completes(&trace, "x"), 1);
}

#[test]
fn test_force_close_while_opening_is_consumed_without_closing() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));

    scroll_past(&mut app);
    assert_eq!(app.model().deck.force_close_signal(), 1);
    assert_eq!(phase_of(app.model(), "x"), (Pill, true));

    app.settle();
    assert_eq!(phase_of(app.model(), "x"), (Idle, true));

    // The earlier signal does not fire late once the panel is open
    app.dispatch(Msg::intersection(true));
    assert_eq!(phase_of(app.model(), "x"), (Idle, true));
}

#[test]
fn test_geometry_uses_bottom_margin() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));
    app.settle();

    // Seeds as intersecting: 500 < 1000 * (1 - 0.4)
    app.dispatch(marker_at(500.0));
    assert_eq!(app.model().sentinel.is_intersecting(), Some(true));

    // Still visible on screen, but inside the bottom margin
    app.dispatch(marker_at(700.0));
    assert_eq!(app.model().sentinel.is_intersecting(), Some(false));
    assert_eq!(app.model().deck.force_close_signal(), 1);
    assert_eq!(phase_of(app.model(), "x"), (Dropdown, false));
}

#[test]
fn test_marker_above_viewport_counts_as_exit() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));
    app.settle();

    app.dispatch(marker_at(100.0));
    app.dispatch(marker_at(-50.0));

    assert_eq!(app.model().deck.force_close_signal(), 1);
}
