//! Deck coordination tests
//!
//! Mutual exclusion, pending supersession, promotion and unmounting, driven
//! through `update` with layer callbacks answered by hand.

mod common;

use common::{expanded_ids, phase_of, run_to_rest, settle_current_layer, test_model};
use folio::messages::{DeckMsg, Msg};
use folio::model::{DeckState, OpenOutcome, Settlement};
use folio::panel::{AnimationPhase, PanelId};
use folio::update::update;

use AnimationPhase::*;

fn id(s: &str) -> PanelId {
    PanelId::new(s)
}

// ========================================================================
// Coordinator operations
// ========================================================================

#[test]
fn test_request_open_on_empty_deck_activates() {
    let mut deck = DeckState::new([id("x"), id("y")]);
    assert_eq!(deck.request_open(&id("x")), OpenOutcome::Activated);
    assert_eq!(deck.active(), Some(&id("x")));
    assert_eq!(deck.pending(), None);
}

#[test]
fn test_request_open_unknown_panel_is_ignored() {
    let mut deck = DeckState::new([id("x")]);
    assert_eq!(deck.request_open(&id("nope")), OpenOutcome::Unknown);
    assert_eq!(deck.active(), None);
}

#[test]
fn test_notify_close_complete_twice_changes_state_once() {
    let mut deck = DeckState::new([id("x"), id("y")]);
    deck.request_open(&id("x"));
    deck.request_open(&id("y"));

    assert_eq!(
        deck.notify_close_complete(&id("x")),
        Settlement::Promoted(id("y"))
    );
    let after_first = (deck.active().cloned(), deck.pending().cloned());

    assert_eq!(deck.notify_close_complete(&id("x")), Settlement::Stale);
    assert_eq!(
        (deck.active().cloned(), deck.pending().cloned()),
        after_first
    );
}

#[test]
fn test_notify_without_pending_clears_deck() {
    let mut deck = DeckState::new([id("x")]);
    deck.request_open(&id("x"));
    assert_eq!(deck.notify_close_complete(&id("x")), Settlement::Cleared);
    assert_eq!(deck.active(), None);
}

// ========================================================================
// Through update
// ========================================================================

#[test]
fn test_click_opens_panel() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));

    assert_eq!(model.deck.active(), Some(&id("x")));
    assert_eq!(phase_of(&model, "x"), (Pill, true));
}

#[test]
fn test_self_open_does_not_restart_sequence() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));
    settle_current_layer(&mut model, "x");
    assert_eq!(phase_of(&model, "x"), (Chevron, true));

    let cmd = update(&mut model, Msg::request_open("x"));

    assert!(cmd.is_none());
    assert_eq!(phase_of(&model, "x"), (Chevron, true));
    assert_eq!(model.deck.pending(), None);
}

#[test]
fn test_pending_sibling_closes_active_panel() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));
    run_to_rest(&mut model, "x");
    assert_eq!(phase_of(&model, "x"), (Idle, true));

    update(&mut model, Msg::toggle("y"));

    assert_eq!(model.deck.active(), Some(&id("x")));
    assert_eq!(model.deck.pending(), Some(&id("y")));
    assert_eq!(phase_of(&model, "x"), (Dropdown, false));
    assert_eq!(phase_of(&model, "y"), (Idle, false));
}

#[test]
fn test_handover_scenario() {
    let mut model = test_model();

    // X opens and reaches the chevron phase
    update(&mut model, Msg::request_open("x"));
    assert_eq!(model.deck.active(), Some(&id("x")));
    settle_current_layer(&mut model, "x");
    assert_eq!(phase_of(&model, "x"), (Chevron, true));

    // Y asks while X is mid-open: queued, X reverses from chevron
    update(&mut model, Msg::request_open("y"));
    assert_eq!(model.deck.pending(), Some(&id("y")));
    assert_eq!(phase_of(&model, "x"), (Chevron, false));

    // X unwinds; its final step hands the deck to Y
    settle_current_layer(&mut model, "x");
    assert_eq!(phase_of(&model, "x"), (Pill, false));
    assert_eq!(model.deck.active(), Some(&id("x")));

    settle_current_layer(&mut model, "x");
    assert_eq!(phase_of(&model, "x"), (Idle, false));
    assert_eq!(model.deck.active(), Some(&id("y")));
    assert_eq!(model.deck.pending(), None);
    assert_eq!(phase_of(&model, "y"), (Pill, true));
}

#[test]
fn test_last_pending_request_wins() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));
    run_to_rest(&mut model, "x");

    update(&mut model, Msg::toggle("y"));
    update(&mut model, Msg::toggle("z"));
    assert_eq!(model.deck.pending(), Some(&id("z")));

    run_to_rest(&mut model, "x");

    assert_eq!(model.deck.active(), Some(&id("z")));
    assert_eq!(phase_of(&model, "z"), (Pill, true));
    assert_eq!(phase_of(&model, "y"), (Idle, false));

    run_to_rest(&mut model, "z");
    assert_eq!(phase_of(&model, "y"), (Idle, false));
    assert_eq!(expanded_ids(&model), vec!["z"]);
}

#[test]
fn test_at_most_one_panel_expanded_during_handover() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));

    for step in 0..12 {
        match step % 3 {
            0 => {
                update(&mut model, Msg::toggle("y"));
            }
            1 => {
                settle_current_layer(&mut model, "x");
            }
            _ => {
                settle_current_layer(&mut model, "y");
            }
        }
        assert!(expanded_ids(&model).len() <= 1, "step {}", step);
        assert!(model.check_invariants().is_ok());
    }
}

#[test]
fn test_toggle_open_panel_closes_and_clears_deck() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));
    run_to_rest(&mut model, "x");

    update(&mut model, Msg::toggle("x"));
    assert_eq!(phase_of(&model, "x"), (Dropdown, false));
    run_to_rest(&mut model, "x");

    assert_eq!(model.deck.active(), None);
    assert!(model.is_quiescent());
}

#[test]
fn test_click_while_closing_is_ignored() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));
    run_to_rest(&mut model, "x");
    update(&mut model, Msg::toggle("x"));

    update(&mut model, Msg::toggle("x"));

    assert_eq!(phase_of(&model, "x"), (Dropdown, false));
    assert_eq!(model.deck.pending(), None);
}

// ========================================================================
// Unmount
// ========================================================================

#[test]
fn test_unmount_pending_panel_is_dropped_at_promotion() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));
    run_to_rest(&mut model, "x");
    update(&mut model, Msg::toggle("y"));

    update(&mut model, Msg::Deck(DeckMsg::Unmount(id("y"))));
    assert!(model.panel(&id("y")).is_none());

    run_to_rest(&mut model, "x");
    assert_eq!(model.deck.active(), None);
    assert_eq!(model.deck.pending(), None);
}

#[test]
fn test_unmount_active_panel_promotes_pending() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("x"));
    run_to_rest(&mut model, "x");
    update(&mut model, Msg::toggle("y"));

    update(&mut model, Msg::Deck(DeckMsg::Unmount(id("x"))));

    assert_eq!(model.deck.active(), Some(&id("y")));
    assert_eq!(phase_of(&model, "y"), (Pill, true));
}
