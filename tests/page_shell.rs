//! Page shell boundary tests
//!
//! Section navigation, the artboard scaler and derived deck presentation.

mod common;

use common::{test_app, test_model};
use folio::commands::Cmd;
use folio::messages::{ArtboardMsg, Msg};
use folio::model::SectionEntry;
use folio::runtime::TraceEvent;
use folio::update::update;
use folio::view::{
    DeckView, ACTIVE_PANEL_Z_INDEX, CLOSED_SECTION_Z_INDEX, OPEN_SECTION_Z_INDEX,
};

// ========================================================================
// Navigation
// ========================================================================

#[test]
fn test_scroll_to_registered_section() {
    let mut model = test_model();
    let cmd = update(&mut model, Msg::scroll_to("meet-the-creative"));
    assert_eq!(
        cmd,
        Some(Cmd::ScrollToSection {
            id: "meet-the-creative".into(),
            index: 2
        })
    );
}

#[test]
fn test_scroll_to_unknown_section_is_ignored() {
    let mut model = test_model();
    assert_eq!(update(&mut model, Msg::scroll_to("footer")), None);
}

#[test]
fn test_reregistering_section_moves_it() {
    let mut model = test_model();
    model
        .sections
        .register(SectionEntry::new("hero", 10, "HeroUnit"));

    assert_eq!(model.sections.len(), 5);
    assert_eq!(model.sections.position("hero"), Some(4));
    assert_eq!(model.sections.position("toc"), Some(0));
}

#[test]
fn test_navigation_does_not_disturb_deck() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));
    app.dispatch(Msg::scroll_to("projects"));

    let scrolled = app.trace().iter().any(|e| {
        matches!(e, TraceEvent::ScrollTo { section, index: 3, .. } if section == "projects")
    });
    assert!(scrolled);
    assert_eq!(app.navigator().requests, vec![("projects".to_string(), 3)]);
    assert!(app.model().deck.active().is_some());
}

// ========================================================================
// Artboard
// ========================================================================

#[test]
fn test_content_hidden_until_ready() {
    let mut model = test_model();
    assert!(!DeckView::new(&model).content_visible);

    update(
        &mut model,
        Msg::Artboard(ArtboardMsg::Scaled { scale_factor: 0.75 }),
    );
    let view = DeckView::new(&model);
    assert!(!view.content_visible);
    assert_eq!(view.scale, 0.75);

    update(&mut model, Msg::Artboard(ArtboardMsg::Ready));
    assert!(DeckView::new(&model).content_visible);
}

#[test]
fn test_invalid_scale_keeps_previous() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Artboard(ArtboardMsg::Scaled { scale_factor: 0.5 }),
    );
    let cmd = update(
        &mut model,
        Msg::Artboard(ArtboardMsg::Scaled {
            scale_factor: -1.0,
        }),
    );

    assert_eq!(cmd, None);
    assert_eq!(model.artboard.effective_scale(), 0.5);
}

// ========================================================================
// Deck view
// ========================================================================

#[test]
fn test_section_lifts_while_panel_open() {
    let mut app = test_app();
    assert_eq!(
        DeckView::new(app.model()).section_z_index,
        CLOSED_SECTION_Z_INDEX
    );

    app.dispatch(Msg::toggle("y"));
    let view = DeckView::new(app.model());
    assert_eq!(view.section_z_index, OPEN_SECTION_Z_INDEX);
    assert_eq!(view.panel("y").unwrap().z_index, ACTIVE_PANEL_Z_INDEX);
    assert!(view.panel("x").unwrap().dimmed);
    assert!(view.panel("z").unwrap().dimmed);
    assert!(!view.panel("y").unwrap().dimmed);
}

#[test]
fn test_closing_panel_keeps_glow_until_settled() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));
    app.settle();
    app.dispatch(Msg::toggle("x"));

    let view = DeckView::new(app.model());
    let x = view.panel("x").unwrap();
    assert!(!x.expanded);
    assert!(x.glow);
    assert_eq!(x.aria_label, "Expand x");

    app.settle();
    let view = DeckView::new(app.model());
    assert!(!view.panel("x").unwrap().glow);
    assert_eq!(view.section_z_index, CLOSED_SECTION_Z_INDEX);
}

#[test]
fn test_view_serializes_to_json() {
    let mut app = test_app();
    app.dispatch(Msg::toggle("x"));
    let json = serde_json::to_value(DeckView::new(app.model())).unwrap();

    assert_eq!(json["active"], "x");
    assert_eq!(json["panels"][0]["phase"], "pill");
    assert_eq!(json["panels"][0]["pill"], "expanded");
}
