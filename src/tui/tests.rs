// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::{
    blog_page, centered_rect, demo_overlays, demo_tour, html_text, layout_page, tooltip_rect, App,
};
use crate::model::{HostEvent, Placement, Region, Selector};
use crate::overlay::SPOTLIGHT_STYLE;
use crate::store::CursorStore;
use crate::ui::TooltipTheme;

fn temp_state_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "guidepost-tui-{label}-{}-{:?}",
        std::process::id(),
        std::thread::current().id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

fn demo_app(label: &str) -> App {
    let config = demo_tour().expect("demo tour");
    let overlays = demo_overlays().expect("demo overlays");
    App::new(config, overlays, CursorStore::new(temp_state_dir(label)))
}

#[test]
fn html_text_drops_tags_and_keeps_content() {
    assert_eq!(html_text("<p>Hello <b>world</b></p>"), "Hello world");
    assert_eq!(html_text("plain"), "plain");
    assert_eq!(html_text("<br>"), "");
}

#[test]
fn tooltip_rect_places_relative_to_the_target() {
    let area = Rect::new(0, 0, 80, 24);
    let target = Region::new(10, 10, 20, 1);

    let top = tooltip_rect(target, Placement::Top, 6, area);
    assert_eq!(top.y, 9);

    let below = tooltip_rect(target, Placement::BottomStart, 6, area);
    assert_eq!((below.x, below.y), (10, 11));

    let right = tooltip_rect(target, Placement::Right, 6, area);
    assert_eq!((right.x, right.y), (30, 10));
}

#[test]
fn tooltip_rect_is_clamped_to_the_screen() {
    let area = Rect::new(0, 0, 40, 10);
    let target = Region::new(35, 0, 5, 1);

    let rect = tooltip_rect(target, Placement::TopEnd, 12, area);
    assert!(rect.x + rect.width <= area.width);
    assert_eq!(rect.y, 0);
}

#[test]
fn centered_rect_stays_inside_the_area() {
    let area = Rect::new(0, 0, 100, 40);
    let rect = centered_rect(60, 50, area);
    assert!(rect.x >= area.x && rect.y >= area.y);
    assert!(rect.x + rect.width <= area.width);
    assert!(rect.y + rect.height <= area.height);
}

#[test]
fn demo_tour_gates_the_editing_steps_on_save() {
    let config = demo_tour().expect("demo tour");
    assert_eq!(config.steps().len(), 5);
    assert_eq!(config.steps()[0].proceed_on_event(), Some(&HostEvent::Save));
    assert_eq!(config.steps()[2].proceed_on_event(), Some(&HostEvent::Save));
    assert!(config.steps()[4].proceed_on_event().is_none());
}

#[test]
fn fresh_app_shows_the_banner_and_the_first_step() {
    let app = demo_app("fresh");
    let surface = app.tour.surface();
    assert!(surface.banner().is_some());

    let (_, spec) = surface.dialog().expect("step dialog");
    assert_eq!(spec.title, "Create Content");
    let labels: Vec<_> = spec.buttons.iter().map(|b| b.label).collect();
    assert_eq!(labels, vec!["Try it out"]);
}

#[test]
fn try_it_out_then_saving_advances_the_tour() {
    let mut app = demo_app("advance");
    app.handle_key(key(KeyCode::Enter));

    let surface = app.tour.surface();
    assert!(surface.dialog().is_none());
    assert_eq!(surface.tooltips().len(), 2);

    app.handle_key(key(KeyCode::Char('s')));
    let surface = app.tour.surface();
    assert!(surface.tooltips().is_empty());
    let (_, spec) = surface.dialog().expect("step dialog");
    assert_eq!(spec.title, "Save");
    assert_eq!(app.tour.active_step_index(), 1);
}

#[test]
fn escape_dismisses_the_step_dialog() {
    let mut app = demo_app("escape");
    app.handle_key(key(KeyCode::Esc));
    assert!(app.tour.surface().dialog().is_none());

    // The tour is still running; the banner context re-shows the step.
    app.handle_key(key(KeyCode::Char('h')));
    assert!(app.tour.surface().dialog().is_some());
}

#[test]
fn skin_toggle_rethemes_visible_tooltips() {
    let mut app = demo_app("skin");
    app.handle_key(key(KeyCode::Enter));
    assert!(app
        .tour
        .surface()
        .tooltips()
        .iter()
        .all(|(_, view)| view.theme == TooltipTheme::Dark));

    app.handle_key(key(KeyCode::Char('k')));
    assert!(app
        .tour
        .surface()
        .tooltips()
        .iter()
        .all(|(_, view)| view.theme == TooltipTheme::Light));
}

#[test]
fn spotlight_toggle_styles_and_restores_elements() {
    let mut app = demo_app("spotlight");
    app.handle_key(key(KeyCode::Esc));

    let editor = app
        .page
        .select_first(&Selector::parse("#editor").expect("selector"))
        .expect("editor");

    app.handle_key(key(KeyCode::Char('o')));
    assert_eq!(
        app.page.element(editor).expect("element").inline_style(),
        Some(SPOTLIGHT_STYLE)
    );

    app.handle_key(key(KeyCode::Char('o')));
    assert_eq!(app.page.element(editor).expect("element").inline_style(), None);
}

#[test]
fn clicking_a_spotlit_element_opens_its_help_dialog() {
    let mut app = demo_app("spotlight-click");
    app.handle_key(key(KeyCode::Esc));
    layout_page(&mut app.page, Rect::new(0, 1, 80, 22));

    app.handle_key(key(KeyCode::Char('o')));
    let editor_region = app
        .page
        .select_first(&Selector::parse("#editor").expect("selector"))
        .and_then(|key| app.page.element(key))
        .map(|element| element.region())
        .expect("editor region");
    app.handle_mouse(click(editor_region.x + 1, editor_region.y + 1));

    let spec = app.overlay_dialog.as_ref().expect("overlay dialog");
    let labels: Vec<_> = spec.buttons.iter().map(|b| b.label).collect();
    assert_eq!(labels, vec!["Close", "Save"]);

    // Activating the focused button closes the overlay dialog again.
    app.handle_key(key(KeyCode::Enter));
    assert!(app.overlay_dialog.is_none());
}

#[test]
fn clicking_a_bound_element_opens_help_without_spotlights() {
    let mut app = demo_app("bindings");
    app.handle_key(key(KeyCode::Esc));
    layout_page(&mut app.page, Rect::new(0, 1, 80, 22));

    let posts_region = app
        .page
        .select_first(&Selector::parse("#posts").expect("selector"))
        .and_then(|key| app.page.element(key))
        .map(|element| element.region())
        .expect("posts region");
    app.handle_mouse(click(posts_region.x + 1, posts_region.y + 1));

    let spec = app.overlay_dialog.as_ref().expect("overlay dialog");
    assert_eq!(spec.body.help_html.as_deref(), Some("<p>Your published posts live here.</p>"));
}

#[test]
fn layout_assigns_disjoint_regions_to_the_toolbar() {
    let mut page = blog_page();
    layout_page(&mut page, Rect::new(0, 1, 80, 22));

    let save = page
        .select_first(&Selector::parse("#save").expect("selector"))
        .and_then(|key| page.element(key))
        .map(|element| element.region())
        .expect("save region");
    let skin = page
        .select_first(&Selector::parse("#skin-toggle").expect("selector"))
        .and_then(|key| page.element(key))
        .map(|element| element.region())
        .expect("skin region");

    assert!(!save.contains(skin.x, skin.y));
    assert!(!skin.contains(save.x, save.y));
}
