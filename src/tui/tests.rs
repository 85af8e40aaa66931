// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use super::{canvas_area, demo_canvas, draw, footer_line, App};
use crate::edit::Phase;
use crate::geometry::ScreenRect;
use crate::host::{NodeTree, Viewport};
use crate::model::NodeId;

fn app() -> App {
    App::new(ScreenRect::new(0.0, 0.0, 100.0, 29.0)).expect("app")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).expect("key");
}

fn root() -> NodeId {
    NodeId::new("n:root").expect("id")
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf.get(x, y).symbol().to_owned()).collect()
}

fn render(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

#[test]
fn canvas_area_leaves_room_for_the_footer() {
    let area = canvas_area(ratatui::layout::Rect::new(0, 0, 80, 24));
    assert_eq!((area.width, area.height), (80.0, 23.0));
}

#[test]
fn demo_canvas_has_a_summary_and_a_custom_node() {
    let canvas = demo_canvas(ScreenRect::new(0.0, 0.0, 100.0, 29.0));
    assert!(canvas.nodes().any(|node| node.is_generalization()));
    assert!(canvas.nodes().any(|node| node.kind() == crate::model::NodeKind::CustomContent));
}

#[test]
fn starts_with_the_root_selected() {
    let app = app();
    assert_eq!(app.canvas.active_nodes(), &[root()]);
}

#[test]
fn draws_nodes_as_boxes() {
    let mut app = app();
    let buf = render(&mut app);
    assert!(row(&buf, 9).contains("│Inlay│"), "{:?}", row(&buf, 9));
    assert!(row(&buf, 29).contains("edit"));
}

#[test]
fn f2_edit_and_enter_commit() {
    let mut app = app();
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.editor.phase(), Phase::Open);

    press(&mut app, KeyCode::Char('!'));
    let buf = render(&mut app);
    assert!(row(&buf, 9).contains("Inlay!"), "{:?}", row(&buf, 9));
    assert!(line_text(&app).contains("newline"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.editor.phase(), Phase::Closed);
    assert_eq!(app.canvas.node_text(&root()), Some("Inlay!"));
    assert_eq!(app.status, "saved");
}

#[test]
fn typing_a_letter_starts_editing() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.canvas.node_text(&root()), Some("Inlays"));
    assert!(!app.should_quit);
}

#[test]
fn tab_commits_and_moves_to_the_next_node() {
    let mut app = app();
    press(&mut app, KeyCode::F(2));
    press(&mut app, KeyCode::Tab);

    assert_eq!(app.editor.phase(), Phase::Closed);
    assert_ne!(app.canvas.active_nodes(), &[root()]);
}

#[test]
fn undo_restores_committed_text() {
    let mut app = app();
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.canvas.node_text(&root()), Some("Inlayx"));

    app.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)).expect("key");
    assert_eq!(app.canvas.node_text(&root()), Some("Inlay"));
}

#[test]
fn arrows_pan_and_plus_zooms() {
    let mut app = app();
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Char('+'));

    let transform = app.canvas.transform();
    assert_eq!(transform.translate_x, 4.0);
    assert_eq!(transform.scale, 1.25);
    assert_eq!(app.status, "zoom 125%");
}

#[test]
fn custom_content_cannot_be_edited() {
    let mut app = app();
    let chart = NodeId::new("n:chart").expect("id");
    let index = app.order.iter().position(|id| *id == chart).expect("chart");
    app.select(index);

    press(&mut app, KeyCode::F(2));

    assert_eq!(app.editor.phase(), Phase::Closed);
    assert!(app.status.starts_with("cannot edit"));
}

#[test]
fn esc_quits_when_nothing_is_open() {
    let mut app = app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

fn line_text(app: &App) -> String {
    footer_line(app).spans.iter().map(|span| span.content.as_ref()).collect()
}
