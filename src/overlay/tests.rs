// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::Color;

use super::{Overlay, Placement, Selection};
use crate::geometry::{ScreenRect, Size};
use crate::host::MountTarget;

fn placement() -> Placement {
    Placement {
        anchor: ScreenRect::new(100.0, 50.0, 80.0, 20.0),
        max_width: 500.0,
        offset_y: -4.0,
        background: Color::Yellow,
        color: Color::Black,
        z_index: 3000,
    }
}

fn overlay() -> Overlay {
    Overlay::new(MountTarget::new("body"), Size::new(5.0, 3.0))
}

#[test]
fn show_positions_outside_padding_and_sets_minimum_to_anchor() {
    let mut overlay = overlay();
    overlay.show(&placement(), "Root Node", false);

    assert!(overlay.is_visible());
    assert_eq!(overlay.text(), "Root Node");
    assert_eq!(overlay.caret(), "Root Node".len());
    assert_eq!(overlay.selection(), Selection::Caret);

    let frame = overlay.frame();
    assert_eq!(frame.left, 95.0);
    assert_eq!(frame.top, 47.0 - 4.0);
    assert_eq!(frame.width, 90.0);
    assert_eq!(frame.height, 26.0);
    assert_eq!(overlay.z_index(), 3000);
    assert_eq!(overlay.background(), Color::Yellow);
}

#[test]
fn frame_grows_with_content_but_caps_at_max_width() {
    let mut overlay = overlay();
    overlay.show(&placement(), "x", false);

    overlay.set_content_size(Size::new(200.0, 40.0));
    assert_eq!(overlay.frame().width, 210.0);
    assert_eq!(overlay.frame().height, 46.0);

    overlay.set_content_size(Size::new(900.0, 40.0));
    assert_eq!(overlay.frame().width, 500.0);
}

#[test]
fn hide_clears_content_and_restores_default_style() {
    let mut overlay = overlay();
    overlay.show(&placement(), "Root Node", true);
    overlay.set_content_size(Size::new(10.0, 10.0));
    overlay.hide();

    assert!(!overlay.is_visible());
    assert_eq!(overlay.text(), "");
    assert_eq!(overlay.content_size(), Size::default());
    assert_eq!(overlay.z_index(), 0);
    assert_eq!(overlay.background(), Color::Reset);
    assert_eq!(overlay.color(), Color::Reset);
    assert_eq!(overlay.offset_y(), 0.0);
    assert_eq!(overlay.min_size(), Size::default());
    assert_eq!(overlay.max_width(), 0.0);
}

#[test]
fn typing_over_full_selection_replaces_text() {
    let mut overlay = overlay();
    overlay.show(&placement(), "New node", true);
    assert_eq!(overlay.selection(), Selection::All);

    overlay.insert_char('A');
    overlay.insert_str("BC");
    assert_eq!(overlay.text(), "ABC");
    assert_eq!(overlay.selection(), Selection::Caret);
}

#[test]
fn caret_motion_and_deletion_work_on_graphemes() {
    let mut overlay = overlay();
    overlay.show(&placement(), "ae\u{301}b", false);

    overlay.move_left();
    assert!(overlay.backspace());
    assert_eq!(overlay.text(), "ab");

    overlay.move_home();
    assert!(overlay.delete());
    assert_eq!(overlay.text(), "b");

    overlay.move_end();
    assert!(!overlay.delete());
    assert!(overlay.backspace());
    assert!(!overlay.backspace());
    assert_eq!(overlay.text(), "");
}

#[test]
fn home_and_end_stay_on_the_current_line() {
    let mut overlay = overlay();
    overlay.show(&placement(), "one\ntwo", false);

    overlay.move_home();
    assert_eq!(overlay.caret(), 4);
    overlay.move_left();
    overlay.move_home();
    assert_eq!(overlay.caret(), 0);
    overlay.move_end();
    assert_eq!(overlay.caret(), 3);
}

#[test]
fn backspace_over_selection_clears_everything() {
    let mut overlay = overlay();
    overlay.show(&placement(), "Root", true);
    assert!(overlay.backspace());
    assert_eq!(overlay.text(), "");
}

#[test]
fn snapshot_copies_text_and_mount() {
    let mut overlay = overlay();
    overlay.show(&placement(), "Root", false);
    let snapshot = overlay.snapshot();
    assert_eq!(snapshot.text, "Root");
    assert_eq!(snapshot.mount, MountTarget::new("body"));
    assert_eq!(snapshot.frame, overlay.frame());
}
