// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{
    outer_offset, place_node, scene_to_screen, screen_to_scene, SceneRect, ScreenRect, Size,
    ViewTransform,
};
use crate::host::{Scene, Viewport};
use crate::memory::{fixtures, MemoryCanvas};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn visible_node_needs_no_pan() {
    let bounds = SceneRect::new(10.0, 10.0, 50.0, 20.0);
    let offset = outer_offset(&bounds, &ViewTransform::default(), Size::new(800.0, 600.0));
    assert!(offset.is_zero());
}

#[rstest]
#[case(SceneRect::new(-30.0, 10.0, 50.0, 20.0), 30.0, 0.0)]
#[case(SceneRect::new(780.0, 10.0, 50.0, 20.0), -30.0, 0.0)]
#[case(SceneRect::new(10.0, -5.0, 50.0, 20.0), 0.0, 5.0)]
#[case(SceneRect::new(10.0, 590.0, 50.0, 20.0), 0.0, -10.0)]
fn partially_hidden_node_is_panned_into_view(
    #[case] bounds: SceneRect,
    #[case] dx: f64,
    #[case] dy: f64,
) {
    let offset = outer_offset(&bounds, &ViewTransform::default(), Size::new(800.0, 600.0));
    assert!(approx(offset.dx, dx), "dx={}", offset.dx);
    assert!(approx(offset.dy, dy), "dy={}", offset.dy);
}

#[test]
fn offset_accounts_for_scale_and_translation() {
    let transform = ViewTransform { scale: 2.0, translate_x: -100.0, translate_y: 0.0 };
    // Scene x=20 lands at canvas x=-60 after scaling and panning.
    let bounds = SceneRect::new(20.0, 10.0, 10.0, 10.0);
    let offset = outer_offset(&bounds, &transform, Size::new(800.0, 600.0));
    assert!(approx(offset.dx, 60.0));
}

#[test]
fn scene_screen_mapping_round_trips() {
    let transform = ViewTransform { scale: 1.5, translate_x: 40.0, translate_y: -12.0 };
    let canvas = ScreenRect::new(10.0, 20.0, 800.0, 600.0);
    let rect = SceneRect::new(100.0, 50.0, 80.0, 24.0);

    let screen = scene_to_screen(&rect, &transform, &canvas);
    assert!(approx(screen.left, 10.0 + 100.0 * 1.5 + 40.0));
    assert!(approx(screen.top, 20.0 + 50.0 * 1.5 - 12.0));
    assert!(approx(screen.width, 120.0));

    let back = screen_to_scene(&screen, &transform, &canvas);
    assert!(approx(back.x, rect.x) && approx(back.y, rect.y));
    assert!(approx(back.width, rect.width) && approx(back.height, rect.height));
}

#[rstest]
fn place_node_pans_then_maps_text_rect(#[from(fixtures::canvas)] mut canvas: MemoryCanvas) {
    let root = fixtures::root_id();
    canvas.set_transform(ViewTransform { scale: 1.0, translate_x: -150.0, translate_y: 0.0 });
    let geometry = canvas.node_geometry(&root).expect("geometry");

    let rect = place_node(&mut canvas, &geometry);

    // The root's left edge (x=100) was 50px off-canvas; the view pans right by 50.
    assert!(approx(canvas.transform().translate_x, -100.0));
    assert!(approx(rect.left, 10.0 + geometry.text.x - 100.0));
    assert!(approx(rect.top, 20.0 + geometry.text.y));
}

#[test]
fn to_cells_snaps_outward_and_clips_negative() {
    let rect = ScreenRect::new(1.5, -2.0, 3.0, 4.2);
    let cells = rect.to_cells();
    assert_eq!((cells.x, cells.y, cells.width, cells.height), (1, 0, 4, 3));
}
