// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{SceneRect, ScreenRect, Size, ViewTransform};
use crate::host::Viewport;
use crate::model::NodeGeometry;

/// Pan (in canvas pixels) needed to bring a node fully into view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PanOffset {
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Computes how far the view must pan so `bounds` lies inside a canvas of size `canvas`.
///
/// When a node is larger than the canvas the far edge wins, matching how a user scrolling
/// toward the node would see its end first.
pub fn outer_offset(bounds: &SceneRect, transform: &ViewTransform, canvas: Size) -> PanOffset {
    let left = transform.apply_x(bounds.x);
    let top = transform.apply_y(bounds.y);
    let right = transform.apply_x(bounds.right());
    let bottom = transform.apply_y(bounds.bottom());

    let mut offset = PanOffset::default();
    if left < 0.0 {
        offset.dx = -left;
    }
    if right > canvas.width {
        offset.dx = -(right - canvas.width);
    }
    if top < 0.0 {
        offset.dy = -top;
    }
    if bottom > canvas.height {
        offset.dy = -(bottom - canvas.height);
    }
    offset
}

pub fn scene_to_screen(rect: &SceneRect, transform: &ViewTransform, canvas: &ScreenRect) -> ScreenRect {
    ScreenRect::new(
        canvas.left + transform.apply_x(rect.x),
        canvas.top + transform.apply_y(rect.y),
        rect.width * transform.scale,
        rect.height * transform.scale,
    )
}

pub fn screen_to_scene(rect: &ScreenRect, transform: &ViewTransform, canvas: &ScreenRect) -> SceneRect {
    SceneRect::new(
        transform.invert_x(rect.left - canvas.left),
        transform.invert_y(rect.top - canvas.top),
        rect.width / transform.scale,
        rect.height / transform.scale,
    )
}

/// Auto-pans the view so the node is visible, then returns the screen rect of its text run.
pub fn place_node<V: Viewport + ?Sized>(view: &mut V, geometry: &NodeGeometry) -> ScreenRect {
    let canvas = view.canvas();
    let offset = outer_offset(
        &geometry.bounds,
        &view.transform(),
        Size::new(canvas.width, canvas.height),
    );
    if !offset.is_zero() {
        tracing::trace!(dx = offset.dx, dy = offset.dy, "panning node into view");
        view.pan_by(offset.dx, offset.dy);
    }
    scene_to_screen(&geometry.text, &view.transform(), &view.canvas())
}
