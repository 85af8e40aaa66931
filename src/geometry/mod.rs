// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene/screen coordinate types and the mapping between them.
//!
//! Scene space is where the layout engine places nodes. Screen space is where the overlay
//! lives. A [`ViewTransform`] (uniform scale plus pan) maps scene coordinates onto the canvas,
//! and the canvas itself sits at some origin on screen.

mod sync;

pub use sync::{outer_offset, place_node, scene_to_screen, screen_to_scene, PanOffset};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Snaps to the terminal cell grid, clipped to the `u16` range ratatui works in.
    pub fn to_cells(&self) -> ratatui::layout::Rect {
        fn clamp(value: f64) -> u16 {
            value.max(0.0).min(f64::from(u16::MAX)) as u16
        }
        let left = clamp(self.left.floor());
        let top = clamp(self.top.floor());
        let right = clamp(self.right().ceil());
        let bottom = clamp(self.bottom().ceil());
        ratatui::layout::Rect::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }
}

/// Current pan/zoom of the scene. Owned and mutated by the view; read here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }
}

impl ViewTransform {
    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.scale + self.translate_x
    }

    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.scale + self.translate_y
    }

    pub fn invert_x(&self, x: f64) -> f64 {
        (x - self.translate_x) / self.scale
    }

    pub fn invert_y(&self, y: f64) -> f64 {
        (y - self.translate_y) / self.scale
    }
}

#[cfg(test)]
mod tests;
