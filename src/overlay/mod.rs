// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The floating text surface positioned over the scene while a node is edited.
//!
//! One overlay is created per editor and reused for every session; closing a session hides
//! and empties it and restores its default styling.

mod measure;
mod widget;

pub use measure::{measure_columns, measure_text, GLYPH_ADVANCE_EM};
pub use widget::OverlayWidget;

use ratatui::style::Color;
use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::{ScreenRect, Size};
use crate::host::MountTarget;

/// Where the caret sits after the overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Caret at a byte offset, nothing selected.
    Caret,
    /// Whole content selected; the next edit replaces it.
    All,
}

/// Per-session placement and colours, computed by the editor from node + view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Screen rect of the node's text run.
    pub anchor: ScreenRect,
    pub max_width: f64,
    pub offset_y: f64,
    pub background: Color,
    pub color: Color,
    pub z_index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TransientStyle {
    left: f64,
    top: f64,
    min: Size,
    max_width: f64,
    offset_y: f64,
    background: Color,
    color: Color,
    z_index: i32,
}

impl Default for TransientStyle {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            min: Size::default(),
            max_width: 0.0,
            offset_y: 0.0,
            background: Color::Reset,
            color: Color::Reset,
            z_index: 0,
        }
    }
}

/// Value copy of the overlay handed out with `EditClosed`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySnapshot {
    pub text: String,
    pub frame: ScreenRect,
    pub mount: MountTarget,
}

#[derive(Debug)]
pub struct Overlay {
    mount: MountTarget,
    padding: Size,
    visible: bool,
    text: String,
    caret: usize,
    selection: Selection,
    content: Size,
    style: TransientStyle,
}

impl Overlay {
    pub fn new(mount: MountTarget, padding: Size) -> Self {
        Self {
            mount,
            padding,
            visible: false,
            text: String::new(),
            caret: 0,
            selection: Selection::Caret,
            content: Size::default(),
            style: TransientStyle::default(),
        }
    }

    pub fn mount(&self) -> &MountTarget {
        &self.mount
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn z_index(&self) -> i32 {
        self.style.z_index
    }

    pub fn background(&self) -> Color {
        self.style.background
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn offset_y(&self) -> f64 {
        self.style.offset_y
    }

    pub fn max_width(&self) -> f64 {
        self.style.max_width
    }

    pub fn min_size(&self) -> Size {
        self.style.min
    }

    /// Last measured text extent (screen pixels, no padding).
    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
    }

    /// Shows the overlay at `placement` seeded with `text`.
    pub fn show(&mut self, placement: &Placement, text: &str, select_all: bool) {
        self.style = TransientStyle {
            left: placement.anchor.left - self.padding.width,
            top: placement.anchor.top - self.padding.height,
            min: Size::new(
                placement.anchor.width + self.padding.width * 2.0,
                placement.anchor.height + self.padding.height * 2.0,
            ),
            max_width: placement.max_width,
            offset_y: placement.offset_y,
            background: placement.background,
            color: placement.color,
            z_index: placement.z_index,
        };
        self.text.clear();
        self.text.push_str(text);
        self.caret = self.text.len();
        self.selection = if select_all { Selection::All } else { Selection::Caret };
        self.visible = true;
    }

    /// Hides, empties and restores default styling.
    pub fn hide(&mut self) {
        self.visible = false;
        self.text.clear();
        self.caret = 0;
        self.selection = Selection::Caret;
        self.content = Size::default();
        self.style = TransientStyle::default();
    }

    /// Rendered box on screen: content plus padding, bounded below by the node's text rect
    /// and to the right by the wrap width.
    pub fn frame(&self) -> ScreenRect {
        let mut width = (self.content.width + self.padding.width * 2.0).max(self.style.min.width);
        if self.style.max_width > 0.0 {
            width = width.min(self.style.max_width.max(self.style.min.width));
        }
        let height = (self.content.height + self.padding.height * 2.0).max(self.style.min.height);
        ScreenRect::new(self.style.left, self.style.top + self.style.offset_y, width, height)
    }

    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot { text: self.text.clone(), frame: self.frame(), mount: self.mount.clone() }
    }

    fn take_selection(&mut self) -> bool {
        if self.selection == Selection::All {
            self.text.clear();
            self.caret = 0;
            self.selection = Selection::Caret;
            return true;
        }
        false
    }

    pub fn insert_str(&mut self, text: &str) {
        self.take_selection();
        self.text.insert_str(self.caret, text);
        self.caret += text.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.take_selection();
        self.text.insert(self.caret, ch);
        self.caret += ch.len_utf8();
    }

    /// Removes the grapheme before the caret. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.take_selection() {
            return true;
        }
        let Some((start, _)) = self.text[..self.caret].grapheme_indices(true).next_back() else {
            return false;
        };
        self.text.replace_range(start..self.caret, "");
        self.caret = start;
        true
    }

    /// Removes the grapheme after the caret. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        if self.take_selection() {
            return true;
        }
        let Some(grapheme) = self.text[self.caret..].graphemes(true).next() else {
            return false;
        };
        let end = self.caret + grapheme.len();
        self.text.replace_range(self.caret..end, "");
        true
    }

    pub fn move_left(&mut self) {
        self.selection = Selection::Caret;
        if let Some((start, _)) = self.text[..self.caret].grapheme_indices(true).next_back() {
            self.caret = start;
        }
    }

    pub fn move_right(&mut self) {
        self.selection = Selection::Caret;
        if let Some(grapheme) = self.text[self.caret..].graphemes(true).next() {
            self.caret += grapheme.len();
        }
    }

    pub fn move_home(&mut self) {
        self.selection = Selection::Caret;
        self.caret = self.text[..self.caret].rfind('\n').map_or(0, |idx| idx + 1);
    }

    pub fn move_end(&mut self) {
        self.selection = Selection::Caret;
        self.caret = self.text[self.caret..]
            .find('\n')
            .map_or(self.text.len(), |idx| self.caret + idx);
    }
}

#[cfg(test)]
mod tests;
