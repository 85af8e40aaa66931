// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::{Overlay, Selection};

/// Draws a visible overlay into a terminal buffer whose cells are screen pixels.
pub struct OverlayWidget<'a> {
    overlay: &'a Overlay,
}

impl<'a> OverlayWidget<'a> {
    pub fn new(overlay: &'a Overlay) -> Self {
        Self { overlay }
    }

    /// Terminal cell of the caret, if the overlay is visible and the caret is on screen.
    pub fn cursor(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.overlay.is_visible() {
            return None;
        }
        let frame = self.overlay.frame().to_cells().intersection(area);
        if frame.is_empty() {
            return None;
        }
        let before = &self.overlay.text()[..self.overlay.caret()];
        let row = before.matches('\n').count() as u16;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let col = UnicodeWidthStr::width(&before[line_start..]) as u16;
        let x = frame.x.saturating_add(1).saturating_add(col);
        let y = frame.y.saturating_add(row);
        (x < frame.right() && y < frame.bottom()).then_some((x, y))
    }
}

impl Widget for OverlayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.overlay.is_visible() {
            return;
        }
        let frame = self.overlay.frame().to_cells().intersection(area);
        if frame.is_empty() {
            return;
        }

        let mut style = Style::default().bg(self.overlay.background()).fg(self.overlay.color());
        if self.overlay.selection() == Selection::All {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Clear.render(frame, buf);
        Paragraph::new(self.overlay.text())
            .style(style)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::horizontal(1)))
            .render(frame, buf);
    }
}
