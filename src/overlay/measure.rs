// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use unicode_width::UnicodeWidthStr;

use crate::geometry::Size;
use crate::model::TextStyle;

/// Advance of one display column, in ems.
pub const GLYPH_ADVANCE_EM: f64 = 0.6;

/// Monospace measurement with break-anywhere wrapping at `max_width` (screen pixels).
///
/// A non-positive `max_width` disables wrapping. Empty text still occupies one line.
pub fn measure_text(text: &str, style: &TextStyle, scale: f64, max_width: f64) -> Size {
    let advance = style.font_size * GLYPH_ADVANCE_EM * scale;
    let line_px = style.font_size * style.line_height * scale;
    measure_columns(text, advance, line_px, max_width)
}

/// Same as [`measure_text`] with explicit per-column advance and line pitch.
pub fn measure_columns(text: &str, advance: f64, line_px: f64, max_width: f64) -> Size {
    let mut width: f64 = 0.0;
    let mut rows: usize = 0;

    for line in text.split('\n') {
        let line_width = UnicodeWidthStr::width(line) as f64 * advance;
        if max_width > 0.0 && line_width > max_width {
            rows += (line_width / max_width).ceil() as usize;
            width = width.max(max_width);
        } else {
            rows += 1;
            width = width.max(line_width);
        }
    }

    Size::new(width, rows.max(1) as f64 * line_px)
}
