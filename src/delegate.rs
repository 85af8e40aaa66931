// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Alternate editing backend that replaces the built-in overlay entirely.

use crossterm::event::KeyEvent;

use crate::geometry::ScreenRect;
use crate::model::Node;

/// A self-contained editor surface (for example a rich-text widget).
///
/// When one is installed the built-in overlay is never created. The editor still owns the
/// session: it decides when to show and hide, snapshots [`RichTextDelegate::text`] across
/// rescales, and commits the final text.
pub trait RichTextDelegate {
    /// Shows the editor over `rect`. `seed` carries uncommitted text from before a rescale;
    /// when `None` the delegate starts from the node's own text.
    fn show(&mut self, node: &Node, rect: ScreenRect, is_inserting: bool, seed: Option<&str>);

    fn hide(&mut self);

    /// Current plain-text content.
    fn text(&self) -> String;

    /// Whether the delegate is still showing. One that closed itself commits nothing and is
    /// not re-shown when the view moves.
    fn is_open(&self) -> bool;

    /// Offers a key press while open. Returns whether the delegate consumed it.
    fn handle_key(&mut self, _key: &KeyEvent) -> bool {
        false
    }
}
