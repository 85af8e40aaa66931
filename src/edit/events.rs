// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::KeyEvent;

use super::{Outcome, TextEditor};
use crate::error::EditError;
use crate::host::Host;
use crate::model::NodeId;

/// Canvas events the editor reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasEvent {
    /// Double click (or tap) on a node.
    NodeDoubleActivate(NodeId),
    /// Programmatic open, e.g. right after a node was inserted.
    OpenRequest { node: NodeId, inserting: bool },
    /// Click outside the canvas surface.
    OutsideCanvasClick,
    /// Click on the canvas but outside the overlay. Honoured only when configured.
    OutsideEditClick,
    CanvasPointerDown,
    /// A node was expanded or collapsed.
    ExpandToggle,
    /// The active selection is about to change.
    BeforeActiveNodeChange,
    /// Scale or translation of the view changed.
    TransformChanged,
    KeyDown(KeyEvent),
}

impl TextEditor {
    /// Dispatches one canvas event.
    pub fn handle_event<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: CanvasEvent,
    ) -> Result<Outcome, EditError> {
        match event {
            CanvasEvent::NodeDoubleActivate(node) => self.request_open(host, node, false),
            CanvasEvent::OpenRequest { node, inserting } => self.request_open(host, node, inserting),
            CanvasEvent::OutsideEditClick if !self.config.end_edit_on_outside_click => {
                Ok(Outcome::Ignored)
            }
            CanvasEvent::OutsideCanvasClick
            | CanvasEvent::OutsideEditClick
            | CanvasEvent::CanvasPointerDown
            | CanvasEvent::ExpandToggle
            | CanvasEvent::BeforeActiveNodeChange => Ok(self.close(host)),
            CanvasEvent::TransformChanged => self.reposition(host),
            CanvasEvent::KeyDown(key) => self.handle_key(host, key),
        }
    }
}
