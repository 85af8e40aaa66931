// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Collaborator seams between the editor and the canvas that embeds it.
//!
//! The editor owns none of the tree, scene, view or history. Each concern is a narrow trait;
//! [`Host`] is blanket-implemented for anything providing all of them.

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::commit::Command;
use crate::error::{ErrorKind, HookError};
use crate::geometry::{ScreenRect, Size, ViewTransform};
use crate::model::{Node, NodeGeometry, NodeId, TextStyle, Theme};
use crate::overlay::{self, OverlaySnapshot};
use crate::shortcut::Keymap;

/// Read access to the node tree plus the one derived-data refresh the editor may request.
pub trait NodeTree {
    fn node(&self, id: &NodeId) -> Option<&Node>;

    fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Currently active (selected) nodes, in activation order.
    fn active_nodes(&self) -> &[NodeId];

    fn theme(&self) -> Theme;

    /// Asks a generalization owner to recompute its summary text.
    fn update_generalization(&mut self, owner: &NodeId);
}

/// Narrow handle onto the rendered scene: read last-rendered geometry, grow a node box.
pub trait Scene {
    /// Geometry from the last layout pass. Unaffected by [`Scene::set_node_size`].
    fn node_geometry(&self, id: &NodeId) -> Option<NodeGeometry>;

    /// Current size of the node's drawn box, including live growth.
    fn node_size(&self, id: &NodeId) -> Option<Size>;

    /// Resizes the node's rendered box in place. This is visual feedback only, not a relayout.
    fn set_node_size(&mut self, id: &NodeId, size: Size);

    fn request_render(&mut self);

    /// Screen-space extent of `text` as the overlay would lay it out.
    fn measure_text(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> Size {
        overlay::measure_text(text, style, scale, max_width)
    }
}

/// Where overlays get attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountTarget {
    pub name: SmolStr,
}

impl MountTarget {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self { name: SmolStr::new(name) }
    }
}

pub trait Viewport {
    fn transform(&self) -> ViewTransform;

    /// The canvas area in screen coordinates.
    fn canvas(&self) -> ScreenRect;

    /// Pans the scene by canvas pixels.
    fn pan_by(&mut self, dx: f64, dy: f64);

    /// Resolves a named mount point, or the default layer for `None`.
    fn resolve_mount(&self, name: Option<&str>) -> Option<MountTarget>;
}

/// The external command/history engine.
pub trait CommandSink {
    fn execute(&mut self, command: Command);
}

/// Events the editor emits to the rest of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Fired after the veto hook approved, before the overlay is shown.
    BeforeEditOpen { node: NodeId },
    /// Fired once per closed session. `overlay` is `None` when a rich-text delegate was active.
    EditClosed { overlay: Option<OverlaySnapshot>, nodes: SmallVec<[NodeId; 4]> },
}

pub trait EventSink {
    fn emit(&mut self, event: EditorEvent);
}

pub trait ErrorSink {
    fn report(&mut self, kind: ErrorKind, error: &HookError);
}

/// Access to the renderer-owned shortcut registry.
pub trait ShortcutHost {
    fn keymap(&mut self) -> &mut Keymap;
}

pub trait Host: NodeTree + Scene + Viewport + CommandSink + EventSink + ErrorSink + ShortcutHost {}

impl<T> Host for T where
    T: NodeTree + Scene + Viewport + CommandSink + EventSink + ErrorSink + ShortcutHost
{
}
