// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory canvas implementing every host seam.
//!
//! Used by the demo TUI, the benches and the tests. It keeps nodes in a map, lays each one
//! out as a single padded text box, applies commands through a [`History`], and records
//! everything the editor emits.

mod history;

#[cfg(test)]
pub(crate) mod fixtures;

pub use history::{ApplyError, History, Step};

use std::collections::{BTreeMap, HashMap};

use crate::commit::Command;
use crate::error::{ErrorKind, HookError};
use crate::geometry::{SceneRect, ScreenRect, Size, ViewTransform};
use crate::host::{
    CommandSink, EditorEvent, ErrorSink, EventSink, MountTarget, NodeTree, Scene, ShortcutHost,
    Viewport,
};
use crate::model::{Node, NodeGeometry, NodeId, TextStyle, Theme};
use crate::overlay::{measure_columns, measure_text};
use crate::shortcut::Keymap;

pub const DEFAULT_MOUNT: &str = "body";

/// How text is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metrics {
    /// Proportional to font size (pixel canvases).
    #[default]
    Em,
    /// One display column per cell (terminal canvases).
    Cells,
}

#[derive(Debug)]
pub struct MemoryCanvas {
    nodes: BTreeMap<NodeId, Node>,
    geometry: HashMap<NodeId, NodeGeometry>,
    sizes: HashMap<NodeId, Size>,
    active: Vec<NodeId>,
    theme: Theme,
    metrics: Metrics,
    padding_y: f64,
    transform: ViewTransform,
    canvas: ScreenRect,
    mounts: Vec<MountTarget>,
    keymap: Keymap,
    history: History,
    commands: Vec<Command>,
    events: Vec<EditorEvent>,
    errors: Vec<(ErrorKind, HookError)>,
    generalization_updates: Vec<NodeId>,
    render_requests: usize,
}

impl MemoryCanvas {
    pub fn new(canvas: ScreenRect) -> Self {
        Self {
            nodes: BTreeMap::new(),
            geometry: HashMap::new(),
            sizes: HashMap::new(),
            active: Vec::new(),
            theme: Theme::default(),
            metrics: Metrics::Em,
            padding_y: 5.0,
            transform: ViewTransform::default(),
            canvas,
            mounts: vec![MountTarget::new(DEFAULT_MOUNT)],
            keymap: Keymap::new(),
            history: History::default(),
            commands: Vec::new(),
            events: Vec::new(),
            errors: Vec::new(),
            generalization_updates: Vec::new(),
            render_requests: 0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics, padding_y: f64) -> Self {
        self.metrics = metrics;
        self.padding_y = padding_y;
        self
    }

    /// Adds a node with its top-left corner at (`x`, `y`) and lays it out around its text.
    pub fn insert_node(&mut self, node: Node, x: f64, y: f64) {
        let geometry = self.layout(&node, x, y);
        self.insert_node_with_geometry(node, geometry);
    }

    pub fn insert_node_with_geometry(&mut self, node: Node, geometry: NodeGeometry) {
        let id = node.id().clone();
        self.sizes.remove(&id);
        self.geometry.insert(id.clone(), geometry);
        self.nodes.insert(id, node);
    }

    /// Adds a node the layout has not placed yet (folded away, or awaiting the next pass).
    pub fn insert_unrendered(&mut self, node: Node) {
        let id = node.id().clone();
        self.geometry.remove(&id);
        self.sizes.remove(&id);
        self.nodes.insert(id, node);
    }

    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        self.geometry.remove(id);
        self.sizes.remove(id);
        self.active.retain(|active| active != id);
        self.nodes.remove(id)
    }

    /// Re-runs layout for every node from its current text, dropping live growth.
    pub fn relayout(&mut self) {
        let ids: Vec<NodeId> = self.nodes.keys().cloned().collect();
        for id in ids {
            let (Some(node), Some(old)) = (self.nodes.get(&id), self.geometry.get(&id)) else {
                continue;
            };
            let geometry = self.layout(node, old.bounds.x, old.bounds.y);
            self.geometry.insert(id.clone(), geometry);
            self.sizes.remove(&id);
        }
    }

    fn measure(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> Size {
        match self.metrics {
            Metrics::Em => measure_text(text, style, scale, max_width),
            Metrics::Cells => measure_columns(text, scale, style.line_height * scale, max_width),
        }
    }

    fn layout(&self, node: &Node, x: f64, y: f64) -> NodeGeometry {
        let padding_x = node.padding_x().unwrap_or(self.theme.padding_x);
        let text = self.measure(node.text(), node.style(), 1.0, 0.0);
        NodeGeometry {
            bounds: SceneRect::new(
                x,
                y,
                text.width + padding_x * 2.0,
                text.height + self.padding_y * 2.0,
            ),
            content: text,
            text: SceneRect::new(x + padding_x, y + self.padding_y, text.width, text.height),
        }
    }

    pub fn set_active(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.active = ids.into_iter().collect();
    }

    pub fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }

    /// Moves or resizes the canvas area on screen.
    pub fn set_canvas(&mut self, canvas: ScreenRect) {
        self.canvas = canvas;
    }

    /// Zooms around the canvas origin.
    pub fn set_scale(&mut self, scale: f64) {
        self.transform.scale = scale;
    }

    pub fn set_mounts(&mut self, mounts: Vec<MountTarget>) {
        self.mounts = mounts;
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_text(&self, id: &NodeId) -> Option<&str> {
        self.nodes.get(id).map(Node::text)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn undo(&mut self) -> Option<NodeId> {
        let id = self.history.undo(&mut self.nodes)?;
        self.relayout();
        Some(id)
    }

    pub fn redo(&mut self) -> Option<NodeId> {
        let id = self.history.redo(&mut self.nodes)?;
        self.relayout();
        Some(id)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn events(&self) -> &[EditorEvent] {
        &self.events
    }

    pub fn errors(&self) -> &[(ErrorKind, HookError)] {
        &self.errors
    }

    pub fn generalization_updates(&self) -> &[NodeId] {
        &self.generalization_updates
    }

    pub fn render_requests(&self) -> usize {
        self.render_requests
    }

    pub fn keymap_ref(&self) -> &Keymap {
        &self.keymap
    }
}

impl NodeTree for MemoryCanvas {
    fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn active_nodes(&self) -> &[NodeId] {
        &self.active
    }

    fn theme(&self) -> Theme {
        self.theme
    }

    fn update_generalization(&mut self, owner: &NodeId) {
        self.generalization_updates.push(owner.clone());
    }
}

impl Scene for MemoryCanvas {
    fn node_geometry(&self, id: &NodeId) -> Option<NodeGeometry> {
        self.geometry.get(id).copied()
    }

    fn node_size(&self, id: &NodeId) -> Option<Size> {
        self.sizes
            .get(id)
            .copied()
            .or_else(|| self.geometry.get(id).map(|geometry| geometry.bounds.size()))
    }

    fn set_node_size(&mut self, id: &NodeId, size: Size) {
        if self.geometry.contains_key(id) {
            self.sizes.insert(id.clone(), size);
        }
    }

    fn request_render(&mut self) {
        self.render_requests += 1;
    }

    fn measure_text(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> Size {
        self.measure(text, style, scale, max_width)
    }
}

impl Viewport for MemoryCanvas {
    fn transform(&self) -> ViewTransform {
        self.transform
    }

    fn canvas(&self) -> ScreenRect {
        self.canvas
    }

    fn pan_by(&mut self, dx: f64, dy: f64) {
        self.transform.translate_x += dx;
        self.transform.translate_y += dy;
    }

    fn resolve_mount(&self, name: Option<&str>) -> Option<MountTarget> {
        let name = name.unwrap_or(DEFAULT_MOUNT);
        self.mounts.iter().find(|mount| mount.name == name).cloned()
    }
}

impl CommandSink for MemoryCanvas {
    fn execute(&mut self, command: Command) {
        match self.history.apply(&mut self.nodes, &command) {
            Ok(()) => self.commands.push(command),
            Err(err) => tracing::warn!(%err, "command rejected by history"),
        }
    }
}

impl EventSink for MemoryCanvas {
    fn emit(&mut self, event: EditorEvent) {
        self.events.push(event);
    }
}

impl ErrorSink for MemoryCanvas {
    fn report(&mut self, kind: ErrorKind, error: &HookError) {
        self.errors.push((kind, error.clone()));
    }
}

impl ShortcutHost for MemoryCanvas {
    fn keymap(&mut self) -> &mut Keymap {
        &mut self.keymap
    }
}
