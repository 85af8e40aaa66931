// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::Color;

use super::ids::NodeId;
use crate::geometry::{SceneRect, Size};

/// Whether a node can be edited through the text overlay at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Plain text content; supports the overlay path.
    Standard,
    /// Host-supplied custom content; edit requests are rejected.
    CustomContent,
}

/// Resolved text styling for a node, as the renderer last drew it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub line_height: f64,
    pub color: Color,
    /// `None` means transparent; the overlay then falls back to the theme background.
    pub fill: Option<Color>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font_size: 16.0, line_height: 1.5, color: Color::Reset, fill: None }
    }
}

/// Canvas-wide defaults a node can override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub padding_x: f64,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self { padding_x: 15.0, background: Color::Reset }
    }
}

/// A tree node as seen by the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    text: String,
    kind: NodeKind,
    style: TextStyle,
    padding_x: Option<f64>,
    generalization_of: Option<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            kind: NodeKind::Standard,
            style: TextStyle::default(),
            padding_x: None,
            generalization_of: None,
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_padding_x(mut self, padding_x: f64) -> Self {
        self.padding_x = Some(padding_x);
        self
    }

    /// Marks this node as the summary of `owner`'s sibling range.
    pub fn with_generalization_of(mut self, owner: NodeId) -> Self {
        self.generalization_of = Some(owner);
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn padding_x(&self) -> Option<f64> {
        self.padding_x
    }

    pub fn generalization_of(&self) -> Option<&NodeId> {
        self.generalization_of.as_ref()
    }

    pub fn is_generalization(&self) -> bool {
        self.generalization_of.is_some()
    }

    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }
}

/// Last-rendered scene geometry of a node.
///
/// `content` is the inner area between the horizontal paddings (text plus any icons or
/// tags); `text` is the text run alone. Both are in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeGeometry {
    pub bounds: SceneRect,
    pub content: Size,
    pub text: SceneRect,
}

impl NodeGeometry {
    /// Width of everything in the content area that is not text.
    pub fn chrome_width(&self) -> f64 {
        (self.content.width - self.text.width).max(0.0)
    }

    /// Height of everything in the box that is not text, paddings included.
    pub fn chrome_height(&self) -> f64 {
        (self.bounds.height - self.text.height).max(0.0)
    }
}
