// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::fixture;

use super::MemoryCanvas;
use crate::geometry::ScreenRect;
use crate::model::{Node, NodeId, NodeKind};

pub(crate) fn root_id() -> NodeId {
    NodeId::new("n:root").expect("node id")
}

pub(crate) fn child_id() -> NodeId {
    NodeId::new("n:child").expect("node id")
}

pub(crate) fn summary_id() -> NodeId {
    NodeId::new("n:summary").expect("node id")
}

pub(crate) fn custom_id() -> NodeId {
    NodeId::new("n:custom").expect("node id")
}

/// 800x600 canvas at screen (10, 20) holding a root, a child, a summary of the root and a
/// custom-content node. The root is active.
#[fixture]
pub(crate) fn canvas() -> MemoryCanvas {
    let mut canvas = MemoryCanvas::new(ScreenRect::new(10.0, 20.0, 800.0, 600.0));
    canvas.insert_node(Node::new(root_id(), "Root Node"), 100.0, 100.0);
    canvas.insert_node(Node::new(child_id(), "Child"), 300.0, 200.0);
    canvas.insert_node(
        Node::new(summary_id(), "Summary").with_generalization_of(root_id()),
        300.0,
        300.0,
    );
    canvas.insert_node(
        Node::new(custom_id(), "Widget").with_kind(NodeKind::CustomContent),
        100.0,
        300.0,
    );
    canvas.set_active([root_id()]);
    canvas
}
