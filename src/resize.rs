// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Live growth of a node's box while its text is being typed.
//!
//! Only the drawn box is touched; the layout engine reflows once the edit commits.

use crate::geometry::Size;
use crate::host::Scene;
use crate::model::{NodeGeometry, NodeId};

/// Smallest box that fits `content` (scene units) next to the node's non-text chrome.
pub fn required_size(geometry: &NodeGeometry, content: Size, padding_x: f64) -> Size {
    Size::new(
        geometry.chrome_width() + content.width + padding_x * 2.0,
        geometry.chrome_height() + content.height,
    )
}

/// Grows the node's drawn box so `content` fits. Never shrinks.
///
/// Returns the new size when something changed. Repeating the call with the same content is
/// a no-op.
pub fn grow_node<S: Scene + ?Sized>(
    scene: &mut S,
    id: &NodeId,
    content: Size,
    padding_x: f64,
) -> Option<Size> {
    let geometry = scene.node_geometry(id)?;
    let current = scene.node_size(id).unwrap_or_else(|| geometry.bounds.size());
    let required = required_size(&geometry, content, padding_x);

    let next = current.max(required);
    if next == current {
        return None;
    }
    tracing::trace!(node = %id, width = next.width, height = next.height, "growing node box");
    scene.set_node_size(id, next);
    Some(next)
}
