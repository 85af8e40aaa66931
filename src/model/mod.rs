// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node-side data the editor reads from its host.
//!
//! The tree itself lives outside this crate; these types describe what the editor needs to
//! know about a node to place, size and commit an edit.

pub mod ids;
pub mod node;

pub use ids::{Id, IdError, NodeId};
pub use node::{Node, NodeGeometry, NodeKind, TextStyle, Theme};
