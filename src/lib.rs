// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inlay: in-place node text editing for pannable, zoomable diagram canvases.
//!
//! A [`TextEditor`] opens an overlay exactly over a node's rendered text and commits the
//! result as `SET_NODE_TEXT` commands through the host. The canvas plugs in through the
//! traits in [`host`]; [`memory::MemoryCanvas`] is a complete in-memory host.

pub mod commit;
pub mod config;
pub mod delegate;
pub mod driver;
pub mod edit;
pub mod error;
pub mod geometry;
pub mod host;
pub mod memory;
pub mod model;
pub mod overlay;
pub mod resize;
pub mod shortcut;
pub mod tui;

pub use commit::Command;
pub use config::EditConfig;
pub use delegate::RichTextDelegate;
pub use edit::{CanvasEvent, Outcome, Phase, TextEditor};
pub use error::{EditError, ErrorKind, HookError};
pub use host::Host;
