// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;

use futures::FutureExt;

use crate::error::HookError;
use crate::model::{Node, NodeId};

/// Future returned by a veto hook. `Ok(false)` vetoes silently; `Err` vetoes and is reported.
pub type HookFuture = Pin<Box<dyn Future<Output = Result<bool, HookError>> + Send + 'static>>;

/// Veto hook consulted before a session opens: `(node, is_inserting)`.
pub type BeforeTextEdit = Arc<dyn Fn(&Node, bool) -> HookFuture + Send + Sync>;

/// Identifies one open request. Strictly increasing per editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A veto-hook call in flight. Drive it with [`PendingOpen::resolve`] and hand the result
/// back to `TextEditor::complete_open`; the editor may have moved on by then.
pub struct PendingOpen {
    generation: Generation,
    node: NodeId,
    inserting: bool,
    future: HookFuture,
}

impl PendingOpen {
    pub(crate) fn new(generation: Generation, node: NodeId, inserting: bool, future: HookFuture) -> Self {
        Self { generation, node, inserting, future }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn node(&self) -> &NodeId {
        &self.node
    }

    /// Awaits the hook. A panicking hook resolves as a failure instead of unwinding.
    pub async fn resolve(self) -> HookResolution {
        let result = match AssertUnwindSafe(self.future).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(HookError::new(panic_message(payload.as_ref()))),
        };
        HookResolution {
            generation: self.generation,
            node: self.node,
            inserting: self.inserting,
            result,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_owned()
    }
}

impl fmt::Debug for PendingOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingOpen")
            .field("generation", &self.generation)
            .field("node", &self.node)
            .field("inserting", &self.inserting)
            .finish_non_exhaustive()
    }
}

/// Outcome of a veto hook, tagged with the request it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookResolution {
    pub generation: Generation,
    pub node: NodeId,
    pub inserting: bool,
    pub result: Result<bool, HookError>,
}
