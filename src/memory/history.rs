// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::commit::Command;
use crate::model::{Node, NodeId};

/// One reversible text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub node: NodeId,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("node not found (id={0})")]
    NotFound(NodeId),
}

/// Linear undo/redo history with a revision counter bumped on every applied change.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    rev: u64,
    undo: Vec<Step>,
    redo: Vec<Step>,
}

impl History {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Applies `command`, recording exactly one undo step. Clears the redo stack.
    pub fn apply(
        &mut self,
        nodes: &mut BTreeMap<NodeId, Node>,
        command: &Command,
    ) -> Result<(), ApplyError> {
        match command {
            Command::SetNodeText { node, text, .. } => {
                let Some(existing) = nodes.get_mut(node) else {
                    return Err(ApplyError::NotFound(node.clone()));
                };
                let before = existing.text().to_owned();
                existing.set_text(text.clone());
                self.undo.push(Step { node: node.clone(), before, after: text.clone() });
                self.redo.clear();
                self.rev = self.rev.wrapping_add(1);
                Ok(())
            }
        }
    }

    /// Reverts the latest step. Returns the node it touched.
    pub fn undo(&mut self, nodes: &mut BTreeMap<NodeId, Node>) -> Option<NodeId> {
        let step = self.undo.pop()?;
        if let Some(node) = nodes.get_mut(&step.node) {
            node.set_text(step.before.clone());
        }
        let id = step.node.clone();
        self.redo.push(step);
        self.rev = self.rev.wrapping_add(1);
        Some(id)
    }

    pub fn redo(&mut self, nodes: &mut BTreeMap<NodeId, Node>) -> Option<NodeId> {
        let step = self.redo.pop()?;
        if let Some(node) = nodes.get_mut(&step.node) {
            node.set_text(step.after.clone());
        }
        let id = step.node.clone();
        self.undo.push(step);
        self.rev = self.rev.wrapping_add(1);
        Some(id)
    }
}
