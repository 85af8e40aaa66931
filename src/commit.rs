// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Turning a closed session's text into history commands.

use crate::host::{CommandSink, NodeTree, Scene};
use crate::model::NodeId;

/// State-mutating commands issued to the command/history engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a node's text. One command is one undo step.
    SetNodeText { node: NodeId, text: String, rich: bool },
}

/// Canonicalises `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_breaks(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_owned();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Writes `text` to every node in `nodes` whose stored text differs.
///
/// Nodes that disappeared from the tree are skipped. Generalization nodes additionally ask
/// their owner to refresh. Returns the number of commands issued.
pub fn commit_text<H>(host: &mut H, nodes: &[NodeId], text: &str, rich: bool) -> usize
where
    H: NodeTree + Scene + CommandSink + ?Sized,
{
    let text = normalize_line_breaks(text);
    let mut issued = 0;

    for id in nodes {
        let Some(node) = host.node(id) else {
            tracing::debug!(node = %id, "node removed before commit; skipping");
            continue;
        };
        if node.text() == text {
            continue;
        }
        let owner = node.generalization_of().cloned();

        host.execute(Command::SetNodeText { node: id.clone(), text: text.clone(), rich });
        issued += 1;
        if let Some(owner) = owner {
            host.update_generalization(&owner);
        }
        host.request_render();
    }

    issued
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{commit_text, normalize_line_breaks, Command};
    use crate::memory::{fixtures, MemoryCanvas};
    use crate::model::NodeId;

    #[rstest]
    #[case("plain", "plain")]
    #[case("a\r\nb", "a\nb")]
    #[case("a\rb\r\nc\n", "a\nb\nc\n")]
    #[case("", "")]
    fn normalizes_line_breaks(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_line_breaks(raw), expected);
    }

    #[rstest]
    fn unchanged_text_issues_nothing(#[from(fixtures::canvas)] mut canvas: MemoryCanvas) {
        let root = fixtures::root_id();
        assert_eq!(commit_text(&mut canvas, &[root], "Root Node", false), 0);
        assert!(canvas.commands().is_empty());
        assert_eq!(canvas.render_requests(), 0);
    }

    #[rstest]
    fn changed_text_issues_one_command_per_node(#[from(fixtures::canvas)] mut canvas: MemoryCanvas) {
        let root = fixtures::root_id();
        let child = fixtures::child_id();
        let issued = commit_text(&mut canvas, &[root.clone(), child.clone()], "Same", true);

        assert_eq!(issued, 2);
        assert_eq!(
            canvas.commands(),
            &[
                Command::SetNodeText { node: root, text: "Same".to_owned(), rich: true },
                Command::SetNodeText { node: child, text: "Same".to_owned(), rich: true },
            ]
        );
        assert_eq!(canvas.history().undo_depth(), 2);
    }

    #[rstest]
    fn missing_nodes_are_skipped(#[from(fixtures::canvas)] mut canvas: MemoryCanvas) {
        let gone = NodeId::new("n:gone").expect("node id");
        assert_eq!(commit_text(&mut canvas, &[gone], "text", false), 0);
        assert!(canvas.commands().is_empty());
    }

    #[rstest]
    fn generalization_asks_owner_to_refresh(#[from(fixtures::canvas)] mut canvas: MemoryCanvas) {
        let summary = fixtures::summary_id();
        assert_eq!(commit_text(&mut canvas, &[summary], "Summary v2", false), 1);
        assert_eq!(canvas.generalization_updates(), &[fixtures::root_id()]);
    }

    #[rstest]
    fn committed_text_is_normalized(#[from(fixtures::canvas)] mut canvas: MemoryCanvas) {
        let child = fixtures::child_id();
        commit_text(&mut canvas, &[child.clone()], "line one\r\nline two", false);
        assert_eq!(canvas.node_text(&child), Some("line one\nline two"));
    }
}
