// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The edit session state machine.
//!
//! A [`TextEditor`] moves through `Closed -> Opening -> Open -> Closing -> Closed`. Opening may
//! wait on an async veto hook; every request gets a fresh [`Generation`] and a hook result is
//! only honoured if it still answers the current request. While open, the editor keeps the
//! overlay (or a rich-text delegate) positioned over the node, grows the node box as text is
//! typed, and on close commits the text through the host's command sink.

mod events;
mod hook;

pub use events::CanvasEvent;
pub use hook::{BeforeTextEdit, Generation, HookFuture, HookResolution, PendingOpen};

use std::fmt;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use smallvec::{smallvec, SmallVec};

use crate::commit::commit_text;
use crate::config::EditConfig;
use crate::delegate::RichTextDelegate;
use crate::error::{EditError, ErrorKind};
use crate::geometry::{place_node, ScreenRect, Size};
use crate::host::{EditorEvent, Host, NodeTree};
use crate::model::{Node, NodeId, NodeKind, Theme};
use crate::overlay::{Overlay, Placement};
use crate::resize::grow_node;
use crate::shortcut::{
    has_combination_key, is_auto_enter_key, BindingId, EditShortcut, Keymap, ShortcutScope,
    OPEN_BINDING,
};

/// Externally observable session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Why an open request did not start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    MissingNode,
    CustomContent,
    /// The scene has no geometry for the node yet.
    NotRendered,
}

/// Result of feeding the editor a request, event or key.
#[derive(Debug)]
pub enum Outcome {
    Ignored,
    Rejected(Rejection),
    /// A veto hook is running; resolve it and pass the result to [`TextEditor::complete_open`].
    Pending(PendingOpen),
    Opened,
    /// The hook answered `false`.
    Vetoed,
    /// The hook failed; the error went to the host's error sink.
    HookFailed,
    /// A hook result arrived for a request that is no longer current.
    Stale,
    /// A pending open was abandoned before its hook answered.
    Cancelled,
    Edited,
    Repositioned,
    Closed { commands: usize, advance: bool },
}

#[derive(Debug, Clone)]
struct OpenSession {
    node: NodeId,
    generation: Generation,
}

#[derive(Debug)]
enum State {
    Closed,
    Opening { node: NodeId, generation: Generation },
    Open(OpenSession),
    Closing,
}

enum CloseResult {
    NotOpen,
    Cancelled,
    Committed(usize),
}

pub struct TextEditor {
    config: EditConfig,
    before_text_edit: Option<BeforeTextEdit>,
    delegate: Option<Box<dyn RichTextDelegate>>,
    overlay: Option<Overlay>,
    overlay_allocations: usize,
    state: State,
    generation: Generation,
    cache: Option<String>,
    scope: ShortcutScope,
    open_binding: Option<BindingId>,
}

impl fmt::Debug for TextEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEditor")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("has_hook", &self.before_text_edit.is_some())
            .field("has_delegate", &self.delegate.is_some())
            .field("overlay", &self.overlay)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl TextEditor {
    /// Creates an editor and registers its global open shortcut in `keymap`.
    pub fn new(config: EditConfig, keymap: &mut Keymap) -> Self {
        let open_binding = Some(keymap.add(OPEN_BINDING, EditShortcut::Open));
        Self {
            config,
            before_text_edit: None,
            delegate: None,
            overlay: None,
            overlay_allocations: 0,
            state: State::Closed,
            generation: Generation::default(),
            cache: None,
            scope: ShortcutScope::default(),
            open_binding,
        }
    }

    pub fn with_before_text_edit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Node, bool) -> HookFuture + Send + Sync + 'static,
    {
        self.before_text_edit = Some(Arc::new(hook));
        self
    }

    /// Hands every session to `delegate`; the built-in overlay is then never created.
    pub fn with_rich_text(mut self, delegate: impl RichTextDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Closed => Phase::Closed,
            State::Opening { .. } => Phase::Opening,
            State::Open(_) => Phase::Open,
            State::Closing => Phase::Closing,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Node of the open session.
    pub fn current_node(&self) -> Option<&NodeId> {
        match &self.state {
            State::Open(session) => Some(&session.node),
            _ => None,
        }
    }

    /// Generation of the latest request.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The built-in overlay, once it has been created.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// How many overlays this editor has created. Never more than one.
    pub fn overlay_allocations(&self) -> usize {
        self.overlay_allocations
    }

    /// Uncommitted text of the open session.
    pub fn text(&self) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        self.live_text()
    }

    fn live_text(&self) -> Option<String> {
        match (&self.delegate, &self.overlay) {
            (Some(delegate), _) => delegate.is_open().then(|| delegate.text()),
            (None, Some(overlay)) => Some(overlay.text().to_owned()),
            (None, None) => None,
        }
    }

    /// Starts a session on `node`.
    ///
    /// Custom-content and unknown nodes are rejected without a state change. Opening the node
    /// that is already open does nothing; opening another one commits the current session
    /// first.
    pub fn request_open<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        node: NodeId,
        inserting: bool,
    ) -> Result<Outcome, EditError> {
        let kind = match host.node(&node) {
            Some(found) => found.kind(),
            None => return Ok(Outcome::Rejected(Rejection::MissingNode)),
        };
        if kind == NodeKind::CustomContent {
            tracing::debug!(node = %node, "custom-content node is not editable");
            return Ok(Outcome::Rejected(Rejection::CustomContent));
        }

        if let State::Open(session) = &self.state {
            if session.node == node {
                return Ok(Outcome::Ignored);
            }
            self.close_session(host);
        }

        self.generation = self.generation.next();
        let generation = self.generation;
        self.state = State::Opening { node: node.clone(), generation };
        tracing::debug!(node = %node, %generation, inserting, "opening edit session");

        if let Some(hook) = self.before_text_edit.clone() {
            let Some(target) = host.node(&node) else {
                self.state = State::Closed;
                return Ok(Outcome::Rejected(Rejection::MissingNode));
            };
            let future = hook(target, inserting);
            return Ok(Outcome::Pending(PendingOpen::new(generation, node, inserting, future)));
        }

        self.finish_open(host, node, generation, inserting, false)
    }

    /// Applies a veto-hook result. Results for superseded or cancelled requests are dropped.
    pub fn complete_open<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        resolution: HookResolution,
    ) -> Result<Outcome, EditError> {
        let current = matches!(
            &self.state,
            State::Opening { generation, .. } if *generation == resolution.generation
        );
        if !current {
            tracing::debug!(
                node = %resolution.node,
                generation = %resolution.generation,
                "discarding stale before-edit result"
            );
            return Ok(Outcome::Stale);
        }

        match resolution.result {
            Err(err) => {
                tracing::warn!(node = %resolution.node, %err, "before-edit hook failed");
                self.state = State::Closed;
                host.report(ErrorKind::BeforeEditHookFailed, &err);
                Ok(Outcome::HookFailed)
            }
            Ok(false) => {
                tracing::debug!(node = %resolution.node, "edit vetoed by before-edit hook");
                self.state = State::Closed;
                Ok(Outcome::Vetoed)
            }
            Ok(true) => self.finish_open(
                host,
                resolution.node,
                resolution.generation,
                resolution.inserting,
                false,
            ),
        }
    }

    fn finish_open<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        node_id: NodeId,
        generation: Generation,
        inserting: bool,
        reposition: bool,
    ) -> Result<Outcome, EditError> {
        if !host.contains(&node_id) {
            self.state = State::Closed;
            self.cache = None;
            return Ok(Outcome::Rejected(Rejection::MissingNode));
        }
        let Some(geometry) = host.node_geometry(&node_id) else {
            self.state = State::Closed;
            self.cache = None;
            return Ok(Outcome::Rejected(Rejection::NotRendered));
        };

        if self.delegate.is_none() {
            if let Err(err) = self.ensure_overlay(host) {
                self.state = State::Closed;
                self.cache = None;
                return Err(err);
            }
        }
        if !reposition {
            host.emit(EditorEvent::BeforeEditOpen { node: node_id.clone() });
        }
        let anchor = place_node(host, &geometry);
        let seed = self.cache.take();

        if self.delegate.is_some() {
            if let (Some(delegate), Some(node)) = (self.delegate.as_mut(), host.node(&node_id)) {
                delegate.show(node, anchor, inserting, seed.as_deref());
            }
        } else {
            let Some(node) = host.node(&node_id) else {
                self.state = State::Closed;
                return Ok(Outcome::Rejected(Rejection::MissingNode));
            };
            let placement = self.placement(node, host.theme(), host.transform().scale, anchor);
            let text = seed.unwrap_or_else(|| node.text().to_owned());
            if let Some(overlay) = self.overlay.as_mut() {
                overlay.show(&placement, &text, inserting);
            }
            self.measure_overlay(host, &node_id);
        }

        self.scope.bind(host.keymap());
        self.state = State::Open(OpenSession { node: node_id.clone(), generation });
        tracing::debug!(node = %node_id, %generation, reposition, "edit session open");
        Ok(if reposition { Outcome::Repositioned } else { Outcome::Opened })
    }

    fn ensure_overlay<H: Host + ?Sized>(&mut self, host: &H) -> Result<(), EditError> {
        if self.overlay.is_some() {
            return Ok(());
        }
        let name = self.config.mount_target.as_deref();
        let Some(mount) = host.resolve_mount(name) else {
            return Err(EditError::MissingMountTarget(name.map(str::to_owned)));
        };
        tracing::debug!(mount = %mount.name, "creating text overlay");
        self.overlay = Some(Overlay::new(mount, self.config.padding()));
        self.overlay_allocations += 1;
        Ok(())
    }

    fn placement(&self, node: &Node, theme: Theme, scale: f64, anchor: ScreenRect) -> Placement {
        let style = node.style();
        let offset_y = if node.is_multiline() && style.line_height != 1.0 {
            -((style.line_height * style.font_size - style.font_size) / 2.0) * scale
        } else {
            0.0
        };
        Placement {
            anchor,
            max_width: self.config.max_inline_wrap_width * scale,
            offset_y,
            background: style.fill.unwrap_or(theme.background),
            color: style.color,
            z_index: self.config.overlay_z_index,
        }
    }

    /// Re-measures overlay content. Returns the content size in scene units.
    fn measure_overlay<H: Host + ?Sized>(&mut self, host: &H, node_id: &NodeId) -> Option<Size> {
        let scale = host.transform().scale;
        if scale <= 0.0 {
            return None;
        }
        let style = *host.node(node_id)?.style();
        let overlay = self.overlay.as_mut()?;
        let content = host.measure_text(overlay.text(), &style, scale, overlay.max_width());
        overlay.set_content_size(content);
        Some(Size::new(content.width / scale, content.height / scale))
    }

    /// Runs after every content change: re-measure, then grow the node box to fit.
    fn after_mutation<H: Host + ?Sized>(&mut self, host: &mut H) {
        let State::Open(session) = &self.state else {
            return;
        };
        let node_id = session.node.clone();
        let Some(content) = self.measure_overlay(host, &node_id) else {
            return;
        };
        let padding_x = match host.node(&node_id) {
            Some(node) => node.padding_x().unwrap_or(host.theme().padding_x),
            None => return,
        };
        grow_node(host, &node_id, content, padding_x);
    }

    /// Inserts text at the caret of the open overlay (paste, IME commit).
    pub fn insert_text<H: Host + ?Sized>(&mut self, host: &mut H, text: &str) -> Outcome {
        if !self.is_open() || self.delegate.is_some() {
            return Outcome::Ignored;
        }
        let Some(overlay) = self.overlay.as_mut() else {
            return Outcome::Ignored;
        };
        overlay.insert_str(text);
        self.after_mutation(host);
        Outcome::Edited
    }

    /// Commits and closes whatever is open. Cancels a pending open.
    pub fn close<H: Host + ?Sized>(&mut self, host: &mut H) -> Outcome {
        self.close_outcome(host, false)
    }

    fn close_outcome<H: Host + ?Sized>(&mut self, host: &mut H, advance: bool) -> Outcome {
        match self.close_session(host) {
            CloseResult::NotOpen => Outcome::Ignored,
            CloseResult::Cancelled => Outcome::Cancelled,
            CloseResult::Committed(commands) => Outcome::Closed { commands, advance },
        }
    }

    fn close_session<H: Host + ?Sized>(&mut self, host: &mut H) -> CloseResult {
        match std::mem::replace(&mut self.state, State::Closing) {
            State::Closed | State::Closing => {
                self.state = State::Closed;
                CloseResult::NotOpen
            }
            State::Opening { node, generation } => {
                tracing::debug!(node = %node, %generation, "pending edit cancelled");
                self.state = State::Closed;
                self.cache = None;
                CloseResult::Cancelled
            }
            State::Open(session) => {
                let rich = self.delegate.is_some();
                let (text, snapshot) = match (self.delegate.as_mut(), self.overlay.as_ref()) {
                    (Some(delegate), _) if delegate.is_open() => {
                        let text = delegate.text();
                        delegate.hide();
                        (Some(text), None)
                    }
                    (Some(_), _) => {
                        tracing::debug!(node = %session.node, "rich-text editor already closed");
                        (None, None)
                    }
                    (None, Some(overlay)) => {
                        (Some(overlay.text().to_owned()), Some(overlay.snapshot()))
                    }
                    (None, None) => (None, None),
                };

                let nodes = affected_nodes(host, &session.node);
                let commands = match &text {
                    Some(text) => commit_text(host, &nodes, text, rich),
                    None => 0,
                };
                host.emit(EditorEvent::EditClosed { overlay: snapshot, nodes });

                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.hide();
                }
                self.scope.unbind(host.keymap());
                self.cache = None;
                self.state = State::Closed;
                tracing::debug!(
                    node = %session.node,
                    generation = %session.generation,
                    commands,
                    "edit session closed"
                );
                CloseResult::Committed(commands)
            }
        }
    }

    /// Re-anchors the open session after the view transform changed, keeping its text.
    pub fn reposition<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<Outcome, EditError> {
        let State::Open(session) = &self.state else {
            return Ok(Outcome::Ignored);
        };
        let node = session.node.clone();
        let delegate_closed = self.delegate.as_ref().is_some_and(|delegate| !delegate.is_open());
        if delegate_closed || !host.contains(&node) || host.node_geometry(&node).is_none() {
            return Ok(self.close(host));
        }

        self.cache = self.live_text();
        self.state = State::Closing;
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.hide();
        }

        self.generation = self.generation.next();
        let generation = self.generation;
        self.state = State::Opening { node: node.clone(), generation };
        self.finish_open(host, node, generation, false, true)
    }

    /// Routes a key press: overlay editing and commit keys while open, the open shortcut and
    /// auto-enter otherwise.
    pub fn handle_key<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        key: KeyEvent,
    ) -> Result<Outcome, EditError> {
        if key.kind != KeyEventKind::Press {
            return Ok(Outcome::Ignored);
        }
        if self.is_open() {
            return Ok(self.handle_open_key(host, key));
        }

        if host.keymap().resolve(&key) == Some(EditShortcut::Open) {
            return self.run_shortcut(host, EditShortcut::Open);
        }
        if !self.config.auto_enter_edit_on_keydown || !is_auto_enter_key(&key) {
            return Ok(Outcome::Ignored);
        }
        let Some(node) = single_active(host) else {
            return Ok(Outcome::Ignored);
        };

        let outcome = self.request_open(host, node, false)?;
        if matches!(outcome, Outcome::Opened) {
            self.handle_open_key(host, key);
        }
        Ok(outcome)
    }

    fn handle_open_key<H: Host + ?Sized>(&mut self, host: &mut H, key: KeyEvent) -> Outcome {
        if self.delegate.is_some() {
            if !matches!(key.code, KeyCode::Char(_)) {
                if let Some(action) = host.keymap().resolve(&key) {
                    if action != EditShortcut::Open {
                        return self.run_open_shortcut(host, action);
                    }
                }
            }
            let consumed = self.delegate.as_mut().is_some_and(|delegate| delegate.handle_key(&key));
            return if consumed { Outcome::Edited } else { Outcome::Ignored };
        }

        if let KeyCode::Char(ch) = key.code {
            if !has_combination_key(key.modifiers) {
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.insert_char(ch);
                }
                self.after_mutation(host);
                return Outcome::Edited;
            }
        }

        if let Some(action) = host.keymap().resolve(&key) {
            if action != EditShortcut::Open {
                return self.run_open_shortcut(host, action);
            }
        }

        let Some(overlay) = self.overlay.as_mut() else {
            return Outcome::Ignored;
        };
        let changed = match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
                overlay.insert_char('\n');
                true
            }
            KeyCode::Backspace => overlay.backspace(),
            KeyCode::Delete => overlay.delete(),
            KeyCode::Left => {
                overlay.move_left();
                false
            }
            KeyCode::Right => {
                overlay.move_right();
                false
            }
            KeyCode::Home => {
                overlay.move_home();
                false
            }
            KeyCode::End => {
                overlay.move_end();
                false
            }
            _ => return Outcome::Ignored,
        };
        if changed {
            self.after_mutation(host);
        }
        Outcome::Edited
    }

    fn run_open_shortcut<H: Host + ?Sized>(&mut self, host: &mut H, action: EditShortcut) -> Outcome {
        match action {
            EditShortcut::Open => Outcome::Ignored,
            EditShortcut::Commit => self.close_outcome(host, false),
            EditShortcut::CommitAndAdvance => self.close_outcome(host, true),
        }
    }

    /// Runs an action resolved from the host keymap.
    pub fn run_shortcut<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        action: EditShortcut,
    ) -> Result<Outcome, EditError> {
        match action {
            EditShortcut::Open => {
                if self.is_open() {
                    return Ok(Outcome::Ignored);
                }
                let Some(node) = single_active(host) else {
                    return Ok(Outcome::Ignored);
                };
                self.request_open(host, node, false)
            }
            EditShortcut::Commit | EditShortcut::CommitAndAdvance => {
                Ok(self.run_open_shortcut(host, action))
            }
        }
    }

    /// Closes any session and removes every binding this editor registered.
    pub fn dispose<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.close_session(host);
        self.scope.unbind(host.keymap());
        if let Some(id) = self.open_binding.take() {
            host.keymap().remove(id);
        }
    }
}

fn single_active<H: NodeTree + ?Sized>(host: &H) -> Option<NodeId> {
    match host.active_nodes() {
        [only] => Some(only.clone()),
        _ => None,
    }
}

/// Nodes that receive the edited text: the active selection, or just the edited node when
/// it is not part of it.
fn affected_nodes<H: NodeTree + ?Sized>(host: &H, current: &NodeId) -> SmallVec<[NodeId; 4]> {
    let active = host.active_nodes();
    if active.contains(current) {
        active.iter().cloned().collect()
    } else {
        smallvec![current.clone()]
    }
}
