// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Key bindings the editor registers with the renderer.
//!
//! The renderer owns one [`Keymap`]; the editor adds its global open shortcut at construction
//! and a [`ShortcutScope`] of commit keys for the lifetime of each open session. Later
//! registrations shadow earlier ones for the same key, so scoped bindings layer on top of
//! whatever the renderer already bound.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use smallvec::SmallVec;

/// Actions the editor can be asked to run from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditShortcut {
    /// Open an edit session on the single active node.
    Open,
    /// Commit and close the open session.
    Commit,
    /// Commit, close, and let the host move on to the next node.
    CommitAndAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code && self.modifiers == key.modifiers
    }
}

pub const OPEN_BINDING: KeyBinding = KeyBinding::plain(KeyCode::F(2));
pub const COMMIT_BINDING: KeyBinding = KeyBinding::plain(KeyCode::Enter);
pub const COMMIT_AND_ADVANCE_BINDING: KeyBinding = KeyBinding::plain(KeyCode::Tab);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

/// Registration object for key bindings, owned by the renderer.
#[derive(Debug, Default)]
pub struct Keymap {
    next_id: u64,
    entries: Vec<(BindingId, KeyBinding, EditShortcut)>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, binding: KeyBinding, action: EditShortcut) -> BindingId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = BindingId(self.next_id);
        self.entries.push((id, binding, action));
        id
    }

    /// Removes a binding. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: BindingId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Most recently registered action bound to `key`.
    pub fn resolve(&self, key: &KeyEvent) -> Option<EditShortcut> {
        self.entries
            .iter()
            .rev()
            .find(|(_, binding, _)| binding.matches(key))
            .map(|(_, _, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Commit keys bound only while a session is open.
#[derive(Debug, Default)]
pub struct ShortcutScope {
    bindings: SmallVec<[BindingId; 2]>,
}

impl ShortcutScope {
    pub fn is_bound(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// Binds commit keys. Binding twice is a no-op.
    pub fn bind(&mut self, keymap: &mut Keymap) {
        if self.is_bound() {
            return;
        }
        self.bindings.push(keymap.add(COMMIT_BINDING, EditShortcut::Commit));
        self.bindings
            .push(keymap.add(COMMIT_AND_ADVANCE_BINDING, EditShortcut::CommitAndAdvance));
    }

    pub fn unbind(&mut self, keymap: &mut Keymap) {
        for id in self.bindings.drain(..) {
            keymap.remove(id);
        }
    }
}

pub(crate) fn has_combination_key(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
    )
}

/// Whether a key press should start editing the active node.
///
/// Letters and digits qualify, as does any non-ASCII alphanumeric character (what a terminal
/// delivers once an IME composition commits). Shift is allowed; other modifiers are not.
pub fn is_auto_enter_key(key: &KeyEvent) -> bool {
    let KeyCode::Char(ch) = key.code else {
        return false;
    };
    let printable = ch.is_ascii_alphanumeric() || (!ch.is_ascii() && ch.is_alphanumeric());
    printable && !has_combination_key(key.modifiers)
}
