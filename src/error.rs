// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Fatal editor errors. These indicate a misconfigured host, not a user action.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("overlay mount target not found ({})", .0.as_deref().unwrap_or("<default>"))]
    MissingMountTarget(Option<String>),
    #[error("invalid editor config: {0}")]
    InvalidConfig(String),
}

/// Failure raised by a `before_text_edit` hook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("before-edit hook failed: {message}")]
pub struct HookError {
    message: String,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Categories reported to the host's error sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BeforeEditHookFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeEditHookFailed => "BEFORE_EDIT_HOOK_FAILED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
