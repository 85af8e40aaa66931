// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editor configuration.

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::geometry::Size;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Close (and commit) when the user clicks outside the overlay.
    pub end_edit_on_outside_click: bool,
    /// Start editing the single active node when a printable key is pressed.
    pub auto_enter_edit_on_keydown: bool,
    pub overlay_z_index: i32,
    /// Wrap width in scene units; multiplied by the view scale for the overlay.
    pub max_inline_wrap_width: f64,
    /// Named mount point for the overlay; `None` uses the viewport's default layer.
    pub mount_target: Option<String>,
    /// Horizontal and vertical overlay padding, in screen pixels.
    pub overlay_padding: (f64, f64),
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            end_edit_on_outside_click: true,
            auto_enter_edit_on_keydown: false,
            overlay_z_index: 3000,
            max_inline_wrap_width: 500.0,
            mount_target: None,
            overlay_padding: (5.0, 3.0),
        }
    }
}

impl EditConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, EditError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| EditError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EditError> {
        if !(self.max_inline_wrap_width > 0.0) {
            return Err(EditError::InvalidConfig(format!(
                "max_inline_wrap_width must be positive (got {})",
                self.max_inline_wrap_width
            )));
        }
        let (pad_x, pad_y) = self.overlay_padding;
        if pad_x < 0.0 || pad_y < 0.0 {
            return Err(EditError::InvalidConfig(format!(
                "overlay_padding must not be negative (got {pad_x}, {pad_y})"
            )));
        }
        Ok(())
    }

    pub(crate) fn padding(&self) -> Size {
        Size::new(self.overlay_padding.0, self.overlay_padding.1)
    }
}
