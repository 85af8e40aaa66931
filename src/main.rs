// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inlay demo entrypoint: an editable mind map in the terminal.
//!
//! Set `INLAY_LOG` (for example `INLAY_LOG=inlay=debug`) to log to stderr.

fn main() {
    if let Err(err) = inlay::tui::run() {
        eprintln!("inlay: {err}");
        std::process::exit(1);
    }
}
