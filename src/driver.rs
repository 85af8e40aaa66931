// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inlay-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inlay and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Async event loop that owns an editor and drives its veto hooks.

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::edit::{CanvasEvent, HookResolution, Outcome, TextEditor};
use crate::error::EditError;
use crate::host::Host;

/// Feeds canvas events into `editor` until the channel closes, then disposes it.
///
/// Veto hooks run as spawned tasks; whichever answer arrives is handed back to the editor,
/// which drops results for requests that have been superseded.
pub async fn run<H: Host + ?Sized>(
    editor: &mut TextEditor,
    host: &mut H,
    mut events: mpsc::UnboundedReceiver<CanvasEvent>,
) -> Result<(), EditError> {
    let mut pending: JoinSet<HookResolution> = JoinSet::new();

    loop {
        tokio::select! {
            joined = pending.join_next(), if !pending.is_empty() => {
                match joined {
                    Some(Ok(resolution)) => {
                        let outcome = editor.complete_open(host, resolution)?;
                        tracing::trace!(?outcome, "hook resolved");
                    }
                    Some(Err(err)) => tracing::warn!(%err, "before-edit hook task failed"),
                    None => {}
                }
            }
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                match editor.handle_event(host, event)? {
                    Outcome::Pending(open) => {
                        pending.spawn(open.resolve());
                    }
                    outcome => tracing::trace!(?outcome, "event handled"),
                }
            }
        }
    }

    pending.abort_all();
    editor.dispose(host);
    Ok(())
}
