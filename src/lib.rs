//! # clipsentry
//!
//! Copy secrets to the system clipboard with a bounded, non-clobbering
//! auto-clear: the clipboard is wiped after the configured timeout, but
//! only if it still holds exactly what was copied.
//!
//! The workspace follows a hexagonal split: `cs-core` holds the domain
//! model and ports, `cs-app` the guard service, `cs-platform` the system
//! adapters. This crate re-exports the public surface and wires the
//! system defaults together.

use std::sync::Arc;

use anyhow::Result;

pub use cs_app::SecretClipboardGuard;
pub use cs_core::guard::CopyOptions;
pub use cs_core::policy::{
    ClipboardClearPolicy, DEFAULT_CLEAR_TIMEOUT_SECS, HISTORY_CLEAR_TIMEOUT_SECS,
};
pub use cs_core::ports::{ClipboardError, ClipboardPort, ClockPort, SecretClipboardPort};
pub use cs_platform::{ArboardClipboard, SystemClock};

/// Build a guard wired to the real system clipboard and clock.
pub fn system_guard(
    policy: ClipboardClearPolicy,
) -> Result<SecretClipboardGuard<ArboardClipboard, SystemClock>> {
    let clipboard = Arc::new(ArboardClipboard::new()?);
    Ok(SecretClipboardGuard::new(
        clipboard,
        Arc::new(SystemClock),
        policy,
    ))
}
