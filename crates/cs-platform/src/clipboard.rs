use std::sync::Mutex;

use anyhow::{Context, Result};
use arboard::Clipboard;

use cs_core::ports::{ClipboardError, ClipboardPort};

/// System clipboard access through `arboard`.
///
/// The clipboard context is not thread-safe, so it lives behind a mutex.
pub struct ArboardClipboard {
    inner: Mutex<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self> {
        let context = Clipboard::new().context("clipboard context init failed")?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }
}

impl ClipboardPort for ArboardClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        let mut ctx = self.inner.lock().unwrap();
        ctx.get_text()
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx = self.inner.lock().unwrap();
        ctx.set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
