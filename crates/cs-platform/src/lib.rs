//! # cs-platform
//!
//! Platform adapters for ClipSentry: the real system clipboard and clock
//! behind the `cs-core` ports.

pub mod clipboard;
pub mod time;

pub use clipboard::ArboardClipboard;
pub use time::SystemClock;
