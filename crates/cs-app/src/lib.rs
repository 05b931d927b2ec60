//! ClipSentry application layer.
//!
//! Orchestrates the domain model and ports into the secret clipboard
//! guard service.

pub mod guard;

pub use guard::SecretClipboardGuard;
