mod defaults;
mod model;

pub use model::{ClipboardClearPolicy, DEFAULT_CLEAR_TIMEOUT_SECS, HISTORY_CLEAR_TIMEOUT_SECS};
