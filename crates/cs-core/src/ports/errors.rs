use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),

    #[error("clipboard read failed: {0}")]
    ReadFailed(String),
}
