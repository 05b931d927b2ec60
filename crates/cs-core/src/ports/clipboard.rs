use super::errors::ClipboardError;

/// Text access to the system clipboard.
///
/// Calls are assumed to be near-instant OS calls; failures surface
/// synchronously rather than through a timeout path.
pub trait ClipboardPort: Send + Sync {
    fn read_text(&self) -> Result<String, ClipboardError>;
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
