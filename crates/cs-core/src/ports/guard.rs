use async_trait::async_trait;

use super::errors::ClipboardError;
use crate::guard::CopyOptions;

/// Consumer-facing capability: copy values to the clipboard with bounded
/// secret residency.
#[async_trait]
pub trait SecretClipboardPort: Send + Sync {
    /// Write `value` to the system clipboard.
    ///
    /// Empty or whitespace-only input is a successful no-op. A successful
    /// secret copy under an enabled policy supersedes any pending clear
    /// and arms a new one; a successful non-secret copy cancels the
    /// pending clear without re-arming. A failed write leaves any older
    /// pending clear untouched.
    async fn copy(&self, value: &str, options: CopyOptions) -> Result<(), ClipboardError>;

    /// Cancel the pending clear and, if one was armed, wipe the clipboard
    /// unconditionally. Safe to call repeatedly.
    fn clear_now(&self);

    /// Cancel the pending clear without wiping the clipboard.
    ///
    /// For view disposal: going away must not surprise-wipe whatever the
    /// user currently has on the clipboard.
    fn teardown(&self);

    /// Deadline (epoch ms) of the armed clear, if any.
    fn armed_until(&self) -> Option<i64>;
}
