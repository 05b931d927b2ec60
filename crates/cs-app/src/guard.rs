use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

use cs_core::guard::{CopyOptions, PendingClear};
use cs_core::policy::ClipboardClearPolicy;
use cs_core::ports::{ClipboardError, ClipboardPort, ClockPort, SecretClipboardPort};

/// The armed state: one pending clear plus the owning handle of its timer
/// task.
struct Armed {
    pending: PendingClear,
    abort: AbortHandle,
}

/// Copies values to the system clipboard and guarantees that a secret copy
/// is wiped after a bounded time, unless the user has since copied
/// something else.
///
/// At most one clear is scheduled per guard; arming always cancels the
/// previous timer first. Every state change goes through cancel-then-arm
/// under the slot mutex, and the critical sections never await, so a std
/// mutex is enough and lets `Drop` disarm.
pub struct SecretClipboardGuard<C, K>
where
    C: ClipboardPort + 'static,
    K: ClockPort,
{
    clipboard: Arc<C>,
    clock: Arc<K>,
    policy: Mutex<ClipboardClearPolicy>,
    slot: Arc<Mutex<Option<Armed>>>,
    generation: AtomicU64,
}

impl<C, K> SecretClipboardGuard<C, K>
where
    C: ClipboardPort + 'static,
    K: ClockPort,
{
    pub fn new(clipboard: Arc<C>, clock: Arc<K>, policy: ClipboardClearPolicy) -> Self {
        Self {
            clipboard,
            clock,
            policy: Mutex::new(policy),
            slot: Arc::new(Mutex::new(None)),
            generation: AtomicU64::new(0),
        }
    }

    /// Replace the default clear policy.
    ///
    /// Takes effect for subsequent copies; an already-armed clear keeps its
    /// original deadline.
    pub fn set_policy(&self, policy: ClipboardClearPolicy) {
        *self.policy.lock().unwrap() = policy;
    }

    pub fn policy(&self) -> ClipboardClearPolicy {
        self.policy.lock().unwrap().clone()
    }

    /// Cancel whatever is armed. Returns whether something was.
    fn disarm(slot: &mut Option<Armed>) -> bool {
        match slot.take() {
            Some(armed) => {
                armed.abort.abort();
                debug!(
                    generation = armed.pending.generation(),
                    "pending clear cancelled"
                );
                true
            }
            None => false,
        }
    }

    /// Schedule a clear for `value` and record it in the slot.
    ///
    /// The caller must already hold the slot lock and have disarmed the
    /// previous entry.
    fn arm(&self, slot: &mut Option<Armed>, value: &str, timeout_secs: u64) {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed);
        let deadline_ms = self.clock.now_ms() + (timeout_secs as i64) * 1000;
        let pending = PendingClear::new(value, deadline_ms, generation);

        let task_slot = Arc::clone(&self.slot);
        let task_clipboard = Arc::clone(&self.clipboard);
        let handle = tokio::spawn(async move {
            sleep(Duration::from_secs(timeout_secs)).await;
            run_scheduled_clear(&task_slot, task_clipboard.as_ref(), generation);
        });

        *slot = Some(Armed {
            pending,
            abort: handle.abort_handle(),
        });
        debug!(timeout_secs, deadline_ms, "auto-clear armed");
    }
}

/// Deferred clear body, run once per armed clear at its deadline.
///
/// Wipes the clipboard only if it still holds exactly the copied value.
/// Read or write failures are logged and swallowed: no user action is
/// associated with a timer firing in the background.
fn run_scheduled_clear<C: ClipboardPort>(
    slot: &Mutex<Option<Armed>>,
    clipboard: &C,
    generation: u64,
) {
    let mut slot = slot.lock().unwrap();
    // Superseded or torn down while this task waited for the lock.
    if slot.as_ref().map(|armed| armed.pending.generation()) != Some(generation) {
        return;
    }
    let Some(armed) = slot.take() else { return };

    match clipboard.read_text() {
        Ok(contents) if armed.pending.matches(&contents) => {
            match clipboard.write_text("") {
                Ok(()) => debug!(generation, "clipboard cleared"),
                Err(err) => warn!(%err, "scheduled clipboard wipe failed"),
            }
        }
        Ok(_) => debug!(generation, "clipboard changed since copy, leaving it alone"),
        Err(err) => warn!(%err, "clipboard read failed during scheduled clear"),
    }
}

#[async_trait]
impl<C, K> SecretClipboardPort for SecretClipboardGuard<C, K>
where
    C: ClipboardPort + 'static,
    K: ClockPort,
{
    async fn copy(&self, value: &str, options: CopyOptions) -> Result<(), ClipboardError> {
        if value.trim().is_empty() {
            debug!("empty value, skipping copy");
            return Ok(());
        }

        // A failed write must not disturb an older still-valid pending
        // clear, so the slot is only touched after the write succeeds.
        self.clipboard.write_text(value)?;

        let policy = options
            .policy
            .unwrap_or_else(|| self.policy.lock().unwrap().clone());

        let mut slot = self.slot.lock().unwrap();
        Self::disarm(&mut slot);
        if options.is_secret && policy.enabled {
            self.arm(&mut slot, value, policy.effective_timeout_secs());
        }
        Ok(())
    }

    fn clear_now(&self) {
        let mut slot = self.slot.lock().unwrap();
        if Self::disarm(&mut slot) {
            if let Err(err) = self.clipboard.write_text("") {
                warn!(%err, "immediate clipboard wipe failed");
            }
        }
    }

    fn teardown(&self) {
        Self::disarm(&mut self.slot.lock().unwrap());
    }

    fn armed_until(&self) -> Option<i64> {
        self.slot
            .lock()
            .unwrap()
            .as_ref()
            .map(|armed| armed.pending.deadline_ms())
    }
}

impl<C, K> Drop for SecretClipboardGuard<C, K>
where
    C: ClipboardPort + 'static,
    K: ClockPort,
{
    /// Dropping the guard behaves like [`SecretClipboardPort::teardown`]:
    /// the timer dies with the guard, the clipboard is left alone.
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.lock() {
            Self::disarm(&mut slot);
        }
    }
}
