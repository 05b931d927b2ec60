use crate::policy::ClipboardClearPolicy;

/// Per-call options for a clipboard copy.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Marks the value as a secret whose clipboard residency must be
    /// time-bounded.
    pub is_secret: bool,

    /// Overrides the guard's default clear policy for this call only.
    pub policy: Option<ClipboardClearPolicy>,
}

impl CopyOptions {
    /// Options for copying a secret (password, history entry).
    pub fn secret() -> Self {
        Self {
            is_secret: true,
            policy: None,
        }
    }

    /// Options for copying a non-secret value (username, URL).
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ClipboardClearPolicy) -> Self {
        self.policy = Some(policy);
        self
    }
}
