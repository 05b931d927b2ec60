use serde::{Deserialize, Serialize};

/// Auto-clear timeout applied when the configured value is missing or
/// unusable.
pub const DEFAULT_CLEAR_TIMEOUT_SECS: u32 = 30;

/// Shorter preset used when copying entries out of password history.
pub const HISTORY_CLEAR_TIMEOUT_SECS: u32 = 20;

/// Auto-clear behavior for secret copies.
///
/// Owned and persisted by the surrounding settings layer; this crate only
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardClearPolicy {
    pub enabled: bool,

    /// Seconds between a secret copy and its scheduled clear.
    ///
    /// Zero is treated as "not configured" and falls back to
    /// [`DEFAULT_CLEAR_TIMEOUT_SECS`].
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

impl ClipboardClearPolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            timeout_seconds: DEFAULT_CLEAR_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(timeout_seconds: u32) -> Self {
        Self {
            enabled: true,
            timeout_seconds,
        }
    }

    /// Timeout to actually schedule with, after fallback handling.
    pub fn effective_timeout_secs(&self) -> u64 {
        if self.timeout_seconds == 0 {
            DEFAULT_CLEAR_TIMEOUT_SECS as u64
        } else {
            self.timeout_seconds as u64
        }
    }
}

pub(super) fn default_timeout_seconds() -> u32 {
    DEFAULT_CLEAR_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let policy = ClipboardClearPolicy::with_timeout(0);
        assert_eq!(policy.effective_timeout_secs(), 30);
    }

    #[test]
    fn configured_timeout_is_used_as_is() {
        let policy = ClipboardClearPolicy::with_timeout(HISTORY_CLEAR_TIMEOUT_SECS);
        assert_eq!(policy.effective_timeout_secs(), 20);
    }

    #[test]
    fn missing_timeout_field_deserializes_to_default() {
        let policy: ClipboardClearPolicy = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert_eq!(policy.timeout_seconds, DEFAULT_CLEAR_TIMEOUT_SECS);
    }

    #[test]
    fn round_trips_through_json() {
        let policy = ClipboardClearPolicy::with_timeout(45);
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(serde_json::from_str::<ClipboardClearPolicy>(&json).unwrap(), policy);
    }
}
