use super::model::*;

impl Default for ClipboardClearPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_seconds: DEFAULT_CLEAR_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_enabled_with_thirty_seconds() {
        let policy = ClipboardClearPolicy::default();
        assert!(policy.enabled);
        assert_eq!(policy.timeout_seconds, 30);
    }
}
