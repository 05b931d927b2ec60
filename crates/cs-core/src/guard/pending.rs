use crate::security::SecretText;

/// The single scheduled clipboard clear a guard may hold.
///
/// Created when a secret copy succeeds under an enabled policy. Destroyed
/// when the deadline fires, a newer copy supersedes it, or the guard is
/// torn down.
#[derive(Debug)]
pub struct PendingClear {
    value: SecretText,
    deadline_ms: i64,
    generation: u64,
}

impl PendingClear {
    pub fn new(value: impl Into<String>, deadline_ms: i64, generation: u64) -> Self {
        Self {
            value: SecretText::new(value),
            deadline_ms,
            generation,
        }
    }

    /// Epoch milliseconds at which the auto-clear fires.
    pub fn deadline_ms(&self) -> i64 {
        self.deadline_ms
    }

    /// Identity token distinguishing this arm from any later one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the clipboard still holds exactly what this clear was armed
    /// for.
    pub fn matches(&self, contents: &str) -> bool {
        self.value.ct_eq(contents)
    }
}
