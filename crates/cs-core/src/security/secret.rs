use std::fmt;
use std::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// A sensitive string that must never be logged, cloned, or serialized.
///
/// The inner value is only readable through an explicit borrow and is
/// zeroed on drop.
pub struct SecretText {
    inner: String,
}

impl SecretText {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Borrow the inner secret as &str.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Compare against candidate clipboard contents.
    ///
    /// Length differences short-circuit; equal-length inputs are compared
    /// in constant time.
    pub fn ct_eq(&self, other: &str) -> bool {
        let a = self.inner.as_bytes();
        let b = other.as_bytes();
        if a.len() != b.len() {
            return false;
        }
        a.ct_eq(b).into()
    }

    /// Consume and return the inner String.
    ///
    /// Explicit ownership handoff, use sparingly.
    pub fn into_inner(mut self) -> String {
        let mut tmp = String::new();
        std::mem::swap(&mut self.inner, &mut tmp);
        tmp
    }
}

impl fmt::Debug for SecretText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Deref for SecretText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.expose()
    }
}

impl Drop for SecretText {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}
