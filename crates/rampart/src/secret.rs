// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned secret buffers.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Explicitly owned secret value, wiped when dropped.
///
/// Secrets handed to the engine (keys, cipher states, reference passwords)
/// live here instead of in long-lived globals. The caller controls the
/// lifetime; the engine only borrows.
///
/// # Design
///
/// - **No `Deref`/`Clone`**: access goes through [`as_ref`](Secret::as_ref)
///   and [`as_mut`](Secret::as_mut), no accidental copies
/// - **Redacted `Debug`**: prints `[REDACTED Secret]`
/// - **Zeroized on drop**
///
/// # Example
///
/// ```rust
/// use rampart::Secret;
///
/// let mut key = [0x2Bu8; 16];
/// let secret = Secret::from(&mut key);
///
/// // The source buffer is wiped.
/// assert_eq!(key, [0u8; 16]);
/// assert_eq!(secret.as_ref(), &[0x2Bu8; 16]);
/// ```
pub struct Secret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> Secret<T> {
    /// Takes ownership of `value`.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Moves the contents of `sensitive_data` into a new secret and wipes
    /// the source.
    ///
    /// The value is swapped out with [`core::mem::take`], so no second
    /// plaintext copy is left behind in the caller's buffer.
    pub fn from(sensitive_data: &mut T) -> Self
    where
        T: Default,
    {
        let secret = Self {
            inner: core::mem::take(sensitive_data),
        };
        sensitive_data.zeroize();

        secret
    }

    /// Replaces the held value with the contents of `value`, wiping the old
    /// value and the source.
    pub fn replace(&mut self, value: &mut T) {
        self.inner.zeroize();
        core::mem::swap(&mut self.inner, value);
        value.zeroize();
    }

    /// Returns an immutable reference to the inner value.
    #[inline]
    pub fn as_ref(&self) -> &T {
        &self.inner
    }

    /// Returns a mutable reference to the inner value.
    #[inline]
    pub fn as_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED Secret]")
    }
}

impl<T: Zeroize> Zeroize for Secret<T> {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize> Drop for Secret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize> ZeroizeOnDrop for Secret<T> {}
