// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Receives the final unmasked output of an adapter.
///
/// Called exactly once per successful adapter invocation. Framing,
/// transport and retries belong to the implementation.
pub trait ResultSink {
    /// Hands over the result bytes.
    fn emit(&mut self, buffer: &[u8]);
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn emit(&mut self, buffer: &[u8]) {
        (**self).emit(buffer)
    }
}
