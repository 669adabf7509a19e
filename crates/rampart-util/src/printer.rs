// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Console output for diagnostics.
//!
//! Messages are only emitted when the `trace` feature is enabled, and only
//! reach stderr when `std` is enabled as well. Never print shares, secrets,
//! masks or fault details through these macros.
//!
//! The macros expand to `ufmt` calls and check the `trace` feature of the
//! calling crate, so callers depend on `ufmt` and forward their own
//! `trace` feature to `rampart-util/trace`.

use core::convert::Infallible;
use ufmt::uWrite;

/// Console writer behind [`rprint!`](crate::rprint) and
/// [`rprintln!`](crate::rprintln).
#[derive(Default)]
pub struct Printer;

impl uWrite for Printer {
    type Error = Infallible;

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(all(feature = "trace", feature = "std"))]
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        std::eprint!("{s}");
        Ok(())
    }

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(not(all(feature = "trace", feature = "std")))]
    #[inline(always)]
    fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Prints to the Rampart console.
#[macro_export]
macro_rules! rprint {
    ($($tt:tt)*) => {{
        if cfg!(feature = "trace") {
            let _ = ufmt::uwrite!(&mut $crate::printer::Printer::default(), $($tt)*);
        }
    }}
}

/// Prints a line to the Rampart console.
#[macro_export]
macro_rules! rprintln {
    ($($tt:tt)*) => {{
        if cfg!(feature = "trace") {
            let _ = ufmt::uwriteln!(&mut $crate::printer::Printer::default(), $($tt)*);
        }
    }}
}
