// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod is_slice_zeroized_tests {
    use rampart_util::is_slice_zeroized;

    #[test]
    fn test_empty_slice_is_zeroized() {
        assert!(is_slice_zeroized(&[]));
    }

    #[test]
    fn test_zero_slice() {
        assert!(is_slice_zeroized(&[0u8; 64]));
    }

    #[test]
    fn test_trailing_non_zero_byte() {
        let mut bytes = [0u8; 64];
        bytes[63] = 1;

        assert!(!is_slice_zeroized(&bytes));
    }
}
