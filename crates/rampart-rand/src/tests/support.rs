// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{
    DeterministicEntropySource, MockEntropySource, MockEntropySourceBehaviour,
};
use crate::traits::EntropySource;

#[test]
fn test_mock_none_delegates() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut bytes = [0u8; 16];

    entropy.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..)");

    assert_eq!(entropy.call_count(), 1);
}

#[test]
fn test_mock_fail_at_nth() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut bytes = [0u8; 4];

    assert!(entropy.fill_bytes(&mut bytes).is_ok());
    assert_eq!(
        entropy.fill_bytes(&mut bytes),
        Err(EntropyError::EntropyNotAvailable)
    );
    assert!(entropy.fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_mock_fail_from_nth() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailFromNthFillBytes(2));
    let mut bytes = [0u8; 4];

    assert!(entropy.fill_bytes(&mut bytes).is_ok());
    assert!(entropy.fill_bytes(&mut bytes).is_err());
    assert!(entropy.fill_bytes(&mut bytes).is_err());
}

#[test]
fn test_mock_change_behaviour_and_reset() {
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut bytes = [0u8; 4];

    assert!(entropy.fill_bytes(&mut bytes).is_err());

    entropy.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(entropy.fill_bytes(&mut bytes).is_ok());

    entropy.reset_count();
    assert_eq!(entropy.call_count(), 0);
}

#[test]
fn test_deterministic_source_replays_from_seed() {
    let a = DeterministicEntropySource::new(0xDEAD_BEEF);
    let b = DeterministicEntropySource::new(0xDEAD_BEEF);
    let mut bytes_a = [0u8; 13];
    let mut bytes_b = [0u8; 13];

    a.fill_bytes(&mut bytes_a).expect("Failed to fill_bytes(..)");
    b.fill_bytes(&mut bytes_b).expect("Failed to fill_bytes(..)");

    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn test_deterministic_source_zero_seed_is_usable() {
    let entropy = DeterministicEntropySource::new(0);
    let mut bytes = [0u8; 8];

    entropy.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..)");

    assert!(bytes.iter().any(|b| *b != 0));
}
