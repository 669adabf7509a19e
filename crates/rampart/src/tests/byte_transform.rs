// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use rampart_rand::{EntropyError, SystemEntropySource};

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::AdapterError;
use crate::secret::Secret;
use crate::support::test_utils::{CountingNoise, VecSink, Xxtea};
use crate::transform::BlockTransform;

const KEY: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF,
];

fn xxtea() -> Xxtea {
    Xxtea {
        key: [0x0123_4567, 0x89AB_CDEF, 0xFEDC_BA98, 0x7654_3210],
    }
}

fn reference(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut expected = data.to_vec();
    for (i, byte) in key.iter().enumerate() {
        expected[i % data.len()] ^= byte;
    }
    xxtea().transform(&mut expected);
    expected
}

#[test]
fn test_first_order_matches_reference() {
    let entropy = SystemEntropySource {};
    let engine = Engine::first_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::first_order(..)");
    let key = Secret::new(KEY);

    let input: Vec<u8> = (0u8..16).collect();
    let mut data = input.clone();
    let mut sink = VecSink::default();

    engine
        .byte_transform(&key, &mut data, &xxtea(), &mut sink)
        .expect("Failed to byte_transform(..)");

    let expected = reference(&KEY, &input);
    assert_eq!(data, expected);
    assert_eq!(sink.emitted, vec![expected]);
}

#[test]
fn test_second_order_matches_reference_with_short_data() {
    let entropy = SystemEntropySource {};
    let engine = Engine::second_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::second_order(..)");
    let key = Secret::new(KEY);

    // 16 key bytes fold twice over 8 data bytes.
    let input = [0xF0u8, 0x0F, 0xAA, 0x55, 0x01, 0x02, 0x03, 0x04];
    let mut data = input;
    let mut sink = VecSink::default();

    engine
        .byte_transform(&key, &mut data, &xxtea(), &mut sink)
        .expect("Failed to byte_transform(..)");

    assert_eq!(data.to_vec(), reference(&KEY, &input));
    assert_eq!(sink.emitted.len(), 1);
}

#[test]
fn test_output_is_independent_of_randomness() {
    let entropy = SystemEntropySource {};
    let engine = Engine::second_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::second_order(..)");
    let key = Secret::new(KEY);

    let mut first = [0x42u8; 24];
    let mut second = [0x42u8; 24];

    engine
        .byte_transform(&key, &mut first, &xxtea(), &mut VecSink::default())
        .expect("Failed to byte_transform(..)");
    engine
        .byte_transform(&key, &mut second, &xxtea(), &mut VecSink::default())
        .expect("Failed to byte_transform(..)");

    assert_eq!(first, second);
}

#[test]
fn test_invalid_lengths_are_rejected_without_side_effects() {
    let entropy = SystemEntropySource {};
    let engine = Engine::first_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::first_order(..)");
    let key = Secret::new(KEY);

    for len in [0usize, 4, 6, 9, 10, 14] {
        let mut data = vec![0x11u8; len];
        let mut sink = VecSink::default();

        let result = engine.byte_transform(&key, &mut data, &xxtea(), &mut sink);

        assert_eq!(result, Err(AdapterError::InvalidLength), "len {}", len);
        assert_eq!(data, vec![0x11u8; len]);
        assert!(sink.emitted.is_empty());
    }
}

#[test]
fn test_entropy_failure_leaves_data_untouched() {
    let key = Secret::new(KEY);

    for nth in [1usize, 10, 17, 40, 80] {
        let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailFromNthFillBytes(nth));
        let engine = Engine::second_order(&entropy, EngineConfig::default())
            .expect("Failed to Engine::second_order(..)");

        let mut data = [0x33u8; 16];
        let mut sink = VecSink::default();

        let result = engine.byte_transform(&key, &mut data, &xxtea(), &mut sink);

        assert_eq!(
            result,
            Err(AdapterError::Entropy(EntropyError::EntropyNotAvailable)),
            "failing from call {}",
            nth
        );
        assert_eq!(data, [0x33u8; 16]);
        assert!(sink.emitted.is_empty());
    }
}

#[test]
fn test_delays_go_through_timing_noise() {
    let entropy = SystemEntropySource {};
    let noise = CountingNoise::default();
    let engine = Engine::first_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::first_order(..)")
        .with_noise(&noise);
    let key = Secret::new(KEY);

    let mut data = [0u8; 8];
    engine
        .byte_transform(&key, &mut data, &xxtea(), &mut VecSink::default())
        .expect("Failed to byte_transform(..)");

    // One jitter and one delay per key byte.
    assert_eq!(noise.calls(), 2 * KEY.len());
    assert!(noise.cycles() >= 5 * KEY.len() as u64);
    assert!(noise.cycles() <= 63 * KEY.len() as u64);
}

#[test]
fn test_empty_key_only_transforms() {
    let entropy = SystemEntropySource {};
    let engine = Engine::first_order(&entropy, EngineConfig::default())
        .expect("Failed to Engine::first_order(..)");
    let key = Secret::new([0u8; 0]);

    let input = [9u8; 8];
    let mut data = input;
    engine
        .byte_transform(&key, &mut data, &xxtea(), &mut VecSink::default())
        .expect("Failed to byte_transform(..)");

    assert_eq!(data.to_vec(), reference(&[], &input));
}
