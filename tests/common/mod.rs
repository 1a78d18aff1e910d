//! Shared helpers for integration tests

#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Seeded generator for test data; each test owns its own instance
pub struct TestRng(StdRng);

impl TestRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Random lowercase string of `n` characters
    pub fn string(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| ALPHABET[self.0.random_range(0..ALPHABET.len())] as char)
            .collect()
    }

    /// Random account owner name
    pub fn owner(&mut self) -> String {
        self.string(6)
    }

    /// Random 32 character key, valid for both makers
    pub fn key(&mut self) -> String {
        self.string(32)
    }
}
