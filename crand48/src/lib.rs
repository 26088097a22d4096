//! Byte generator over the 48-bit linear congruential recurrence
//! `state = (A * state + C) mod 2^48`, yielding bits 32..=39 of each state.

use log::trace;

pub const A: u64 = 0x5DEECE66D;
pub const C: u64 = 0xB;
pub const DEFAULT_SEED: u64 = 123_456;

const MASK: u64 = (1 << 48) - 1;

/// Generator state. Independent handles never influence each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rand48 {
    state: u64,
}

impl Default for Rand48 {
    fn default() -> Rand48 {
        Rand48::new()
    }
}

impl Rand48 {
    pub fn new() -> Rand48 {
        Rand48::with_seed(DEFAULT_SEED)
    }
    /// Only the low 48 bits of `seed` are kept.
    pub fn with_seed(seed: u64) -> Rand48 {
        Rand48 { state: seed & MASK }
    }
    pub fn reseed(&mut self, seed: u64) {
        self.state = seed & MASK;
    }
    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn next_byte(&mut self) -> u8 {
        // 2^48 divides 2^64, so wrapping in u64 and masking is exact.
        self.state = A.wrapping_mul(self.state).wrapping_add(C) & MASK;
        trace!("state {:012x}", self.state);
        (self.state >> 32) as u8
    }
}

impl Iterator for Rand48 {
    type Item = u8;
    fn next(&mut self) -> Option<u8> {
        Some(self.next_byte())
    }
}
