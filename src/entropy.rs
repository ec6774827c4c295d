//! Secure random source abstraction.
//!
//! The generator core only ever sees [`SecureRandom`]; the process-wide
//! default is the operating system CSPRNG. Tests substitute deterministic
//! sources.

use rand::RngCore;
use rand::rngs::OsRng;

/// A cryptographically secure source of uniform 32-bit integers.
pub trait SecureRandom {
    fn next_u32(&mut self) -> u32;
}

/// Operating system CSPRNG (getrandom/urandom under the hood).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl SecureRandom for OsEntropy {
    fn next_u32(&mut self) -> u32 {
        OsRng.next_u32()
    }
}

/// Draw a uniform index in `0..n` by rejection sampling.
///
/// Draws above the largest multiple of `n` that fits in the u32 range are
/// discarded, so the reduction carries no modulo bias.
pub fn uniform_index(rng: &mut dyn SecureRandom, n: usize) -> usize {
    debug_assert!(n > 0 && n <= u32::MAX as usize);
    let n = n as u64;
    let limit = ((1u64 << 32) / n) * n;
    loop {
        let draw = rng.next_u32() as u64;
        if draw < limit {
            return (draw % n) as usize;
        }
    }
}

/// Replays a fixed script of draws, wrapping around when exhausted.
#[cfg(test)]
pub struct ScriptedRandom {
    draws: Vec<u32>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(draws: Vec<u32>) -> Self {
        Self { draws, pos: 0 }
    }
}

#[cfg(test)]
impl SecureRandom for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_index_in_range() {
        let mut rng = OsEntropy;
        for _ in 0..10_000 {
            assert!(uniform_index(&mut rng, 61) < 61);
        }
    }

    #[test]
    fn uniform_index_rejects_biased_tail() {
        // For n = 10 the rejection limit is (2^32 / 10) * 10 = 4_294_967_290.
        // u32::MAX lies in the tail and must be skipped.
        let mut rng = ScriptedRandom::new(vec![u32::MAX, 4_294_967_290, 7]);
        assert_eq!(uniform_index(&mut rng, 10), 7);
    }

    #[test]
    fn uniform_index_direct_hit() {
        let mut rng = ScriptedRandom::new(vec![23]);
        assert_eq!(uniform_index(&mut rng, 26), 23);
    }

    #[test]
    fn uniform_index_power_of_two_never_rejects() {
        // 2^32 is a multiple of 256, so every draw is accepted as-is.
        let mut rng = ScriptedRandom::new(vec![u32::MAX]);
        assert_eq!(uniform_index(&mut rng, 256), 255);
    }
}
