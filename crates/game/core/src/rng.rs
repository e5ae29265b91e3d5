//! Deterministic coin flip for choosing the opening side.
//!
//! Given the same seed, every replica picks the same starting player, so two
//! processes can agree on a fresh game without exchanging a snapshot first.

/// PCG-XSH-RR step with a 64-bit state and 32-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generates a u32 from `seed`. Same seed, same value.
    pub fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(mix(seed)))
    }

    /// Fair coin derived from `seed`.
    pub fn coin(&self, seed: u64) -> bool {
        self.next_u32(seed) & 1 == 1
    }
}

/// SplitMix-style avalanche so nearby seeds land far apart.
fn mix(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_eq!(rng.coin(7), rng.coin(7));
    }

    #[test]
    fn coin_lands_on_both_sides() {
        let rng = PcgRng;
        let heads = (0..256u64).filter(|&seed| rng.coin(seed)).count();
        assert!(heads > 64 && heads < 192, "heads = {heads}");
    }
}
