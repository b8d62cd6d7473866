//! Randomness for mole spawning

pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish value in `0..bound`, zero when `bound` is zero.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            0
        } else {
            self.next_u32() % bound
        }
    }

    /// True with `percent` chance out of 100.
    fn chance_percent(&mut self, percent: u8) -> bool {
        self.below(100) < u32::from(percent)
    }

    /// Mixes fresh entropy into the generator. No-op by default.
    fn reseed(&mut self, _entropy: u32) {}
}

/// Marsaglia xorshift32
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    const FALLBACK_SEED: u32 = 0x9E37_79B9;

    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    fn reseed(&mut self, entropy: u32) {
        let mixed = self.state ^ entropy.wrapping_mul(Self::FALLBACK_SEED);
        self.state = if mixed == 0 { Self::FALLBACK_SEED } else { mixed };
    }
}
