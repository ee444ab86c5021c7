// xorshift32; decorative jitter only, never used for anything that must be unpredictable.

const FALLBACK_SEED: u32 = 0xDEADBEEF;

#[derive(Clone, Debug)]
pub struct XorShift {
    state: u32,
}

impl XorShift {
    pub fn new(seed: u32) -> Self {
        // a zero state would stay zero forever
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    /// Seeds from `Math.random()` in the browser, a fixed value elsewhere.
    pub fn from_entropy() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(FALLBACK_SEED)
        }
    }

    /// Uniform value in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        // 24 high bits keep the result strictly below 1.0
        (self.state >> 8) as f64 * (1.0 / 16_777_216.0)
    }

    /// Uniform value in [lo, hi).
    #[inline]
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}
