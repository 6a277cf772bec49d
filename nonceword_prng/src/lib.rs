// Deterministic, portable pseudo-random number generator for list building.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding,
// plus the one derived operation the partitioner needs: an in-place shuffle.
// Hand-rolled with zero external dependencies so that the same seed produces
// the same stimulus lists on every platform and toolchain.
//
// The shuffle algorithm is pinned: descending Fisher-Yates, where step `i`
// (from `len - 1` down to 1) swaps `items[i]` with `items[j]` for
// `j = range_usize(0, i + 1)`, and `range_u64` draws by rejection sampling.
// Changing either changes every list ever generated from a given seed.
//
// **Critical constraint: determinism.** Every method on `ListRng` must produce
// identical output given the same prior state, regardless of platform,
// compiler version, or optimization level. No floating point, no stdlib
// hashing, no OS entropy.

/// Xoshiro256++ PRNG, the sole source of randomness for stratification.
///
/// A run seeds exactly one `ListRng` at startup and threads it through every
/// shuffle, group by group and then list by list.
#[derive(Clone, Debug)]
pub struct ListRng {
    s: [u64; 4],
}

impl ListRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Shuffle a slice in place (descending Fisher-Yates).
    ///
    /// Slices of length 0 or 1 are left untouched and consume no randomness.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.range_usize(0, i + 1);
            items.swap(i, j);
        }
    }
}

/// SplitMix64, used only for seeding xoshiro256++ from a single `u64`.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
