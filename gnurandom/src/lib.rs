// Matches glibc's default random()/rand() configuration (TYPE_3): a degree-31
// additive feedback generator with separation 3. rand() in glibc is random().

/// Largest value returned by [`GnuRandom::next_u32`], same as glibc's `RAND_MAX`.
pub const RAND_MAX: u32 = 0x7fff_ffff;

const DEG: usize = 31;
const SEP: usize = 3;

/// Exact compatibility implementation of the GNU C library `random()` RNG.
///
/// A given seed produces the same sequence as `srand(seed)` followed by
/// repeated `rand()` calls in a C program linked against glibc.
#[derive(Clone, Debug)]
pub struct GnuRandom {
    state: [i32; DEG],
    fptr: usize,
    rptr: usize,
}

impl GnuRandom {
    /// Create a generator in the state glibc has before any `srand()` call.
    ///
    /// That state is identical to the one produced by seeding with 1.
    pub fn new() -> Self {
        Self::with_seed(1)
    }

    /// Create a generator seeded with `seed`.
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = Self {
            state: [0; DEG],
            fptr: SEP,
            rptr: 0,
        };
        rng.srandom(seed);
        rng
    }

    /// Reseed the generator, as `srandom_r` does.
    pub fn srandom(&mut self, seed: u32) {
        // glibc substitutes 1 for a zero seed
        let seed = if seed == 0 { 1 } else { seed };

        // The seed is held in an int32_t, so seeds above i32::MAX go negative
        let mut word = seed as i32;
        self.state[0] = word;

        // Park-Miller "minimal standard" LCG (16807 mod 2^31 - 1), Schrage's method
        for i in 1..DEG {
            let hi = i64::from(word) / 127_773;
            let lo = i64::from(word) % 127_773;
            word = (16_807 * lo - 2_836 * hi) as i32;
            if word < 0 {
                word += 0x7fff_ffff;
            }
            self.state[i] = word;
        }

        self.fptr = SEP;
        self.rptr = 0;

        // Discard 10 * degree outputs
        for _ in 0..(10 * DEG) {
            self.next_u32();
        }
    }

    /// Generate the next value in `[0, RAND_MAX]`.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        // Add rear to front in unsigned 32-bit arithmetic
        let val = (self.state[self.fptr] as u32).wrapping_add(self.state[self.rptr] as u32);
        self.state[self.fptr] = val as i32;

        // Least random bit is dropped
        let result = val >> 1;

        self.fptr += 1;
        if self.fptr >= DEG {
            self.fptr = 0;
            self.rptr += 1;
        } else {
            self.rptr += 1;
            if self.rptr >= DEG {
                self.rptr = 0;
            }
        }

        result
    }

    /// Generate a value in `[0, 1)`: the next sample divided by `RAND_MAX + 1`.
    #[inline]
    pub fn next_unit_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(RAND_MAX) + 1.0)
    }
}

impl Default for GnuRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for GnuRandom {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}
