use rand::Rng;

const SEED_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Seeded random number generator for reproducible pack openings.
///
/// Uses the mulberry32 mixing function over a 32-bit state, so a seed taken
/// from a shared URL reproduces the exact same card pool that the sharer saw.
#[derive(Clone)]
pub struct PackRng {
    state: u32,
}

impl PackRng {
    /// Create a PackRng from a 32-bit integer seed
    pub fn new(seed: u32) -> Self {
        PackRng { state: seed }
    }

    /// Create a PackRng from an arbitrary seed string.
    /// The string is folded into 32 bits with a 31x polynomial rolling hash
    /// over its UTF-16 code units.
    pub fn from_seed_str(seed: &str) -> Self {
        let mut hash: u32 = 0;
        for unit in seed.encode_utf16() {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(unit));
        }
        PackRng { state: hash }
    }

    /// Generate a random 8-character base-36 seed string
    pub fn generate_seed() -> String {
        let mut rng = rand::thread_rng();
        (0..8)
            .map(|_| SEED_ALPHABET[rng.gen_range(0..SEED_ALPHABET.len())] as char)
            .collect()
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Uniform index in [0, len) via floor(next * len).
    /// Callers must check for an empty collection first; len 0 returns 0.
    pub fn index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }

    /// Fisher-Yates shuffle for a mutable slice
    pub fn shuffle<T>(&mut self, array: &mut [T]) {
        for i in (1..array.len()).rev() {
            let j = self.index(i + 1);
            array.swap(i, j);
        }
    }
}
