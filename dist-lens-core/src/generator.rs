use dist_lens_common::Result;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u64 = 0x9908_b0df;
const UPPER_MASK: u64 = 0xffff_ffff << 31;
const LOWER_MASK: u64 = 0xffff_ffff >> 1;
const TEMPER_B: u64 = 0x9d2c_5680;
const TEMPER_C: u64 = 0xefc6_0000;
const INIT_MULT: u64 = 1_812_433_253;

/// Recommended static seed; the generator uses it unless a custom seed is
/// supplied.
pub const DEFAULT_SEED: u64 = 19_650_218;

// Most raw outputs fall inside this band; values outside it are rejected
// before normalization.
const BAND_LOW: f64 = 1.0e18;
const BAND_HIGH: f64 = 1.0e19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Double,
    Float,
    Int,
}

impl Precision {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "double" | "d" => Some(Self::Double),
            "float" | "f" => Some(Self::Float),
            "int" | "i" => Some(Self::Int),
            _ => None,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
        }
    }
}

/// Mersenne Twister with the classic 32-bit parameter set evaluated in
/// 64-bit arithmetic, matching the generator whose output this tool
/// characterizes. State wraps with modular indexing.
pub struct MersenneTwister {
    state: [u64; N],
    index: usize,
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl MersenneTwister {
    pub fn with_seed(seed: u64) -> Self {
        let mut state = [0u64; N];
        let mut s = seed;
        state[0] = s;
        for (i, slot) in state.iter_mut().enumerate().skip(1) {
            // Knuth TAOCP Vol2. 3rd Ed. P.106 multiplier
            s = INIT_MULT.wrapping_mul(s ^ (s >> 30)).wrapping_add(i as u64);
            *slot = s;
        }
        Self { state, index: 0 }
    }

    fn next_raw(&mut self) -> u64 {
        let k = self.index;
        let x = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
        let mut xa = x >> 1;
        if x & 1 != 0 {
            xa ^= MATRIX_A;
        }
        let x = self.state[(k + M) % N] ^ xa;
        self.state[(k + 1) % N] = x;
        self.index = (k + 1) % N;

        // tempering
        let mut y = x ^ (x >> 11);
        y ^= (y << 7) & TEMPER_B;
        y ^= (y << 15) & TEMPER_C;
        y ^ (y >> 18)
    }

    /// Next raw value accepted into `[BAND_LOW, BAND_HIGH]`, normalized to a
    /// fraction of that band. Out-of-band values are discarded and the
    /// generator retried.
    pub fn next_normalized(&mut self) -> f64 {
        loop {
            let v = self.next_raw() as f64;
            if (BAND_LOW..=BAND_HIGH).contains(&v) {
                return (v - BAND_LOW) / (BAND_HIGH - BAND_LOW);
            }
        }
    }

    pub fn random_f64(&mut self, range: f64) -> f64 {
        self.next_normalized() * range
    }

    pub fn random_f32(&mut self, range: f32) -> f32 {
        (self.next_normalized() * range as f64) as f32
    }

    /// Inclusive `[0, range]`: the fraction is scaled by `range + 1` and
    /// truncated, clamped so a fraction of exactly 1.0 stays in range.
    pub fn random_int(&mut self, range: i64) -> i64 {
        ((self.next_normalized() * (range + 1) as f64) as i64).min(range)
    }
}

/// Append `count` random values to a text file, one per line. Opens the file
/// for appending, creating it when missing.
pub fn write_random_values(
    path: &Path,
    count: u64,
    range: f64,
    precision: Precision,
    rng: &mut MersenneTwister,
) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    for _ in 0..count {
        match precision {
            Precision::Double => writeln!(out, "{}", rng.random_f64(range))?,
            Precision::Float => writeln!(out, "{}", rng.random_f32(range as f32))?,
            Precision::Int => writeln!(out, "{}", rng.random_int(range as i64))?,
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests_generator {
    use super::*;

    #[test]
    fn deterministic_for_fixed_seed() {
        let mut a = MersenneTwister::with_seed(42);
        let mut b = MersenneTwister::with_seed(42);
        for _ in 0..1000 {
            assert_eq!(a.next_raw(), b.next_raw());
        }
    }

    #[test]
    fn default_uses_recommended_seed() {
        let mut a = MersenneTwister::default();
        let mut b = MersenneTwister::with_seed(DEFAULT_SEED);
        assert_eq!(a.next_raw(), b.next_raw());
    }

    #[test]
    fn normalized_stays_in_unit_interval() {
        let mut rng = MersenneTwister::default();
        for _ in 0..1000 {
            let v = rng.next_normalized();
            assert!((0.0..=1.0).contains(&v), "out of band: {v}");
        }
    }

    #[test]
    fn int_range_is_inclusive_of_bounds() {
        let mut rng = MersenneTwister::default();
        for _ in 0..1000 {
            let v = rng.random_int(99);
            assert!((0..=99).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn precision_names_parse() {
        assert_eq!(Precision::from_name("d"), Some(Precision::Double));
        assert_eq!(Precision::from_name("float"), Some(Precision::Float));
        assert_eq!(Precision::from_name("x"), None);
    }
}
