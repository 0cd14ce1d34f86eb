//! Locally owned random sources.
//!
//! The sampling kernel never reaches for a process-wide generator; callers
//! hand it one of these (or any other [`rand::Rng`]). Each thread or worker
//! should own its own instance.

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};
use rand_chacha::rand_core::impls;
use rand_chacha::ChaCha8Rng;

#[inline]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator for one of many independent streams sharing a seed.
///
/// Streams with different `stream` numbers never overlap, so work split across
/// threads stays reproducible regardless of scheduling.
pub fn stream(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MASK: u32 = 0x7FFF_FFFF;

/// 32-bit linear congruential generator (Numerical Recipes constants).
///
/// Statistically weak, but the recurrence is trivial to reproduce in any
/// language. Pair it with [`LcgUnit`] to get one step per coordinate; through
/// `Standard` each `f64` consumes two steps instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Lcg { state: seed }
    }

    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }
}

impl RngCore for Lcg {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    // High word first.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.step());
        let lo = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Lcg::new(u32::from_le_bytes(seed))
    }
}

/// Maps one 32-bit draw to [0, 1] as `(u & 0x7FFFFFFF) / 0x7FFFFFFF`.
///
/// With [`Lcg`] this reproduces the classic `lcg_random` coordinate stream
/// used by other-language ports: x and y are consecutive recurrence steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcgUnit;

impl Distribution<f64> for LcgUnit {
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        f64::from(rng.next_u32() & LCG_MASK) / f64::from(LCG_MASK)
    }
}
