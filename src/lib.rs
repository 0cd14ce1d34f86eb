//! # pi_sampler
//!
//! Monte Carlo kernel for estimating π: draw points uniformly from the unit
//! square and count how many fall strictly inside the unit circle. Roughly
//! π/4 of them should, so `4 * inside / iterations` approaches π.
//!
//! The crate covers a single sampling pass. Splitting a sample budget across
//! threads and summing the counts is left to the caller; every pass owns its
//! buffers and takes an explicit generator, so passes can run concurrently
//! without shared state.
//!
//! ```
//! use pi_sampler::{count_inside, rng};
//!
//! let n = 200_000;
//! let inside = count_inside(n, &mut rng::seeded(7)).unwrap();
//! let estimate = 4.0 * inside as f64 / n as f64;
//! assert!((estimate - std::f64::consts::PI).abs() < 0.05);
//!
//! assert!(count_inside(-1, &mut rng::seeded(7)).is_err());
//! assert!(count_inside(2.5, &mut rng::seeded(7)).is_err());
//! ```

pub mod counter;
pub mod error;
pub mod iterations;
pub mod rng;

pub use counter::{is_inside, norm, SampleCounter, DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE};
pub use error::SamplerError;
pub use iterations::Iterations;

use rand::Rng;

/// Counts points inside the unit circle out of `iterations` uniform draws
/// from [0, 1)², using the default [`SampleCounter`].
///
/// `iterations` may be any type convertible to [`Iterations`]: unsigned
/// integers always succeed, while negative or fractional values fail before
/// any sampling happens.
///
/// # Errors
///
/// [`SamplerError::InvalidArgument`] if `iterations` is negative, fractional,
/// non-finite or out of range.
pub fn count_inside<N, R>(iterations: N, rng: &mut R) -> Result<u64, SamplerError>
where
    N: TryInto<Iterations>,
    SamplerError: From<N::Error>,
    R: Rng + ?Sized,
{
    let iterations = iterations.try_into()?;
    Ok(SampleCounter::new().count_inside(iterations, rng))
}

/// Like [`count_inside`], but with a freshly seeded generator owned by this
/// call alone.
///
/// # Errors
///
/// Same as [`count_inside`].
pub fn count_inside_from_entropy<N>(iterations: N) -> Result<u64, SamplerError>
where
    N: TryInto<Iterations>,
    SamplerError: From<N::Error>,
{
    let iterations = iterations.try_into()?;
    if iterations.is_zero() {
        return Ok(0);
    }
    let mut rng = rng::from_entropy();
    Ok(SampleCounter::new().count_inside(iterations, &mut rng))
}
