//! The sampling kernel.
//!
//! [`SampleCounter`] draws points uniformly from the unit square and counts how
//! many land strictly inside the unit circle. Coordinates are generated in bulk
//! into a reusable buffer, one batch at a time, and the inside test then runs
//! over the whole batch.

use rand::distributions::{Distribution, Open01, Standard};
use rand::Rng;
use tracing::{debug, trace};

use crate::error::SamplerError;
use crate::iterations::Iterations;

pub const DEFAULT_BATCH_SIZE: usize = 4096;

// In points.
pub const MAX_BATCH_SIZE: usize = 1 << 24;

/// Euclidean distance of `(x, y)` from the origin.
#[inline]
pub fn norm(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// Whether `(x, y)` lies strictly inside the unit circle.
#[inline]
pub fn is_inside(x: f64, y: f64) -> bool {
    norm(x, y) < 1.0
}

/// Counts inside points in a buffer of interleaved `x, y` coordinates.
#[inline]
fn count_batch(coords: &[f64]) -> u64 {
    coords
        .chunks_exact(2)
        .filter(|point| is_inside(point[0], point[1]))
        .count() as u64
}

/// Monte Carlo counter for points inside the unit quarter-circle.
///
/// Each coordinate is an independent draw from `D`. The default, [`Standard`],
/// samples the half-open interval [0, 1); [`SampleCounter::open_interval`]
/// samples (0, 1) instead.
///
/// Point `i` always consumes draws `2i` (x) and `2i + 1` (y), so for a given
/// generator state the count does not depend on the batch size.
///
/// The counter holds no mutable state. Share one across threads freely, but
/// give every thread its own generator.
///
/// # Examples
///
/// ```
/// use pi_sampler::{rng, Iterations, SampleCounter};
///
/// let counter = SampleCounter::new();
/// let mut rng = rng::seeded(42);
/// let n = 100_000;
/// let inside = counter.count_inside(Iterations::new(n), &mut rng);
///
/// assert!(inside <= n);
/// let estimate = 4.0 * inside as f64 / n as f64;
/// assert!((estimate - std::f64::consts::PI).abs() < 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct SampleCounter<D = Standard> {
    distribution: D,
    batch_size: usize,
}

impl SampleCounter<Standard> {
    pub fn new() -> Self {
        SampleCounter::with_distribution(Standard)
    }
}

impl Default for SampleCounter<Standard> {
    fn default() -> Self {
        SampleCounter::new()
    }
}

impl SampleCounter<Open01> {
    /// Counter drawing coordinates from the open interval (0, 1).
    pub fn open_interval() -> Self {
        SampleCounter::with_distribution(Open01)
    }
}

impl<D: Distribution<f64>> SampleCounter<D> {
    /// Counter drawing each coordinate from `distribution`.
    pub fn with_distribution(distribution: D) -> Self {
        SampleCounter {
            distribution,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Sets how many points are generated per bulk fill.
    ///
    /// # Errors
    ///
    /// [`SamplerError::InvalidArgument`] if `batch_size` is 0 or larger than
    /// [`MAX_BATCH_SIZE`].
    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self, SamplerError> {
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(SamplerError::invalid(
                "batch_size",
                format!("must be in 1..={}, got {}", MAX_BATCH_SIZE, batch_size),
            ));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Draws `iterations` points and returns how many fall strictly inside
    /// the unit circle. The result is always in `0..=iterations`.
    ///
    /// Zero iterations returns 0 without touching `rng`.
    pub fn count_inside<R: Rng + ?Sized>(&self, iterations: Iterations, rng: &mut R) -> u64 {
        let total = iterations.get();
        if total == 0 {
            trace!("zero iterations requested, skipping sampling");
            return 0;
        }

        // Bounded by MAX_BATCH_SIZE, so the cast and doubling cannot overflow.
        let batch = total.min(self.batch_size as u64) as usize;
        let mut coords = vec![0.0_f64; 2 * batch];

        let mut remaining = total;
        let mut inside = 0_u64;
        while remaining > 0 {
            let points = remaining.min(batch as u64) as usize;
            let chunk = &mut coords[..2 * points];
            self.fill(chunk, rng);
            inside += count_batch(chunk);
            remaining -= points as u64;
        }

        debug!(
            iterations = total,
            inside,
            batch_size = self.batch_size,
            "sampled unit square"
        );
        inside
    }

    #[inline]
    fn fill<R: Rng + ?Sized>(&self, buffer: &mut [f64], rng: &mut R) {
        for value in buffer.iter_mut() {
            *value = self.distribution.sample(rng);
        }
    }
}
